// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Instruction catalog shared by the assembler and the execution engine.
//!
//! One static table of records, one entry per (mnemonic, addressing mode)
//! pair. The table is process-wide and immutable; both subsystems consult
//! it through the free functions below and never build their own copy.
//!
//! The set is the documented NMOS 6502 subset that fits the 8-bit address
//! space of this machine: no zero-page rows (absolute addressing already
//! covers page zero here) and no undocumented opcodes.

use std::fmt;

/// Addressing modes of the 6502-lite instruction set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AddressMode {
    /// No operand (NOP, RTS, CLC, ...). The encoded operand byte is 00.
    Implied,
    /// `A` - the accumulator is the operand (ASL A, ROR A, ...).
    Accumulator,
    /// `#$nn` - 8-bit immediate value.
    Immediate,
    /// `*+nn` / `*-nn` - signed 8-bit offset from the current instruction.
    Relative,
    /// `$nn` - 8-bit memory address.
    Absolute,
    /// `$nn,X` - address indexed by X.
    AbsoluteX,
    /// `$nn,Y` - address indexed by Y.
    AbsoluteY,
    /// `($nn)` - one level of indirection (JMP only).
    Indirect,
    /// `($nn,X)` - indexed indirect.
    IndexedIndirect,
    /// `($nn),Y` - indirect indexed.
    IndirectIndexed,
}

impl AddressMode {
    /// Human-readable notation used in diagnostics, matching the
    /// conventional 6502 spelling.
    pub fn label(&self) -> &'static str {
        match self {
            AddressMode::Implied => "implied",
            AddressMode::Accumulator => "accumulator",
            AddressMode::Immediate => "immediate",
            AddressMode::Relative => "relative",
            AddressMode::Absolute => "absolute",
            AddressMode::AbsoluteX => "absolute,X",
            AddressMode::AbsoluteY => "absolute,Y",
            AddressMode::Indirect => "indirect",
            AddressMode::IndexedIndirect => "(indirect,X)",
            AddressMode::IndirectIndexed => "(indirect),Y",
        }
    }
}

impl fmt::Display for AddressMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cycle-count footnote carried by some table rows.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CyclePenalty {
    /// Fixed cycle count.
    None,
    /// One extra cycle when the access crosses a page boundary.
    PageCross,
    /// One extra cycle when the branch is taken, two when it crosses a page.
    Branch,
}

/// One catalog record: the full description of a (mnemonic, mode) pair.
#[derive(Debug)]
pub struct InstructionEntry {
    pub opcode: u8,
    pub mnemonic: &'static str,
    pub mode: AddressMode,
    /// Instruction size on a real 6502. Informational; every line of this
    /// machine's stream occupies exactly two bytes regardless.
    pub bytes: u8,
    pub cycles: u8,
    pub penalty: CyclePenalty,
}

const fn entry(
    opcode: u8,
    mnemonic: &'static str,
    mode: AddressMode,
    bytes: u8,
    cycles: u8,
    penalty: CyclePenalty,
) -> InstructionEntry {
    InstructionEntry {
        opcode,
        mnemonic,
        mode,
        bytes,
        cycles,
        penalty,
    }
}

use AddressMode::*;

/// The instruction table. Small enough that linear search is sufficient.
pub static INSTRUCTION_TABLE: &[InstructionEntry] = &[
    entry(0x69, "ADC", Immediate, 2, 2, CyclePenalty::None),
    entry(0x6D, "ADC", Absolute, 3, 4, CyclePenalty::None),
    entry(0x7D, "ADC", AbsoluteX, 3, 4, CyclePenalty::PageCross),
    entry(0x79, "ADC", AbsoluteY, 3, 4, CyclePenalty::PageCross),
    entry(0x61, "ADC", IndexedIndirect, 2, 6, CyclePenalty::None),
    entry(0x71, "ADC", IndirectIndexed, 2, 5, CyclePenalty::PageCross),
    entry(0x29, "AND", Immediate, 2, 2, CyclePenalty::None),
    entry(0x2D, "AND", Absolute, 3, 4, CyclePenalty::None),
    entry(0x3D, "AND", AbsoluteX, 3, 4, CyclePenalty::PageCross),
    entry(0x39, "AND", AbsoluteY, 3, 4, CyclePenalty::PageCross),
    entry(0x21, "AND", IndexedIndirect, 2, 6, CyclePenalty::None),
    entry(0x31, "AND", IndirectIndexed, 2, 5, CyclePenalty::PageCross),
    entry(0x0A, "ASL", Accumulator, 1, 2, CyclePenalty::None),
    entry(0x0E, "ASL", Absolute, 3, 6, CyclePenalty::None),
    entry(0x1E, "ASL", AbsoluteX, 3, 7, CyclePenalty::None),
    entry(0x90, "BCC", Relative, 2, 2, CyclePenalty::Branch),
    entry(0xB0, "BCS", Relative, 2, 2, CyclePenalty::Branch),
    entry(0xF0, "BEQ", Relative, 2, 2, CyclePenalty::Branch),
    entry(0x2C, "BIT", Absolute, 3, 4, CyclePenalty::None),
    entry(0x30, "BMI", Relative, 2, 2, CyclePenalty::Branch),
    entry(0xD0, "BNE", Relative, 2, 2, CyclePenalty::Branch),
    entry(0x10, "BPL", Relative, 2, 2, CyclePenalty::Branch),
    entry(0x00, "BRK", Implied, 1, 7, CyclePenalty::None),
    entry(0x50, "BVC", Relative, 2, 2, CyclePenalty::Branch),
    entry(0x70, "BVS", Relative, 2, 2, CyclePenalty::Branch),
    entry(0x18, "CLC", Implied, 1, 2, CyclePenalty::None),
    entry(0xD8, "CLD", Implied, 1, 2, CyclePenalty::None),
    entry(0x58, "CLI", Implied, 1, 2, CyclePenalty::None),
    entry(0xB8, "CLV", Implied, 1, 2, CyclePenalty::None),
    entry(0xC9, "CMP", Immediate, 2, 2, CyclePenalty::None),
    entry(0xCD, "CMP", Absolute, 3, 4, CyclePenalty::None),
    entry(0xDD, "CMP", AbsoluteX, 3, 4, CyclePenalty::PageCross),
    entry(0xD9, "CMP", AbsoluteY, 3, 4, CyclePenalty::PageCross),
    entry(0xC1, "CMP", IndexedIndirect, 2, 6, CyclePenalty::None),
    entry(0xD1, "CMP", IndirectIndexed, 2, 5, CyclePenalty::PageCross),
    entry(0xE0, "CPX", Immediate, 2, 2, CyclePenalty::None),
    entry(0xEC, "CPX", Absolute, 3, 4, CyclePenalty::None),
    entry(0xC0, "CPY", Immediate, 2, 2, CyclePenalty::None),
    entry(0xCC, "CPY", Absolute, 3, 4, CyclePenalty::None),
    entry(0xCE, "DEC", Absolute, 3, 6, CyclePenalty::None),
    entry(0xDE, "DEC", AbsoluteX, 3, 7, CyclePenalty::None),
    entry(0xCA, "DEX", Implied, 1, 2, CyclePenalty::None),
    entry(0x88, "DEY", Implied, 1, 2, CyclePenalty::None),
    entry(0x49, "EOR", Immediate, 2, 2, CyclePenalty::None),
    entry(0x4D, "EOR", Absolute, 3, 4, CyclePenalty::None),
    entry(0x5D, "EOR", AbsoluteX, 3, 4, CyclePenalty::PageCross),
    entry(0x59, "EOR", AbsoluteY, 3, 4, CyclePenalty::PageCross),
    entry(0x41, "EOR", IndexedIndirect, 2, 6, CyclePenalty::None),
    entry(0x51, "EOR", IndirectIndexed, 2, 5, CyclePenalty::PageCross),
    entry(0xEE, "INC", Absolute, 3, 6, CyclePenalty::None),
    entry(0xFE, "INC", AbsoluteX, 3, 7, CyclePenalty::None),
    entry(0xE8, "INX", Implied, 1, 2, CyclePenalty::None),
    entry(0xC8, "INY", Implied, 1, 2, CyclePenalty::None),
    entry(0x4C, "JMP", Absolute, 3, 3, CyclePenalty::None),
    entry(0x6C, "JMP", Indirect, 3, 5, CyclePenalty::None),
    entry(0x20, "JSR", Absolute, 3, 6, CyclePenalty::None),
    entry(0xA9, "LDA", Immediate, 2, 2, CyclePenalty::None),
    entry(0xAD, "LDA", Absolute, 3, 4, CyclePenalty::None),
    entry(0xBD, "LDA", AbsoluteX, 3, 4, CyclePenalty::PageCross),
    entry(0xB9, "LDA", AbsoluteY, 3, 4, CyclePenalty::PageCross),
    entry(0xA1, "LDA", IndexedIndirect, 2, 6, CyclePenalty::None),
    entry(0xB1, "LDA", IndirectIndexed, 2, 5, CyclePenalty::PageCross),
    entry(0xA2, "LDX", Immediate, 2, 2, CyclePenalty::None),
    entry(0xAE, "LDX", Absolute, 3, 4, CyclePenalty::None),
    entry(0xBE, "LDX", AbsoluteY, 3, 4, CyclePenalty::PageCross),
    entry(0xA0, "LDY", Immediate, 2, 2, CyclePenalty::None),
    entry(0xAC, "LDY", Absolute, 3, 4, CyclePenalty::None),
    entry(0xBC, "LDY", AbsoluteX, 3, 4, CyclePenalty::PageCross),
    entry(0x4A, "LSR", Accumulator, 1, 2, CyclePenalty::None),
    entry(0x4E, "LSR", Absolute, 3, 6, CyclePenalty::None),
    entry(0x5E, "LSR", AbsoluteX, 3, 7, CyclePenalty::None),
    entry(0xEA, "NOP", Implied, 1, 2, CyclePenalty::None),
    entry(0x09, "ORA", Immediate, 2, 2, CyclePenalty::None),
    entry(0x0D, "ORA", Absolute, 3, 4, CyclePenalty::None),
    entry(0x1D, "ORA", AbsoluteX, 3, 4, CyclePenalty::PageCross),
    entry(0x19, "ORA", AbsoluteY, 3, 4, CyclePenalty::PageCross),
    entry(0x01, "ORA", IndexedIndirect, 2, 6, CyclePenalty::None),
    entry(0x11, "ORA", IndirectIndexed, 2, 5, CyclePenalty::PageCross),
    entry(0x48, "PHA", Implied, 1, 3, CyclePenalty::None),
    entry(0x08, "PHP", Implied, 1, 3, CyclePenalty::None),
    entry(0x68, "PLA", Implied, 1, 4, CyclePenalty::None),
    entry(0x28, "PLP", Implied, 1, 4, CyclePenalty::None),
    entry(0x2A, "ROL", Accumulator, 1, 2, CyclePenalty::None),
    entry(0x2E, "ROL", Absolute, 3, 6, CyclePenalty::None),
    entry(0x3E, "ROL", AbsoluteX, 3, 7, CyclePenalty::None),
    entry(0x6A, "ROR", Accumulator, 1, 2, CyclePenalty::None),
    entry(0x6E, "ROR", Absolute, 3, 6, CyclePenalty::None),
    entry(0x7E, "ROR", AbsoluteX, 3, 7, CyclePenalty::None),
    entry(0x40, "RTI", Implied, 1, 6, CyclePenalty::None),
    entry(0x60, "RTS", Implied, 1, 6, CyclePenalty::None),
    entry(0xE9, "SBC", Immediate, 2, 2, CyclePenalty::None),
    entry(0xED, "SBC", Absolute, 3, 4, CyclePenalty::None),
    entry(0xFD, "SBC", AbsoluteX, 3, 4, CyclePenalty::PageCross),
    entry(0xF9, "SBC", AbsoluteY, 3, 4, CyclePenalty::PageCross),
    entry(0xE1, "SBC", IndexedIndirect, 2, 6, CyclePenalty::None),
    entry(0xF1, "SBC", IndirectIndexed, 2, 5, CyclePenalty::PageCross),
    entry(0x38, "SEC", Implied, 1, 2, CyclePenalty::None),
    entry(0xF8, "SED", Implied, 1, 2, CyclePenalty::None),
    entry(0x78, "SEI", Implied, 1, 2, CyclePenalty::None),
    entry(0x8D, "STA", Absolute, 3, 4, CyclePenalty::None),
    entry(0x9D, "STA", AbsoluteX, 3, 5, CyclePenalty::None),
    entry(0x99, "STA", AbsoluteY, 3, 5, CyclePenalty::None),
    entry(0x81, "STA", IndexedIndirect, 2, 6, CyclePenalty::None),
    entry(0x91, "STA", IndirectIndexed, 2, 6, CyclePenalty::None),
    entry(0x8E, "STX", Absolute, 3, 4, CyclePenalty::None),
    entry(0x8C, "STY", Absolute, 3, 4, CyclePenalty::None),
    entry(0xAA, "TAX", Implied, 1, 2, CyclePenalty::None),
    entry(0xA8, "TAY", Implied, 1, 2, CyclePenalty::None),
    entry(0xBA, "TSX", Implied, 1, 2, CyclePenalty::None),
    entry(0x8A, "TXA", Implied, 1, 2, CyclePenalty::None),
    entry(0x9A, "TXS", Implied, 1, 2, CyclePenalty::None),
    entry(0x98, "TYA", Implied, 1, 2, CyclePenalty::None),
];

/// Check whether a token names an instruction (case-insensitive).
pub fn is_mnemonic(token: &str) -> bool {
    INSTRUCTION_TABLE
        .iter()
        .any(|e| e.mnemonic.eq_ignore_ascii_case(token))
}

/// All entries sharing a mnemonic.
pub fn entries_for_mnemonic(mnemonic: &str) -> impl Iterator<Item = &'static InstructionEntry> + '_ {
    let upper = mnemonic.to_ascii_uppercase();
    INSTRUCTION_TABLE
        .iter()
        .filter(move |e| e.mnemonic == upper)
}

/// Look up the entry for a (mnemonic, mode) pair.
pub fn lookup(mnemonic: &str, mode: AddressMode) -> Option<&'static InstructionEntry> {
    INSTRUCTION_TABLE
        .iter()
        .find(|e| e.mnemonic.eq_ignore_ascii_case(mnemonic) && e.mode == mode)
}

/// Look up the entry for an opcode byte.
pub fn lookup_opcode(opcode: u8) -> Option<&'static InstructionEntry> {
    INSTRUCTION_TABLE.iter().find(|e| e.opcode == opcode)
}

/// Addressing modes legal for a mnemonic, in table order.
pub fn legal_modes(mnemonic: &str) -> Vec<AddressMode> {
    entries_for_mnemonic(mnemonic).map(|e| e.mode).collect()
}
