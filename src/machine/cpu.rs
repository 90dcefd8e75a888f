// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! The execution engine: an NMOS-6502-flavoured CPU over an 8-bit
//! address space.
//!
//! Differences from a real 6502, all consequences of the 8-bit program
//! counter: memory tops out at 0xFF, addresses are single bytes (no
//! little-endian word fetches), and zero-page addressing collapses into
//! absolute addressing. Every instruction is stored as a two-byte
//! opcode/operand pair, so the program counter advances by two per step;
//! implied instructions carry a padding operand of 0x00.
//!
//! The two hardwired silicon bugs of the original part (the ROR flaw and
//! the JMP indirect page-boundary fetch) are not reproduced; this is an
//! idealised part. The decimal-mode quirks, however, are: BCD arithmetic
//! always clears the overflow flag, and the negative flag still tracks
//! bit 7 of the raw result.

use log::trace;

use crate::asm::output::{BEGIN_MARKER, END_MARKER};
use crate::catalog;
use crate::machine::ram::Ram;
use crate::machine::stack::{Stack, STACK_SIZE};

pub const PSR_CARRY: u8 = 0x01;
pub const PSR_ZERO: u8 = 0x02;
pub const PSR_IRQ_DISABLE: u8 = 0x04;
pub const PSR_DECIMAL: u8 = 0x08;
pub const PSR_BREAK: u8 = 0x10;
/// Bit 5 of the status register reads as set.
pub const PSR_SETBIT: u8 = 0x20;
pub const PSR_OVERFLOW: u8 = 0x40;
pub const PSR_NEGATIVE: u8 = 0x80;

/// Opcodes whose addressing is implied; no effective address exists.
const IMPLIED_OPCODES: &[u8] = &[
    0x08, 0x28, 0x48, 0x68, 0x88, 0xA8, 0xC8, 0xE8, 0x18, 0x38, 0x58, 0x78, 0x98, 0xB8, 0xD8,
    0xF8, 0x8A, 0x9A, 0xAA, 0xBA, 0xCA, 0xEA,
];

/// What one step of the machine did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// An instruction was fetched and executed.
    Executed,
    /// The BEGIN marker pair was skipped over.
    MarkerSkipped,
    /// The END marker pair was reached (or had been reached earlier);
    /// the machine no longer steps.
    Halted,
}

pub struct Cpu {
    a: u8,
    x: u8,
    y: u8,
    sp: u8,
    pc: u8,
    /// Currently loaded instruction and its operand.
    ir: u8,
    ir_operand: u8,
    /// Peek cache: the pair the program counter points at. Refreshed on
    /// reset, on explicit PC writes and when the BEGIN marker is skipped.
    next_ir: u8,
    next_ir_operand: u8,

    carry: bool,
    zero: bool,
    irq_disable: bool,
    decimal: bool,
    brk: bool,
    overflow: bool,
    negative: bool,

    step_counter: u32,
    can_step: bool,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new()
    }
}

impl Cpu {
    pub fn new() -> Self {
        Self {
            a: 0,
            x: 0,
            y: 0,
            sp: (STACK_SIZE - 1) as u8,
            pc: 0,
            ir: 0,
            ir_operand: 0,
            next_ir: 0,
            next_ir_operand: 0,
            carry: false,
            zero: false,
            irq_disable: false,
            decimal: false,
            brk: false,
            overflow: false,
            negative: false,
            step_counter: 0,
            can_step: true,
        }
    }

    /// Reset to known values: registers and flags cleared, stack pointer
    /// to the top slot, program counter to 0 (programs always load at
    /// address 0), peek cache re-primed.
    pub fn reset(&mut self, ram: &Ram) {
        self.a = 0;
        self.x = 0;
        self.y = 0;
        self.sp = (STACK_SIZE - 1) as u8;
        self.pc = 0;
        self.ir = 0;
        self.ir_operand = 0;
        self.next_ir = 0;
        self.next_ir_operand = 0;
        self.carry = false;
        self.zero = false;
        self.irq_disable = false;
        self.decimal = false;
        self.brk = false;
        self.overflow = false;
        self.negative = false;
        self.step_counter = 0;
        self.can_step = true;
        self.peek_ahead(ram);
    }

    /// Refresh the peek cache from the pair under the program counter.
    pub fn peek_ahead(&mut self, ram: &Ram) {
        self.next_ir = ram.read(self.pc as usize);
        self.next_ir_operand = ram.read(self.pc as usize + 1);
    }

    /// One fetch-decode-execute cycle.
    pub fn step(&mut self, ram: &mut Ram, stack: &mut Stack) -> StepOutcome {
        if !self.can_step {
            trace!("END marker already reached, refusing to step");
            return StepOutcome::Halted;
        }

        self.ir = ram.read(self.pc as usize);
        self.ir_operand = ram.read(self.pc as usize + 1);
        trace!(
            "fetch pc={:#04X} ir={:#04X} ({}) operand={:#04X}",
            self.pc,
            self.ir,
            self.instruction_symbol(self.ir),
            self.ir_operand
        );

        self.increment_pc();
        self.increment_pc();
        self.step_counter += 1;

        if self.ir == BEGIN_MARKER && self.ir_operand == BEGIN_MARKER {
            trace!("BEGIN marker skipped");
            self.peek_ahead(ram);
            return StepOutcome::MarkerSkipped;
        }
        if self.ir == END_MARKER && self.ir_operand == END_MARKER {
            trace!("END marker reached, halting");
            self.can_step = false;
            return StepOutcome::Halted;
        }

        let ea = self.effective_address(ram) as usize;
        self.execute(ea, ram, stack);
        StepOutcome::Executed
    }

    /// Decode the addressing shape of the loaded opcode and compute the
    /// effective address. Bits 0-1 select the op-mode column of the
    /// instruction matrix, bits 2-4 the addressing submode row; the fixed
    /// implied set is handled up front. Immediate and accumulator shapes
    /// have no effective address; 0 is returned and never used for them.
    fn effective_address(&self, ram: &Ram) -> u8 {
        if IMPLIED_OPCODES.contains(&self.ir) {
            return 0;
        }

        let op_mode = self.ir & 0x03;
        let submode = (self.ir >> 2) & 0x07;

        match op_mode {
            // Column 0 shares the column 2 shapes.
            0 | 2 => match submode {
                // Zero page reads as absolute in this address space.
                1 | 3 => self.ir_operand,
                5 => {
                    if self.ir == 0x96 || self.ir == 0xB6 {
                        self.y_address(self.ir_operand)
                    } else {
                        self.x_address(self.ir_operand)
                    }
                }
                7 => {
                    if self.ir == 0xBE {
                        self.y_address(self.ir_operand)
                    } else {
                        self.x_address(self.ir_operand)
                    }
                }
                _ => 0,
            },
            1 => match submode {
                // (zp,X): the pointer cell holds the target address.
                0 => ram.read(self.x_address(self.ir_operand) as usize),
                1 | 3 => self.ir_operand,
                // (zp),Y: indirect first, then the Y offset.
                4 => self.y_address(ram.read(self.ir_operand as usize)),
                5 | 7 => self.x_address(self.ir_operand),
                6 => self.y_address(self.ir_operand),
                _ => 0,
            },
            _ => 0,
        }
    }

    fn execute(&mut self, ea: usize, ram: &mut Ram, stack: &mut Stack) {
        match self.ir {
            // Load/store
            0xA9 => {
                self.a = self.ir_operand;
                self.set_arithmetic_flags(self.a);
            }
            0xA5 | 0xB5 | 0xAD | 0xBD | 0xB9 | 0xA1 | 0xB1 => {
                self.a = ram.read(ea);
                self.set_arithmetic_flags(self.a);
            }
            0xA2 => {
                self.x = self.ir_operand;
                self.set_arithmetic_flags(self.x);
            }
            0xA6 | 0xB6 | 0xAE | 0xBE => {
                self.x = ram.read(ea);
                self.set_arithmetic_flags(self.x);
            }
            0xA0 => {
                self.y = self.ir_operand;
                self.set_arithmetic_flags(self.y);
            }
            0xA4 | 0xB4 | 0xAC | 0xBC => {
                self.y = ram.read(ea);
                self.set_arithmetic_flags(self.y);
            }
            0x85 | 0x95 | 0x8D | 0x9D | 0x99 | 0x81 | 0x91 => ram.write(ea, self.a),
            0x86 | 0x96 | 0x8E => ram.write(ea, self.x),
            0x84 | 0x94 | 0x8C => ram.write(ea, self.y),

            // Register transfers
            0xAA => {
                self.x = self.a;
                self.set_arithmetic_flags(self.x);
            }
            0xA8 => {
                self.y = self.a;
                self.set_arithmetic_flags(self.y);
            }
            0x8A => {
                self.a = self.x;
                self.set_arithmetic_flags(self.a);
            }
            0x98 => {
                self.a = self.y;
                self.set_arithmetic_flags(self.a);
            }

            // Stack operations
            0xBA => {
                self.x = self.sp;
                self.set_arithmetic_flags(self.x);
            }
            0x9A => self.sp = self.x,
            0x48 => self.stack_push(stack, self.a),
            0x08 => self.stack_push(stack, self.status_byte() | PSR_BREAK),
            0x68 => {
                self.a = self.stack_pop(stack);
                self.set_arithmetic_flags(self.a);
            }
            0x28 => {
                let status = self.stack_pop(stack);
                self.set_status_byte(status);
            }

            // Logical
            0x29 => {
                self.a &= self.ir_operand;
                self.set_arithmetic_flags(self.a);
            }
            0x25 | 0x35 | 0x2D | 0x3D | 0x39 | 0x21 | 0x31 => {
                self.a &= ram.read(ea);
                self.set_arithmetic_flags(self.a);
            }
            0x49 => {
                self.a ^= self.ir_operand;
                self.set_arithmetic_flags(self.a);
            }
            0x45 | 0x55 | 0x4D | 0x5D | 0x59 | 0x41 | 0x51 => {
                self.a ^= ram.read(ea);
                self.set_arithmetic_flags(self.a);
            }
            0x09 => {
                self.a |= self.ir_operand;
                self.set_arithmetic_flags(self.a);
            }
            0x05 | 0x15 | 0x0D | 0x1D | 0x19 | 0x01 | 0x11 => {
                self.a |= ram.read(ea);
                self.set_arithmetic_flags(self.a);
            }
            0x24 | 0x2C => {
                let value = ram.read(ea);
                self.zero = self.a & value == 0;
                self.overflow = value & PSR_OVERFLOW != 0;
                self.negative = value & PSR_NEGATIVE != 0;
            }

            // Arithmetic
            0x69 => {
                self.a = if self.decimal {
                    self.adc_decimal(self.a, self.ir_operand)
                } else {
                    self.adc(self.a, self.ir_operand)
                };
            }
            0x65 | 0x75 | 0x6D | 0x7D | 0x79 | 0x61 | 0x71 => {
                let operand = ram.read(ea);
                self.a = if self.decimal {
                    self.adc_decimal(self.a, operand)
                } else {
                    self.adc(self.a, operand)
                };
            }
            0xE9 => {
                self.a = if self.decimal {
                    self.sbc_decimal(self.a, self.ir_operand)
                } else {
                    self.sbc(self.a, self.ir_operand)
                };
            }
            0xE5 | 0xF5 | 0xED | 0xFD | 0xF9 | 0xE1 | 0xF1 => {
                let operand = ram.read(ea);
                self.a = if self.decimal {
                    self.sbc_decimal(self.a, operand)
                } else {
                    self.sbc(self.a, operand)
                };
            }
            0xC9 => self.compare(self.a, self.ir_operand),
            0xC5 | 0xD5 | 0xCD | 0xDD | 0xD9 | 0xC1 | 0xD1 => {
                let operand = ram.read(ea);
                self.compare(self.a, operand);
            }
            0xE0 => self.compare(self.x, self.ir_operand),
            0xE4 | 0xEC => {
                let operand = ram.read(ea);
                self.compare(self.x, operand);
            }
            0xC0 => self.compare(self.y, self.ir_operand),
            0xC4 | 0xCC => {
                let operand = ram.read(ea);
                self.compare(self.y, operand);
            }

            // Increment / decrement
            0xE6 | 0xF6 | 0xEE | 0xFE => {
                let value = ram.read(ea).wrapping_add(1);
                ram.write(ea, value);
                self.set_arithmetic_flags(value);
            }
            0xE8 => {
                self.x = self.x.wrapping_add(1);
                self.set_arithmetic_flags(self.x);
            }
            0xC8 => {
                self.y = self.y.wrapping_add(1);
                self.set_arithmetic_flags(self.y);
            }
            0xC6 | 0xD6 | 0xCE | 0xDE => {
                let value = ram.read(ea).wrapping_sub(1);
                ram.write(ea, value);
                self.set_arithmetic_flags(value);
            }
            0xCA => {
                self.x = self.x.wrapping_sub(1);
                self.set_arithmetic_flags(self.x);
            }
            0x88 => {
                self.y = self.y.wrapping_sub(1);
                self.set_arithmetic_flags(self.y);
            }

            // Shifts and rotates
            0x0A => {
                self.a = self.asl(self.a);
                self.set_arithmetic_flags(self.a);
            }
            0x06 | 0x16 | 0x0E | 0x1E => {
                let value = ram.read(ea);
                let value = self.asl(value);
                ram.write(ea, value);
                self.set_arithmetic_flags(value);
            }
            0x4A => {
                self.a = self.lsr(self.a);
                self.set_arithmetic_flags(self.a);
            }
            0x46 | 0x56 | 0x4E | 0x5E => {
                let value = ram.read(ea);
                let value = self.lsr(value);
                ram.write(ea, value);
                self.set_arithmetic_flags(value);
            }
            0x2A => {
                self.a = self.rol(self.a);
                self.set_arithmetic_flags(self.a);
            }
            0x26 | 0x36 | 0x2E | 0x3E => {
                let value = ram.read(ea);
                let value = self.rol(value);
                ram.write(ea, value);
                self.set_arithmetic_flags(value);
            }
            0x6A => {
                self.a = self.ror(self.a);
                self.set_arithmetic_flags(self.a);
            }
            0x66 | 0x76 | 0x6E | 0x7E => {
                let value = ram.read(ea);
                let value = self.ror(value);
                ram.write(ea, value);
                self.set_arithmetic_flags(value);
            }

            // Jumps and calls
            0x4C => self.pc = self.ir_operand,
            0x6C => self.pc = ram.read(self.ir_operand as usize),
            0x20 => {
                // The return address is the JSR's own line; RTS adds the
                // two bytes back.
                self.stack_push(stack, self.pc.wrapping_sub(2));
                self.pc = self.ir_operand;
            }
            0x60 => {
                let return_address = self.stack_pop(stack);
                self.set_pc(return_address.wrapping_add(2), ram);
            }

            // Branches
            0x90 => {
                if !self.carry {
                    self.pc = self.relative_address(self.ir_operand);
                }
            }
            0xB0 => {
                if self.carry {
                    self.pc = self.relative_address(self.ir_operand);
                }
            }
            0xF0 => {
                if self.zero {
                    self.pc = self.relative_address(self.ir_operand);
                }
            }
            0x30 => {
                if self.negative {
                    self.pc = self.relative_address(self.ir_operand);
                }
            }
            0xD0 => {
                if !self.zero {
                    self.pc = self.relative_address(self.ir_operand);
                }
            }
            0x10 => {
                if !self.negative {
                    self.pc = self.relative_address(self.ir_operand);
                }
            }
            0x50 => {
                if !self.overflow {
                    self.pc = self.relative_address(self.ir_operand);
                }
            }
            0x70 => {
                if self.overflow {
                    self.pc = self.relative_address(self.ir_operand);
                }
            }

            // Status flag changes
            0x18 => self.carry = false,
            0xD8 => self.decimal = false,
            0x58 => self.irq_disable = false,
            0xB8 => self.overflow = false,
            0x38 => self.carry = true,
            0xF8 => self.decimal = true,
            0x78 => self.irq_disable = true,

            // System
            0x00 => {
                // BRK: interrupts are not simulated; accepted as a no-op.
            }
            0xEA => {}
            0x40 => {
                let status = self.stack_pop(stack);
                self.set_status_byte(status);
                let return_address = self.stack_pop(stack);
                self.set_pc(return_address, ram);
            }

            _ => trace!("opcode {:#04X} is not implemented, ignored", self.ir),
        }
    }

    // Stack discipline: push stores at the pointer then decrements,
    // wrapping 0 -> 63; pop increments first, wrapping 63 -> 0, then
    // reads. Exhaustion silently overwrites the oldest entries.

    pub fn stack_push(&mut self, stack: &mut Stack, data: u8) {
        stack.store(self.sp as usize, data);
        self.sp = if self.sp == 0 {
            (STACK_SIZE - 1) as u8
        } else {
            self.sp - 1
        };
    }

    pub fn stack_pop(&mut self, stack: &mut Stack) -> u8 {
        self.sp = if self.sp as usize == STACK_SIZE - 1 {
            0
        } else {
            self.sp + 1
        };
        stack.take(self.sp as usize)
    }

    // ALU

    /// Binary add with carry. Carry out of bit 8; overflow from the
    /// 7-bit-domain carry XOR the final carry.
    fn adc(&mut self, a: u8, operand: u8) -> u8 {
        let result = operand as u16 + a as u16 + self.carry_bit() as u16;
        let carry7 = (operand & 0x7F) as u16 + (a & 0x7F) as u16 + self.carry_bit() as u16;
        self.carry = result & 0x100 != 0;
        self.overflow = self.carry ^ (carry7 & 0x80 != 0);
        let result = (result & 0xFF) as u8;
        self.set_arithmetic_flags(result);
        result
    }

    /// Decimal (BCD) add: nibble-wise with +6 correction per nibble
    /// carry. Overflow is always cleared in decimal mode; negative still
    /// tracks bit 7 of the raw result.
    fn adc_decimal(&mut self, a: u8, operand: u8) -> u8 {
        let mut low = (a & 0x0F) as i32 + (operand & 0x0F) as i32 + self.carry_bit() as i32;
        if (low & 0xFF) > 9 {
            low += 6;
        }
        let mut high = (a >> 4) as i32 + (operand >> 4) as i32 + i32::from(low > 15);
        if (high & 0xFF) > 9 {
            high += 6;
        }
        let result = (((low & 0x0F) | (high << 4)) & 0xFF) as u8;
        self.carry = high > 15;
        self.zero = result == 0;
        self.overflow = false;
        self.negative = result & 0x80 != 0;
        result
    }

    /// Binary subtract with carry: add the complement.
    fn sbc(&mut self, a: u8, operand: u8) -> u8 {
        let result = self.adc(a, !operand);
        self.set_arithmetic_flags(result);
        result
    }

    /// Decimal (BCD) subtract: nibble-wise with -6 correction per nibble
    /// borrow. Overflow is always cleared in decimal mode.
    fn sbc_decimal(&mut self, a: u8, operand: u8) -> u8 {
        let mut low = (a & 0x0F) as i32 - (operand & 0x0F) as i32 - i32::from(!self.carry);
        if low & 0x10 != 0 {
            low -= 6;
        }
        let mut high = (a >> 4) as i32 - (operand >> 4) as i32 - i32::from(low & 0x10 != 0);
        if high & 0x10 != 0 {
            high -= 6;
        }
        let result = (((low & 0x0F) | ((high << 4) & 0xFF)) & 0xFF) as u8;
        self.carry = (high & 0xFF) < 15;
        self.zero = result == 0;
        self.overflow = false;
        self.negative = result & 0x80 != 0;
        result
    }

    /// Carry when the register is at least the operand; zero and negative
    /// from the wrapped difference.
    fn compare(&mut self, register: u8, operand: u8) {
        let value = register.wrapping_sub(operand);
        self.carry = register >= operand;
        self.zero = value == 0;
        self.negative = value & 0x80 != 0;
    }

    /// Shift left; the outgoing bit 7 lands in carry.
    fn asl(&mut self, value: u8) -> u8 {
        self.carry = value & 0x80 != 0;
        value << 1
    }

    /// Shift right; the outgoing bit 0 lands in carry.
    fn lsr(&mut self, value: u8) -> u8 {
        self.carry = value & 0x01 != 0;
        value >> 1
    }

    /// Rotate left through carry: the old carry enters bit 0.
    fn rol(&mut self, value: u8) -> u8 {
        let result = (value << 1) | self.carry_bit();
        self.carry = value & 0x80 != 0;
        result
    }

    /// Rotate right through carry: the old carry enters bit 7.
    fn ror(&mut self, value: u8) -> u8 {
        let result = (value >> 1) | (self.carry_bit() << 7);
        self.carry = value & 0x01 != 0;
        result
    }

    // Effective-address helpers, all mod 256.

    fn x_address(&self, address: u8) -> u8 {
        address.wrapping_add(self.x)
    }

    fn y_address(&self, address: u8) -> u8 {
        address.wrapping_add(self.y)
    }

    /// Offset address from the program counter; the operand is a signed
    /// byte.
    fn relative_address(&self, offset: u8) -> u8 {
        ((self.pc as i16 + (offset as i8) as i16) & 0xFF) as u8
    }

    fn increment_pc(&mut self) {
        self.pc = if self.pc == 0xFF { 0 } else { self.pc + 1 };
    }

    /// Set the program counter and refresh the peek cache.
    pub fn set_pc(&mut self, pc: u8, ram: &Ram) {
        self.pc = pc;
        self.peek_ahead(ram);
    }

    fn set_arithmetic_flags(&mut self, value: u8) {
        self.zero = value == 0;
        self.negative = value & 0x80 != 0;
    }

    fn carry_bit(&self) -> u8 {
        u8::from(self.carry)
    }

    /// Pack the flags into a status byte; bit 5 always reads as set.
    pub fn status_byte(&self) -> u8 {
        let mut status = PSR_SETBIT;
        if self.carry {
            status |= PSR_CARRY;
        }
        if self.zero {
            status |= PSR_ZERO;
        }
        if self.irq_disable {
            status |= PSR_IRQ_DISABLE;
        }
        if self.decimal {
            status |= PSR_DECIMAL;
        }
        if self.brk {
            status |= PSR_BREAK;
        }
        if self.overflow {
            status |= PSR_OVERFLOW;
        }
        if self.negative {
            status |= PSR_NEGATIVE;
        }
        status
    }

    pub fn set_status_byte(&mut self, status: u8) {
        self.carry = status & PSR_CARRY != 0;
        self.zero = status & PSR_ZERO != 0;
        self.irq_disable = status & PSR_IRQ_DISABLE != 0;
        self.decimal = status & PSR_DECIMAL != 0;
        self.brk = status & PSR_BREAK != 0;
        self.overflow = status & PSR_OVERFLOW != 0;
        self.negative = status & PSR_NEGATIVE != 0;
    }

    /// Mnemonic for a loaded opcode, for the trace log.
    pub fn instruction_symbol(&self, opcode: u8) -> &'static str {
        if opcode == BEGIN_MARKER {
            return "*BEGIN*";
        }
        if opcode == END_MARKER {
            return "*END*";
        }
        match catalog::lookup_opcode(opcode) {
            Some(entry) => entry.mnemonic,
            None => "N/A",
        }
    }

    // Register and flag access.

    pub fn a(&self) -> u8 {
        self.a
    }

    pub fn x(&self) -> u8 {
        self.x
    }

    pub fn y(&self) -> u8 {
        self.y
    }

    pub fn sp(&self) -> u8 {
        self.sp
    }

    pub fn pc(&self) -> u8 {
        self.pc
    }

    pub fn ir(&self) -> u8 {
        self.ir
    }

    pub fn ir_operand(&self) -> u8 {
        self.ir_operand
    }

    pub fn next_ir(&self) -> u8 {
        self.next_ir
    }

    pub fn next_ir_operand(&self) -> u8 {
        self.next_ir_operand
    }

    pub fn step_counter(&self) -> u32 {
        self.step_counter
    }

    pub fn can_step(&self) -> bool {
        self.can_step
    }

    pub fn set_a(&mut self, value: u8) {
        self.a = value;
    }

    pub fn set_x(&mut self, value: u8) {
        self.x = value;
    }

    pub fn set_y(&mut self, value: u8) {
        self.y = value;
    }

    pub fn set_sp(&mut self, value: u8) {
        self.sp = value;
    }

    pub fn carry_flag(&self) -> bool {
        self.carry
    }

    pub fn zero_flag(&self) -> bool {
        self.zero
    }

    pub fn irq_disable_flag(&self) -> bool {
        self.irq_disable
    }

    pub fn decimal_flag(&self) -> bool {
        self.decimal
    }

    pub fn break_flag(&self) -> bool {
        self.brk
    }

    pub fn overflow_flag(&self) -> bool {
        self.overflow
    }

    pub fn negative_flag(&self) -> bool {
        self.negative
    }

    pub fn set_carry_flag(&mut self, value: bool) {
        self.carry = value;
    }

    pub fn set_zero_flag(&mut self, value: bool) {
        self.zero = value;
    }

    pub fn set_decimal_flag(&mut self, value: bool) {
        self.decimal = value;
    }

    pub fn set_negative_flag(&mut self, value: bool) {
        self.negative = value;
    }

    pub fn set_overflow_flag(&mut self, value: bool) {
        self.overflow = value;
    }
}
