// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Hex code generation.
//!
//! Resolves each line's opcode byte through the catalog and renders the
//! operand byte according to the addressing mode. Branch labels occurring
//! in address operands are substituted by the memory address of their
//! declaring line: every surviving line occupies exactly two bytes in the
//! final stream, so a label on line L points at byte (L * 2) - 1.

use std::collections::BTreeMap;

use crate::asm::error::{AsmError, AsmErrorKind};
use crate::asm::line::AsmLine;
use crate::catalog::{self, AddressMode};

/// Byte address a label on the given 1-based line resolves to.
pub fn label_address(line_number: u32) -> u32 {
    line_number * 2 - 1
}

/// Resolved (label, address) pairs for the whole branch table.
pub fn branch_addresses(table: &BTreeMap<u32, String>) -> Vec<(String, String)> {
    table
        .iter()
        .map(|(line, label)| (label.clone(), format!("{:02X}", label_address(*line))))
        .collect()
}

/// Fill in the hex fields of one line.
pub fn emit(line: &mut AsmLine, labels: &[(String, String)]) -> Result<(), AsmError> {
    let mode = line.mode().ok_or_else(|| {
        AsmError::with_line(
            AsmErrorKind::CodeGen,
            "line reached code generation without an addressing mode",
            line.line_number(),
        )
    })?;

    let entry = catalog::lookup(line.mnemonic(), mode).ok_or_else(|| {
        AsmError::with_line(
            AsmErrorKind::CodeGen,
            format!(
                "no opcode for instruction {} with addressing mode {mode}",
                line.mnemonic()
            ),
            line.line_number(),
        )
    })?;

    let opcode_hex = format!("{:02X}", entry.opcode);
    let operand_hex = operand_hex(line, mode, labels)?;
    line.set_hex(opcode_hex, operand_hex);
    Ok(())
}

fn operand_hex(
    line: &AsmLine,
    mode: AddressMode,
    labels: &[(String, String)],
) -> Result<String, AsmError> {
    let operand = line.operand();

    match mode {
        // No operand byte of their own; 00 keeps the two-byte line shape.
        AddressMode::Implied | AddressMode::Accumulator => Ok("00".to_string()),

        AddressMode::Immediate => {
            let digits = strip_chars(operand, "#$");
            pad_hex(&digits, line)
        }

        AddressMode::Relative => {
            let negative = operand.contains('-');
            let digits = strip_chars(operand, "*+-");
            let magnitude = u32::from_str_radix(&digits, 16).map_err(|_| {
                AsmError::with_line(
                    AsmErrorKind::CodeGen,
                    format!("relative operand '{operand}' has no readable offset"),
                    line.line_number(),
                )
            })?;
            // Negative offsets are stored as the two's complement of the
            // 8-bit magnitude.
            let value = if negative {
                (256 - (magnitude % 256)) % 256
            } else {
                magnitude % 256
            };
            Ok(format!("{value:02X}"))
        }

        AddressMode::Absolute => address_hex(operand, "$", labels, line),
        AddressMode::AbsoluteX => address_hex(operand, "$,X", labels, line),
        AddressMode::AbsoluteY => address_hex(operand, "$,Y", labels, line),
        AddressMode::Indirect => address_hex(operand, "$()", labels, line),
        AddressMode::IndexedIndirect => address_hex(operand, "$(),X", labels, line),
        AddressMode::IndirectIndexed => address_hex(operand, "$(),Y", labels, line),
    }
}

/// Strip the mode punctuation, substitute a branch label if one matches,
/// and render the remaining address as two hex digits.
fn address_hex(
    operand: &str,
    punctuation: &str,
    labels: &[(String, String)],
    line: &AsmLine,
) -> Result<String, AsmError> {
    let mut cleaned = strip_chars(operand, punctuation);
    for (label, address) in labels {
        if cleaned == *label {
            cleaned = address.clone();
            break;
        }
    }
    pad_hex(&cleaned, line)
}

fn strip_chars(text: &str, unwanted: &str) -> String {
    text.chars().filter(|c| !unwanted.contains(*c)).collect()
}

fn pad_hex(digits: &str, line: &AsmLine) -> Result<String, AsmError> {
    let value = u8::from_str_radix(digits, 16).map_err(|_| {
        AsmError::with_line(
            AsmErrorKind::CodeGen,
            format!("operand '{}' does not resolve to a byte", line.operand()),
            line.line_number(),
        )
    })?;
    Ok(format!("{value:02X}"))
}
