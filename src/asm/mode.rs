// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Addressing-mode resolution.
//!
//! The mode of a line is inferred from its operand's punctuation alone.
//! The operand is first normalized into an [`OperandShape`] - which
//! markers are present and where - and one decision `match` maps the
//! shape to a mode. The inferred mode is then checked against the
//! catalog's legal-mode set for the line's instruction; a mode outside
//! that set fails the build.

use crate::asm::error::{AsmError, AsmErrorKind};
use crate::catalog::{self, AddressMode};

/// Normalized operand form: the facts the decision table keys on.
#[derive(Debug, Default)]
struct OperandShape {
    empty: bool,
    lone_accumulator: bool,
    has_hash: bool,
    has_sign: bool,
    has_dollar: bool,
    paren_close: Option<usize>,
    has_paren: bool,
    x_pos: Option<usize>,
    y_pos: Option<usize>,
}

fn shape_of(operand: &str) -> OperandShape {
    let upper = operand.to_ascii_uppercase();
    OperandShape {
        empty: upper.is_empty(),
        lone_accumulator: upper == "A",
        has_hash: upper.contains('#'),
        has_sign: upper.contains('+') || upper.contains('-'),
        has_dollar: upper.contains('$'),
        paren_close: upper.find(')'),
        has_paren: upper.contains('(') || upper.contains(')'),
        x_pos: upper.find('X'),
        y_pos: upper.find('Y'),
    }
}

/// Infer the addressing mode of an operand, or `None` when no rule
/// matches (which the caller turns into a build failure).
pub fn infer(operand: &str) -> Option<AddressMode> {
    let s = shape_of(operand);

    // Priority order matters: the immediate marker beats the sign
    // markers, and both beat the address-shaped rules.
    if s.empty {
        return Some(AddressMode::Implied);
    }
    if s.lone_accumulator {
        return Some(AddressMode::Accumulator);
    }
    if s.has_hash {
        return Some(AddressMode::Immediate);
    }
    if s.has_sign {
        return Some(AddressMode::Relative);
    }

    let indexed = s.x_pos.is_some() || s.y_pos.is_some();

    if s.has_paren {
        let close = s.paren_close?;
        return match (s.x_pos, s.y_pos) {
            (None, None) => Some(AddressMode::Indirect),
            // Register inside the parentheses: ($nn,X). Outside: ($nn),Y.
            (Some(x), None) => Some(if close > x {
                AddressMode::IndexedIndirect
            } else {
                AddressMode::IndirectIndexed
            }),
            (None, Some(y)) => Some(if close > y {
                AddressMode::IndexedIndirect
            } else {
                AddressMode::IndirectIndexed
            }),
            (Some(_), Some(_)) => None,
        };
    }

    if !indexed {
        // With or without the '$' marker: a plain address or a branch
        // label resolves as absolute.
        return Some(AddressMode::Absolute);
    }
    if s.has_dollar && s.x_pos.is_some() && s.y_pos.is_none() {
        return Some(AddressMode::AbsoluteX);
    }
    if s.has_dollar && s.y_pos.is_some() && s.x_pos.is_none() {
        return Some(AddressMode::AbsoluteY);
    }

    None
}

/// Infer the mode and validate it against the instruction's legal set.
pub fn resolve(mnemonic: &str, operand: &str, line: u32) -> Result<AddressMode, AsmError> {
    if mnemonic.is_empty() {
        return Err(AsmError::with_line(
            AsmErrorKind::AddressMode,
            "line carries no instruction",
            line,
        ));
    }

    let mode = infer(operand).ok_or_else(|| {
        AsmError::with_line(
            AsmErrorKind::AddressMode,
            format!("cannot determine an addressing mode for operand '{operand}'"),
            line,
        )
    })?;

    let legal = catalog::legal_modes(mnemonic);
    if !legal.contains(&mode) {
        let spelled: Vec<&str> = legal.iter().map(|m| m.label()).collect();
        return Err(AsmError::with_line(
            AsmErrorKind::AddressMode,
            format!(
                "addressing mode {mode} is not valid for instruction {mnemonic} \
                 (legal: {})",
                spelled.join(", ")
            ),
            line,
        ));
    }

    Ok(mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn punctuation_drives_the_mode() {
        assert_eq!(infer(""), Some(AddressMode::Implied));
        assert_eq!(infer("A"), Some(AddressMode::Accumulator));
        assert_eq!(infer("#$7F"), Some(AddressMode::Immediate));
        assert_eq!(infer("#10"), Some(AddressMode::Immediate));
        assert_eq!(infer("*+5"), Some(AddressMode::Relative));
        assert_eq!(infer("*-2"), Some(AddressMode::Relative));
        assert_eq!(infer("$10"), Some(AddressMode::Absolute));
        assert_eq!(infer("LOOP"), Some(AddressMode::Absolute));
        assert_eq!(infer("$10,X"), Some(AddressMode::AbsoluteX));
        assert_eq!(infer("$10,Y"), Some(AddressMode::AbsoluteY));
        assert_eq!(infer("($40)"), Some(AddressMode::Indirect));
        assert_eq!(infer("($40,X)"), Some(AddressMode::IndexedIndirect));
        assert_eq!(infer("($40),Y"), Some(AddressMode::IndirectIndexed));
    }

    #[test]
    fn indexing_without_dollar_is_unresolvable() {
        assert_eq!(infer("LOOP,X"), None);
    }

    #[test]
    fn accumulator_must_stand_alone() {
        assert_eq!(infer("AB"), Some(AddressMode::Absolute));
    }

    #[test]
    fn illegal_mode_for_instruction_fails() {
        let err = resolve("LDX", "$10,X", 4).unwrap_err();
        assert_eq!(err.kind(), AsmErrorKind::AddressMode);
        assert_eq!(err.line(), Some(4));
    }

    #[test]
    fn store_rejects_immediate() {
        let err = resolve("STA", "#$10", 2).unwrap_err();
        assert_eq!(err.kind(), AsmErrorKind::AddressMode);
    }

    #[test]
    fn legal_mode_resolves() {
        assert_eq!(resolve("LDA", "#$10", 1).unwrap(), AddressMode::Immediate);
        assert_eq!(resolve("JMP", "($40)", 1).unwrap(), AddressMode::Indirect);
        assert_eq!(resolve("NOP", "", 1).unwrap(), AddressMode::Implied);
        assert_eq!(resolve("BNE", "*-2", 1).unwrap(), AddressMode::Relative);
    }
}
