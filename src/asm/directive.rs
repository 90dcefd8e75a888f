// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Data-definition directives.
//!
//! `dc.b`, `dc.s` and `dc.v` lines bypass the instruction pipeline and
//! compile straight to (address, value) byte pairs. Addresses and values
//! are `$`-prefixed hex; a directive whose addresses grow past 0xFF fails
//! the build rather than wrapping.

use crate::asm::error::{AsmError, AsmErrorKind};

/// One (address, value) pair produced by a directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectivePair {
    pub address: u8,
    pub value: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DirectiveKind {
    /// `dc.b addr value` - one byte at one address.
    Byte,
    /// `dc.s addr text` - the text's ASCII values at consecutive addresses.
    Text,
    /// `dc.v addr v1 v2 ...` - the values at consecutive addresses.
    Values,
}

/// Compile every extracted directive line, in source order.
pub fn process(lines: &[(u32, String)]) -> Result<Vec<DirectivePair>, AsmError> {
    let mut pairs = Vec::new();
    for (number, text) in lines {
        compile_line(*number, text, &mut pairs)?;
    }
    Ok(pairs)
}

fn compile_line(number: u32, text: &str, pairs: &mut Vec<DirectivePair>) -> Result<(), AsmError> {
    let kind = if text.contains("dc.b") {
        DirectiveKind::Byte
    } else if text.contains("dc.s") {
        DirectiveKind::Text
    } else if text.contains("dc.v") {
        DirectiveKind::Values
    } else {
        return Err(AsmError::with_line(
            AsmErrorKind::Directive,
            format!("line '{text}' carries no valid directive"),
            number,
        ));
    };

    let tokens: Vec<&str> = text.split_whitespace().collect();

    match kind {
        DirectiveKind::Byte => {
            if tokens.len() != 3 {
                return Err(AsmError::with_line(
                    AsmErrorKind::Directive,
                    format!("dc.b line '{text}' must contain exactly 3 tokens"),
                    number,
                ));
            }
            let address = hex_byte(tokens[1], number)?;
            let value = hex_byte(tokens[2], number)?;
            pairs.push(DirectivePair { address, value });
        }

        DirectiveKind::Text => {
            if tokens.len() != 3 {
                return Err(AsmError::with_line(
                    AsmErrorKind::Directive,
                    format!("dc.s line '{text}' must contain exactly 3 tokens"),
                    number,
                ));
            }
            let start = hex_byte(tokens[1], number)?;
            let mut address = start as u32;
            for c in tokens[2].chars() {
                pairs.push(DirectivePair {
                    address: checked_address(address, text, number)?,
                    value: c as u8,
                });
                address += 1;
            }
        }

        DirectiveKind::Values => {
            if tokens.len() < 3 {
                return Err(AsmError::with_line(
                    AsmErrorKind::Directive,
                    format!("dc.v line '{text}' must contain 3 or more tokens"),
                    number,
                ));
            }
            let start = hex_byte(tokens[1], number)?;
            let mut address = start as u32;
            for token in &tokens[2..] {
                let value = hex_byte(token, number)?;
                pairs.push(DirectivePair {
                    address: checked_address(address, text, number)?,
                    value,
                });
                address += 1;
            }
        }
    }

    Ok(())
}

/// A `$`-prefixed 1-2 digit hex byte.
fn hex_byte(token: &str, line: u32) -> Result<u8, AsmError> {
    if !token.contains('$') {
        return Err(AsmError::with_line(
            AsmErrorKind::Directive,
            format!("directive token '{token}' does not contain '$'"),
            line,
        ));
    }
    let digits: String = token.chars().filter(|c| *c != '$').collect();
    match u8::from_str_radix(&digits, 16) {
        Ok(value) if digits.len() <= 2 => Ok(value),
        _ => Err(AsmError::with_line(
            AsmErrorKind::Directive,
            format!(
                "directive token '{token}' is not a 1-2 digit hexadecimal value \
                 between 0-255 decimal"
            ),
            line,
        )),
    }
}

/// Directive data may not run past the end of the address space.
fn checked_address(address: u32, text: &str, line: u32) -> Result<u8, AsmError> {
    if address > 0xFF {
        return Err(AsmError::with_line(
            AsmErrorKind::Directive,
            format!("directive '{text}' cannot be processed: memory address would exceed 0xFF"),
            line,
        ));
    }
    Ok(address as u8)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(lines: &[(u32, &str)]) -> Result<Vec<DirectivePair>, AsmError> {
        let owned: Vec<(u32, String)> = lines.iter().map(|(n, s)| (*n, s.to_string())).collect();
        process(&owned)
    }

    #[test]
    fn byte_directive_emits_one_pair() {
        let pairs = run(&[(1, "dc.b $0A $1F")]).unwrap();
        assert_eq!(
            pairs,
            vec![DirectivePair {
                address: 0x0A,
                value: 0x1F
            }]
        );
    }

    #[test]
    fn byte_directive_token_count_is_exact() {
        assert!(run(&[(1, "dc.b $0A")]).is_err());
        assert!(run(&[(1, "dc.b $0A $1F $2E")]).is_err());
    }

    #[test]
    fn tokens_require_the_dollar_marker() {
        let err = run(&[(1, "dc.b 0A $1F")]).unwrap_err();
        assert_eq!(err.kind(), AsmErrorKind::Directive);
        assert!(err.message().contains('$'));
    }

    #[test]
    fn text_directive_emits_ascii_at_consecutive_addresses() {
        let pairs = run(&[(1, "dc.s $10 HI")]).unwrap();
        assert_eq!(
            pairs,
            vec![
                DirectivePair {
                    address: 0x10,
                    value: b'H'
                },
                DirectivePair {
                    address: 0x11,
                    value: b'I'
                },
            ]
        );
    }

    #[test]
    fn value_directive_takes_a_list() {
        let pairs = run(&[(1, "dc.v $20 $01 $02 $03")]).unwrap();
        assert_eq!(pairs.len(), 3);
        assert_eq!(pairs[2].address, 0x22);
        assert_eq!(pairs[2].value, 0x03);
    }

    #[test]
    fn overflowing_the_address_space_is_fatal() {
        let err = run(&[(1, "dc.s $FF HI")]).unwrap_err();
        assert!(err.message().contains("0xFF"));

        let err = run(&[(1, "dc.v $FE $01 $02 $03")]).unwrap_err();
        assert_eq!(err.kind(), AsmErrorKind::Directive);
    }

    #[test]
    fn directive_pairs_accumulate_across_lines() {
        let pairs = run(&[(1, "dc.b $0A $1F"), (2, "dc.b $0B $2E")]).unwrap();
        assert_eq!(pairs.len(), 2);
    }
}
