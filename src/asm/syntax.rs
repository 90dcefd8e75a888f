// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Token-level syntax validation.
//!
//! Runs over the flattened token stream before the two passes, independent
//! of classification: every token is re-derived as instruction, branch
//! label or operand by the same rule pass 2 uses, then checked against the
//! lexical rules of its kind. Validation stops at the first violation.
//!
//! Instructions need no checking - a token only counts as an instruction
//! by matching the catalog exactly, so it is always well-formed.

use crate::asm::error::{AsmError, AsmErrorKind};
use crate::asm::scanner::{SourceLine, LABEL_MARKER};
use crate::catalog;

const OPERAND_PUNCTUATION: &str = "()$#,*+-";

/// Validate every token of the scanned program.
pub fn check_tokens(lines: &[SourceLine]) -> Result<(), AsmError> {
    for line in lines {
        for token in &line.tokens {
            if token.eq_ignore_ascii_case("BEGIN") || token.eq_ignore_ascii_case("END") {
                continue;
            }
            check_token(token, line.number)?;
        }
    }
    Ok(())
}

fn check_token(token: &str, line: u32) -> Result<(), AsmError> {
    if catalog::is_mnemonic(token) {
        return Ok(());
    }
    if token.contains(LABEL_MARKER) {
        return check_branch_label(token, line);
    }
    check_operand(token, line)
}

fn syntax_error(message: String, line: u32) -> AsmError {
    AsmError::with_line(AsmErrorKind::Syntax, message, line)
}

/// Branch-label declarations: only letters after the marker.
fn check_branch_label(token: &str, line: u32) -> Result<(), AsmError> {
    let body = token.trim_start_matches(LABEL_MARKER);
    if body.is_empty() || !body.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(syntax_error(
            format!("branch label '{token}' may only contain letters after the marker"),
            line,
        ));
    }
    Ok(())
}

fn check_operand(token: &str, line: u32) -> Result<(), AsmError> {
    let upper = token.to_ascii_uppercase();

    check_character_set(token, &upper, line)?;
    check_label_shape(token, &upper, line)?;
    check_numeric_bounds(token, &upper, line)?;
    check_parentheses(token, &upper, line)?;
    check_value_marker_digits(token, &upper, line)?;
    check_comma_neighbours(token, &upper, line)?;
    Ok(())
}

/// Character set, comma count, X/Y count and the indexed/indirect side
/// rule.
fn check_character_set(token: &str, upper: &str, line: u32) -> Result<(), AsmError> {
    for c in upper.chars() {
        if !c.is_ascii_alphanumeric() && !OPERAND_PUNCTUATION.contains(c) {
            return Err(syntax_error(
                format!("operand '{token}' contains illegal character '{c}'"),
                line,
            ));
        }
    }

    if upper.matches(',').count() > 1 {
        return Err(syntax_error(
            format!("operand '{token}' cannot contain more than one comma"),
            line,
        ));
    }

    let xy_count = upper.matches('X').count() + upper.matches('Y').count();
    if xy_count > 1 {
        return Err(syntax_error(
            format!("operand '{token}' can only contain one X or Y symbol"),
            line,
        ));
    }

    // ($nn,X) keeps the index inside the parentheses, ($nn),Y outside;
    // whichever of ')' and ',' comes first decides which register must
    // follow the comma.
    if let (Some(close), Some(comma)) = (upper.find(')'), upper.find(',')) {
        let after_comma = &upper[comma..];
        if close > comma && !after_comma.contains('X') {
            return Err(syntax_error(
                format!("indexed indirect operand '{token}' requires X after the comma"),
                line,
            ));
        }
        if close < comma && !after_comma.contains('Y') {
            return Err(syntax_error(
                format!("indirect indexed operand '{token}' requires Y after the comma"),
                line,
            ));
        }
    }

    Ok(())
}

/// Operands with no value marker must be pure-letter branch labels (or
/// the accumulator).
fn check_label_shape(token: &str, upper: &str, line: u32) -> Result<(), AsmError> {
    if upper.contains('#') || upper.contains('$') || upper.contains('*') {
        return Ok(());
    }
    let leftover: String = upper
        .chars()
        .filter(|c| !"()XY,#$+-".contains(*c))
        .filter(|c| !c.is_ascii_alphabetic())
        .collect();
    if !leftover.is_empty() {
        return Err(syntax_error(
            format!("operand '{token}' is not a value and must be a letters-only branch label"),
            line,
        ));
    }
    Ok(())
}

/// Hex value of `text` after the relative-offset markers are stripped;
/// a leading `*-` negates.
fn signed_value(text: &str) -> Result<i64, ()> {
    let negative = text.contains('-');
    let digits: String = text.chars().filter(|c| c.is_ascii_hexdigit()).collect();
    if digits.is_empty() {
        return Ok(0);
    }
    let value = i64::from_str_radix(&digits, 16).map_err(|_| ())?;
    Ok(if negative { -value } else { value })
}

/// Numeric bounds: absolute/immediate values must fit 0-255, relative
/// offsets -128..=127.
fn check_numeric_bounds(token: &str, upper: &str, line: u32) -> Result<(), AsmError> {
    let cleaned: String = upper.chars().filter(|c| !"()XY,".contains(*c)).collect();

    if upper.contains('$') || upper.contains('#') {
        let cleaned: String = cleaned.chars().filter(|c| !"#$".contains(*c)).collect();
        let value = signed_value(&cleaned)
            .map_err(|_| syntax_error(format!("operand '{token}' has no readable value"), line))?;
        if value < 0 {
            return Err(syntax_error(
                format!("operand '{token}' holds a value below 0x00"),
                line,
            ));
        }
        if value > 255 {
            return Err(syntax_error(
                format!("operand '{token}' holds a value greater than 0xFF (255)"),
                line,
            ));
        }
        return Ok(());
    }

    // Letters-only operands are branch labels (or the accumulator) and
    // carry no value to check.
    if !cleaned.is_empty() && cleaned.chars().all(|c| c.is_ascii_alphabetic()) {
        return Ok(());
    }

    let relative = cleaned.contains('+') || cleaned.contains('-');
    let value = signed_value(&cleaned)
        .map_err(|_| syntax_error(format!("operand '{token}' has no readable value"), line))?;

    if relative {
        if !(-128..=127).contains(&value) {
            return Err(syntax_error(
                format!(
                    "operand '{token}' is an 8-bit relative offset and must be between \
                     -128 and +127 decimal (-80 and 7F hexadecimal)"
                ),
                line,
            ));
        }
    } else {
        if value < 0 {
            return Err(syntax_error(
                format!("operand '{token}' holds a value below 0x00"),
                line,
            ));
        }
        if value > 255 {
            return Err(syntax_error(
                format!("operand '{token}' holds a value greater than 0xFF (255)"),
                line,
            ));
        }
    }
    Ok(())
}

/// Parentheses must be balanced and appear as a single pair at most.
fn check_parentheses(token: &str, upper: &str, line: u32) -> Result<(), AsmError> {
    let opens = upper.matches('(').count();
    let closes = upper.matches(')').count();
    if opens > 0 && closes == 0 {
        return Err(syntax_error(
            format!("operand '{token}' opens a parenthesis it never closes"),
            line,
        ));
    }
    if closes > 0 && opens == 0 {
        return Err(syntax_error(
            format!("operand '{token}' closes a parenthesis it never opened"),
            line,
        ));
    }
    if opens > 1 || closes > 1 {
        return Err(syntax_error(
            format!("operand '{token}' contains more than one set of parentheses"),
            line,
        ));
    }
    Ok(())
}

/// `$` and `#` must be immediately followed by one or two hex digits
/// (`#` may reach its digits through a `$`).
fn check_value_marker_digits(token: &str, upper: &str, line: u32) -> Result<(), AsmError> {
    if let Some(pos) = upper.find('$') {
        let start = pos + 1;
        let end = digits_end(upper, start);
        check_digit_span(token, &upper[start..end], '$', line)?;
    }

    if let Some(pos) = upper.find('#') {
        let mut start = pos + 1;
        // #$nn and #nn are both accepted immediate spellings.
        if upper[start..].starts_with('$') {
            start += 1;
        }
        let end = digits_end(upper, start);
        check_digit_span(token, &upper[start..end], '#', line)?;
    }

    Ok(())
}

/// End of the digit run that follows a value marker: the closing
/// parenthesis or comma, whichever applies first, else the end of the
/// token.
fn digits_end(upper: &str, start: usize) -> usize {
    let close = upper.find(')');
    let comma = upper.find(',');
    let end = match (close, comma) {
        (Some(c), Some(m)) => c.min(m),
        (Some(c), None) => c,
        (None, Some(m)) => m,
        (None, None) => upper.len(),
    };
    end.max(start)
}

fn check_digit_span(token: &str, span: &str, marker: char, line: u32) -> Result<(), AsmError> {
    let ok = !span.is_empty() && span.len() <= 2 && span.chars().all(|c| c.is_ascii_hexdigit());
    if !ok {
        return Err(syntax_error(
            format!("'{marker}' in operand '{token}' must be followed by 1-2 hexadecimal digits"),
            line,
        ));
    }
    Ok(())
}

/// The comma must sit between an address (or label, or closing
/// parenthesis) and an index register.
fn check_comma_neighbours(token: &str, upper: &str, line: u32) -> Result<(), AsmError> {
    let Some(pos) = upper.find(',') else {
        return Ok(());
    };

    if pos + 1 == upper.len() {
        return Err(syntax_error(
            format!("comma cannot be the final character in operand '{token}'"),
            line,
        ));
    }
    if pos == 0 {
        return Err(syntax_error(
            format!("comma cannot be the first character in operand '{token}'"),
            line,
        ));
    }

    let head: String = upper[..pos].chars().filter(|c| *c != '(').collect();
    let is_label_form = !head.is_empty() && head.chars().all(|c| c.is_ascii_alphabetic());

    let left = upper.as_bytes()[pos - 1] as char;
    let left_ok = if is_label_form {
        left.is_ascii_alphanumeric() || left == ')'
    } else {
        left.is_ascii_hexdigit() || left == ')'
    };
    if !left_ok {
        return Err(syntax_error(
            format!("operand '{token}' has an illegal character on the left side of the comma"),
            line,
        ));
    }

    let right = upper.as_bytes()[pos + 1] as char;
    if right != 'X' && right != 'Y' {
        return Err(syntax_error(
            format!("operand '{token}' must name X or Y on the right side of the comma"),
            line,
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asm::scanner::scan_lines;

    fn check(src: &[&str]) -> Result<(), AsmError> {
        let lines: Vec<String> = src.iter().map(|s| s.to_string()).collect();
        check_tokens(&scan_lines(&lines))
    }

    #[test]
    fn well_formed_operands_pass() {
        assert!(check(&["LDA #$7F", "ADC $10", "STA $20,X", "LDA ($30),Y"]).is_ok());
        assert!(check(&["EOR ($15,X)", "BNE *-2", "BPL *+5", "ASL A"]).is_ok());
        assert!(check(&["LDA #10"]).is_ok());
    }

    #[test]
    fn illegal_character_is_rejected() {
        let err = check(&["LDA #$1?"]).unwrap_err();
        assert_eq!(err.kind(), AsmErrorKind::Syntax);
        assert!(err.message().contains("illegal character"));
    }

    #[test]
    fn two_commas_are_rejected() {
        let err = check(&["LDA $10,,X"]).unwrap_err();
        assert!(err.message().contains("more than one comma"));
    }

    #[test]
    fn two_index_registers_are_rejected() {
        let err = check(&["LDA $10,XY"]).unwrap_err();
        assert!(err.message().contains("one X or Y"));
    }

    #[test]
    fn unbalanced_parenthesis_is_rejected() {
        assert!(check(&["LDA ($10"]).is_err());
        assert!(check(&["LDA $10)"]).is_err());
        assert!(check(&["LDA (($10))"]).is_err());
    }

    #[test]
    fn indexed_indirect_needs_x_inside() {
        let err = check(&["LDA ($10,Y)"]).unwrap_err();
        assert!(err.message().contains("requires X"));
    }

    #[test]
    fn indirect_indexed_needs_y_outside() {
        let err = check(&["LDA ($10),X"]).unwrap_err();
        assert!(err.message().contains("requires Y"));
    }

    #[test]
    fn value_marker_needs_digits() {
        assert!(check(&["LDA #$"]).is_err());
        assert!(check(&["LDA $"]).is_err());
        assert!(check(&["LDA $1FF"]).is_err());
    }

    #[test]
    fn absolute_value_above_ff_is_rejected() {
        let err = check(&["LDA $1FF"]).unwrap_err();
        assert!(err.message().contains("greater than 0xFF"));
    }

    #[test]
    fn relative_offset_out_of_range_is_rejected() {
        let err = check(&["BNE *-81"]).unwrap_err();
        assert!(err.message().contains("-128"));
        assert!(check(&["BPL *+7F"]).is_ok());
        assert!(check(&["BPL *+80"]).is_err());
    }

    #[test]
    fn comma_cannot_be_final_character() {
        let err = check(&["LDA $10,"]).unwrap_err();
        assert!(err.message().contains("final character"));
    }

    #[test]
    fn comma_right_neighbour_must_be_index_register() {
        let err = check(&["LDA $10,G"]).unwrap_err();
        assert!(err.message().contains("right side"));
    }

    #[test]
    fn branch_label_declarations_are_letters_only() {
        assert!(check(&["_loop ADC #$01"]).is_ok());
        let err = check(&["_loop2 ADC #$01"]).unwrap_err();
        assert!(err.message().contains("letters"));
    }

    #[test]
    fn bare_numbers_are_not_labels() {
        let err = check(&["LDA 10"]).unwrap_err();
        assert!(err.message().contains("letters-only"));
    }

    #[test]
    fn keywords_are_skipped() {
        assert!(check(&["BEGIN", "END"]).is_ok());
    }

    #[test]
    fn validation_reports_the_offending_line() {
        let err = check(&["LDA #$10", "LDA $10,"]).unwrap_err();
        assert_eq!(err.line(), Some(2));
    }
}
