// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Pass 2: token classification.
//!
//! Each token of a line is assigned to exactly one of three kinds:
//! a token carrying the label marker is a branch label, a token matching a
//! catalog mnemonic is the instruction, anything else is the operand. The
//! first token of each kind wins; later tokens of the same kind are
//! ignored.

use crate::asm::error::{AsmError, AsmErrorKind};
use crate::asm::line::AsmLine;
use crate::asm::scanner::{SourceLine, LABEL_MARKER};
use crate::catalog;

/// Build one `AsmLine` per scanned source line.
pub fn classify_lines(lines: &[SourceLine]) -> Vec<AsmLine> {
    lines.iter().map(classify_line).collect()
}

fn classify_line(source: &SourceLine) -> AsmLine {
    let mut line = AsmLine::new(source.number);

    for token in &source.tokens {
        let token = token.to_ascii_uppercase();
        if token.contains(LABEL_MARKER) {
            if line.branch_label().is_empty() {
                line.set_branch_label(token.trim_start_matches(LABEL_MARKER));
            }
        } else if catalog::is_mnemonic(&token) {
            if line.mnemonic().is_empty() {
                line.set_mnemonic(token);
            }
        } else if line.operand().is_empty() {
            line.set_operand(token);
        }
    }

    line
}

/// Drop the BEGIN and END keyword lines from the classified stream.
///
/// The keywords are not mnemonics, so classification files them as
/// operands; a line whose operand is one of the keywords is a keyword
/// line.
pub fn strip_keyword_lines(lines: Vec<AsmLine>) -> Vec<AsmLine> {
    lines
        .into_iter()
        .filter(|line| {
            let operand = line.operand().trim();
            !operand.eq_ignore_ascii_case("BEGIN") && !operand.eq_ignore_ascii_case("END")
        })
        .collect()
}

/// No statement may follow the END keyword.
pub fn check_lines_after_end(lines: &[AsmLine], end_line: u32) -> Result<(), AsmError> {
    for line in lines {
        if line.line_number() > end_line {
            return Err(AsmError::with_line(
                AsmErrorKind::Structure,
                format!(
                    "statement '{}' cannot appear after the END keyword",
                    line.display_text()
                ),
                line.line_number(),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::asm::scanner::scan_lines;

    fn classify(src: &[&str]) -> Vec<AsmLine> {
        let lines: Vec<String> = src.iter().map(|s| s.to_string()).collect();
        classify_lines(&scan_lines(&lines))
    }

    #[test]
    fn label_mnemonic_operand_split() {
        let lines = classify(&["_loop ADC #$01"]);
        assert_eq!(lines[0].branch_label(), "LOOP");
        assert_eq!(lines[0].mnemonic(), "ADC");
        assert_eq!(lines[0].operand(), "#$01");
    }

    #[test]
    fn mnemonics_match_case_insensitively() {
        let lines = classify(&["lda #$10"]);
        assert_eq!(lines[0].mnemonic(), "LDA");
        assert_eq!(lines[0].operand(), "#$10");
    }

    #[test]
    fn first_token_of_a_kind_wins() {
        let lines = classify(&["LDA #$10 #$20"]);
        assert_eq!(lines[0].operand(), "#$10");
    }

    #[test]
    fn keyword_lines_are_removed() {
        let lines = strip_keyword_lines(classify(&["BEGIN", "NOP", "END"]));
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].mnemonic(), "NOP");
    }

    #[test]
    fn statements_after_end_are_fatal() {
        let lines = strip_keyword_lines(classify(&["BEGIN", "NOP", "END", "NOP"]));
        let err = check_lines_after_end(&lines, 3).unwrap_err();
        assert_eq!(err.kind(), AsmErrorKind::Structure);
        assert_eq!(err.line(), Some(4));
    }
}
