// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Pass 1: line scanning and branch collection.
//!
//! This pass only discovers structure. Lines are split into whitespace
//! tokens, truncated at the comment marker, and every branch-label
//! declaration is recorded against its 1-based line number. No validation
//! happens here.

use std::collections::BTreeMap;

use crate::asm::error::{AsmError, AsmErrorKind};

/// Comment marker; the marker and everything after it is discarded.
pub const COMMENT_MARKER: char = ';';

/// Branch-label declarations start with this marker.
pub const LABEL_MARKER: char = '_';

/// One scanned source line: its 1-based number and its surviving tokens.
#[derive(Debug, Clone)]
pub struct SourceLine {
    pub number: u32,
    pub tokens: Vec<String>,
}

/// Split a line into whitespace tokens, dropping the comment tail.
///
/// The token carrying the comment marker is dropped whole, along with
/// every token after it.
pub fn split_line(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    for token in line.split_whitespace() {
        if token.contains(COMMENT_MARKER) {
            break;
        }
        tokens.push(token.to_string());
    }
    tokens
}

/// Scan every line into a `SourceLine`, numbering from 1.
pub fn scan_lines(lines: &[String]) -> Vec<SourceLine> {
    lines
        .iter()
        .enumerate()
        .map(|(i, line)| SourceLine {
            number: i as u32 + 1,
            tokens: split_line(line),
        })
        .collect()
}

/// Check that the program carries the BEGIN and END keywords
/// (case-insensitive substring match, as the original file format defines
/// them) and return the line number the END keyword sits on.
pub fn check_begin_end(lines: &[String]) -> Result<u32, AsmError> {
    let mut begin_found = false;
    let mut end_line = None;

    for (i, line) in lines.iter().enumerate() {
        let upper = line.to_ascii_uppercase();
        if upper.contains("BEGIN") {
            begin_found = true;
        }
        if upper.contains("END") {
            end_line = Some(i as u32 + 1);
        }
    }

    match (begin_found, end_line) {
        (true, Some(end)) => Ok(end),
        _ => Err(AsmError::new(
            AsmErrorKind::Structure,
            "program does not contain both the BEGIN and END keywords",
        )),
    }
}

/// Pull directive lines (`dc.b` / `dc.s` / `dc.v`) out of the main stream.
///
/// Directive lines bypass the instruction pipeline entirely. Comments are
/// stripped before the keyword test so a remark about a directive does not
/// hijack an instruction line. Returns the remaining main-stream lines and
/// the extracted directive lines with their pre-extraction line numbers.
pub fn extract_directives(lines: &[String]) -> (Vec<String>, Vec<(u32, String)>) {
    let mut main_lines = Vec::new();
    let mut directive_lines = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let stripped = match line.find(COMMENT_MARKER) {
            Some(pos) => &line[..pos],
            None => line.as_str(),
        };
        if stripped.contains("dc.b") || stripped.contains("dc.s") || stripped.contains("dc.v") {
            directive_lines.push((i as u32 + 1, stripped.to_string()));
        } else {
            main_lines.push(line.clone());
        }
    }

    (main_lines, directive_lines)
}

/// Collect branch-label declarations into the branch table.
///
/// Any token containing the label marker declares a label: the leading
/// marker is stripped and the rest is recorded upper-cased, keyed by the
/// line number. One label per line; a second declaration on the same line
/// overwrites the first.
pub fn collect_branches(lines: &[SourceLine]) -> BTreeMap<u32, String> {
    let mut table = BTreeMap::new();
    for line in lines {
        for token in &line.tokens {
            if token.contains(LABEL_MARKER) {
                let label = token.get(1..).unwrap_or("").to_ascii_uppercase();
                table.insert(line.number, label);
            }
        }
    }
    table
}
