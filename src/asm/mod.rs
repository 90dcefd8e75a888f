// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Two-pass assembler for the 6502-lite language.
//!
//! The pipeline runs to completion or aborts on the first error; there is
//! no partial output. Stage order:
//!
//! 1. structure check (BEGIN/END present, END line recorded)
//! 2. directive-line extraction
//! 3. token-level syntax validation
//! 4. pass 1: branch-label collection
//! 5. pass 2: token classification into line records
//! 6. branch-table checks (operand labels resolve, no duplicates)
//! 7. addressing-mode resolution and validation
//! 8. code generation (hex pairs, label address substitution)
//! 9. directive compilation and binary output construction

pub mod classify;
pub mod codegen;
pub mod directive;
pub mod error;
pub mod line;
pub mod mode;
pub mod output;
pub mod scanner;
pub mod syntax;

#[cfg(test)]
mod tests;

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

pub use error::{AsmError, AsmErrorKind};
pub use output::{BinaryProgram, BEGIN_MARKER, END_MARKER};

use line::AsmLine;

/// The assembler. One instance drives one compilation; the branch table
/// it builds is readable afterwards for introspection.
#[derive(Debug, Default)]
pub struct Assembler {
    branch_table: BTreeMap<u32, String>,
}

impl Assembler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Branch table of the last compilation: line number to label name.
    pub fn branch_table(&self) -> &BTreeMap<u32, String> {
        &self.branch_table
    }

    /// Assemble a program given as one string per source line.
    pub fn assemble(&mut self, source: &[String]) -> Result<BinaryProgram, AsmError> {
        let (main_lines, directive_lines) = scanner::extract_directives(source);
        let end_line = scanner::check_begin_end(&main_lines)?;

        let scanned = scanner::scan_lines(&main_lines);
        syntax::check_tokens(&scanned)?;

        self.branch_table = scanner::collect_branches(&scanned);

        let lines = classify::classify_lines(&scanned);
        let mut lines = classify::strip_keyword_lines(lines);
        classify::check_lines_after_end(&lines, end_line)?;

        self.check_operand_labels_exist(&lines)?;
        self.check_duplicate_labels()?;

        for line in &mut lines {
            let mode = mode::resolve(line.mnemonic(), line.operand(), line.line_number())?;
            line.set_mode(mode);
        }

        self.reject_label_operands(&lines)?;

        let labels = codegen::branch_addresses(&self.branch_table);
        for line in &mut lines {
            codegen::emit(line, &labels)?;
        }

        let directive_pairs = directive::process(&directive_lines)?;
        BinaryProgram::from_lines(&lines, directive_pairs)
    }

    /// Every label-shaped operand must match a branch-table entry; an
    /// instruction cannot branch to a label nobody declared.
    fn check_operand_labels_exist(&self, lines: &[AsmLine]) -> Result<(), AsmError> {
        for line in lines {
            let cleaned: String = line
                .operand()
                .chars()
                .filter(|c| !"()XY,".contains(*c))
                .collect();

            let label_shaped = !cleaned.is_empty()
                && cleaned.chars().all(|c| c.is_ascii_alphanumeric())
                && cleaned != "A";
            if !label_shaped {
                continue;
            }

            let known = self.branch_table.values().any(|label| *label == cleaned);
            if !known {
                return Err(AsmError::with_line(
                    AsmErrorKind::Branch,
                    format!("operand label '{cleaned}' has no matching branch label"),
                    line.line_number(),
                ));
            }
        }
        Ok(())
    }

    /// Each branch label may be declared once.
    fn check_duplicate_labels(&self) -> Result<(), AsmError> {
        let labels: Vec<&String> = self.branch_table.values().collect();
        for (i, label) in labels.iter().enumerate() {
            if labels[i + 1..].contains(label) {
                return Err(AsmError::new(
                    AsmErrorKind::Branch,
                    format!("branch label '{label}' is declared more than once"),
                ));
            }
        }
        Ok(())
    }

    /// Label-valued operands are not supported for execution; the branch
    /// table exists and is matched against, but an operand that names a
    /// known label is rejected here.
    fn reject_label_operands(&self, lines: &[AsmLine]) -> Result<(), AsmError> {
        for line in lines {
            for label in self.branch_table.values() {
                if line.operand().contains(label.as_str()) {
                    return Err(AsmError::with_line(
                        AsmErrorKind::Branch,
                        format!(
                            "branch labels are not supported as operands; \
                             remove label '{label}' from the operand"
                        ),
                        line.line_number(),
                    ));
                }
            }
        }
        Ok(())
    }
}

/// Assemble a program held in one text blob.
pub fn assemble_text(source: &str) -> Result<BinaryProgram, AsmError> {
    let lines: Vec<String> = source.lines().map(|l| l.to_string()).collect();
    Assembler::new().assemble(&lines)
}

/// Read and assemble a source file.
pub fn assemble_file(path: &Path) -> Result<BinaryProgram, AsmError> {
    let text = fs::read_to_string(path)?;
    assemble_text(&text)
}
