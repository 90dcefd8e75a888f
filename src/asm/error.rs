// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Error types and reporting for the assembler.
//!
//! Every failure is fatal to the current compilation: the pipeline stops
//! at the first error and produces no binary output.

use std::fmt;

/// Categories of assembler errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AsmErrorKind {
    /// Missing BEGIN/END, or statements after the END line.
    Structure,
    /// Token-level syntax violation.
    Syntax,
    /// Duplicate or unresolved branch label, or an unsupported label operand.
    Branch,
    /// Operand mode unresolvable, or not legal for the instruction.
    AddressMode,
    /// dc.b / dc.s / dc.v token-count, format or range violation.
    Directive,
    /// Hex emission failure (unknown mnemonic/mode pairing).
    CodeGen,
    /// File read/write failure.
    Io,
}

impl AsmErrorKind {
    fn label(&self) -> &'static str {
        match self {
            AsmErrorKind::Structure => "structure",
            AsmErrorKind::Syntax => "syntax",
            AsmErrorKind::Branch => "branch",
            AsmErrorKind::AddressMode => "addressing mode",
            AsmErrorKind::Directive => "directive",
            AsmErrorKind::CodeGen => "code generation",
            AsmErrorKind::Io => "io",
        }
    }
}

/// An assembler error with a kind, a message and an optional source line.
#[derive(Debug, Clone)]
pub struct AsmError {
    kind: AsmErrorKind,
    message: String,
    line: Option<u32>,
}

impl AsmError {
    pub fn new(kind: AsmErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            line: None,
        }
    }

    pub fn with_line(kind: AsmErrorKind, message: impl Into<String>, line: u32) -> Self {
        Self {
            kind,
            message: message.into(),
            line: Some(line),
        }
    }

    pub fn kind(&self) -> AsmErrorKind {
        self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn line(&self) -> Option<u32> {
        self.line
    }
}

impl fmt::Display for AsmError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(
                f,
                "line {line}: {} error - {}",
                self.kind.label(),
                self.message
            ),
            None => write!(f, "{} error - {}", self.kind.label(), self.message),
        }
    }
}

impl std::error::Error for AsmError {}

impl From<std::io::Error> for AsmError {
    fn from(err: std::io::Error) -> Self {
        AsmError::new(AsmErrorKind::Io, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_line_and_kind() {
        let err = AsmError::with_line(AsmErrorKind::Syntax, "bad token", 12);
        assert_eq!(err.to_string(), "line 12: syntax error - bad token");
    }

    #[test]
    fn display_without_line() {
        let err = AsmError::new(AsmErrorKind::Structure, "no END keyword");
        assert_eq!(err.to_string(), "structure error - no END keyword");
    }
}
