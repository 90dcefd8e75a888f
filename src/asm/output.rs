// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Binary program construction and file emission.
//!
//! The compiled program is an ordered sequence of (opcode, operand) byte
//! pairs bracketed by two fixed marker pairs; the machine starts after
//! the first and halts on the second. Directive pairs are kept apart from
//! the instruction stream and appended at emission time, each token
//! prefixed with `*` so the loader can route them into memory by address.
//!
//! The text format is whitespace-separated ASCII strings of eight 0/1
//! characters: one pair per line by default, or one flat line.

use std::fs;
use std::io;
use std::path::Path;

use crate::asm::directive::DirectivePair;
use crate::asm::error::{AsmError, AsmErrorKind};
use crate::asm::line::AsmLine;

/// Byte value of the BEGIN marker; the stream opens with a pair of them.
pub const BEGIN_MARKER: u8 = 0xEF;

/// Byte value of the END marker; the stream closes with a pair of them.
pub const END_MARKER: u8 = 0xFF;

/// The assembled program, ready for emission or direct loading.
#[derive(Debug, Clone)]
pub struct BinaryProgram {
    pairs: Vec<(u8, u8)>,
    directive_pairs: Vec<DirectivePair>,
}

impl BinaryProgram {
    /// Collect the hex fields of the generated lines into byte pairs,
    /// bracketed by the marker pairs.
    pub fn from_lines(
        lines: &[AsmLine],
        directive_pairs: Vec<DirectivePair>,
    ) -> Result<Self, AsmError> {
        let mut pairs = vec![(BEGIN_MARKER, BEGIN_MARKER)];
        for line in lines {
            let opcode = parse_hex_field(line.opcode_hex(), line)?;
            let operand = parse_hex_field(line.operand_hex(), line)?;
            pairs.push((opcode, operand));
        }
        pairs.push((END_MARKER, END_MARKER));
        Ok(Self {
            pairs,
            directive_pairs,
        })
    }

    /// Instruction pairs including the bracketing marker pairs.
    pub fn pairs(&self) -> &[(u8, u8)] {
        &self.pairs
    }

    pub fn directive_pairs(&self) -> &[DirectivePair] {
        &self.directive_pairs
    }

    /// The instruction stream flattened to bytes, markers included, in
    /// load order.
    pub fn program_bytes(&self) -> Vec<u8> {
        self.pairs
            .iter()
            .flat_map(|(opcode, operand)| [*opcode, *operand])
            .collect()
    }

    fn render_lines(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.pairs.len() + self.directive_pairs.len());
        for (opcode, operand) in &self.pairs {
            out.push(format!("{opcode:08b} {operand:08b}"));
        }
        for pair in &self.directive_pairs {
            out.push(format!("*{:08b} *{:08b}", pair.address, pair.value));
        }
        out
    }

    /// Render the binary text: one pair per line, or one flat line.
    pub fn to_text(&self, flat: bool) -> String {
        let lines = self.render_lines();
        if flat {
            let mut text = lines.join(" ");
            text.push('\n');
            text
        } else {
            let mut text = lines.join("\n");
            text.push('\n');
            text
        }
    }

    pub fn write_file(&self, path: &Path, flat: bool) -> io::Result<()> {
        fs::write(path, self.to_text(flat))
    }
}

fn parse_hex_field(field: &str, line: &AsmLine) -> Result<u8, AsmError> {
    u8::from_str_radix(field, 16).map_err(|_| {
        AsmError::with_line(
            AsmErrorKind::CodeGen,
            format!("line '{}' produced no hex output", line.display_text()),
            line.line_number(),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::AddressMode;

    fn generated_line(opcode_hex: &str, operand_hex: &str) -> AsmLine {
        let mut line = AsmLine::new(2);
        line.set_mnemonic("LDA");
        line.set_operand("#$10");
        line.set_mode(AddressMode::Immediate);
        line.set_hex(opcode_hex.to_string(), operand_hex.to_string());
        line
    }

    #[test]
    fn stream_is_bracketed_by_marker_pairs() {
        let program = BinaryProgram::from_lines(&[generated_line("A9", "10")], vec![]).unwrap();
        assert_eq!(
            program.pairs(),
            &[(0xEF, 0xEF), (0xA9, 0x10), (0xFF, 0xFF)]
        );
    }

    #[test]
    fn text_format_is_eight_bit_binary() {
        let program = BinaryProgram::from_lines(&[generated_line("A9", "10")], vec![]).unwrap();
        let text = program.to_text(false);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "11101111 11101111");
        assert_eq!(lines[1], "10101001 00010000");
        assert_eq!(lines[2], "11111111 11111111");
    }

    #[test]
    fn directive_pairs_follow_the_instruction_stream_with_markers() {
        let program = BinaryProgram::from_lines(
            &[],
            vec![DirectivePair {
                address: 0x0A,
                value: 0x1F,
            }],
        )
        .unwrap();
        let text = program.to_text(false);
        let last = text.lines().last().unwrap();
        assert_eq!(last, "*00001010 *00011111");
    }

    #[test]
    fn flat_rendering_keeps_one_line() {
        let program = BinaryProgram::from_lines(&[generated_line("A9", "10")], vec![]).unwrap();
        let text = program.to_text(true);
        assert_eq!(text.lines().count(), 1);
    }
}
