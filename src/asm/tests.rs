// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Whole-pipeline assembler tests.

use super::{assemble_text, AsmError, AsmErrorKind, Assembler, BinaryProgram};

fn assemble(src: &[&str]) -> Result<BinaryProgram, AsmError> {
    let lines: Vec<String> = src.iter().map(|s| s.to_string()).collect();
    Assembler::new().assemble(&lines)
}

fn assemble_ok(src: &[&str]) -> BinaryProgram {
    match assemble(src) {
        Ok(program) => program,
        Err(err) => panic!("assembly failed: {err}"),
    }
}

#[test]
fn minimal_program_is_bracketed_by_markers() {
    let program = assemble_ok(&["BEGIN", "END"]);
    assert_eq!(program.pairs(), &[(0xEF, 0xEF), (0xFF, 0xFF)]);
}

#[test]
fn immediate_instructions_assemble_to_their_pairs() {
    let program = assemble_ok(&["BEGIN", "LDA #$7F", "ADC #$01", "END"]);
    assert_eq!(
        program.pairs(),
        &[(0xEF, 0xEF), (0xA9, 0x7F), (0x69, 0x01), (0xFF, 0xFF)]
    );
}

#[test]
fn every_addressing_mode_assembles() {
    let program = assemble_ok(&[
        "BEGIN",
        "NOP",
        "ASL A",
        "LDA #$10",
        "LDA $20",
        "STA $20,X",
        "LDA $20,Y",
        "JMP ($30)",
        "EOR ($15,X)",
        "ORA ($15),Y",
        "BNE *-2",
        "END",
    ]);
    let pairs = program.pairs();
    assert_eq!(pairs[1], (0xEA, 0x00));
    assert_eq!(pairs[2], (0x0A, 0x00));
    assert_eq!(pairs[3], (0xA9, 0x10));
    assert_eq!(pairs[4], (0xAD, 0x20));
    assert_eq!(pairs[5], (0x9D, 0x20));
    assert_eq!(pairs[6], (0xB9, 0x20));
    assert_eq!(pairs[7], (0x6C, 0x30));
    assert_eq!(pairs[8], (0x41, 0x15));
    assert_eq!(pairs[9], (0x11, 0x15));
    assert_eq!(pairs[10], (0xD0, 0xFE));
}

#[test]
fn comments_are_stripped() {
    let program = assemble_ok(&["BEGIN ;program start", "LDA #$10 ;load ten", "END"]);
    assert_eq!(program.pairs().len(), 3);
    assert_eq!(program.pairs()[1], (0xA9, 0x10));
}

#[test]
fn lowercase_source_assembles() {
    let program = assemble_ok(&["begin", "lda #$10", "end"]);
    assert_eq!(program.pairs()[1], (0xA9, 0x10));
}

#[test]
fn missing_begin_or_end_is_fatal() {
    let err = assemble(&["LDA #$10", "END"]).unwrap_err();
    assert_eq!(err.kind(), AsmErrorKind::Structure);

    let err = assemble(&["BEGIN", "LDA #$10"]).unwrap_err();
    assert_eq!(err.kind(), AsmErrorKind::Structure);
}

#[test]
fn statements_after_end_are_fatal() {
    let err = assemble(&["BEGIN", "LDA #$10", "END", "LDA #$20"]).unwrap_err();
    assert_eq!(err.kind(), AsmErrorKind::Structure);
    assert!(err.message().contains("after the END keyword"));
}

#[test]
fn addressing_mode_outside_legal_set_is_rejected() {
    // STA has no immediate form.
    let err = assemble(&["BEGIN", "STA #$10", "END"]).unwrap_err();
    assert_eq!(err.kind(), AsmErrorKind::AddressMode);

    // LDX indexes by Y, never by X.
    let err = assemble(&["BEGIN", "LDX $10,X", "END"]).unwrap_err();
    assert_eq!(err.kind(), AsmErrorKind::AddressMode);
}

#[test]
fn syntax_violation_aborts_before_anything_else() {
    let err = assemble(&["BEGIN", "LDA #$1?", "END"]).unwrap_err();
    assert_eq!(err.kind(), AsmErrorKind::Syntax);
}

#[test]
fn line_without_instruction_is_rejected() {
    let err = assemble(&["BEGIN", "", "END"]).unwrap_err();
    assert_eq!(err.kind(), AsmErrorKind::AddressMode);
}

#[test]
fn branch_table_records_declarations() {
    let mut assembler = Assembler::new();
    let lines: Vec<String> = ["BEGIN", "_loop ADC #$01", "BNE *-2", "END"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assembler.assemble(&lines).unwrap();
    assert_eq!(assembler.branch_table().get(&2), Some(&"LOOP".to_string()));
}

#[test]
fn operand_label_without_declaration_is_fatal() {
    let err = assemble(&["BEGIN", "BNE LOOP", "END"]).unwrap_err();
    assert_eq!(err.kind(), AsmErrorKind::Branch);
    assert!(err.message().contains("no matching branch label"));
}

#[test]
fn duplicate_label_declarations_are_fatal() {
    let err = assemble(&["BEGIN", "_loop ADC #$01", "_loop ADC #$02", "END"]).unwrap_err();
    assert_eq!(err.kind(), AsmErrorKind::Branch);
    assert!(err.message().contains("more than once"));
}

#[test]
fn label_operands_are_not_supported() {
    // Mode-wise JMP LOOP is fine (a label resolves as absolute), so the
    // rejection is what stops it.
    let err = assemble(&["BEGIN", "_loop ADC #$01", "JMP LOOP", "END"]).unwrap_err();
    assert_eq!(err.kind(), AsmErrorKind::Branch);
    assert!(err.message().contains("not supported as operands"));
}

#[test]
fn label_operand_on_a_branch_fails_the_mode_check() {
    // A bare label infers as absolute, which no branch instruction
    // accepts; the mode check fires before the label rejection.
    let err = assemble(&["BEGIN", "_loop ADC #$01", "BNE LOOP", "END"]).unwrap_err();
    assert_eq!(err.kind(), AsmErrorKind::AddressMode);
}

#[test]
fn directive_pairs_ride_behind_the_instruction_stream() {
    let program = assemble_ok(&["BEGIN", "dc.b $0A $1F", "LDA $0A", "END"]);
    assert_eq!(program.pairs().len(), 3);
    assert_eq!(program.directive_pairs().len(), 1);
    assert_eq!(program.directive_pairs()[0].address, 0x0A);
    assert_eq!(program.directive_pairs()[0].value, 0x1F);

    let text = program.to_text(false);
    assert!(text.lines().last().unwrap().starts_with('*'));
}

#[test]
fn directive_lines_do_not_shift_instruction_numbering() {
    // The directive line leaves the stream before pass 1, so the LDA
    // still sits on the line after BEGIN.
    let with_directive = assemble_ok(&["BEGIN", "dc.b $0A $1F", "LDA #$10", "END"]);
    let without = assemble_ok(&["BEGIN", "LDA #$10", "END"]);
    assert_eq!(with_directive.pairs(), without.pairs());
}

#[test]
fn bad_directive_is_fatal() {
    let err = assemble(&["BEGIN", "dc.b $0A", "END"]).unwrap_err();
    assert_eq!(err.kind(), AsmErrorKind::Directive);
}

#[test]
fn relative_offsets_encode_signed() {
    let program = assemble_ok(&["BEGIN", "BPL *+5", "BNE *-2", "END"]);
    assert_eq!(program.pairs()[1], (0x10, 0x05));
    assert_eq!(program.pairs()[2], (0xD0, 0xFE));
}

#[test]
fn compilation_is_idempotent() {
    let src = "BEGIN\nLDA #$7F\nADC #$01\ndc.b $0A $1F\nEND\n";
    let first = assemble_text(src).unwrap().to_text(false);
    let second = assemble_text(src).unwrap().to_text(false);
    assert_eq!(first, second);
}

#[test]
fn binary_text_round_trips_through_the_loader() {
    let program = assemble_ok(&["BEGIN", "LDA #$7F", "dc.b $0A $1F", "END"]);
    let image = crate::machine::loader::parse_image(&program.to_text(false)).unwrap();
    assert_eq!(image.program, program.program_bytes());
    assert_eq!(image.patches, vec![(0x0A, 0x1F)]);
}

#[test]
fn flat_output_round_trips_too() {
    let program = assemble_ok(&["BEGIN", "LDA #$7F", "dc.b $0A $1F", "END"]);
    let image = crate::machine::loader::parse_image(&program.to_text(true)).unwrap();
    assert_eq!(image.program, program.program_bytes());
    assert_eq!(image.patches.len(), 1);
}

#[test]
fn errors_carry_the_source_line() {
    let err = assemble(&["BEGIN", "LDA #$10", "STA #$10", "END"]).unwrap_err();
    assert_eq!(err.line(), Some(3));
}
