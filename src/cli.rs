// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Command-line interface: assemble a source file, or load and run a
//! compiled binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use thiserror::Error;

use crate::asm::{self, AsmError};
use crate::machine::{loader, LoadError, Machine, RunOutcome};

pub const VERSION: &str = "1.0";

/// Default step budget for an automatic run. A program that never
/// reaches the END marker must not spin forever; the cap sits in this
/// driver, not in the engine.
pub const DEFAULT_STEP_BUDGET: u32 = 256;

const LONG_ABOUT: &str = "Teaching assembler and machine simulator for a \
6502-inspired 8-bit architecture.

The machine offers 256 bytes of memory, a 64-entry stack and an 8-bit
program counter; every assembled line occupies exactly two bytes. Use
`asm` to compile a source file into the binary text format, and `run` to
load such a file and execute it step by step.";

#[derive(Parser, Debug)]
#[command(name = "forge65", version = VERSION, about = "6502-lite assembler and simulator", long_about = LONG_ABOUT)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Assemble a source file into binary text.
    Asm {
        #[arg(short = 'i', long = "infile", value_name = "FILE")]
        infile: PathBuf,
        #[arg(
            short = 'o',
            long = "outfile",
            value_name = "FILE",
            default_value = "binary_output.txt",
            long_help = "Output file for the binary text. Defaults to binary_output.txt \
                         in the working directory."
        )]
        outfile: PathBuf,
        #[arg(
            long = "flat",
            long_help = "Write the whole binary stream on a single line instead of one \
                         byte pair per line."
        )]
        flat: bool,
    },
    /// Load a compiled binary and run it.
    Run {
        #[arg(
            short = 'i',
            long = "infile",
            value_name = "FILE",
            default_value = "binary_output.txt"
        )]
        infile: PathBuf,
        #[arg(
            short = 's',
            long = "steps",
            value_name = "N",
            default_value_t = DEFAULT_STEP_BUDGET,
            long_help = "Maximum number of automatic steps before the run is cut off. \
                         Guards against programs that never reach the END marker."
        )]
        steps: u32,
    },
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Asm(#[from] AsmError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("cannot write binary file: {0}")]
    Io(#[from] std::io::Error),
}

/// Parse the command line and run the selected command.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::parse();
    match cli.command {
        Command::Asm {
            infile,
            outfile,
            flat,
        } => run_asm(&infile, &outfile, flat),
        Command::Run { infile, steps } => run_machine(&infile, steps),
    }
}

fn run_asm(
    infile: &std::path::Path,
    outfile: &std::path::Path,
    flat: bool,
) -> Result<(), CliError> {
    let program = asm::assemble_file(infile)?;
    program.write_file(outfile, flat)?;
    println!(
        "assembled {} into {} ({} instruction pairs, {} directive pairs)",
        infile.display(),
        outfile.display(),
        program.pairs().len(),
        program.directive_pairs().len(),
    );
    Ok(())
}

fn run_machine(infile: &std::path::Path, steps: u32) -> Result<(), CliError> {
    let image = loader::read_image(infile)?;
    let mut machine = Machine::new();
    machine.load(&image)?;

    match machine.run(steps) {
        RunOutcome::Halted(steps) => {
            println!("END marker reached after {steps} steps");
        }
        RunOutcome::BudgetExhausted(steps) => {
            println!("run stopped at the limit of {steps} steps");
        }
    }

    println!("\nregisters:\n{}", machine.register_summary());
    println!("\nflags: {}", machine.flag_summary());

    let memory = machine.trimmed_memory_view();
    if memory.is_empty() {
        println!("\nmemory: all cells zero");
    } else {
        println!("\nmemory (non-zero cells):\n{memory}");
    }

    Ok(())
}
