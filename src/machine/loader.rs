// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

//! Binary text loading.
//!
//! The input is an ordered sequence of whitespace-separated tokens of
//! eight 0/1 characters. Tokens prefixed with `*` are directive pairs -
//! alternating address and value - destined for specific memory cells;
//! everything else is the program stream, loaded sequentially from
//! address 0.

use std::fs;
use std::path::Path;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("token '{0}' is not an 8-bit binary pattern")]
    MalformedToken(String),
    #[error("directive stream ends with an address token and no value")]
    DanglingPatch,
    #[error("program needs {0} bytes and does not fit into 256 bytes of memory")]
    TooLarge(usize),
    #[error("cannot read binary file: {0}")]
    Io(#[from] std::io::Error),
}

/// A parsed binary image: the sequential program stream and the
/// (address, value) patch pairs.
#[derive(Debug, Clone, Default)]
pub struct LoadedImage {
    pub program: Vec<u8>,
    pub patches: Vec<(u8, u8)>,
}

impl LoadedImage {
    /// Total footprint in bytes, patch pairs included.
    pub fn size(&self) -> usize {
        self.program.len() + self.patches.len() * 2
    }
}

/// Parse binary text into an image.
pub fn parse_image(text: &str) -> Result<LoadedImage, LoadError> {
    let mut program = Vec::new();
    let mut patch_values = Vec::new();

    for token in text.split_whitespace() {
        if token.contains('*') {
            let cleaned: String = token.chars().filter(|c| *c != '*').collect();
            patch_values.push(parse_byte(&cleaned)?);
        } else {
            program.push(parse_byte(token)?);
        }
    }

    if patch_values.len() % 2 != 0 {
        return Err(LoadError::DanglingPatch);
    }
    let patches = patch_values
        .chunks_exact(2)
        .map(|pair| (pair[0], pair[1]))
        .collect();

    Ok(LoadedImage { program, patches })
}

/// Read and parse a binary text file.
pub fn read_image(path: &Path) -> Result<LoadedImage, LoadError> {
    let text = fs::read_to_string(path)?;
    parse_image(&text)
}

fn parse_byte(token: &str) -> Result<u8, LoadError> {
    if token.len() != 8 || !token.chars().all(|c| c == '0' || c == '1') {
        return Err(LoadError::MalformedToken(token.to_string()));
    }
    u8::from_str_radix(token, 2).map_err(|_| LoadError::MalformedToken(token.to_string()))
}
