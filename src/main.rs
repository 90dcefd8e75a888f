// SPDX-License-Identifier: GPL-3.0-or-later
// Copyright (C) 2026 Erik van der Tier

// CLI entrypoint for forge65.

fn main() {
    env_logger::init();
    if let Err(err) = forge65::cli::run() {
        eprintln!("{err}");
        eprintln!("aborting.");
        std::process::exit(1);
    }
}
