// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Workflow mode command.

use crate::cli::ModeArgs;
use crate::error::{ExitCode, Result};
use crate::store::Store;

pub fn run(store: &Store, args: &ModeArgs) -> Result<ExitCode> {
    match args.mode {
        Some(mode) => {
            store.save_mode(mode);
            println!("mode set to {}", mode);
        }
        None => println!("{}", store.load_mode()),
    }
    Ok(ExitCode::Success)
}

#[cfg(test)]
#[path = "cmd_mode_tests.rs"]
mod tests;
