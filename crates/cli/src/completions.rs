// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shell completion generation for hilite.
//!
//! Writes the completion script to stdout; users wire it into their shell
//! however they prefer (`hilite completions bash >> ~/.bashrc` and
//! friends).

use clap::CommandFactory;
use clap_complete::generate;

use crate::cli::{Cli, CompletionsArgs};
use crate::error::{ExitCode, Result};

pub fn run(args: &CompletionsArgs) -> Result<ExitCode> {
    let mut cmd = Cli::command();
    generate(args.shell, &mut cmd, "hilite", &mut std::io::stdout());
    Ok(ExitCode::Success)
}

#[cfg(test)]
#[path = "completions_tests.rs"]
mod tests;
