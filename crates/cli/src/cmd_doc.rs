// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Document management commands.

use crate::cli::{DocCommand, DocSampleArgs, DocSetArgs};
use crate::config::Config;
use crate::error::{ExitCode, Result};
use crate::reader::DocumentReader;
use crate::sample;
use crate::store::Store;

pub fn run(store: &Store, config: &Config, command: &DocCommand) -> Result<ExitCode> {
    match command {
        DocCommand::Set(args) => set(store, config, args),
        DocCommand::Show => show(store),
        DocCommand::Sample(args) => generate(store, config, args),
    }
}

fn set(store: &Store, config: &Config, args: &DocSetArgs) -> Result<ExitCode> {
    let reader = DocumentReader::with_max_size(config.document.max_size);

    let document = match (&args.file, &args.text) {
        (Some(path), _) => reader.read(path)?,
        (None, Some(text)) => text.clone(),
        (None, None) => reader.read_stdin()?,
    };

    println!("document set ({} bytes)", document.len());
    store.save_document(&document);

    Ok(ExitCode::Success)
}

fn show(store: &Store) -> Result<ExitCode> {
    print!("{}", store.load_document());
    Ok(ExitCode::Success)
}

fn generate(store: &Store, config: &Config, args: &DocSampleArgs) -> Result<ExitCode> {
    let paragraphs = args.paragraphs.unwrap_or(config.document.sample_paragraphs);
    let document = sample::generate(paragraphs, args.seed);

    println!(
        "generated {} paragraphs ({} bytes)",
        paragraphs,
        document.len()
    );
    store.save_document(&document);

    Ok(ExitCode::Success)
}

#[cfg(test)]
#[path = "cmd_doc_tests.rs"]
mod tests;
