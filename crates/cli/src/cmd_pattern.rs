// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern definition management commands.

use termcolor::StandardStream;

use crate::cli::{
    OutputFormat, PatternAddArgs, PatternCommand, PatternEditArgs, PatternListArgs, PatternRefArgs,
};
use crate::config::Config;
use crate::error::{Error, ExitCode, Result};
use crate::model::PatternDef;
use crate::output::text::TextFormatter;
use crate::output::{FormatOptions, json};
use crate::pattern::{CompiledMatcher, extract_all};
use crate::store::Store;

/// Resolve a pattern reference to an index into `defs`.
///
/// Accepts a full id, a unique id prefix, or an exact name. An exact id
/// always wins; a reference matching several definitions is an error
/// rather than a guess.
pub fn resolve(defs: &[PatternDef], reference: &str) -> Result<usize> {
    if let Some(i) = defs.iter().position(|d| d.id == reference) {
        return Ok(i);
    }

    let candidates: Vec<usize> = defs
        .iter()
        .enumerate()
        .filter(|(_, d)| d.id.starts_with(reference) || d.name == reference)
        .map(|(i, _)| i)
        .collect();

    match candidates.as_slice() {
        [] => Err(Error::PatternNotFound(reference.to_string())),
        [i] => Ok(*i),
        many => Err(Error::PatternAmbiguous(reference.to_string(), many.len())),
    }
}

/// Compile-check a definition, mapping failure to a user-facing error.
fn check_compiles(pattern: &str, flags: &str) -> Result<()> {
    CompiledMatcher::compile(pattern, flags)
        .map(|_| ())
        .map_err(|e| Error::InvalidPattern(e.to_string()))
}

pub fn run(store: &Store, config: &Config, command: &PatternCommand) -> Result<ExitCode> {
    match command {
        PatternCommand::Add(args) => add(store, config, args),
        PatternCommand::Edit(args) => edit(store, args),
        PatternCommand::Rm(args) => rm(store, args),
        PatternCommand::Approve(args) => approve(store, args),
        PatternCommand::List(args) => list(store, config, args),
    }
}

fn add(store: &Store, config: &Config, args: &PatternAddArgs) -> Result<ExitCode> {
    let name = args.name.trim();
    if name.is_empty() {
        return Err(Error::Argument("name is required".into()));
    }

    let flags = args
        .flags
        .clone()
        .unwrap_or_else(|| config.pattern.default_flags.clone());
    check_compiles(&args.pattern, &flags)?;

    let def = PatternDef::new(name, args.pattern.clone(), flags);
    println!("added '{}' ({})", def.name, def.id);

    let mut defs = store.load_patterns();
    defs.push(def);
    store.save_patterns(&defs);

    Ok(ExitCode::Success)
}

fn edit(store: &Store, args: &PatternEditArgs) -> Result<ExitCode> {
    let mut defs = store.load_patterns();
    let i = resolve(&defs, &args.id)?;

    let pattern = args.pattern.as_deref().unwrap_or(&defs[i].pattern);
    let flags = args.flags.as_deref().unwrap_or(&defs[i].flags);
    check_compiles(pattern, flags)?;

    if let Some(name) = &args.name {
        let name = name.trim();
        if name.is_empty() {
            return Err(Error::Argument("name is required".into()));
        }
        defs[i].name = name.to_string();
    }
    if let Some(pattern) = &args.pattern {
        defs[i].pattern = pattern.clone();
    }
    if let Some(flags) = &args.flags {
        defs[i].flags = flags.clone();
    }
    defs[i].touch();

    println!("updated '{}' ({})", defs[i].name, defs[i].id);
    store.save_patterns(&defs);

    Ok(ExitCode::Success)
}

fn rm(store: &Store, args: &PatternRefArgs) -> Result<ExitCode> {
    let mut defs = store.load_patterns();
    let i = resolve(&defs, &args.id)?;

    let removed = defs.remove(i);
    println!("removed '{}' ({})", removed.name, removed.id);
    store.save_patterns(&defs);

    Ok(ExitCode::Success)
}

fn approve(store: &Store, args: &PatternRefArgs) -> Result<ExitCode> {
    let mut defs = store.load_patterns();
    let i = resolve(&defs, &args.id)?;

    defs[i].approved = true;
    defs[i].touch();

    println!("approved '{}' ({})", defs[i].name, defs[i].id);
    store.save_patterns(&defs);

    Ok(ExitCode::Success)
}

fn list(store: &Store, config: &Config, args: &PatternListArgs) -> Result<ExitCode> {
    let defs = store.load_patterns();
    let document = store.load_document();
    let results = extract_all(&document, &defs);

    match args.output {
        OutputFormat::Text => {
            let stdout = StandardStream::stdout(config.output.color.to_color_choice());
            let mut fmt = TextFormatter::new(stdout, FormatOptions::with_limit(config.output.limit));
            fmt.write_patterns(&defs, &results).map_err(io_error)?;
        }
        OutputFormat::Json => {
            json::write_patterns(&mut std::io::stdout(), &defs, &results).map_err(io_error)?;
        }
    }

    Ok(ExitCode::Success)
}

fn io_error(e: std::io::Error) -> Error {
    Error::Io {
        path: "<stdout>".into(),
        source: e,
    }
}

#[cfg(test)]
#[path = "cmd_pattern_tests.rs"]
mod tests;
