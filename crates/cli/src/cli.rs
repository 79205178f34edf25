// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::model::Mode;

/// Define named regex patterns, extract their matches from a document, and highlight them
#[derive(Parser)]
#[command(name = "hilite")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "HILITE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Store directory for patterns, document, and mode
    #[arg(long = "store-dir", global = true, env = "HILITE_STORE", value_name = "DIR")]
    pub store_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Manage pattern definitions
    #[command(subcommand)]
    Pattern(PatternCommand),
    /// Check whether a pattern+flags pair compiles
    Validate(ValidateArgs),
    /// Run patterns against the document and report their matches
    Extract(ExtractArgs),
    /// Render the document with one pattern's matches highlighted
    Highlight(HighlightArgs),
    /// Manage the document text
    #[command(subcommand)]
    Doc(DocCommand),
    /// Show or set the workflow mode
    Mode(ModeArgs),
    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[derive(Subcommand)]
pub enum PatternCommand {
    /// Add a new pattern definition
    Add(PatternAddArgs),
    /// Edit an existing pattern definition
    Edit(PatternEditArgs),
    /// Remove a pattern definition
    Rm(PatternRefArgs),
    /// Approve a pattern definition
    Approve(PatternRefArgs),
    /// List pattern definitions with live match counts
    List(PatternListArgs),
}

#[derive(clap::Args)]
pub struct PatternAddArgs {
    /// Display name, e.g. "Email Addresses"
    pub name: String,

    /// Pattern source, e.g. "\b\w+@\w+\.\w+\b"
    pub pattern: String,

    /// Modifier flags (default from config, normally "g")
    #[arg(long, value_name = "FLAGS")]
    pub flags: Option<String>,
}

#[derive(clap::Args)]
pub struct PatternEditArgs {
    /// Pattern to edit: id, unique id prefix, or exact name
    pub id: String,

    /// New display name
    #[arg(long)]
    pub name: Option<String>,

    /// New pattern source
    #[arg(long)]
    pub pattern: Option<String>,

    /// New modifier flags
    #[arg(long, value_name = "FLAGS")]
    pub flags: Option<String>,
}

#[derive(clap::Args)]
pub struct PatternRefArgs {
    /// Pattern to act on: id, unique id prefix, or exact name
    pub id: String,
}

#[derive(clap::Args)]
pub struct PatternListArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,
}

#[derive(clap::Args)]
pub struct ValidateArgs {
    /// Pattern source to check
    pub pattern: String,

    /// Modifier flags to check with
    #[arg(long, default_value = "", value_name = "FLAGS")]
    pub flags: String,
}

#[derive(clap::Args)]
pub struct ExtractArgs {
    /// Extract for one pattern only: id, unique id prefix, or exact name
    pub id: Option<String>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Maximum matches to preview per pattern (default from config)
    #[arg(long, value_name = "N")]
    pub limit: Option<usize>,

    /// Show all matches (no limit)
    #[arg(long)]
    pub no_limit: bool,
}

#[derive(clap::Args)]
pub struct HighlightArgs {
    /// Pattern to highlight: id, unique id prefix, or exact name
    pub id: String,

    /// Output format (json emits the segment list)
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum DocCommand {
    /// Set the document from a file, --text, or stdin
    Set(DocSetArgs),
    /// Print the document text
    Show,
    /// Replace the document with generated sample text
    Sample(DocSampleArgs),
}

#[derive(clap::Args)]
pub struct DocSetArgs {
    /// File to read the document from
    pub file: Option<PathBuf>,

    /// Document text given inline
    #[arg(long, conflicts_with = "file")]
    pub text: Option<String>,
}

#[derive(clap::Args)]
pub struct DocSampleArgs {
    /// Paragraph count (default from config, normally 3)
    #[arg(long, value_name = "N")]
    pub paragraphs: Option<usize>,

    /// Seed for reproducible text
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
}

#[derive(clap::Args)]
pub struct ModeArgs {
    /// Mode to switch to; omit to print the current mode
    #[arg(value_enum)]
    pub mode: Option<Mode>,
}

#[derive(clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: clap_complete::Shell,
}

/// Output format for list/extract/highlight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    Text,
    /// Machine-readable JSON
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
