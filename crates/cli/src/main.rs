// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Hilite CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use hilite::cli::{Cli, Command};
use hilite::config::Config;
use hilite::error::ExitCode;
use hilite::pattern::CompiledMatcher;
use hilite::store::Store;

mod cmd_extract;
mod cmd_highlight;

fn init_logging() {
    let filter = EnvFilter::try_from_env("HILITE_LOG").unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("hilite: {}", e);
            match e.downcast_ref::<hilite::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

/// Open the store and config named by global flags.
fn context(cli: &Cli) -> anyhow::Result<(Store, Config)> {
    let config = hilite::config::discover(cli.config.as_deref())?;
    let dir = hilite::store::resolve_dir(cli.store_dir.as_deref(), config.store.dir.as_deref());
    Ok((Store::open(dir), config))
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    match &cli.command {
        None => {
            // Show help for bare invocation
            Cli::command().print_help()?;
            println!();
            Ok(ExitCode::Success)
        }
        Some(Command::Pattern(command)) => {
            let (store, config) = context(&cli)?;
            Ok(hilite::cmd_pattern::run(&store, &config, command)?)
        }
        Some(Command::Validate(args)) => match CompiledMatcher::compile(&args.pattern, &args.flags)
        {
            Ok(_) => {
                println!("valid");
                Ok(ExitCode::Success)
            }
            Err(e) => {
                println!("invalid: {}", e);
                Ok(ExitCode::Invalid)
            }
        },
        Some(Command::Extract(args)) => cmd_extract::run(&cli, args),
        Some(Command::Highlight(args)) => cmd_highlight::run(&cli, args),
        Some(Command::Doc(command)) => {
            let (store, config) = context(&cli)?;
            Ok(hilite::cmd_doc::run(&store, &config, command)?)
        }
        Some(Command::Mode(args)) => {
            let (store, _) = context(&cli)?;
            Ok(hilite::cmd_mode::run(&store, args)?)
        }
        Some(Command::Completions(args)) => Ok(hilite::completions::run(args)?),
    }
}
