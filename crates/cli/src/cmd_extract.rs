// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `hilite extract`: run patterns against the document and report matches.

use termcolor::StandardStream;

use hilite::cli::{Cli, ExtractArgs, OutputFormat};
use hilite::error::ExitCode;
use hilite::output::text::TextFormatter;
use hilite::output::{FormatOptions, json};
use hilite::pattern::ExtractionResult;
use hilite::{Extractor, cmd_pattern};

use crate::context;

pub fn run(cli: &Cli, args: &ExtractArgs) -> anyhow::Result<ExitCode> {
    let (store, config) = context(cli)?;

    let defs = store.load_patterns();
    let document = store.load_document();

    let extractor = Extractor::new();
    let results = extractor.extract_all(&document, &defs);

    // One result per definition, in definition order, so a resolved
    // definition index is also a result index.
    let selected: Vec<ExtractionResult> = match &args.id {
        Some(reference) => {
            let i = cmd_pattern::resolve(&defs, reference)?;
            vec![results[i].clone()]
        }
        None => results.as_slice().to_vec(),
    };

    let options = if args.no_limit {
        FormatOptions::no_limit()
    } else {
        FormatOptions::with_limit(args.limit.unwrap_or(config.output.limit))
    };

    match args.output {
        OutputFormat::Text => {
            let stdout = StandardStream::stdout(config.output.color.to_color_choice());
            let mut fmt = TextFormatter::new(stdout, options);
            fmt.write_results(&selected)?;
        }
        OutputFormat::Json => {
            json::write_results(&mut std::io::stdout(), &selected)?;
        }
    }

    Ok(ExitCode::Success)
}
