// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! `hilite highlight`: render the document with matched spans styled.

use termcolor::{ColorChoice, StandardStream};

use hilite::cli::{Cli, HighlightArgs, OutputFormat};
use hilite::error::ExitCode;
use hilite::highlight::{combine, write_segments};
use hilite::output::json;
use hilite::{Extractor, cmd_pattern};

use crate::context;

pub fn run(cli: &Cli, args: &HighlightArgs) -> anyhow::Result<ExitCode> {
    let (store, config) = context(cli)?;

    let defs = store.load_patterns();
    let document = store.load_document();

    let i = cmd_pattern::resolve(&defs, &args.id)?;
    let active_id = defs[i].id.clone();

    let extractor = Extractor::new();
    let results = extractor.extract_all(&document, &defs);
    let segments = combine(&document, &results, Some(active_id.as_str()));

    match args.output {
        OutputFormat::Json => {
            json::write_segments(&mut std::io::stdout(), &segments)?;
        }
        OutputFormat::Text => {
            let choice = if args.no_color {
                ColorChoice::Never
            } else if args.color {
                ColorChoice::Always
            } else {
                config.output.color.to_color_choice()
            };

            // The segment texts tile the document, so this prints the
            // document verbatim plus styling.
            let mut stdout = StandardStream::stdout(choice);
            write_segments(&mut stdout, &segments)?;
        }
    }

    Ok(ExitCode::Success)
}
