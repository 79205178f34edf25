// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;

use serde::Serialize;

use crate::highlight::HighlightedSegment;
use crate::model::PatternDef;
use crate::pattern::{ExtractionResult, validate};

/// Pattern definition with derived display fields for JSON output.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternOutput<'a> {
    #[serde(flatten)]
    pub def: &'a PatternDef,
    pub valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_count: Option<usize>,
}

/// Write the pattern list as a JSON array.
pub fn write_patterns(
    out: &mut dyn Write,
    defs: &[PatternDef],
    results: &[ExtractionResult],
) -> std::io::Result<()> {
    let payload: Vec<PatternOutput> = defs
        .iter()
        .map(|def| PatternOutput {
            def,
            valid: validate(&def.pattern, &def.flags),
            match_count: results
                .iter()
                .find(|r| r.id == def.id)
                .map(|r| r.matches.len()),
        })
        .collect();

    serde_json::to_writer_pretty(&mut *out, &payload)?;
    writeln!(out)
}

/// Write extraction results as a JSON array.
pub fn write_results(out: &mut dyn Write, results: &[ExtractionResult]) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, results)?;
    writeln!(out)
}

/// Write highlighted segments as a JSON array.
pub fn write_segments(
    out: &mut dyn Write,
    segments: &[HighlightedSegment],
) -> std::io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, segments)?;
    writeln!(out)
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
