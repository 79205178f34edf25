// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! Format:
//! ```text
//! <name> [approved] /<pattern>/<flags>  (<n> matches)
//!   <value> at <offset>
//!   ... and <k> more matches
//! ```

use std::io::Write;
use termcolor::WriteColor;

use super::FormatOptions;
use crate::color::scheme;
use crate::model::PatternDef;
use crate::pattern::{ExtractionResult, validate};

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    options: FormatOptions,
}

impl<W: WriteColor> TextFormatter<W> {
    /// Create a new text formatter over a color-capable writer.
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self { out, options }
    }

    /// Write the pattern list with live match counts.
    ///
    /// Definitions without a result (e.g. no document yet) show only their
    /// metadata.
    pub fn write_patterns(
        &mut self,
        defs: &[PatternDef],
        results: &[ExtractionResult],
    ) -> std::io::Result<()> {
        if defs.is_empty() {
            writeln!(self.out, "no patterns defined")?;
            return Ok(());
        }

        for def in defs {
            self.write_pattern_line(def, results)?;
        }
        Ok(())
    }

    fn write_pattern_line(
        &mut self,
        def: &PatternDef,
        results: &[ExtractionResult],
    ) -> std::io::Result<()> {
        self.out.set_color(&scheme::pattern_name())?;
        write!(self.out, "{}", def.name)?;
        self.out.reset()?;

        if def.approved {
            write!(self.out, " [")?;
            self.out.set_color(&scheme::approved())?;
            write!(self.out, "approved")?;
            self.out.reset()?;
            write!(self.out, "]")?;
        }

        if !validate(&def.pattern, &def.flags) {
            write!(self.out, " [")?;
            self.out.set_color(&scheme::invalid())?;
            write!(self.out, "invalid")?;
            self.out.reset()?;
            write!(self.out, "]")?;
        }

        write!(self.out, " ")?;
        self.out.set_color(&scheme::context())?;
        write!(self.out, "{}", def.display_pattern())?;
        self.out.reset()?;

        if let Some(result) = results.iter().find(|r| r.id == def.id) {
            write!(self.out, "  ({} matches)", result.matches.len())?;
        }
        writeln!(self.out)?;

        self.out.set_color(&scheme::context())?;
        write!(self.out, "  id: {}", def.id)?;
        self.out.reset()?;
        writeln!(self.out)?;

        Ok(())
    }

    /// Write extraction results with per-match previews.
    pub fn write_results(&mut self, results: &[ExtractionResult]) -> std::io::Result<()> {
        for result in results {
            self.out.set_color(&scheme::pattern_name())?;
            write!(self.out, "{}", result.name)?;
            self.out.reset()?;
            writeln!(self.out, ": {} matches", result.matches.len())?;

            let shown = match self.options.limit {
                Some(limit) => limit.min(result.matches.len()),
                None => result.matches.len(),
            };

            for m in &result.matches[..shown] {
                write!(self.out, "  ")?;
                self.out.set_color(&scheme::value())?;
                write!(self.out, "{}", m.value)?;
                self.out.reset()?;
                write!(self.out, " at ")?;
                self.out.set_color(&scheme::offset())?;
                write!(self.out, "{}", m.offset)?;
                self.out.reset()?;
                writeln!(self.out)?;
            }

            let hidden = result.matches.len() - shown;
            if hidden > 0 {
                writeln!(self.out, "  ... and {} more matches", hidden)?;
            }
        }
        Ok(())
    }

    /// Consume the formatter, returning the writer.
    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
