// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Terminal rendering of highlighted segments.

use std::io::Write;

use termcolor::WriteColor;

use crate::color::scheme;
use crate::highlight::segmenter::HighlightedSegment;

/// Write segments to a terminal, match spans in the highlight style.
///
/// Non-match text passes through untouched, so with color disabled the
/// output is exactly the document.
pub fn write_segments(
    out: &mut dyn WriteColor,
    segments: &[HighlightedSegment],
) -> std::io::Result<()> {
    for seg in segments {
        if seg.is_match {
            out.set_color(&scheme::highlight())?;
            write!(out, "{}", seg.text)?;
            out.reset()?;
        } else {
            write!(out, "{}", seg.text)?;
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "render_tests.rs"]
mod tests;
