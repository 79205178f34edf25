// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Partition a document into matched and unmatched spans.

use serde::Serialize;

use crate::pattern::{ExtractionResult, MatchRecord};

/// A contiguous slice of the document, tagged as matching or not.
///
/// Concatenating all segments' text in order reconstructs the document
/// exactly. Gap segments are only emitted when non-empty; a zero-length
/// match produces a zero-length match segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HighlightedSegment {
    /// Slice of the document covered by this segment.
    pub text: String,
    /// Whether this span is a match.
    pub is_match: bool,
    /// Synthetic per-match id (`"{pattern_id}-{ordinal}"`), match spans only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_id: Option<String>,
    /// Id of the originating pattern, match spans only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern_id: Option<String>,
}

impl HighlightedSegment {
    fn gap(text: &str) -> Self {
        Self {
            text: text.to_string(),
            is_match: false,
            match_id: None,
            pattern_id: None,
        }
    }
}

/// Partition `document` into an ordered list of match / non-match segments.
///
/// `matches` need not be sorted; a defensive copy is stably sorted by
/// offset before the walk. They must be non-overlapping and slice-valid for
/// this document (as produced by extraction) — behavior on overlapping
/// input is undefined.
///
/// An empty match list yields a single non-match segment covering the whole
/// document; for an empty document that is a one-element list containing
/// the empty string.
pub fn segment(document: &str, matches: &[MatchRecord], active_id: &str) -> Vec<HighlightedSegment> {
    if matches.is_empty() {
        return vec![HighlightedSegment::gap(document)];
    }

    let mut sorted = matches.to_vec();
    sorted.sort_by_key(|m| m.offset);

    let mut segments = Vec::with_capacity(sorted.len() * 2 + 1);
    let mut cursor = 0;

    for (ordinal, m) in sorted.iter().enumerate() {
        if m.offset > cursor {
            segments.push(HighlightedSegment::gap(&document[cursor..m.offset]));
        }

        segments.push(HighlightedSegment {
            text: document[m.offset..m.offset + m.length].to_string(),
            is_match: true,
            match_id: Some(format!("{}-{}", active_id, ordinal)),
            pattern_id: Some(active_id.to_string()),
        });

        cursor = m.offset + m.length;
    }

    if cursor < document.len() {
        segments.push(HighlightedSegment::gap(&document[cursor..]));
    }

    segments
}

/// Segment `document` against the selected extraction result.
///
/// With no selection, or a selection that matches no result, the whole
/// document comes back as a single non-match segment.
pub fn combine(
    document: &str,
    results: &[ExtractionResult],
    selected: Option<&str>,
) -> Vec<HighlightedSegment> {
    let Some(id) = selected else {
        return vec![HighlightedSegment::gap(document)];
    };

    match results.iter().find(|r| r.id == id) {
        Some(result) => segment(document, &result.matches, id),
        None => vec![HighlightedSegment::gap(document)],
    }
}

#[cfg(test)]
#[path = "segmenter_tests.rs"]
mod tests;
