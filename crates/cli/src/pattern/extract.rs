// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Match extraction over a document.
//!
//! Extraction never fails: a pattern that does not compile is logged and
//! contributes an empty match list, so one bad definition cannot take down
//! a whole extraction run.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::model::PatternDef;
use crate::pattern::matcher::CompiledMatcher;

/// One matched occurrence in the document.
///
/// `offset` and `length` are byte counts, consistent with string slicing:
/// `&document[offset..offset + length] == value`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Matched substring.
    pub value: String,
    /// Start offset into the document.
    pub offset: usize,
    /// Length of the match. Zero for degenerate matches.
    pub length: usize,
}

/// All matches for one pattern definition against the current document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractionResult {
    /// Id of the originating pattern definition.
    pub id: String,
    /// Display name of the originating pattern definition.
    pub name: String,
    /// Matches in strictly increasing offset order.
    pub matches: Vec<MatchRecord>,
}

/// Report whether a pattern+flags pair compiles.
pub fn validate(pattern: &str, flags: &str) -> bool {
    CompiledMatcher::compile(pattern, flags).is_ok()
}

/// Extract all (or the first) matches of one definition from `document`.
///
/// With the `g` flag the matcher is probed repeatedly, each probe starting
/// from the end of the previous match. A zero-length match advances the
/// cursor past one full character before the next probe so degenerate
/// patterns terminate. Without `g`, at most the first match is returned.
///
/// A definition that fails to compile yields an empty list; the compile
/// error is logged, never propagated.
pub fn extract_matches(document: &str, def: &PatternDef) -> Vec<MatchRecord> {
    let matcher = match CompiledMatcher::compile(&def.pattern, &def.flags) {
        Ok(m) => m,
        Err(e) => {
            tracing::warn!("pattern '{}' did not compile: {}", def.name, e);
            return Vec::new();
        }
    };

    let mut matches = Vec::new();

    if !matcher.is_global() {
        if let Some((start, end)) = matcher.find_from(document, 0) {
            matches.push(record(document, start, end));
        }
        return matches;
    }

    let mut at = 0;
    while at <= document.len() {
        let Some((start, end)) = matcher.find_from(document, at) else {
            break;
        };
        matches.push(record(document, start, end));
        at = if end > start {
            end
        } else {
            advance_one_char(document, end)
        };
    }

    matches
}

/// Apply [`extract_matches`] independently per definition.
///
/// Results come back in input order, one per definition even when its match
/// list is empty. Definitions share no mutable matcher state, so the work
/// fans out across patterns.
pub fn extract_all(document: &str, defs: &[PatternDef]) -> Vec<ExtractionResult> {
    defs.par_iter()
        .map(|def| ExtractionResult {
            id: def.id.clone(),
            name: def.name.clone(),
            matches: extract_matches(document, def),
        })
        .collect()
}

fn record(document: &str, start: usize, end: usize) -> MatchRecord {
    MatchRecord {
        value: document[start..end].to_string(),
        offset: start,
        length: end - start,
    }
}

/// Next probe position after a zero-length match: past one full character,
/// or past the end of the document so the caller's loop terminates.
fn advance_one_char(document: &str, pos: usize) -> usize {
    match document[pos..].chars().next() {
        Some(c) => pos + c.len_utf8(),
        None => document.len() + 1,
    }
}

#[cfg(test)]
#[path = "extract_tests.rs"]
mod tests;
