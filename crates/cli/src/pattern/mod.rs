// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Pattern compilation and match extraction.
//!
//! Compilation tiers the engine by pattern structure:
//! - Single literal: memchr::memmem
//! - Multiple literals: aho-corasick
//! - Complex regex (or any semantics-changing flag): regex crate
//!
//! Extraction owns its search cursor explicitly; nothing here carries
//! hidden state between calls.

pub mod extract;
pub mod matcher;

pub use extract::{ExtractionResult, MatchRecord, extract_all, extract_matches, validate};
pub use matcher::{CompileError, CompiledMatcher, Flags};

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
