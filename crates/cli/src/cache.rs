// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Memoization for extraction runs.
//!
//! Extraction is a pure function of (document, pattern list), so results
//! are memoized on a composite hash key. Match results are derived data
//! and are never persisted; this cache lives for the process only.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use dashmap::DashMap;

use crate::model::PatternDef;
use crate::pattern::{ExtractionResult, extract_all};

/// Composite key over a document and a pattern list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct CacheKey {
    document_hash: u64,
    patterns_hash: u64,
}

impl CacheKey {
    fn new(document: &str, defs: &[PatternDef]) -> Self {
        Self {
            document_hash: hash_document(document),
            patterns_hash: hash_patterns(defs),
        }
    }
}

/// Cache statistics.
#[derive(Debug, Clone, Default)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: usize,
    /// Number of cache misses.
    pub misses: usize,
    /// Number of entries in cache.
    pub entries: usize,
}

/// Memoizing front end for [`extract_all`].
#[derive(Default)]
pub struct Extractor {
    inner: DashMap<CacheKey, Arc<Vec<ExtractionResult>>>,
    hits: AtomicUsize,
    misses: AtomicUsize,
}

impl Extractor {
    /// Create an extractor with an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Extract all matches, reusing a memoized run when inputs are
    /// unchanged.
    ///
    /// The returned Arc makes repeat lookups O(1); the underlying results
    /// are identical to calling [`extract_all`] directly.
    pub fn extract_all(&self, document: &str, defs: &[PatternDef]) -> Arc<Vec<ExtractionResult>> {
        let key = CacheKey::new(document, defs);

        if let Some(entry) = self.inner.get(&key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            return Arc::clone(entry.value());
        }

        self.misses.fetch_add(1, Ordering::Relaxed);
        let results = Arc::new(extract_all(document, defs));
        self.inner.insert(key, Arc::clone(&results));
        results
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.inner.len(),
        }
    }
}

fn hash_document(document: &str) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    document.hash(&mut hasher);
    hasher.finish()
}

/// Hash the fields that affect extraction results.
///
/// `updated_at` stands in for pattern/flags edits so a stale entry cannot
/// survive an in-place definition change; name and approval do not affect
/// matching but ride along via the result shape, so they are hashed too.
fn hash_patterns(defs: &[PatternDef]) -> u64 {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let mut hasher = DefaultHasher::new();
    for def in defs {
        def.id.hash(&mut hasher);
        def.name.hash(&mut hasher);
        def.pattern.hash(&mut hasher);
        def.flags.hash(&mut hasher);
        def.updated_at.hash(&mut hasher);
    }
    hasher.finish()
}

#[cfg(test)]
#[path = "cache_tests.rs"]
mod tests;
