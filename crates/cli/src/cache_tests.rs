// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

#[test]
fn repeated_extraction_hits_the_cache() {
    let extractor = Extractor::new();
    let defs = vec![PatternDef::new("a", "a", "g")];

    let first = extractor.extract_all("aaa", &defs);
    let second = extractor.extract_all("aaa", &defs);

    assert_eq!(first, second);
    let stats = extractor.stats();
    assert_eq!(stats.hits, 1);
    assert_eq!(stats.misses, 1);
    assert_eq!(stats.entries, 1);
}

#[test]
fn document_change_misses_the_cache() {
    let extractor = Extractor::new();
    let defs = vec![PatternDef::new("a", "a", "g")];

    extractor.extract_all("aaa", &defs);
    let results = extractor.extract_all("aa", &defs);

    assert_eq!(results[0].matches.len(), 2);
    assert_eq!(extractor.stats().misses, 2);
}

#[test]
fn pattern_edit_misses_the_cache() {
    let extractor = Extractor::new();
    let mut def = PatternDef::new("a", "a", "g");

    extractor.extract_all("aaa", std::slice::from_ref(&def));

    def.pattern = "aa".into();
    def.touch();
    let results = extractor.extract_all("aaa", std::slice::from_ref(&def));

    assert_eq!(results[0].matches.len(), 1);
    assert_eq!(extractor.stats().misses, 2);
}

#[test]
fn cached_run_equals_a_direct_run() {
    let extractor = Extractor::new();
    let defs = vec![PatternDef::new("words", r"\w+", "g")];
    let doc = "one two three";

    let cached = extractor.extract_all(doc, &defs);
    let direct = extract_all(doc, &defs);

    assert_eq!(*cached, direct);
}

#[test]
fn empty_inputs_are_cacheable() {
    let extractor = Extractor::new();
    let first = extractor.extract_all("", &[]);
    let second = extractor.extract_all("", &[]);
    assert!(first.is_empty());
    assert_eq!(extractor.stats().hits, 1);
    let _ = second;
}
