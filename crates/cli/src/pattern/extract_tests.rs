// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn def(pattern: &str, flags: &str) -> PatternDef {
    PatternDef::new("test", pattern, flags)
}

#[test]
fn first_match_only_without_global_flag() {
    let matches = extract_matches("aaa", &def("a", ""));
    assert_eq!(
        matches,
        vec![MatchRecord {
            value: "a".into(),
            offset: 0,
            length: 1,
        }]
    );
}

#[test]
fn global_flag_collects_every_match() {
    let matches = extract_matches("aaa", &def("a", "g"));
    let offsets: Vec<usize> = matches.iter().map(|m| m.offset).collect();
    assert_eq!(offsets, vec![0, 1, 2]);
    assert!(matches.iter().all(|m| m.length == 1 && m.value == "a"));
}

#[test]
fn offsets_are_strictly_increasing() {
    let matches = extract_matches("foo bar foo bar foo", &def("foo", "g"));
    let offsets: Vec<usize> = matches.iter().map(|m| m.offset).collect();
    assert_eq!(offsets, vec![0, 8, 16]);
}

#[test]
fn matches_slice_back_to_their_values() {
    let doc = "reach me at sam@example.com or ops@example.org";
    let matches = extract_matches(doc, &def(r"\S+@\S+\.\w+", "g"));
    assert_eq!(matches.len(), 2);
    for m in &matches {
        assert_eq!(&doc[m.offset..m.offset + m.length], m.value);
    }
}

#[test]
fn zero_length_matches_terminate() {
    // An empty pattern matches between every character and at both ends.
    let matches = extract_matches("abc", &def("", "g"));
    let offsets: Vec<usize> = matches.iter().map(|m| m.offset).collect();
    assert_eq!(offsets, vec![0, 1, 2, 3]);
    assert!(matches.iter().all(|m| m.length == 0));
}

#[test]
fn zero_length_matches_step_whole_characters() {
    // 2-byte characters: the cursor must land on boundaries only.
    let matches = extract_matches("éé", &def("", "g"));
    let offsets: Vec<usize> = matches.iter().map(|m| m.offset).collect();
    assert_eq!(offsets, vec![0, 2, 4]);
}

#[test]
fn end_anchor_yields_a_single_match() {
    let matches = extract_matches("abc", &def("$", "g"));
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0].offset, 3);
    assert_eq!(matches[0].length, 0);
}

#[test]
fn invalid_pattern_yields_empty_not_panic() {
    assert!(extract_matches("anything", &def("(", "g")).is_empty());
    assert!(extract_matches("anything", &def("a", "zz")).is_empty());
}

#[test]
fn extraction_is_idempotent() {
    let d = def(r"\w+", "g");
    let doc = "one two three";
    assert_eq!(extract_matches(doc, &d), extract_matches(doc, &d));
}

#[test]
fn empty_document_has_no_matches() {
    assert!(extract_matches("", &def("a", "g")).is_empty());
}

#[test]
fn validate_reports_compile_success() {
    assert!(validate(r"\d+", "g"));
    assert!(validate("", ""));
    assert!(!validate("(", "g"));
    assert!(!validate("a", "q"));
}

#[test]
fn extract_all_preserves_pattern_order() {
    let defs = vec![def("b", "g"), def("a", "g"), def("c", "g")];
    let results = extract_all("abc", &defs);
    let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    let expected: Vec<&str> = defs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn extract_all_emits_one_result_per_pattern() {
    let defs = vec![def("nope", "g"), def("a", "g")];
    let results = extract_all("aaa", &defs);
    assert_eq!(results.len(), 2);
    assert!(results[0].matches.is_empty());
    assert_eq!(results[1].matches.len(), 3);
}

#[test]
fn extract_all_with_no_patterns_is_empty() {
    assert!(extract_all("abc", &[]).is_empty());
}

#[test]
fn bad_pattern_does_not_poison_neighbors() {
    let defs = vec![def("(", "g"), def("b", "g")];
    let results = extract_all("abc", &defs);
    assert!(results[0].matches.is_empty());
    assert_eq!(results[1].matches.len(), 1);
}
