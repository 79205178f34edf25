//! Extraction and highlighting behavior through the CLI.

use super::prelude::*;

/// Without the g flag only the first match is extracted
#[test]
fn first_match_semantics() {
    let dir = tempfile::tempdir().unwrap();
    set_document(dir.path(), "aaa");
    add_pattern(dir.path(), "First A", "a", "");

    let json = extract_json(dir.path(), "First A");
    let matches = json[0]["matches"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["offset"], 0);
    assert_eq!(matches[0]["length"], 1);
}

/// With the g flag every non-overlapping match is extracted
#[test]
fn global_semantics() {
    let dir = tempfile::tempdir().unwrap();
    set_document(dir.path(), "aaa");
    add_pattern(dir.path(), "All As", "a", "g");

    let json = extract_json(dir.path(), "All As");
    let offsets: Vec<u64> = json[0]["matches"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["offset"].as_u64().unwrap())
        .collect();
    assert_eq!(offsets, vec![0, 1, 2]);
}

/// A zero-length global pattern terminates, matching at every boundary
#[test]
fn zero_length_pattern_terminates() {
    let dir = tempfile::tempdir().unwrap();
    set_document(dir.path(), "abc");
    add_pattern(dir.path(), "Empty", "", "g");

    let json = extract_json(dir.path(), "Empty");
    let matches = json[0]["matches"].as_array().unwrap();
    let offsets: Vec<u64> = matches.iter().map(|m| m["offset"].as_u64().unwrap()).collect();
    assert_eq!(offsets, vec![0, 1, 2, 3]);
    assert!(matches.iter().all(|m| m["length"] == 0));
}

/// extract with no reference reports one result per pattern, in order
#[test]
fn extract_all_reports_every_pattern() {
    let dir = tempfile::tempdir().unwrap();
    set_document(dir.path(), "a1b2");
    add_pattern(dir.path(), "Letters", "[ab]", "g");
    add_pattern(dir.path(), "Digits", r"\d", "g");
    add_pattern(dir.path(), "Misses", "z", "g");

    let output = hilite(dir.path())
        .args(["extract", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let names: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Letters", "Digits", "Misses"]);
    assert_eq!(json[2]["matches"].as_array().unwrap().len(), 0);
}

/// Text extract output previews values and offsets, with a limit
#[test]
fn extract_text_preview_and_limit() {
    let dir = tempfile::tempdir().unwrap();
    set_document(dir.path(), "x x x x x");
    add_pattern(dir.path(), "Xs", "x", "g");

    hilite(dir.path())
        .args(["extract", "Xs", "--limit", "2"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Xs: 5 matches"))
        .stdout(predicates::str::contains("... and 3 more matches"));

    hilite(dir.path())
        .args(["extract", "Xs", "--no-limit"])
        .assert()
        .success()
        .stdout(predicates::str::contains("x at 8"));
}

/// An invalid stored pattern extracts as zero matches, not a failure
#[test]
fn invalid_stored_pattern_extracts_empty() {
    let dir = tempfile::tempdir().unwrap();
    set_document(dir.path(), "anything");
    // Corrupt the stored pattern behind the validation in `pattern add`
    add_pattern(dir.path(), "WasFine", "a", "g");
    let patterns_path = dir.path().join("patterns.json");
    let raw = std::fs::read_to_string(&patterns_path).unwrap();
    std::fs::write(&patterns_path, raw.replace("\"a\"", "\"(\"")).unwrap();

    let json = extract_json(dir.path(), "WasFine");
    assert_eq!(json[0]["matches"].as_array().unwrap().len(), 0);
}

/// highlight --no-color reproduces the document exactly
#[test]
fn highlight_without_color_is_the_document() {
    let dir = tempfile::tempdir().unwrap();
    set_document(dir.path(), "reach me at sam@example.com today");
    add_pattern(dir.path(), "Emails", r"\S+@\S+\.\w+", "g");

    hilite(dir.path())
        .args(["highlight", "Emails", "--no-color"])
        .assert()
        .success()
        .stdout("reach me at sam@example.com today");
}

/// highlight --color styles the matched span
#[test]
fn highlight_with_color_styles_matches() {
    let dir = tempfile::tempdir().unwrap();
    set_document(dir.path(), "one two");
    add_pattern(dir.path(), "Two", "two", "g");

    let output = hilite(dir.path())
        .args(["highlight", "Two", "--color"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains('\x1b'), "expected escape codes: {stdout:?}");
}

/// highlight -o json emits the segment partition
#[test]
fn highlight_json_segments() {
    let dir = tempfile::tempdir().unwrap();
    set_document(dir.path(), "say hello world");
    add_pattern(dir.path(), "Hello", "hello", "g");

    let output = hilite(dir.path())
        .args(["highlight", "Hello", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let texts: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["text"].as_str().unwrap())
        .collect();
    assert_eq!(texts, vec!["say ", "hello", " world"]);
    assert_eq!(json[1]["isMatch"], true);
    assert!(json[1]["matchId"].as_str().unwrap().ends_with("-0"));
}

/// highlighting an unknown pattern exits 1
#[test]
fn highlight_unknown_pattern_fails() {
    let dir = tempfile::tempdir().unwrap();
    set_document(dir.path(), "text");

    hilite(dir.path())
        .args(["highlight", "Ghost"])
        .assert()
        .code(1)
        .stderr(predicates::str::contains("no pattern matching"));
}

/// An empty document highlights to empty output
#[test]
fn highlight_empty_document() {
    let dir = tempfile::tempdir().unwrap();
    add_pattern(dir.path(), "Anything", "a", "g");

    hilite(dir.path())
        .args(["highlight", "Anything", "--no-color"])
        .assert()
        .success()
        .stdout("");
}
