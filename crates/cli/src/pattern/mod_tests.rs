// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::model::PatternDef;

#[test]
fn public_surface_round_trip() {
    let def = PatternDef::new("Digits", r"\d+", "g");
    let matches = extract_matches("a1b22c333", &def);
    assert_eq!(matches.len(), 3);
    assert_eq!(matches[1].value, "22");

    let results = extract_all("a1b22c333", std::slice::from_ref(&def));
    assert_eq!(results[0].matches, matches);
}

#[test]
fn compile_result_is_branchable() {
    match CompiledMatcher::compile("(", "g") {
        Ok(_) => panic!("should not compile"),
        Err(CompileError::InvalidRegex(_)) => {}
        Err(other) => panic!("unexpected error: {other}"),
    }
}
