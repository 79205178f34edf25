//! Test helpers for behavioral specifications.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub use assert_cmd::prelude::*;
pub use predicates;
pub use predicates::prelude::Predicate;
use std::path::Path;
use std::process::Command;

/// Returns a Command configured to run the hilite binary
pub fn hilite_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("hilite"))
}

/// Returns a Command bound to a specific store directory
pub fn hilite(store: &Path) -> Command {
    let mut cmd = hilite_cmd();
    cmd.env("HILITE_STORE", store);
    cmd
}

/// Add a pattern into the given store and return successfully
pub fn add_pattern(store: &Path, name: &str, pattern: &str, flags: &str) {
    hilite(store)
        .args(["pattern", "add", name, pattern, "--flags", flags])
        .assert()
        .success();
}

/// Set the document text in the given store
pub fn set_document(store: &Path, text: &str) {
    hilite(store)
        .args(["doc", "set", "--text", text])
        .assert()
        .success();
}

/// Run extract -o json for one pattern and parse the output
pub fn extract_json(store: &Path, reference: &str) -> serde_json::Value {
    let output = hilite(store)
        .args(["extract", reference, "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "extract failed: {:?}", output);
    serde_json::from_slice(&output.stdout).unwrap()
}
