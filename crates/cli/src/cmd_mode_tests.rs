// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::model::Mode;
use tempfile::tempdir;

#[test]
fn setting_the_mode_persists_it() {
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path());

    let args = ModeArgs {
        mode: Some(Mode::Approval),
    };
    run(&store, &args).unwrap();

    assert_eq!(store.load_mode(), Mode::Approval);
}

#[test]
fn querying_does_not_write() {
    let dir = tempdir().unwrap();
    let store = Store::open(dir.path().join("untouched"));

    let args = ModeArgs { mode: None };
    run(&store, &args).unwrap();

    assert!(!dir.path().join("untouched").exists());
}
