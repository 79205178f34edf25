// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Key-value persistence for patterns, document, and mode.
//!
//! Three independent entries under one directory:
//! - `patterns.json`: JSON array of pattern definitions
//! - `document.txt`: raw document text
//! - `mode`: bare `edit` / `approval` string
//!
//! Reads never fail: malformed or absent entries fall back to the empty
//! list / empty string / edit mode. Writes are atomic (temp file + rename);
//! a failed write is logged and swallowed so it cannot interrupt the
//! in-memory state change that triggered it.

use std::path::{Path, PathBuf};

use crate::model::{Mode, PatternDef};

/// Pattern-definition list entry.
pub const PATTERNS_KEY: &str = "patterns.json";
/// Document text entry.
pub const DOCUMENT_KEY: &str = "document.txt";
/// Workflow mode entry.
pub const MODE_KEY: &str = "mode";

/// Get the user's home directory.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Get the local data directory (XDG_DATA_HOME or ~/.local/share).
fn data_local_dir() -> Option<PathBuf> {
    std::env::var_os("XDG_DATA_HOME")
        .map(PathBuf::from)
        .or_else(|| home_dir().map(|h| h.join(".local/share")))
}

/// Default store location: `<data dir>/hilite`, falling back to `.hilite`
/// in the working directory when no home is known.
pub fn default_dir() -> PathBuf {
    data_local_dir()
        .map(|d| d.join("hilite"))
        .unwrap_or_else(|| PathBuf::from(".hilite"))
}

/// Pick the store directory: CLI flag, then config, then the default.
pub fn resolve_dir(flag: Option<&Path>, config_dir: Option<&Path>) -> PathBuf {
    flag.map(Path::to_path_buf)
        .or_else(|| config_dir.map(Path::to_path_buf))
        .unwrap_or_else(default_dir)
}

/// On-disk store rooted at a directory.
pub struct Store {
    dir: PathBuf,
}

impl Store {
    /// Open a store at `dir`. No I/O happens until the first read/write.
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The store's root directory.
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Load the pattern-definition list, falling back to empty.
    pub fn load_patterns(&self) -> Vec<PatternDef> {
        let path = self.dir.join(PATTERNS_KEY);
        let Ok(raw) = std::fs::read_to_string(&path) else {
            return Vec::new();
        };
        match serde_json::from_str(&raw) {
            Ok(defs) => defs,
            Err(e) => {
                tracing::warn!("malformed {}: {}; starting empty", path.display(), e);
                Vec::new()
            }
        }
    }

    /// Save the pattern-definition list. Failures are logged, not returned.
    pub fn save_patterns(&self, defs: &[PatternDef]) {
        match serde_json::to_string_pretty(defs) {
            Ok(json) => self.write_entry(PATTERNS_KEY, json.as_bytes()),
            Err(e) => tracing::warn!("failed to encode pattern list: {}", e),
        }
    }

    /// Load the document text, falling back to empty.
    pub fn load_document(&self) -> String {
        std::fs::read_to_string(self.dir.join(DOCUMENT_KEY)).unwrap_or_default()
    }

    /// Save the document text. Failures are logged, not returned.
    pub fn save_document(&self, document: &str) {
        self.write_entry(DOCUMENT_KEY, document.as_bytes());
    }

    /// Load the workflow mode, falling back to edit.
    pub fn load_mode(&self) -> Mode {
        match std::fs::read_to_string(self.dir.join(MODE_KEY)) {
            Ok(raw) => Mode::from_stored(&raw),
            Err(_) => Mode::default(),
        }
    }

    /// Save the workflow mode. Failures are logged, not returned.
    pub fn save_mode(&self, mode: Mode) {
        self.write_entry(MODE_KEY, mode.as_str().as_bytes());
    }

    /// Write one entry atomically via temp file + rename.
    fn write_entry(&self, key: &str, bytes: &[u8]) {
        if let Err(e) = self.try_write_entry(key, bytes) {
            tracing::warn!("failed to persist {}: {}", key, e);
        }
    }

    fn try_write_entry(&self, key: &str, bytes: &[u8]) -> std::io::Result<()> {
        std::fs::create_dir_all(&self.dir)?;
        let path = self.dir.join(key);
        let temp_path = path.with_extension("tmp");
        std::fs::write(&temp_path, bytes)?;
        std::fs::rename(&temp_path, &path)?;
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
