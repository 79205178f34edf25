// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Persisted data types: pattern definitions and the workflow mode.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A user-authored named regular expression with modifier flags.
///
/// Serialized in camelCase to match the on-disk pattern list layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternDef {
    /// Unique id (UUID v4).
    pub id: String,
    /// Display name, e.g. "Email Addresses".
    pub name: String,
    /// Pattern source string.
    pub pattern: String,
    /// Modifier flags, e.g. "g" or "gi".
    pub flags: String,
    /// Whether the pattern's matches have been approved.
    pub approved: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    pub updated_at: DateTime<Utc>,
}

impl PatternDef {
    /// Create a new definition with a fresh id and current timestamps.
    pub fn new(name: impl Into<String>, pattern: impl Into<String>, flags: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            pattern: pattern.into(),
            flags: flags.into(),
            approved: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Bump the modification timestamp.
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }

    /// The `/pattern/flags` display form.
    pub fn display_pattern(&self) -> String {
        format!("/{}/{}", self.pattern, self.flags)
    }
}

/// Workflow mode: editing pattern definitions or approving their matches.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    #[default]
    Edit,
    Approval,
}

impl Mode {
    /// Stored representation (bare string, not JSON).
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Edit => "edit",
            Mode::Approval => "approval",
        }
    }

    /// Parse the stored representation. Unknown values fall back to Edit.
    pub fn from_stored(s: &str) -> Self {
        match s.trim() {
            "approval" => Mode::Approval,
            _ => Mode::Edit,
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
