// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection priority:
//! 1. Explicit CLI choice (`--color` / `--no-color`)
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → color
//! 4. default: color only when stdout is a TTY

use std::io::IsTerminal;
use termcolor::ColorChoice;

/// Color preference, from the command line or `hilite.toml`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Detect from environment and TTY.
    #[default]
    Auto,
    /// Force color output.
    Always,
    /// Disable color output.
    Never,
}

impl ColorMode {
    /// Resolve to a termcolor choice, consulting the environment in Auto.
    pub fn to_color_choice(self) -> ColorChoice {
        match self {
            ColorMode::Always => ColorChoice::Always,
            ColorMode::Never => ColorChoice::Never,
            ColorMode::Auto => resolve_color(),
        }
    }
}

/// Resolve color choice from environment variables.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any
/// value (including empty string) disables color. The `COLOR` env var
/// follows a similar convention for forcing color output.
pub fn resolve_color() -> ColorChoice {
    if std::env::var_os("NO_COLOR").is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os("COLOR").is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// termcolor specs for the CLI's output vocabulary.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    /// Highlighted match span: black on yellow.
    pub fn highlight() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Black)).set_bg(Some(Color::Yellow));
        spec
    }

    /// Bold pattern name.
    pub fn pattern_name() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Green "approved" badge.
    pub fn approved() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Green)).set_bold(true);
        spec
    }

    /// Red "invalid" badge.
    pub fn invalid() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Cyan matched value.
    pub fn value() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Cyan));
        spec
    }

    /// Yellow offset/position.
    pub fn offset() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Dimmed context (ids, timestamps).
    pub fn context() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_dimmed(true);
        spec
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
