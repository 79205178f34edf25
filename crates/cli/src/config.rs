//! Configuration parsing and validation.
//!
//! Handles hilite.toml parsing with version validation and unknown key
//! warnings. Every field has a default; the config file is optional.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::color::ColorMode;
use crate::error::{Error, Result};

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Config file name searched for in the working directory.
pub const CONFIG_FILE_NAME: &str = "hilite.toml";

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "store", "output", "pattern", "document"];

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Config with flexible parsing that captures unknown keys.
#[derive(Deserialize)]
struct FlexibleConfig {
    #[allow(dead_code)]
    version: i64,

    #[serde(flatten)]
    sections: BTreeMap<String, toml::Value>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    #[serde(default = "default_version")]
    pub version: i64,

    /// Store location overrides.
    #[serde(default)]
    pub store: StoreConfig,

    /// Output formatting.
    #[serde(default)]
    pub output: OutputConfig,

    /// Defaults for new pattern definitions.
    #[serde(default)]
    pub pattern: PatternConfig,

    /// Document handling.
    #[serde(default)]
    pub document: DocumentConfig,
}

fn default_version() -> i64 {
    SUPPORTED_VERSION
}

/// Store section.
#[derive(Debug, Default, Deserialize)]
pub struct StoreConfig {
    /// Store directory (default: per-user data dir).
    pub dir: Option<PathBuf>,
}

/// Output section.
#[derive(Debug, Deserialize)]
pub struct OutputConfig {
    /// Color mode: auto, always, never.
    #[serde(default)]
    pub color: ColorMode,

    /// Maximum matches to preview per pattern (default: 10).
    #[serde(default = "OutputConfig::default_limit")]
    pub limit: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::default(),
            limit: Self::default_limit(),
        }
    }
}

impl OutputConfig {
    fn default_limit() -> usize {
        10
    }
}

/// Pattern section.
#[derive(Debug, Deserialize)]
pub struct PatternConfig {
    /// Flags applied when `pattern add` is called without `--flags`.
    #[serde(default = "PatternConfig::default_flags")]
    pub default_flags: String,
}

impl Default for PatternConfig {
    fn default() -> Self {
        Self {
            default_flags: Self::default_flags(),
        }
    }
}

impl PatternConfig {
    fn default_flags() -> String {
        "g".to_string()
    }
}

/// Document section.
#[derive(Debug, Deserialize)]
pub struct DocumentConfig {
    /// Maximum document file size in bytes (default: 10MB).
    #[serde(default = "DocumentConfig::default_max_size")]
    pub max_size: u64,

    /// Paragraph count for `doc sample` (default: 3).
    #[serde(default = "DocumentConfig::default_sample_paragraphs")]
    pub sample_paragraphs: usize,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            max_size: Self::default_max_size(),
            sample_paragraphs: Self::default_sample_paragraphs(),
        }
    }
}

impl DocumentConfig {
    fn default_max_size() -> u64 {
        10 * 1024 * 1024
    }

    fn default_sample_paragraphs() -> usize {
        3
    }
}

/// Resolve the active config.
///
/// An explicitly given path must load; a missing `./hilite.toml` silently
/// yields defaults.
pub fn discover(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        tracing::debug!("loading config from {}", path.display());
        return load(path);
    }

    let local = Path::new(CONFIG_FILE_NAME);
    if local.exists() {
        tracing::debug!("loading config from {}", local.display());
        return load(local);
    }

    tracing::debug!("no config found, using defaults");
    Ok(Config::default())
}

/// Load and validate config from a file path, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse(&content, path)
}

/// Parse config from string content.
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    warn_unknown_keys(content, path);

    // Parse full config
    toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })
}

fn warn_unknown_keys(content: &str, path: &Path) {
    let Ok(flexible) = toml::from_str::<FlexibleConfig>(content) else {
        return;
    };
    for key in flexible.sections.keys() {
        if !KNOWN_KEYS.contains(&key.as_str()) {
            warn_unknown_key(path, key);
        }
    }
}

fn warn_unknown_key(path: &Path, key: &str) {
    tracing::warn!("{}: unknown config key '{}' (ignored)", path.display(), key);
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
