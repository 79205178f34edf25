use std::path::PathBuf;

/// Hilite error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// Pattern or flags fail to compile
    #[error("invalid pattern: {0}")]
    InvalidPattern(String),

    /// No pattern definition matches the given id, id prefix, or name
    #[error("no pattern matching '{0}'")]
    PatternNotFound(String),

    /// More than one pattern definition matches the given id prefix or name
    #[error("'{0}' is ambiguous: matches {1} patterns")]
    PatternAmbiguous(String, usize),

    /// File I/O error
    #[error("io error: {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Document file exceeds maximum size limit.
    #[error("document too large: {} ({} bytes, max: {} bytes)", .path.display(), .size, .max_size)]
    DocumentTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    /// Document file is not valid UTF-8.
    #[error("document is not valid UTF-8: {}", .path.display())]
    NotUtf8 { path: PathBuf },

    /// Internal error (bug)
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type using hilite Error
pub type Result<T> = std::result::Result<T, Error>;

/// Exit codes per CLI spec
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Operation succeeded
    Success = 0,
    /// Invalid pattern or unknown pattern reference
    Invalid = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Internal error
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) => ExitCode::ConfigError,
            Error::InvalidPattern(_)
            | Error::PatternNotFound(_)
            | Error::PatternAmbiguous(..)
            | Error::DocumentTooLarge { .. }
            | Error::NotUtf8 { .. } => ExitCode::Invalid,
            Error::Io { .. } => ExitCode::InternalError,
            Error::Internal(_) => ExitCode::InternalError,
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
