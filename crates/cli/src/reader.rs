//! Size-gated document reading.
//!
//! The document lives in memory as one string, so file loads are gated:
//! - < 10MB (configurable): read into a buffer, validate UTF-8
//! - larger: rejected with an error

use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};

/// Size at which to log about large documents (1MB).
pub const LARGE_DOCUMENT_WARN: u64 = 1024 * 1024;

/// Default maximum document size (10MB).
pub const MAX_DOCUMENT_SIZE: u64 = 10 * 1024 * 1024;

/// Size-gated document reader.
pub struct DocumentReader {
    /// Maximum document size to read.
    max_size: u64,
}

impl Default for DocumentReader {
    fn default() -> Self {
        Self {
            max_size: MAX_DOCUMENT_SIZE,
        }
    }
}

impl DocumentReader {
    /// Create a reader with the default size gate.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a reader with a custom max size.
    pub fn with_max_size(max_size: u64) -> Self {
        Self { max_size }
    }

    /// Read a document file, checking the size gate and UTF-8 validity.
    pub fn read(&self, path: &Path) -> Result<String> {
        let metadata = std::fs::metadata(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        let size = metadata.len();

        if size > self.max_size {
            return Err(Error::DocumentTooLarge {
                path: path.to_path_buf(),
                size,
                max_size: self.max_size,
            });
        }

        if size > LARGE_DOCUMENT_WARN {
            tracing::info!(
                path = %path.display(),
                size_mb = size as f64 / 1_000_000.0,
                "reading large document"
            );
        }

        let bytes = std::fs::read(path).map_err(|e| Error::Io {
            path: path.to_path_buf(),
            source: e,
        })?;

        String::from_utf8(bytes).map_err(|_| Error::NotUtf8 {
            path: path.to_path_buf(),
        })
    }

    /// Read a document from standard input (no size gate; the pipe is the
    /// user's own doing).
    pub fn read_stdin(&self) -> Result<String> {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| Error::Io {
                path: "<stdin>".into(),
                source: e,
            })?;
        Ok(buf)
    }
}

#[cfg(test)]
#[path = "reader_tests.rs"]
mod tests;
