//! Error types for iniconf
//!
//! File I/O is the only operation that can fail loudly. Malformed input
//! lines, missing sections or keys, and failed type coercions are all
//! resolved silently (skipped, or replaced by a caller-supplied default).

use std::path::PathBuf;

/// Result type alias for iniconf operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced by `load`/`save` and the export helpers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read config file: {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file: {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode configuration as JSON")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Wrap an I/O error from reading `path`.
    pub(crate) fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Read {
            path: path.into(),
            source,
        }
    }

    /// Wrap an I/O error from writing `path`.
    pub(crate) fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Write {
            path: path.into(),
            source,
        }
    }
}
