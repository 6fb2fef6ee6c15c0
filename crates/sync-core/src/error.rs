//! Error types for sync-core

use std::path::PathBuf;

/// Result type for sync-core operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in sync-core operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Sync log file exists but is not well-formed JSON.
    ///
    /// Never downgraded to an empty log: that would mask corruption and
    /// silently resync everything.
    #[error("Malformed sync log at {path}: {source}")]
    LogParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// Wholesale store adapter failure (per-key failures are absorbed by the
    /// adapter and never surface here)
    #[error("Store '{store}' failed: {message}")]
    Store { store: String, message: String },

    /// Configuration file not found at expected path
    #[error("Configuration not found at {path}")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file exists but is not well-formed TOML
    #[error("Malformed configuration at {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// Confirmation gate failed to obtain an answer
    #[error("Confirmation prompt failed: {message}")]
    Confirm { message: String },

    /// I/O error with path context
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // Transparent wrappers for underlying crate errors
    /// Filesystem error from sync-fs
    #[error(transparent)]
    Fs(#[from] sync_fs::Error),

    /// JSON serialization error
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a wholesale store failure for the named adapter
    pub fn store(store: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Store {
            store: store.into(),
            message: message.into(),
        }
    }
}
