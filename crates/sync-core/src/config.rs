//! Workspace configuration (`sync.toml`)
//!
//! Persistent defaults for the CLI and embedding callers. Every field has a
//! sensible default so an absent file means "all defaults"; a present but
//! malformed file is a hard error, never silently ignored.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Default configuration file name
pub const CONFIG_FILE: &str = "sync.toml";

/// Configuration for sync runs, loaded from `sync.toml`.
///
/// CLI flags override these values field by field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Directory tree to scan; `None` means the working directory
    pub entry: Option<PathBuf>,
    /// Extension filter for the listing (empty = all files)
    pub ext: Vec<String>,
    /// Log file path, resolved relative to the working directory
    pub log_file: PathBuf,
    /// Persist the log after a successful sync
    pub save_log: bool,
    /// Ask for confirmation before invoking the store
    pub confirm: bool,
    /// Local store destination root
    pub dest: Option<PathBuf>,
    /// Glob patterns a key must match to be listed
    pub include: Vec<String>,
    /// Glob patterns that exclude a key from the listing
    pub exclude: Vec<String>,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            entry: None,
            ext: Vec::new(),
            log_file: PathBuf::from(crate::engine::DEFAULT_LOG_FILE),
            save_log: true,
            confirm: true,
            dest: None,
            include: Vec::new(),
            exclude: Vec::new(),
        }
    }
}

impl SyncConfig {
    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigNotFound`] if the file does not exist and
    /// [`Error::ConfigParse`] if it is not well-formed TOML.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(Error::ConfigNotFound {
                path: path.to_path_buf(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;
        toml::from_str(&content).map_err(|e| Error::ConfigParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Load configuration if the file exists, otherwise return defaults.
    ///
    /// Used for the implicit `sync.toml` lookup; an explicitly named config
    /// file should use [`load`](Self::load) so a typo'd path is an error.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        match Self::load(path) {
            Ok(config) => Ok(config),
            Err(Error::ConfigNotFound { .. }) => Ok(Self::default()),
            Err(e) => Err(e),
        }
    }
}
