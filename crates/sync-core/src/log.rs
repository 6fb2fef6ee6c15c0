//! Sync log persistence
//!
//! The sync log is the durable record of the last successfully synced
//! fingerprint per file key. It is persisted as a JSON document with
//! top-level `files` and `lastSync` fields and round-trips through
//! save/load without loss.

use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Read;
use std::path::Path;

use crate::error::{Error, Result};
use crate::record::LogEntry;

/// Durable mapping from file key to its last-synced fingerprint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyncLog {
    /// Last-synced state per file key
    #[serde(default)]
    pub files: BTreeMap<String, LogEntry>,
    /// Epoch seconds of the last sync that committed at least one file;
    /// absent until the first such sync
    #[serde(rename = "lastSync", default, skip_serializing_if = "Option::is_none")]
    pub last_sync: Option<i64>,
}

impl SyncLog {
    /// Create a new empty log
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a sync log from a JSON file with shared lock.
    ///
    /// A missing file yields an empty log: a first run has nothing to
    /// reconcile against and that is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`Error::LogParse`] if the file exists but is not well-formed
    /// JSON, and an I/O error if it cannot be read or locked. Malformed
    /// content is fatal, never treated as empty.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no sync log on disk; starting empty");
            return Ok(Self::new());
        }

        let file = File::open(path).map_err(|e| Error::io(path, e))?;
        file.lock_shared().map_err(|e| Error::io(path, e))?;

        // Read through the locked file handle to avoid TOCTOU race
        let mut content = String::new();
        (&file).read_to_string(&mut content).map_err(|e| Error::io(path, e))?;
        let log: SyncLog = serde_json::from_str(&content).map_err(|source| Error::LogParse {
            path: path.to_path_buf(),
            source,
        })?;

        // Lock released when file is dropped
        Ok(log)
    }

    /// Save the sync log as pretty JSON atomically with exclusive lock.
    ///
    /// Creates parent directories as needed and uses the
    /// write-to-temp-then-rename pattern so a failed write never leaves a
    /// half-written log behind.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written or locked.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| Error::io(parent, e))?;
        }

        // Create or open the target file for locking
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)
            .map_err(|e| Error::io(path, e))?;

        // Acquire exclusive lock (blocks if another process holds lock)
        lock_file.lock_exclusive().map_err(|e| Error::io(path, e))?;

        // Write to temporary file first
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, &content).map_err(|e| Error::io(&temp_path, e))?;

        // Atomically rename to target
        fs::rename(&temp_path, path).map_err(|e| Error::io(path, e))?;

        // Lock released when lock_file is dropped
        Ok(())
    }

    /// Merge a store's outcome map into the log.
    ///
    /// Only keys present in `outcomes` are updated; keys that failed to sync
    /// keep their previous entry (or stay absent) so they reappear as changed
    /// on the next run. `last_sync` moves to `now` only when the outcome map
    /// is non-empty.
    pub fn merge(&mut self, outcomes: &BTreeMap<String, LogEntry>, now: i64) {
        if outcomes.is_empty() {
            return;
        }
        for (key, entry) in outcomes {
            self.files.insert(key.clone(), entry.clone());
        }
        self.last_sync = Some(now);
    }

    /// Look up the last-synced entry for a key
    pub fn entry(&self, key: &str) -> Option<&LogEntry> {
        self.files.get(key)
    }

    /// Number of keys in the log
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// Whether the log has no entries
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}
