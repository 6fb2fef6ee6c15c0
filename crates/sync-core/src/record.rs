//! Data model for sync runs
//!
//! [`FileRecord`] (re-exported from sync-fs) is what the listing supplies;
//! [`ChangedRecord`] is what the detector emits; [`LogEntry`] is what the
//! store returns and the log persists.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

pub use sync_fs::FileRecord;

/// Last-known-synced state for a file key, as persisted in the sync log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntry {
    /// File size in bytes at last sync
    pub size: u64,
    /// Modification time in epoch seconds at last sync
    pub mtime: i64,
    /// Content hash in canonical `sha256:<hex>` form
    pub hash: String,
    /// Destination identifier assigned by the store on last successful sync.
    ///
    /// `None` means the entry predates any store that assigns one; distinct
    /// from an empty path.
    #[serde(rename = "verPath", default, skip_serializing_if = "Option::is_none")]
    pub ver_path: Option<String>,
}

/// Why the detector considered a file changed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeReason {
    /// No log entry exists for the key
    New,
    /// Size or modification time differs from the log entry
    Metadata,
    /// Metadata matched but the content hash differs
    Content,
}

impl fmt::Display for ChangeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::New => write!(f, "new"),
            Self::Metadata => write!(f, "metadata"),
            Self::Content => write!(f, "content"),
        }
    }
}

/// One file determined to differ from its last recorded fingerprint.
///
/// Always carries a freshly computed content hash, even when metadata alone
/// proved the change, so the store and the log merge never see a stale hash.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangedRecord {
    /// Path relative to the entry root; unique within the changed-set
    pub key: String,
    /// Absolute filesystem path
    pub path: PathBuf,
    /// Current file size in bytes
    pub size: u64,
    /// Current modification time in epoch seconds
    pub mtime: i64,
    /// Current content hash in canonical `sha256:<hex>` form
    pub hash: String,
    /// Why the file is in the changed-set
    pub reason: ChangeReason,
    /// Destination identifier; unset until a store assigns one
    pub ver_path: Option<String>,
}

impl ChangedRecord {
    /// The fingerprint a store should persist for this record, with the
    /// destination identifier it assigned.
    pub fn entry(&self, ver_path: impl Into<String>) -> LogEntry {
        LogEntry {
            size: self.size,
            mtime: self.mtime,
            hash: self.hash.clone(),
            ver_path: Some(ver_path.into()),
        }
    }
}
