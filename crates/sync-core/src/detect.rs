//! Change detection against the sync log
//!
//! Compares the current listing's fingerprints with the last-synced state and
//! produces the changed-set. The comparison predicate is pluggable via
//! [`ChangeCriterion`]; the default checks size and mtime before falling back
//! to the content hash. A criterion that decides "unchanged" from metadata
//! alone skips the content read for that file entirely.

use sync_fs::hash_file;

use crate::error::Result;
use crate::log::SyncLog;
use crate::record::{ChangeReason, ChangedRecord, FileRecord, LogEntry};

/// Pluggable change-comparison predicate.
///
/// Evaluation happens in two stages so implementations can decide from cheap
/// metadata before the engine pays for a full content read. Regardless of
/// which stage decides, every emitted [`ChangedRecord`] carries a freshly
/// computed hash.
pub trait ChangeCriterion: Send + Sync {
    /// Decide from size and mtime alone.
    ///
    /// `Some(true)` marks the file changed, `Some(false)` unchanged, and
    /// `None` defers to [`check_hash`](Self::check_hash).
    fn check_metadata(&self, current: &FileRecord, last: &LogEntry) -> Option<bool>;

    /// Final decision once the content hash is known.
    fn check_hash(&self, hash: &str, last: &LogEntry) -> bool;
}

/// Default criterion: changed if size, mtime, or hash differs.
///
/// Size and mtime are compared first; only when both match is the content
/// hashed and compared.
pub struct DefaultCriterion;

impl ChangeCriterion for DefaultCriterion {
    fn check_metadata(&self, current: &FileRecord, last: &LogEntry) -> Option<bool> {
        if current.size != last.size || current.mtime != last.mtime {
            Some(true)
        } else {
            None
        }
    }

    fn check_hash(&self, hash: &str, last: &LogEntry) -> bool {
        hash != last.hash
    }
}

/// Criterion that trusts metadata completely: size and mtime matching the
/// log means unchanged, no content read at all.
///
/// Fast, but misses edits that restore a file's size and mtime.
pub struct MetadataCriterion;

impl ChangeCriterion for MetadataCriterion {
    fn check_metadata(&self, current: &FileRecord, last: &LogEntry) -> Option<bool> {
        Some(current.size != last.size || current.mtime != last.mtime)
    }

    fn check_hash(&self, hash: &str, last: &LogEntry) -> bool {
        hash != last.hash
    }
}

/// Criterion that ignores metadata entirely and compares content hashes only.
///
/// Useful when mtimes are unreliable (archive extraction, checkouts).
pub struct HashOnlyCriterion;

impl ChangeCriterion for HashOnlyCriterion {
    fn check_metadata(&self, _current: &FileRecord, _last: &LogEntry) -> Option<bool> {
        None
    }

    fn check_hash(&self, hash: &str, last: &LogEntry) -> bool {
        hash != last.hash
    }
}

/// Compute the changed-set for a listing against the log.
///
/// Records are visited in input order and the output preserves that order.
/// A key missing from the log is changed (`New`); otherwise the criterion
/// decides. An empty listing yields an empty changed-set.
///
/// # Errors
///
/// Returns an error if a file that must be hashed cannot be read (vanished
/// or unreadable between listing and hashing). The whole detection aborts;
/// a partial changed-set is never returned.
pub fn detect_changes(
    files: &[FileRecord],
    log: &SyncLog,
    criterion: &dyn ChangeCriterion,
) -> Result<Vec<ChangedRecord>> {
    let mut changed = Vec::new();
    for file in files {
        let decision = match log.entry(&file.key) {
            None => {
                let hash = hash_file(&file.path)?;
                Some((hash, ChangeReason::New))
            }
            Some(last) => match criterion.check_metadata(file, last) {
                Some(false) => None,
                Some(true) => {
                    // Metadata already proved the change, but the store and
                    // the log merge still need the current hash.
                    let hash = hash_file(&file.path)?;
                    Some((hash, ChangeReason::Metadata))
                }
                None => {
                    let hash = hash_file(&file.path)?;
                    criterion
                        .check_hash(&hash, last)
                        .then(|| (hash, ChangeReason::Content))
                }
            },
        };

        if let Some((hash, reason)) = decision {
            changed.push(ChangedRecord {
                key: file.key.clone(),
                path: file.path.clone(),
                size: file.size,
                mtime: file.mtime,
                hash,
                reason,
                ver_path: None,
            });
        }
    }

    tracing::debug!(files = files.len(), changed = changed.len(), "change detection complete");
    Ok(changed)
}
