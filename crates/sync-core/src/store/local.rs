//! Local filesystem store
//!
//! Copies changed files under a destination root, preserving the key-relative
//! layout of the source tree.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::record::{ChangedRecord, LogEntry};
use crate::store::Store;

/// Store that copies each changed file to `<root>/<key>`.
///
/// The assigned `ver_path` is the key itself, i.e. the destination path
/// relative to the store root.
pub struct LocalStore {
    root: PathBuf,
}

impl LocalStore {
    /// Create a store rooted at the given directory.
    ///
    /// The directory does not need to exist yet; it is created on first
    /// write.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The destination root
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Store for LocalStore {
    fn name(&self) -> &str {
        "local"
    }

    fn sync(&self, changed: &[ChangedRecord]) -> Result<BTreeMap<String, LogEntry>> {
        let mut outcomes = BTreeMap::new();
        for record in changed {
            let dest = self.root.join(&record.key);
            match copy_file(&record.path, &dest) {
                Ok(()) => {
                    outcomes.insert(record.key.clone(), record.entry(record.key.clone()));
                }
                Err(e) => {
                    // Absorbed: the key stays out of the outcome map and is
                    // retried on the next run.
                    tracing::warn!(
                        key = %record.key,
                        dest = %dest.display(),
                        error = %e,
                        "copy failed; leaving key unsynced"
                    );
                }
            }
        }
        tracing::debug!(
            requested = changed.len(),
            committed = outcomes.len(),
            "local store sync complete"
        );
        Ok(outcomes)
    }
}

fn copy_file(source: &Path, dest: &Path) -> io::Result<()> {
    if let Some(parent) = dest.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::copy(source, dest)?;
    Ok(())
}
