//! Observer hooks and the confirmation gate
//!
//! Observers are notified at each stage transition of a run. They may watch
//! but the engine's own state is the source of truth passed between stages;
//! nothing an observer does feeds back into the run.

use std::collections::BTreeMap;

use crate::error::Result;
use crate::log::SyncLog;
use crate::record::{ChangedRecord, FileRecord, LogEntry};

/// Snapshot of a run handed to observers after the store has been invoked.
pub struct LogEvent<'a> {
    /// The full listing for the run
    pub files: &'a [FileRecord],
    /// The changed-set handed to the store
    pub changed: &'a [ChangedRecord],
    /// Outcomes the store actually committed (possibly a subset)
    pub outcomes: &'a BTreeMap<String, LogEntry>,
    /// The log after merging the outcomes
    pub log: &'a SyncLog,
}

/// Callbacks invoked at the engine's stage transitions.
///
/// All methods default to no-ops, so implementors override only what they
/// need.
pub trait SyncObserver {
    /// After the listing completes
    fn on_files(&self, _files: &[FileRecord]) {}

    /// After change detection, before any confirmation or store call
    fn on_changed(&self, _changed: &[ChangedRecord]) {}

    /// After a non-empty outcome map has been merged into the log, before
    /// the log is persisted
    fn on_log(&self, _event: &LogEvent<'_>) {}

    /// After the store call, whether or not anything was committed
    fn on_sync(&self, _event: &LogEvent<'_>) {}
}

/// Observer that ignores every notification.
pub struct NullObserver;

impl SyncObserver for NullObserver {}

/// Boolean gate asked before the store is invoked.
///
/// The engine never reads input itself; interactive callers inject a
/// prompting gate, non-interactive callers use [`AutoConfirm`]. A declined
/// gate is not an error: the run completes with zero side effects.
pub trait ConfirmGate {
    /// Decide whether the changed files should be synced.
    fn confirm(&self, changed: &[ChangedRecord]) -> Result<bool>;
}

/// Gate that always answers yes.
pub struct AutoConfirm;

impl ConfirmGate for AutoConfirm {
    fn confirm(&self, _changed: &[ChangedRecord]) -> Result<bool> {
        Ok(true)
    }
}

/// Parse a single line of prompt input as a yes/no answer.
///
/// "y" (case-insensitive) or an empty line is affirmative; anything else is
/// negative.
pub fn is_affirmative(input: &str) -> bool {
    let input = input.trim();
    input.is_empty() || input.eq_ignore_ascii_case("y")
}
