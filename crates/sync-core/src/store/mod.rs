//! Store adapter trait and implementations
//!
//! The destination of a sync is expressed as a capability with a single
//! operation: take the changed-set, transfer what you can, and report the
//! fingerprints to persist. Any destination (local copy, remote upload,
//! content-addressed backend) implements this trait.

mod local;

pub use self::local::LocalStore;

use std::collections::BTreeMap;

use crate::error::Result;
use crate::record::{ChangedRecord, LogEntry};

/// Pluggable destination for changed files.
///
/// # Partial success
///
/// `sync` returns outcomes only for the keys it actually committed. A key
/// absent from the returned map keeps its previous log entry and reappears
/// in the changed-set on the next run; that retry-by-omission is the
/// designed failure-recovery mechanism, so implementations should absorb
/// per-key failures (log and omit) rather than fail the whole call.
/// A returned `Err` means the store as a whole is unusable and aborts the
/// run without touching the log.
pub trait Store: Send + Sync {
    /// Name of the store, used for logging and error messages
    fn name(&self) -> &str;

    /// Transfer the changed files and report per-key outcomes.
    ///
    /// Each returned [`LogEntry`] carries the fingerprint to persist,
    /// including the destination identifier the store assigned.
    fn sync(&self, changed: &[ChangedRecord]) -> Result<BTreeMap<String, LogEntry>>;
}
