//! Change-detection and log-reconciliation engine for sync-manager
//!
//! This crate decides which files under a tree changed since the last
//! recorded synchronization, hands exactly those to a pluggable store, and
//! reconciles the store's outcomes back into a durable sync log so the next
//! run is incremental.
//!
//! # Architecture
//!
//! `sync-core` sits above the filesystem layer and below the CLI:
//!
//! ```text
//!        sync-cli
//!            |
//!        sync-core
//!       /    |     \
//!  detect   log    store (trait)
//!       \    |     /
//!         sync-fs
//! ```
//!
//! Data flow for one run: listing → change detection (consults the log) →
//! changed-set → confirmation gate → store → outcome merge → persisted log.
//!
//! # Example
//!
//! ```no_run
//! use sync_core::{LocalStore, SyncEngine, SyncOptions};
//!
//! fn example() -> sync_core::Result<()> {
//!     let store = LocalStore::new("/backup/docs");
//!     let outcome = SyncEngine::new(SyncOptions::new("docs"), &store).run()?;
//!     println!("synced {} file(s)", outcome.log.len());
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod detect;
pub mod engine;
pub mod error;
pub mod hooks;
pub mod log;
pub mod record;
pub mod store;

pub use config::{CONFIG_FILE, SyncConfig};
pub use detect::{
    ChangeCriterion, DefaultCriterion, HashOnlyCriterion, MetadataCriterion, detect_changes,
};
pub use engine::{DEFAULT_LOG_FILE, SyncEngine, SyncOptions, SyncOutcome};
pub use error::{Error, Result};
pub use hooks::{AutoConfirm, ConfirmGate, LogEvent, NullObserver, SyncObserver, is_affirmative};
pub use log::SyncLog;
pub use record::{ChangeReason, ChangedRecord, FileRecord, LogEntry};
pub use store::{LocalStore, Store};
