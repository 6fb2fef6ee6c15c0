//! SyncEngine implementation
//!
//! The engine sequences one run: listing, detection, optional confirmation,
//! store invocation, log merge, and persistence. Stages are strictly
//! sequential; no stage begins before the previous one completes.

use std::path::{Path, PathBuf};

use sync_fs::{ListingOptions, list_files};

use crate::detect::{ChangeCriterion, DefaultCriterion, detect_changes};
use crate::error::Result;
use crate::hooks::{ConfirmGate, LogEvent, NullObserver, SyncObserver};
use crate::log::SyncLog;
use crate::record::{ChangedRecord, FileRecord};
use crate::store::Store;

/// Default log file name, resolved relative to the working directory
pub const DEFAULT_LOG_FILE: &str = "sync.json";

/// Options for a sync run
pub struct SyncOptions {
    /// Directory tree to scan
    pub entry: PathBuf,
    /// Log file path; relative paths resolve against `cwd`
    pub log_file: PathBuf,
    /// Working directory for resolving `log_file`; defaults to the process
    /// working directory
    pub cwd: Option<PathBuf>,
    /// Whether to persist the log after a successful sync
    pub save_log: bool,
    /// Listing filters and ordering
    pub listing: ListingOptions,
}

impl SyncOptions {
    /// Options for scanning `entry` with defaults everywhere else.
    pub fn new(entry: impl Into<PathBuf>) -> Self {
        Self {
            entry: entry.into(),
            log_file: PathBuf::from(DEFAULT_LOG_FILE),
            cwd: None,
            save_log: true,
            listing: ListingOptions::default(),
        }
    }

    /// Use a different log file path.
    pub fn with_log_file(mut self, log_file: impl Into<PathBuf>) -> Self {
        self.log_file = log_file.into();
        self
    }

    /// Resolve relative log paths against this directory instead of the
    /// process working directory.
    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    /// Disable log persistence; the run still reports what it synced.
    pub fn without_save_log(mut self) -> Self {
        self.save_log = false;
        self
    }

    /// Use the given listing filters and ordering.
    pub fn with_listing(mut self, listing: ListingOptions) -> Self {
        self.listing = listing;
        self
    }
}

/// Result of a sync run
#[derive(Debug)]
pub struct SyncOutcome {
    /// The full listing for the run
    pub files: Vec<FileRecord>,
    /// The changed-set, in listing order
    pub changed: Vec<ChangedRecord>,
    /// The log after the run (merged in memory; persisted only when enabled
    /// and something was committed)
    pub log: SyncLog,
    /// `false` only when an interactive confirmation was declined
    pub confirmed: bool,
}

/// Engine for one incremental sync run
///
/// The engine owns the [`SyncLog`] for the duration of the run; the store
/// never mutates it directly, it only returns fingerprints the engine merges.
pub struct SyncEngine<'a> {
    options: SyncOptions,
    store: &'a dyn Store,
    observer: &'a dyn SyncObserver,
    gate: Option<&'a dyn ConfirmGate>,
    criterion: &'a dyn ChangeCriterion,
}

impl<'a> SyncEngine<'a> {
    /// Create an engine with the default criterion, no observer, and no
    /// confirmation gate.
    pub fn new(options: SyncOptions, store: &'a dyn Store) -> Self {
        Self {
            options,
            store,
            observer: &NullObserver,
            gate: None,
            criterion: &DefaultCriterion,
        }
    }

    /// Attach an observer for stage notifications.
    pub fn with_observer(mut self, observer: &'a dyn SyncObserver) -> Self {
        self.observer = observer;
        self
    }

    /// Require confirmation from the given gate before invoking the store.
    pub fn with_gate(mut self, gate: &'a dyn ConfirmGate) -> Self {
        self.gate = Some(gate);
        self
    }

    /// Override the change-comparison criterion.
    pub fn with_criterion(mut self, criterion: &'a dyn ChangeCriterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// The resolved log file path for this run.
    pub fn log_path(&self) -> PathBuf {
        resolve_log_path(&self.options.log_file, self.options.cwd.as_deref())
    }

    /// List and detect without invoking the store or writing the log.
    ///
    /// # Errors
    ///
    /// Fails on a malformed log, an unreadable entry tree, or a hashing
    /// failure during detection.
    pub fn preview(&self) -> Result<SyncOutcome> {
        let (files, changed, log) = self.scan()?;
        Ok(SyncOutcome {
            files,
            changed,
            log,
            confirmed: true,
        })
    }

    /// Execute a full run.
    ///
    /// An empty changed-set returns immediately without touching the store
    /// or rewriting the log. A declined confirmation returns successfully
    /// with `confirmed = false` and zero side effects.
    ///
    /// # Errors
    ///
    /// Fails on a malformed log, listing or hashing failures, a wholesale
    /// store failure, or a log write failure. Per-key store failures are
    /// not errors; those keys simply stay unsynced.
    pub fn run(&self) -> Result<SyncOutcome> {
        let log_path = self.log_path();
        let (files, changed, mut log) = self.scan()?;

        if changed.is_empty() {
            tracing::debug!("no changed files; store not invoked");
            return Ok(SyncOutcome {
                files,
                changed,
                log,
                confirmed: true,
            });
        }

        if let Some(gate) = self.gate
            && !gate.confirm(&changed)?
        {
            tracing::debug!("confirmation declined; store not invoked");
            return Ok(SyncOutcome {
                files,
                changed,
                log,
                confirmed: false,
            });
        }

        let now = chrono::Utc::now().timestamp();
        let outcomes = self.store.sync(&changed)?;
        tracing::debug!(
            store = self.store.name(),
            requested = changed.len(),
            committed = outcomes.len(),
            "store sync complete"
        );

        if !outcomes.is_empty() {
            log.merge(&outcomes, now);
            self.observer.on_log(&LogEvent {
                files: &files,
                changed: &changed,
                outcomes: &outcomes,
                log: &log,
            });
            if self.options.save_log {
                log.save(&log_path)?;
            }
        }

        self.observer.on_sync(&LogEvent {
            files: &files,
            changed: &changed,
            outcomes: &outcomes,
            log: &log,
        });

        Ok(SyncOutcome {
            files,
            changed,
            log,
            confirmed: true,
        })
    }

    /// Shared first half of `preview` and `run`: load, list, detect.
    fn scan(&self) -> Result<(Vec<FileRecord>, Vec<ChangedRecord>, SyncLog)> {
        let log = SyncLog::load(&self.log_path())?;

        let files = list_files(&self.options.entry, &self.options.listing)?;
        self.observer.on_files(&files);

        let changed = detect_changes(&files, &log, self.criterion)?;
        self.observer.on_changed(&changed);

        Ok((files, changed, log))
    }
}

fn resolve_log_path(log_file: &Path, cwd: Option<&Path>) -> PathBuf {
    if log_file.is_absolute() {
        return log_file.to_path_buf();
    }
    match cwd {
        Some(cwd) => cwd.join(log_file),
        None => std::env::current_dir()
            .map(|cwd| cwd.join(log_file))
            .unwrap_or_else(|_| log_file.to_path_buf()),
    }
}
