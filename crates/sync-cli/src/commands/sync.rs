//! The sync command: detect, confirm, transfer, reconcile

use std::path::PathBuf;

use sync_core::{
    AutoConfirm, ChangedRecord, ConfirmGate, LocalStore, LogEvent, SyncEngine, SyncObserver,
};

use crate::cli::ScanArgs;
use crate::commands::{load_config, scan_options};
use crate::error::{CliError, Result};
use crate::interactive::PromptGate;
use crate::report;

/// Observer that drives the console report from the engine's own stage
/// transitions, so the listing prints before the confirmation gate blocks.
struct ReportObserver;

impl SyncObserver for ReportObserver {
    fn on_changed(&self, changed: &[ChangedRecord]) {
        report::print_changed(changed);
    }

    fn on_sync(&self, event: &LogEvent<'_>) {
        report::print_synced(event.outcomes.len(), event.changed.len());
    }
}

/// Run the sync command
pub fn run_sync(
    scan: &ScanArgs,
    dest: Option<PathBuf>,
    no_save_log: bool,
    yes: bool,
) -> Result<()> {
    let config = load_config(scan.config.as_ref())?;

    let mut options = scan_options(scan, &config)?;
    if no_save_log || !config.save_log {
        options = options.without_save_log();
    }

    let dest = dest.or_else(|| config.dest.clone()).ok_or_else(|| {
        CliError::user("No destination configured; pass --dest or set `dest` in sync.toml")
    })?;
    let store = LocalStore::new(dest);

    let prompt = PromptGate;
    let auto = AutoConfirm;
    let gate: &dyn ConfirmGate = if yes || !config.confirm { &auto } else { &prompt };

    let observer = ReportObserver;
    SyncEngine::new(options, &store)
        .with_observer(&observer)
        .with_gate(gate)
        .run()?;
    Ok(())
}
