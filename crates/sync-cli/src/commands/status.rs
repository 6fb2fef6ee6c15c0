//! The status command: detection only, no store, no log writes

use sync_core::{Store, SyncEngine};

use crate::cli::ScanArgs;
use crate::commands::{load_config, scan_options};
use crate::error::Result;
use crate::report;

/// Store that must never be called; `status` only previews.
struct NeverStore;

impl Store for NeverStore {
    fn name(&self) -> &str {
        "none"
    }

    fn sync(
        &self,
        _changed: &[sync_core::ChangedRecord],
    ) -> sync_core::Result<std::collections::BTreeMap<String, sync_core::LogEntry>> {
        unreachable!("status never invokes the store")
    }
}

/// Run the status command
pub fn run_status(scan: &ScanArgs) -> Result<()> {
    let config = load_config(scan.config.as_ref())?;
    let options = scan_options(scan, &config)?;

    let store = NeverStore;
    let outcome = SyncEngine::new(options, &store).preview()?;
    report::print_changed(&outcome.changed);
    Ok(())
}
