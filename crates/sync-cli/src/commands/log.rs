//! The log command: summarize the persisted sync log

use std::path::PathBuf;

use sync_core::SyncLog;

use crate::commands::load_config;
use crate::error::Result;
use crate::report;

/// Run the log command
pub fn run_log(
    log_file: Option<PathBuf>,
    config_file: Option<PathBuf>,
    entries: bool,
) -> Result<()> {
    let config = load_config(config_file.as_ref())?;
    let path = log_file.unwrap_or_else(|| config.log_file.clone());

    let log = SyncLog::load(&path)?;
    report::print_log_summary(&log, entries);
    Ok(())
}
