//! Command implementations

mod log;
mod status;
mod sync;

pub use log::run_log;
pub use status::run_status;
pub use sync::run_sync;

use std::path::PathBuf;

use sync_core::{SyncConfig, SyncOptions};
use sync_fs::ListingOptions;

use crate::cli::ScanArgs;
use crate::error::Result;

/// Load the effective configuration for a command.
///
/// An explicitly named config file must exist; the implicit `sync.toml`
/// lookup in the working directory falls back to defaults when absent.
pub(crate) fn load_config(explicit: Option<&PathBuf>) -> Result<SyncConfig> {
    let config = match explicit {
        Some(path) => SyncConfig::load(path)?,
        None => SyncConfig::load_or_default(&PathBuf::from(sync_core::CONFIG_FILE))?,
    };
    Ok(config)
}

/// Merge CLI scan flags over the configuration into engine options.
///
/// Precedence per field: CLI flag, then config value, then default. The
/// entry falls back to the current directory.
pub(crate) fn scan_options(scan: &ScanArgs, config: &SyncConfig) -> Result<SyncOptions> {
    let entry = scan
        .entry
        .clone()
        .or_else(|| config.entry.clone())
        .map_or_else(std::env::current_dir, Ok)?;

    let extensions = if scan.ext.is_empty() {
        config.ext.clone()
    } else {
        scan.ext.clone()
    };
    let include = if scan.include.is_empty() {
        config.include.clone()
    } else {
        scan.include.clone()
    };
    let exclude = if scan.exclude.is_empty() {
        config.exclude.clone()
    } else {
        scan.exclude.clone()
    };

    let listing = ListingOptions::default()
        .with_extensions(extensions)
        .with_include(include)
        .with_exclude(exclude);

    let log_file = scan.log_file.clone().unwrap_or_else(|| config.log_file.clone());

    Ok(SyncOptions::new(entry)
        .with_log_file(log_file)
        .with_listing(listing))
}
