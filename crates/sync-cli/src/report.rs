//! Console report for changed files
//!
//! One line naming the changed-file count, then one aligned line per file:
//! key, size, modification time, hash, and destination path. Purely
//! observational; nothing downstream consumes this output.

use colored::Colorize;

use sync_core::{ChangedRecord, SyncLog};

/// Print the changed-file count and the aligned per-file listing.
pub fn print_changed(changed: &[ChangedRecord]) {
    if changed.is_empty() {
        println!("There are no files to sync yet!");
        return;
    }

    println!(
        "There are {} file(s) to be synced:",
        changed.len().to_string().cyan()
    );

    let key_width = changed.iter().map(|c| c.key.len()).max().unwrap_or(0);
    let size_width = changed
        .iter()
        .map(|c| c.size.to_string().len())
        .max()
        .unwrap_or(0);

    for record in changed {
        let ver_path = record.ver_path.as_deref().unwrap_or("-");
        println!(
            "{}{}{}{}{}{}{}{}{}",
            format!("{:<key_width$}", record.key).cyan(),
            ": ".dimmed(),
            format!("{:>size_width$}", record.size).blue(),
            ", ".dimmed(),
            format_mtime(record.mtime).green(),
            ", ".dimmed(),
            record.hash.yellow(),
            " => ".dimmed(),
            ver_path.magenta(),
        );
    }
}

/// Print a one-line summary after the store has run.
pub fn print_synced(committed: usize, requested: usize) {
    if committed == requested {
        println!("{} Synced {} file(s).", "OK".green().bold(), committed);
    } else {
        println!(
            "{} Synced {} of {} file(s); the rest retry on the next run.",
            "PARTIAL".yellow().bold(),
            committed,
            requested
        );
    }
}

/// Print the log summary for `syncman log`.
pub fn print_log_summary(log: &SyncLog, entries: bool) {
    let last_sync = match log.last_sync {
        Some(ts) => format_mtime(ts),
        None => "never".to_string(),
    };
    println!(
        "{} entr{} in log, last sync: {}",
        log.len().to_string().cyan(),
        if log.len() == 1 { "y" } else { "ies" },
        last_sync.green()
    );

    if entries {
        let key_width = log.files.keys().map(String::len).max().unwrap_or(0);
        for (key, entry) in &log.files {
            let ver_path = entry.ver_path.as_deref().unwrap_or("-");
            println!(
                "{}{}{}{}{}{}{}",
                format!("{key:<key_width$}").cyan(),
                ": ".dimmed(),
                entry.hash.yellow(),
                ", ".dimmed(),
                format_mtime(entry.mtime).green(),
                " => ".dimmed(),
                ver_path.magenta(),
            );
        }
    }
}

/// Format an epoch-seconds timestamp as local `YYYY-MM-DD HH:MM:SS`.
pub fn format_mtime(epoch: i64) -> String {
    match chrono::DateTime::from_timestamp(epoch, 0) {
        Some(utc) => utc
            .with_timezone(&chrono::Local)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => epoch.to_string(),
    }
}
