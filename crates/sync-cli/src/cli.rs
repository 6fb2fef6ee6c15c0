//! CLI argument parsing using clap derive

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// syncman - incremental file synchronization to a pluggable destination
#[derive(Parser, Debug)]
#[command(name = "syncman")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// The command to run
    #[command(subcommand)]
    pub command: Commands,
}

/// Options shared by the scanning commands
#[derive(Args, Debug, Clone)]
pub struct ScanArgs {
    /// Entry directory to scan (defaults to the configured entry, then the
    /// current directory)
    pub entry: Option<PathBuf>,

    /// Keep only files with these extensions (repeatable)
    #[arg(short, long)]
    pub ext: Vec<String>,

    /// Glob patterns a file key must match (repeatable)
    #[arg(long)]
    pub include: Vec<String>,

    /// Glob patterns that exclude a file key (repeatable)
    #[arg(long)]
    pub exclude: Vec<String>,

    /// Sync log file (defaults to the configured value, then sync.json)
    #[arg(short, long)]
    pub log_file: Option<PathBuf>,

    /// Configuration file (defaults to sync.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Detect changed files and sync them to the destination store
    ///
    /// Examples:
    ///   syncman sync docs --dest /backup/docs
    ///   syncman sync --ext md --ext txt --yes
    ///   syncman sync -c project/sync.toml
    Sync {
        #[command(flatten)]
        scan: ScanArgs,

        /// Destination root for the local store
        #[arg(short, long)]
        dest: Option<PathBuf>,

        /// Do not persist the sync log after a successful sync
        #[arg(long)]
        no_save_log: bool,

        /// Skip the confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// Show what would sync without touching the store or the log
    Status {
        #[command(flatten)]
        scan: ScanArgs,
    },

    /// Summarize the persisted sync log
    Log {
        /// Sync log file (defaults to the configured value, then sync.json)
        #[arg(short, long)]
        log_file: Option<PathBuf>,

        /// Configuration file (defaults to sync.toml when present)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// List every entry instead of the summary line
        #[arg(long)]
        entries: bool,
    },
}
