//! sync-manager CLI
//!
//! The command-line interface for incremental file synchronization.

mod cli;
mod commands;
mod error;
mod interactive;
mod report;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::{Cli, Commands};
use error::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    match cli.command {
        Commands::Sync {
            scan,
            dest,
            no_save_log,
            yes,
        } => commands::run_sync(&scan, dest, no_save_log, yes),
        Commands::Status { scan } => commands::run_status(&scan),
        Commands::Log {
            log_file,
            config,
            entries,
        } => commands::run_log(log_file, config, entries),
    }
}
