//! Interactive confirmation prompt
//!
//! A single yes/no question over the changed-set: "y" (case-insensitive) or
//! an empty line confirms, anything else declines. One line of input, no
//! re-prompting.

use colored::Colorize;
use std::io::{self, BufRead, Write};

use sync_core::{ChangedRecord, ConfirmGate, is_affirmative};

/// [`ConfirmGate`] that asks on the terminal.
///
/// Blocks until a line of input arrives; non-interactive callers should use
/// [`sync_core::AutoConfirm`] instead.
pub struct PromptGate;

impl ConfirmGate for PromptGate {
    fn confirm(&self, _changed: &[ChangedRecord]) -> sync_core::Result<bool> {
        let prompt_failed = |e: io::Error| sync_core::Error::Confirm {
            message: e.to_string(),
        };

        print!("Are you sure you want to sync the above files? [y|enter|n] ");
        io::stdout().flush().map_err(prompt_failed)?;

        let mut answer = String::new();
        io::stdin().lock().read_line(&mut answer).map_err(prompt_failed)?;

        let confirmed = is_affirmative(&answer);
        if confirmed {
            println!("{}", "Yes".green());
        } else {
            println!("{}", "No".red());
        }
        Ok(confirmed)
    }
}
