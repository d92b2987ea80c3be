//! User confirmation prompt for destructive inventory operations.
//!
//! Automatically skipped when `--yes` is specified; declined when stdin is
//! not a terminal.

use crate::error::Result;
use colored::Colorize;
use std::io::{self, IsTerminal, Write};
use std::path::Path;

/// Asks before deleting template `name` stored at `path`.
///
/// # Returns
///
/// - `Ok(true)` if user confirms or `skip` is set
/// - `Ok(false)` if user declines or stdin is not interactive
///
/// # Errors
///
/// Returns `Err` only on I/O errors reading stdin.
pub fn confirm_removal(name: &str, path: &Path, skip: bool) -> Result<bool> {
    if skip {
        return Ok(true);
    }

    if !io::stdin().is_terminal() {
        log::warn!("Non-interactive terminal detected. Use --yes to confirm automatically.");
        return Ok(false);
    }

    println!("\n{}", "Remove Template:".bold().cyan());
    println!("  {} {}", "Name:".bold(), name.yellow());
    println!("  {} {}", "File:".bold(), path.display().to_string().dimmed());
    println!();

    print!("{} {} ", "Continue?".bold(), "(y/N)".dimmed());
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin().read_line(&mut response)?;

    let confirmed =
        response.trim().eq_ignore_ascii_case("y") || response.trim().eq_ignore_ascii_case("yes");

    if !confirmed {
        log::info!("Removal cancelled by user");
    }

    Ok(confirmed)
}
