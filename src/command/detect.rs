use crate::detect::detect_identifiers;
use crate::error::Result;
use crate::templates::resolve_template;

use clap::Parser;
use colored::Colorize;
use std::path::Path;

/// Arguments for the `detect` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct DetectArgs {
    /// Template name or path to a template archive
    pub template: String,
}

pub fn execute(args: DetectArgs, templates_dir: &Path) -> Result<()> {
    let archive = resolve_template(templates_dir, &args.template)?;
    let found = detect_identifiers(&archive)?;

    println!("\n{} {}", "Template:".bold().cyan(), archive.display());
    for (label, value) in [
        ("Project name:", &found.project_name),
        ("Namespace:", &found.namespace),
        ("Label:", &found.display_label),
    ] {
        let label = format!("{:<14}", label);
        if value.is_empty() {
            println!("  {} {}", label.bold(), "(not found)".dimmed());
        } else {
            println!("  {} {}", label.bold(), value.as_str().green());
        }
    }

    if found.require_identifiers().is_err() {
        println!(
            "\n{}",
            "This template cannot be generated from: identifiers are missing.".yellow()
        );
    }

    Ok(())
}
