use crate::error::{Result, TemplateError};
use crate::templates::{add_template, list_templates, remove_template, template_path};
use crate::verify::confirm_removal;

use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Arguments for the `templates` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct TemplatesArgs {
    #[command(subcommand)]
    pub action: TemplatesAction,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TemplatesAction {
    /// List available templates
    List,
    /// Zip a project directory into a new template
    Add {
        /// Project directory to store as a template
        source: PathBuf,

        /// Include files excluded by .gitignore (build outputs etc.)
        #[arg(long)]
        no_ignore: bool,
    },
    /// Delete a template
    Remove {
        /// Template name
        name: String,

        /// Skip interactive confirmation
        #[arg(long = "yes", short = 'y')]
        skip_confirmation: bool,
    },
}

pub fn execute(args: TemplatesArgs, templates_dir: &Path) -> Result<()> {
    match args.action {
        TemplatesAction::List => {
            let names = list_templates(templates_dir)?;
            if names.is_empty() {
                println!(
                    "{}",
                    format!("No templates found in {}", templates_dir.display()).yellow()
                );
            }
            for name in names {
                println!("{}", name);
            }
        }
        TemplatesAction::Add { source, no_ignore } => {
            let name = add_template(templates_dir, &source, !no_ignore)?;
            println!(
                "{:>12} template {} ({})",
                "Added".green().bold(),
                name.as_str().green(),
                template_path(templates_dir, &name).display()
            );
        }
        TemplatesAction::Remove {
            name,
            skip_confirmation,
        } => {
            let path = template_path(templates_dir, &name);
            if !path.is_file() {
                return Err(TemplateError::TemplateNotFound(name));
            }

            if !confirm_removal(&name, &path, skip_confirmation)? {
                println!("\n{}", "Operation cancelled.".yellow());
                return Err(TemplateError::Cancelled);
            }

            remove_template(templates_dir, &name)?;
            println!("{:>12} template {}", "Removed".green().bold(), name.as_str().yellow());
        }
    }

    Ok(())
}
