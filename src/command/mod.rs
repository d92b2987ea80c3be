pub mod detect;
pub mod generate;
pub mod templates;

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Command {
    /// Create a new project from a template, renaming its identifiers.
    Generate(generate::GenerateArgs),
    /// Show the identifiers detected in a template.
    Detect(detect::DetectArgs),
    /// Manage the local template inventory.
    Templates(templates::TemplatesArgs),
}
