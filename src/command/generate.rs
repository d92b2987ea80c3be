//! Orchestration of project generation.
//!
//! Stages run in order: detect + rewrite, namespace relocation, icon
//! generation, manifest icon ensuring. Each stage fails fast; a failed run
//! leaves a partially written destination behind.

use crate::detect::DetectedIdentifiers;
use crate::error::{Result, TemplateError};
use crate::icons::{IconReport, ensure_manifest_icons, generate_icons};
use crate::layout;
use crate::relocate::{Relocation, RelocationPlan, fix_package_declarations};
use crate::rewrite::{AutoRewrite, RewriteSummary, rewrite_archive_auto};
use crate::templates::resolve_template;
use crate::verify::preflight_checks;

use clap::Parser;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// Arguments for the `generate` subcommand.
#[derive(Parser, Debug, Clone)]
pub struct GenerateArgs {
    /// Template name or path to a template archive
    pub template: String,

    /// New project name (also used as the app label)
    #[arg(long, short = 'n')]
    pub name: String,

    /// New package / application id, e.g. com.example.app
    #[arg(long, short = 'p', value_name = "NAMESPACE")]
    pub package: String,

    /// Image to generate launcher icons from
    #[arg(long, value_name = "IMAGE")]
    pub icon: Option<PathBuf>,

    /// Output directory (defaults to ~/AndroidStudioProjects/<NAME>)
    #[arg(long, value_name = "DIR")]
    pub dest: Option<PathBuf>,

    /// Write into a non-empty output directory
    #[arg(long)]
    pub force: bool,
}

/// Everything a generate run did.
#[derive(Debug, Clone)]
pub struct GenerateReport {
    pub detected: DetectedIdentifiers,
    pub rewrite: RewriteSummary,
    pub relocation: Option<Relocation>,
    pub declarations: Vec<PathBuf>,
    pub icons: Option<IconReport>,
    pub manifest_icons_added: bool,
}

pub fn execute(args: GenerateArgs, templates_dir: &Path) -> Result<()> {
    let dest = match &args.dest {
        Some(dest) => dest.clone(),
        None => default_destination(&args.name)?,
    };

    preflight_checks(
        &args.name,
        &args.package,
        args.icon.as_deref(),
        &dest,
        args.force,
    )?;

    let archive = resolve_template(templates_dir, &args.template)?;
    log::debug!("Using template {}", archive.display());

    let report = generate_project(
        &archive,
        &dest,
        &args.name,
        &args.package,
        args.icon.as_deref(),
    )?;

    print_summary(&report, &args.name, &args.package, &dest);

    println!(
        "\n{} {} → {}",
        "✓ Successfully generated".green().bold(),
        report.detected.project_name.as_str().yellow(),
        args.name.as_str().green().bold()
    );
    println!("  {}", dest.display().to_string().dimmed());

    Ok(())
}

/// Generates a project from `archive` into `dest`.
///
/// The icon path is threaded through explicitly; without one the template's
/// icons are kept and only the manifest references are ensured.
pub fn generate_project(
    archive: &Path,
    dest: &Path,
    name: &str,
    namespace: &str,
    icon: Option<&Path>,
) -> Result<GenerateReport> {
    let AutoRewrite { detected, summary } = rewrite_archive_auto(archive, dest, name, namespace)?;

    let mut report = GenerateReport {
        detected,
        rewrite: summary,
        relocation: None,
        declarations: Vec::new(),
        icons: None,
        manifest_icons_added: false,
    };

    if report.detected.namespace != namespace {
        match RelocationPlan::new(dest, &report.detected.namespace, namespace)? {
            Some(plan) if plan.from.is_dir() => {
                report.relocation = Some(plan.execute()?);
            }
            Some(plan) => {
                log::warn!(
                    "No sources at {}, skipping namespace relocation",
                    plan.from.display()
                );
            }
            None => {}
        }

        report.declarations = fix_package_declarations(dest, namespace)?;
    }

    if let Some(icon) = icon {
        report.icons = Some(generate_icons(dest, icon)?);
    }

    let manifest = layout::manifest_path(dest);
    if manifest.is_file() {
        report.manifest_icons_added = ensure_manifest_icons(&manifest)?;
    } else {
        log::warn!(
            "No manifest at {}, skipping icon attributes",
            manifest.display()
        );
    }

    Ok(report)
}

fn default_destination(name: &str) -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or_else(|| {
        TemplateError::InvalidInput("cannot determine home directory; pass --dest".to_string())
    })?;
    Ok(home.join("AndroidStudioProjects").join(name))
}

fn print_summary(report: &GenerateReport, name: &str, namespace: &str, dest: &Path) {
    let display_path = |path: &Path| -> String {
        let relative = pathdiff::diff_paths(path, dest).unwrap_or_else(|| path.to_path_buf());
        relative.to_string_lossy().replace('\\', "/")
    };

    println!("\n{}", "Changes applied:".green().bold());

    println!(
        "\n{} Extracted {} file{} and {} director{}",
        "📦".bold(),
        report.rewrite.files,
        if report.rewrite.files == 1 { "" } else { "s" },
        report.rewrite.directories,
        if report.rewrite.directories == 1 { "y" } else { "ies" }
    );
    for (old, new) in [
        (report.detected.project_name.as_str(), name),
        (report.detected.namespace.as_str(), namespace),
    ] {
        println!("   {} {} → {}", "✓".green(), old.yellow(), new.green());
    }
    if report.rewrite.manifest_patched {
        println!("   {} manifest label, icons and versionCode", "✓".green());
    }

    if let Some(relocation) = &report.relocation {
        println!("\n{} Sources", "📁".bold());
        println!(
            "   {} → {}",
            display_path(&relocation.from).yellow(),
            display_path(&relocation.to).green()
        );
        for pruned in &relocation.pruned {
            println!("   {} removed {}", "✓".green(), display_path(pruned).dimmed());
        }
    }

    if !report.declarations.is_empty() {
        println!(
            "\n{} Package declarations ({} file{})",
            "📝".bold(),
            report.declarations.len(),
            if report.declarations.len() == 1 { "" } else { "s" }
        );
        for path in report.declarations.iter().take(8) {
            println!("   {} {}", "✓".green(), display_path(path).dimmed());
        }
        if report.declarations.len() > 8 {
            println!(
                "   {} {} more...",
                "✓".green(),
                report.declarations.len() - 8
            );
        }
    }

    if let Some(icons) = &report.icons {
        println!(
            "\n{} Launcher icons ({} written, {} removed)",
            "🖼".bold(),
            icons.written.len(),
            icons.removed.len()
        );
    }

    if report.manifest_icons_added {
        println!("   {} added icon attributes to manifest", "✓".green());
    }
}
