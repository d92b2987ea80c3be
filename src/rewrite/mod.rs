//! Archive rewriting: extract a template while renaming its identifiers.
//!
//! ## Transformation
//!
//! For every archive entry:
//!
//! - The path gets a case-sensitive literal substitution of the project
//!   name, then of the namespace.
//! - File content gets a case-insensitive literal substitution of the
//!   project name, then of the namespace, then (if given) a case-sensitive
//!   substitution of the display label.
//! - The manifest additionally gets its icon references, label and
//!   `versionCode` adjusted (see [`manifest`]).
//!
//! Project name goes before namespace, so when one is a substring of the
//! other the project name wins.

pub mod archive;
pub mod manifest;
pub mod substitute;

pub use archive::Rewriter;
pub use manifest::ManifestPatch;

use crate::detect::{DetectedIdentifiers, detect_identifiers};
use crate::error::Result;
use std::path::Path;

/// Old and new value of one identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentifierPair {
    pub old: String,
    pub new: String,
}

impl IdentifierPair {
    pub fn new(old: impl Into<String>, new: impl Into<String>) -> Self {
        Self {
            old: old.into(),
            new: new.into(),
        }
    }

    pub fn is_change(&self) -> bool {
        self.old != self.new
    }
}

/// What an extraction wrote.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RewriteSummary {
    pub directories: usize,
    pub files: usize,
    pub manifest_patched: bool,
}

/// Result of a detect-then-rewrite run.
#[derive(Debug, Clone)]
pub struct AutoRewrite {
    pub detected: DetectedIdentifiers,
    pub summary: RewriteSummary,
}

/// Extracts `archive_path` into `dest` with explicit old/new identifiers.
pub fn rewrite_archive(
    archive_path: &Path,
    dest: &Path,
    project: IdentifierPair,
    namespace: IdentifierPair,
    label: Option<IdentifierPair>,
) -> Result<RewriteSummary> {
    Rewriter::new(project, namespace, label)?.extract(archive_path, dest)
}

/// Detects the template identifiers, then extracts with the new ones.
///
/// The new project name doubles as the new display label. Fails with
/// `InvalidInput` if the project name or namespace cannot be detected.
pub fn rewrite_archive_auto(
    archive_path: &Path,
    dest: &Path,
    new_project_name: &str,
    new_namespace: &str,
) -> Result<AutoRewrite> {
    let detected = detect_identifiers(archive_path)?;
    detected.require_identifiers()?;

    log::info!(
        "Detected project '{}' with namespace '{}'",
        detected.project_name,
        detected.namespace
    );

    let summary = rewrite_archive(
        archive_path,
        dest,
        IdentifierPair::new(&detected.project_name, new_project_name),
        IdentifierPair::new(&detected.namespace, new_namespace),
        Some(IdentifierPair::new(&detected.display_label, new_project_name)),
    )?;

    Ok(AutoRewrite { detected, summary })
}
