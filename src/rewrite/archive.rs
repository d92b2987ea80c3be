//! Streaming extraction of a template archive with identifier rewriting.
//!
//! Entries are processed one at a time in archive order: read, transform,
//! write. Any failure aborts the whole extraction; entries already written
//! stay on disk.

use super::manifest::ManifestPatch;
use super::substitute::Literal;
use super::{IdentifierPair, RewriteSummary};
use crate::error::{Result, TemplateError};
use crate::layout;

use std::fs;
use std::io::{Read, Write};
use std::path::{Component, Path, PathBuf};

const DEFAULT_DIR_MODE: u32 = 0o755;
const DEFAULT_FILE_MODE: u32 = 0o644;

/// Compiled rewrite for one extraction pass.
#[derive(Debug, Clone)]
pub struct Rewriter {
    project: IdentifierPair,
    namespace: IdentifierPair,
    label: Option<IdentifierPair>,
    project_content: Literal,
    namespace_content: Literal,
    label_content: Option<Literal>,
    manifest: ManifestPatch,
}

impl Rewriter {
    /// Compiles the substitutions.
    ///
    /// The old project name and old namespace must be non-empty. The old
    /// label may be empty, in which case only the manifest label is forced.
    pub fn new(
        project: IdentifierPair,
        namespace: IdentifierPair,
        label: Option<IdentifierPair>,
    ) -> Result<Self> {
        if project.old.is_empty() {
            return Err(TemplateError::InvalidInput(
                "old project name cannot be empty".to_string(),
            ));
        }
        if namespace.old.is_empty() {
            return Err(TemplateError::InvalidInput(
                "old namespace cannot be empty".to_string(),
            ));
        }

        let label_content = match &label {
            Some(pair) if !pair.old.is_empty() => Some(Literal::exact(&pair.old)?),
            _ => None,
        };

        Ok(Self {
            project_content: Literal::case_insensitive(&project.old)?,
            namespace_content: Literal::case_insensitive(&namespace.old)?,
            label_content,
            manifest: ManifestPatch::new()?,
            project,
            namespace,
            label,
        })
    }

    /// Rewrites an archive entry path. Case-sensitive, project name first.
    pub fn rewrite_path(&self, name: &str) -> String {
        name.replace(&self.project.old, &self.project.new)
            .replace(&self.namespace.old, &self.namespace.new)
    }

    /// Rewrites entry content stored at `dest_name`.
    ///
    /// Returns the new bytes and whether the manifest edits were applied.
    pub fn rewrite_content(&self, dest_name: &str, content: &[u8]) -> (Vec<u8>, bool) {
        let out = self.project_content.replace_all(content, &self.project.new);
        let mut out = self.namespace_content.replace_all(&out, &self.namespace.new);

        if let (Some(literal), Some(pair)) = (&self.label_content, &self.label) {
            out = literal.replace_all(&out, &pair.new);
        }

        if layout::is_manifest(dest_name) {
            let label = self.label.as_ref().map(|pair| pair.new.as_str());
            (self.manifest.apply(&out, label), true)
        } else {
            (out, false)
        }
    }

    /// Extracts `archive_path` into `dest`, rewriting every entry.
    pub fn extract(&self, archive_path: &Path, dest: &Path) -> Result<RewriteSummary> {
        let file = fs::File::open(archive_path)
            .map_err(|e| TemplateError::io_at("open", archive_path, e))?;
        let mut archive = zip::ZipArchive::new(file)?;
        let mut summary = RewriteSummary::default();

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            let dest_name = self.rewrite_path(entry.name());
            let dest_path = dest.join(checked_relative(&dest_name)?);
            let mode = entry.unix_mode().map(|m| m & 0o777);

            if entry.is_dir() {
                create_dir_all_with_mode(&dest_path, mode.unwrap_or(DEFAULT_DIR_MODE))
                    .map_err(|e| TemplateError::io_at("create", &dest_path, e))?;
                summary.directories += 1;
                log::debug!("Created directory {}", dest_path.display());
                continue;
            }

            if let Some(parent) = dest_path.parent() {
                create_dir_all_with_mode(parent, DEFAULT_DIR_MODE)
                    .map_err(|e| TemplateError::io_at("create", parent, e))?;
            }

            let mut content = Vec::new();
            entry.read_to_end(&mut content)?;

            let (content, patched) = self.rewrite_content(&dest_name, &content);
            if patched {
                log::info!("Patched manifest {}", dest_path.display());
                summary.manifest_patched = true;
            }

            write_with_mode(&dest_path, &content, mode.unwrap_or(DEFAULT_FILE_MODE))
                .map_err(|e| TemplateError::io_at("write", &dest_path, e))?;
            summary.files += 1;
            log::debug!("{} -> {}", entry.name(), dest_path.display());
        }

        log::info!(
            "Extracted {} files and {} directories into {}",
            summary.files,
            summary.directories,
            dest.display()
        );
        Ok(summary)
    }
}

/// Accepts only paths that stay below the destination.
fn checked_relative(name: &str) -> Result<PathBuf> {
    let path = Path::new(name);
    let safe = path
        .components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir));

    if safe {
        Ok(path.to_path_buf())
    } else {
        Err(TemplateError::UnsafeEntry(name.to_string()))
    }
}

fn create_dir_all_with_mode(path: &Path, mode: u32) -> std::io::Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder.create(path)
}

fn write_with_mode(path: &Path, content: &[u8], mode: u32) -> std::io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut file = options.open(path)?;
    file.write_all(content)
}
