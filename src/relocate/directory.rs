//! Moving the namespace directory tree to match a new namespace.
//!
//! Relocation is planned first, then executed as a single rename, then the
//! ancestors left empty by the move are pruned. Success is defined solely by
//! the rename: pruning is best-effort and only ever logs.

use crate::error::{Result, TemplateError};
use crate::layout;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Source and target of a namespace move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelocationPlan {
    pub from: PathBuf,
    pub to: PathBuf,
    java_root: PathBuf,
}

/// An executed relocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relocation {
    pub from: PathBuf,
    pub to: PathBuf,
    pub pruned: Vec<PathBuf>,
}

impl RelocationPlan {
    /// Plans the move. Returns `None` if both namespaces map to the same directory.
    pub fn new(
        project_root: &Path,
        old_namespace: &str,
        new_namespace: &str,
    ) -> Result<Option<Self>> {
        let from = layout::namespace_dir(project_root, old_namespace)?;
        let to = layout::namespace_dir(project_root, new_namespace)?;

        if from == to {
            return Ok(None);
        }

        Ok(Some(Self {
            from,
            to,
            java_root: layout::java_root(project_root),
        }))
    }

    /// True when one directory contains the other, so a direct rename is impossible.
    fn is_nested(&self) -> bool {
        self.to.starts_with(&self.from) || self.from.starts_with(&self.to)
    }

    /// Executes the move, then prunes emptied ancestors of the old directory.
    pub fn execute(&self) -> Result<Relocation> {
        if !self.from.is_dir() {
            return Err(TemplateError::Io(std::io::Error::new(
                ErrorKind::NotFound,
                format!("Namespace directory does not exist: {}", self.from.display()),
            )));
        }

        if self.is_nested() {
            self.move_via_staging()?;
        } else {
            self.move_direct(&self.from)?;
        }

        log::info!("Moved {} → {}", self.from.display(), self.to.display());

        Ok(Relocation {
            from: self.from.clone(),
            to: self.to.clone(),
            pruned: self.prune_ancestors(),
        })
    }

    fn move_direct(&self, source: &Path) -> Result<()> {
        if let Some(parent) = self.to.parent() {
            fs::create_dir_all(parent).map_err(|e| TemplateError::io_at("create", parent, e))?;
        }

        fs::rename(source, &self.to).map_err(|e| {
            TemplateError::Io(std::io::Error::new(
                e.kind(),
                format!(
                    "Failed to move {} → {}: {}",
                    source.display(),
                    self.to.display(),
                    e
                ),
            ))
        })
    }

    /// Parks the old tree beside the java root's children, then moves it into place.
    fn move_via_staging(&self) -> Result<()> {
        let leaf = self
            .from
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let staging = self.java_root.join(format!(".{}.relocating", leaf));

        if staging.exists() {
            return Err(TemplateError::DirectoryExists(staging));
        }

        log::debug!("Staging {} at {}", self.from.display(), staging.display());
        fs::rename(&self.from, &staging).map_err(|e| TemplateError::io_at("stage", &self.from, e))?;

        if let Err(e) = self.move_direct(&staging) {
            if let Some(parent) = self.from.parent() {
                let _ = fs::create_dir_all(parent);
            }
            if let Err(restore) = fs::rename(&staging, &self.from) {
                log::warn!(
                    "Could not restore {} from {}: {}",
                    self.from.display(),
                    staging.display(),
                    restore
                );
            }
            return Err(e);
        }

        Ok(())
    }

    /// Removes emptied directories from the old leaf's parent up to the java root.
    ///
    /// Stops at the first directory that cannot be removed.
    fn prune_ancestors(&self) -> Vec<PathBuf> {
        let mut pruned = Vec::new();
        let mut current = self.from.parent();

        while let Some(dir) = current {
            if dir == self.java_root || !dir.starts_with(&self.java_root) {
                break;
            }

            match fs::remove_dir(dir) {
                Ok(()) => {
                    log::debug!("Pruned empty directory {}", dir.display());
                    pruned.push(dir.to_path_buf());
                }
                Err(e)
                    if matches!(
                        e.kind(),
                        ErrorKind::DirectoryNotEmpty | ErrorKind::NotFound
                    ) =>
                {
                    log::debug!("Stopped pruning at {}: {}", dir.display(), e);
                    break;
                }
                Err(e) => {
                    log::warn!("Could not prune {}: {}", dir.display(), e);
                    break;
                }
            }

            current = dir.parent();
        }

        pruned
    }
}
