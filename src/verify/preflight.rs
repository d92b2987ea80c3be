//! Pre-flight checks performed before generating a project.
//!
//! Unlike `rules`, these functions may perform I/O (checking that the
//! destination is free, that the icon exists).

use crate::error::{Result, TemplateError};
use crate::verify::rules::{validate_namespace, validate_project_name};
use std::fs;
use std::path::Path;

/// Fails if `dest` exists and is not an empty directory.
///
/// With `force`, an existing destination is accepted and extraction writes
/// over it.
pub fn check_destination(dest: &Path, force: bool) -> Result<()> {
    if !dest.exists() {
        return Ok(());
    }

    if !dest.is_dir() {
        return Err(TemplateError::Io(std::io::Error::new(
            std::io::ErrorKind::AlreadyExists,
            format!("Destination is not a directory: {}", dest.display()),
        )));
    }

    let is_empty = fs::read_dir(dest)
        .map_err(|e| TemplateError::io_at("read", dest, e))?
        .next()
        .is_none();

    if is_empty {
        return Ok(());
    }

    if force {
        log::warn!("Writing into non-empty directory {}", dest.display());
        Ok(())
    } else {
        Err(TemplateError::DirectoryExists(dest.to_path_buf()))
    }
}

/// Performs all checks before a generate run.
///
/// # Checks Performed
///
/// 1. New project name and namespace conform to the rules
/// 2. Icon image, if given, is an existing file
/// 3. Destination is free (or `force`)
pub fn preflight_checks(
    project_name: &str,
    namespace: &str,
    icon: Option<&Path>,
    dest: &Path,
    force: bool,
) -> Result<()> {
    validate_project_name(project_name)?;
    validate_namespace(namespace)?;

    if let Some(icon) = icon {
        if !icon.is_file() {
            return Err(TemplateError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("Icon image does not exist: {}", icon.display()),
            )));
        }
    }

    check_destination(dest, force)
}
