//! Local inventory of template archives.
//!
//! A template is a `<name>.zip` file directly inside the templates directory.

use crate::error::{Result, TemplateError};

use ignore::WalkBuilder;
use std::ffi::OsStr;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use zip::CompressionMethod;
use zip::write::FileOptions;

const TEMPLATE_EXTENSION: &str = "zip";

/// Names of the templates in `templates_dir`, sorted. A missing directory has none.
pub fn list_templates(templates_dir: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(templates_dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(TemplateError::io_at("read", templates_dir, e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        let path = entry.path();
        if !entry.file_type()?.is_file()
            || path.extension().and_then(|e| e.to_str()) != Some(TEMPLATE_EXTENSION)
        {
            continue;
        }
        if let Some(stem) = path.file_stem() {
            names.push(stem.to_string_lossy().into_owned());
        }
    }

    names.sort();
    Ok(names)
}

/// Path of the archive for template `name`.
pub fn template_path(templates_dir: &Path, name: &str) -> PathBuf {
    templates_dir.join(format!("{}.{}", name, TEMPLATE_EXTENSION))
}

/// Resolves a template argument: an existing file is used as is, anything
/// else is looked up by name in `templates_dir`.
pub fn resolve_template(templates_dir: &Path, template: &str) -> Result<PathBuf> {
    let direct = Path::new(template);
    if direct.is_file() {
        return Ok(direct.to_path_buf());
    }

    let named = template_path(templates_dir, template);
    if named.is_file() {
        Ok(named)
    } else {
        Err(TemplateError::TemplateNotFound(template.to_string()))
    }
}

/// Zips `source_dir` into the inventory under the directory's own name.
///
/// With `respect_ignore`, `.gitignore` and `.ignore` rules are honored so
/// build outputs stay out of the template. `.git` is never included.
/// Returns the new template's name.
pub fn add_template(
    templates_dir: &Path,
    source_dir: &Path,
    respect_ignore: bool,
) -> Result<String> {
    if !source_dir.is_dir() {
        return Err(TemplateError::Io(io::Error::new(
            io::ErrorKind::NotFound,
            format!("Not a directory: {}", source_dir.display()),
        )));
    }

    let name = source_dir
        .canonicalize()?
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| {
            TemplateError::InvalidName(
                source_dir.display().to_string(),
                "directory has no name".to_string(),
            )
        })?;

    fs::create_dir_all(templates_dir)
        .map_err(|e| TemplateError::io_at("create", templates_dir, e))?;

    let zip_path = template_path(templates_dir, &name);
    if zip_path.exists() {
        return Err(TemplateError::TemplateExists(name));
    }

    if let Err(e) = write_archive(&zip_path, source_dir, respect_ignore) {
        if let Err(cleanup) = fs::remove_file(&zip_path) {
            log::warn!("Could not remove partial {}: {}", zip_path.display(), cleanup);
        }
        return Err(e);
    }

    log::info!("Saved template '{}' to {}", name, zip_path.display());
    Ok(name)
}

/// Deletes template `name` from the inventory.
pub fn remove_template(templates_dir: &Path, name: &str) -> Result<()> {
    let path = template_path(templates_dir, name);
    match fs::remove_file(&path) {
        Ok(()) => {
            log::info!("Removed template {}", path.display());
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            Err(TemplateError::TemplateNotFound(name.to_string()))
        }
        Err(e) => Err(TemplateError::io_at("remove", &path, e)),
    }
}

fn write_archive(zip_path: &Path, source_dir: &Path, respect_ignore: bool) -> Result<()> {
    let file = fs::File::create(zip_path).map_err(|e| TemplateError::io_at("create", zip_path, e))?;
    let mut writer = zip::ZipWriter::new(file);

    let walker = WalkBuilder::new(source_dir)
        .hidden(false)
        .git_ignore(respect_ignore)
        .git_global(respect_ignore)
        .git_exclude(respect_ignore)
        .ignore(respect_ignore)
        .parents(respect_ignore)
        .require_git(false)
        .filter_entry(|e| e.file_name() != OsStr::new(".git"))
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = entry.map_err(anyhow::Error::from)?;
        let path = entry.path();
        let rel = path
            .strip_prefix(source_dir)
            .map_err(anyhow::Error::from)?;
        if rel.as_os_str().is_empty() {
            continue;
        }

        let entry_name = rel
            .components()
            .map(|c| c.as_os_str().to_string_lossy())
            .collect::<Vec<_>>()
            .join("/");
        let metadata = entry.metadata().map_err(anyhow::Error::from)?;
        let options = FileOptions::default()
            .compression_method(CompressionMethod::Deflated)
            .unix_permissions(permission_bits(&metadata));

        if metadata.is_dir() {
            writer.add_directory(format!("{}/", entry_name), options)?;
        } else if metadata.is_file() {
            writer.start_file(entry_name.as_str(), options)?;
            let mut source =
                fs::File::open(path).map_err(|e| TemplateError::io_at("open", path, e))?;
            io::copy(&mut source, &mut writer)?;
        } else {
            log::debug!("Skipping special file {}", path.display());
            continue;
        }

        log::debug!("Added {}", entry_name);
    }

    writer.finish()?;
    Ok(())
}

#[cfg(unix)]
fn permission_bits(metadata: &fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o777
}

#[cfg(not(unix))]
fn permission_bits(metadata: &fs::Metadata) -> u32 {
    if metadata.is_dir() { 0o755 } else { 0o644 }
}
