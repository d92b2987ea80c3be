//! Rewriting `package` declarations after a namespace move.

use crate::error::{Result, TemplateError};
use crate::layout;

use regex::bytes::{NoExpand, Regex};
use std::fs;
use std::path::{Path, PathBuf};

/// Points the package declaration of every Kotlin and Java source under the
/// java root at `new_namespace`.
///
/// Every source gets exactly `package <new_namespace>`, whatever directory
/// it lives in. Only the first line-anchored `package` declaration of a file
/// is rewritten; a file with a second top-level declaration keeps it
/// unchanged. Content is handled as bytes, so sources that are not valid
/// UTF-8 are still fixed. Files already declaring the right package are not
/// written. Returns the files changed.
pub fn fix_package_declarations(
    project_root: &Path,
    new_namespace: &str,
) -> Result<Vec<PathBuf>> {
    let java_root = layout::java_root(project_root);
    let declaration = Regex::new(r"(?m)^package\s+[\w.]+")?;
    let replacement = format!("package {}", new_namespace);
    let mut changed = Vec::new();

    if !java_root.is_dir() {
        log::debug!("No java root at {}", java_root.display());
        return Ok(changed);
    }

    for entry in walkdir::WalkDir::new(&java_root).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() || !is_source_file(entry.path()) {
            continue;
        }

        let path = entry.path();
        let content = fs::read(path).map_err(|e| TemplateError::io_at("read", path, e))?;
        let updated = declaration.replacen(&content, 1, NoExpand(replacement.as_bytes()));

        if updated[..] != content[..] {
            fs::write(path, &updated[..]).map_err(|e| TemplateError::io_at("write", path, e))?;
            log::debug!("Updated package declaration in {}", path.display());
            changed.push(path.to_path_buf());
        }
    }

    Ok(changed)
}

fn is_source_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| layout::SOURCE_EXTENSIONS.contains(&ext))
}
