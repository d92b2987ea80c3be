//! Launcher icon generation from a single source image.
//!
//! Produces `ic_launcher.png` and `ic_launcher_round.png` in each density
//! qualifier directory, then removes files that would shadow them:
//! same-named `.webp` rasters and vector/adaptive `ic_launcher*.xml`
//! definitions under `mipmap-*` and `drawable*`.

pub mod manifest;

pub use manifest::ensure_manifest_icons;

use crate::error::{Result, TemplateError};
use crate::layout::{self, ICON_DENSITIES, ICON_NAMES};

use image::imageops::FilterType;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Resource directory globs searched for placeholder icon definitions.
const PLACEHOLDER_DIRS: [&str; 2] = ["mipmap-*", "drawable*"];

/// Files touched by icon generation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IconReport {
    pub written: Vec<PathBuf>,
    pub removed: Vec<PathBuf>,
}

/// Writes resized launcher icons for every density into `project_root`.
///
/// Fails if the source image cannot be decoded; nothing is written then.
pub fn generate_icons(project_root: &Path, source_image: &Path) -> Result<IconReport> {
    let source = image::open(source_image)?;
    let res_root = layout::res_root(project_root);
    let mut report = IconReport::default();

    log::info!(
        "Generating launcher icons from {} ({}x{})",
        source_image.display(),
        source.width(),
        source.height()
    );

    for (qualifier, edge) in ICON_DENSITIES {
        let dir = res_root.join(qualifier);
        fs::create_dir_all(&dir).map_err(|e| TemplateError::io_at("create", &dir, e))?;

        let resized = source.resize_exact(edge, edge, FilterType::Lanczos3);

        for name in ICON_NAMES {
            let png = dir.join(format!("{}.png", name));
            resized.save(&png)?;
            log::debug!("Wrote {}x{} icon {}", edge, edge, png.display());
            report.written.push(png);

            let webp = dir.join(format!("{}.webp", name));
            if remove_if_present(&webp)? {
                report.removed.push(webp);
            }
        }
    }

    for path in placeholder_definitions(&res_root)? {
        if remove_if_present(&path)? {
            report.removed.push(path);
        }
    }

    Ok(report)
}

/// Lists `ic_launcher*.xml` definitions in density and drawable directories.
fn placeholder_definitions(res_root: &Path) -> Result<Vec<PathBuf>> {
    let base = glob::Pattern::escape(&res_root.to_string_lossy());
    let mut found = Vec::new();

    for dir in PLACEHOLDER_DIRS {
        for name in ICON_NAMES {
            let pattern = format!("{}/{}/{}.xml", base, dir, name);
            for entry in glob::glob(&pattern)? {
                match entry {
                    Ok(path) => found.push(path),
                    Err(e) => log::warn!("Skipping unreadable path: {}", e),
                }
            }
        }
    }

    Ok(found)
}

/// Deletes `path`, treating absence as success. Returns true if a file was removed.
fn remove_if_present(path: &Path) -> Result<bool> {
    match fs::remove_file(path) {
        Ok(()) => {
            log::debug!("Removed {}", path.display());
            Ok(true)
        }
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
        Err(e) => Err(TemplateError::io_at("remove", path, e)),
    }
}
