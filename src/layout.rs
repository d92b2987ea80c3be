//! Fixed path conventions of a Gradle Android project.
//!
//! Every stage resolves its paths through this module so the conventions
//! live in one place.

use crate::error::{Result, TemplateError};
use std::path::{Path, PathBuf};

/// File name of the platform manifest.
pub const MANIFEST_FILE_NAME: &str = "AndroidManifest.xml";

/// Resource reference forced into `android:icon`.
pub const ICON_REFERENCE: &str = "@mipmap/ic_launcher";

/// Resource reference forced into `android:roundIcon`.
pub const ROUND_ICON_REFERENCE: &str = "@mipmap/ic_launcher_round";

/// Logical names of the generated launcher icons (square, round).
pub const ICON_NAMES: [&str; 2] = ["ic_launcher", "ic_launcher_round"];

/// Density qualifier directories and their launcher icon edge length in pixels.
pub const ICON_DENSITIES: [(&str, u32); 5] = [
    ("mipmap-mdpi", 48),
    ("mipmap-hdpi", 72),
    ("mipmap-xhdpi", 96),
    ("mipmap-xxhdpi", 144),
    ("mipmap-xxxhdpi", 192),
];

/// Source extensions whose package declaration follows the namespace.
pub const SOURCE_EXTENSIONS: [&str; 2] = ["kt", "java"];

/// `<root>/app/src/main`
pub fn main_source_set(project_root: &Path) -> PathBuf {
    project_root.join("app").join("src").join("main")
}

/// `<root>/app/src/main/java`, the root every namespace directory hangs off.
pub fn java_root(project_root: &Path) -> PathBuf {
    main_source_set(project_root).join("java")
}

/// `<root>/app/src/main/res`
pub fn res_root(project_root: &Path) -> PathBuf {
    main_source_set(project_root).join("res")
}

/// `<root>/app/src/main/AndroidManifest.xml`
pub fn manifest_path(project_root: &Path) -> PathBuf {
    main_source_set(project_root).join(MANIFEST_FILE_NAME)
}

/// Returns true if an archive or file path names the manifest.
///
/// The comparison is a case-insensitive suffix match.
pub fn is_manifest(path: &str) -> bool {
    path.to_lowercase()
        .ends_with(&MANIFEST_FILE_NAME.to_lowercase())
}

/// Resolves the directory owning `namespace` below the java root.
///
/// `com.example.demo` becomes `<root>/app/src/main/java/com/example/demo`.
pub fn namespace_dir(project_root: &Path, namespace: &str) -> Result<PathBuf> {
    let mut dir = java_root(project_root);
    for segment in namespace_segments(namespace)? {
        dir.push(segment);
    }
    Ok(dir)
}

/// Splits a namespace into its segments, rejecting empty ones.
/// Segments containing path separators are rejected as well.
pub fn namespace_segments(namespace: &str) -> Result<Vec<&str>> {
    if namespace.is_empty() {
        return Err(TemplateError::InvalidInput(
            "namespace cannot be empty".to_string(),
        ));
    }

    namespace
        .split('.')
        .map(|segment| {
            if segment.is_empty() || segment.contains(['/', '\\']) {
                Err(TemplateError::InvalidInput(format!(
                    "namespace '{}' has an invalid segment '{}'",
                    namespace, segment
                )))
            } else {
                Ok(segment)
            }
        })
        .collect()
}
