//! Error types for template-helper.
//!
//! All operations return `Result<T>` which aliases `Result<T, TemplateError>`.

use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors from template operations.
#[derive(Debug, Error)]
pub enum TemplateError {
    /// Template archive could not be opened or read.
    #[error("Archive error: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Source image could not be decoded or a resized copy could not be encoded.
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    /// Required input missing or malformed.
    ///
    /// Raised when identifiers cannot be detected in a template, or when an
    /// identifier that must be non-empty is empty.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// User-supplied name rejected by validation.
    #[error("Invalid name '{0}': {1}")]
    InvalidName(String, String),

    /// Archive entry would be written outside the destination directory.
    #[error("Archive entry escapes destination: {0}")]
    UnsafeEntry(String),

    /// Destination directory already exists and is not empty.
    #[error("Target directory already exists: {0}")]
    DirectoryExists(PathBuf),

    /// Template not present in the inventory.
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Template with the same name already in the inventory.
    #[error("Template '{0}' already exists")]
    TemplateExists(String),

    /// User declined confirmation.
    ///
    /// Not a failure: used for control flow when user cancels.
    #[error("Operation cancelled by user")]
    Cancelled,

    /// File system operation failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// Glob pattern compilation failed (indicates bug).
    #[error("Glob pattern error: {0}")]
    Pattern(#[from] glob::PatternError),

    /// Regex compilation failed (indicates bug).
    #[error("Regex error: {0}")]
    Regex(#[from] regex::Error),

    /// Unexpected error.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl TemplateError {
    /// Wraps an I/O error with the path it concerns, keeping its kind.
    pub fn io_at(action: &str, path: &Path, err: std::io::Error) -> Self {
        TemplateError::Io(std::io::Error::new(
            err.kind(),
            format!("Failed to {} {}: {}", action, path.display(), err),
        ))
    }
}

/// Result type alias for template-helper operations.
pub type Result<T> = std::result::Result<T, TemplateError>;
