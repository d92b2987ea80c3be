//! Validation rules for project names and namespaces.
//!
//! Pure functions with no I/O or side effects.

use crate::error::{Result, TemplateError};

const MAX_PROJECT_NAME_LENGTH: usize = 64;

/// Characters that would break the XML attribute the name is written into.
const MARKUP_CHARS: &[char] = &['"', '<', '>', '&'];

/// Validates a new project name.
///
/// The name becomes a directory name, a Gradle project name and the app's
/// display label, so it is more permissive than a namespace.
///
/// ## Rules
/// - 1-64 characters
/// - No leading or trailing whitespace
/// - No path separators (`/`, `\`)
/// - No control characters
/// - None of `" < > &`
///
/// ## Warnings (non-fatal)
/// - Contains spaces (fine as a label, awkward as a directory)
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(TemplateError::InvalidName(
            name.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    let length = name.chars().count();
    if length > MAX_PROJECT_NAME_LENGTH {
        return Err(TemplateError::InvalidName(
            name.to_string(),
            format!(
                "exceeds {} chars (has {})",
                MAX_PROJECT_NAME_LENGTH, length
            ),
        ));
    }

    if name.trim() != name {
        return Err(TemplateError::InvalidName(
            name.to_string(),
            "cannot start or end with whitespace".to_string(),
        ));
    }

    if name == "." || name == ".." {
        return Err(TemplateError::InvalidName(
            name.to_string(),
            "cannot be '.' or '..'".to_string(),
        ));
    }

    for (idx, ch) in name.chars().enumerate() {
        if ch == '/' || ch == '\\' {
            return Err(TemplateError::InvalidName(
                name.to_string(),
                format!("path separator '{}' at position {}", ch, idx),
            ));
        }

        if ch.is_control() {
            return Err(TemplateError::InvalidName(
                name.to_string(),
                format!("control character at position {}", idx),
            ));
        }

        if MARKUP_CHARS.contains(&ch) {
            return Err(TemplateError::InvalidName(
                name.to_string(),
                format!("invalid character '{}' at position {}", ch, idx),
            ));
        }
    }

    if name.contains(' ') {
        log::warn!("'{}' contains spaces (the project directory will too)", name);
    }

    Ok(())
}

/// Validates a namespace (Java package / application id).
///
/// ## Rules
/// - At least one dot-separated segment, none empty
/// - Each segment starts with an ASCII letter or `_`
/// - Each segment contains only `[A-Za-z0-9_]`
///
/// ## Warnings (non-fatal)
/// - Uppercase letters (convention: lowercase)
/// - Single segment (Play Store requires at least two)
pub fn validate_namespace(namespace: &str) -> Result<()> {
    if namespace.is_empty() {
        return Err(TemplateError::InvalidName(
            namespace.to_string(),
            "cannot be empty".to_string(),
        ));
    }

    for (idx, segment) in namespace.split('.').enumerate() {
        let Some(first) = segment.chars().next() else {
            return Err(TemplateError::InvalidName(
                namespace.to_string(),
                format!("segment {} is empty", idx + 1),
            ));
        };

        if !first.is_ascii_alphabetic() && first != '_' {
            return Err(TemplateError::InvalidName(
                namespace.to_string(),
                format!("segment '{}' must start with letter or underscore", segment),
            ));
        }

        if let Some(ch) = segment
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '_')
        {
            return Err(TemplateError::InvalidName(
                namespace.to_string(),
                format!("invalid character '{}' in segment '{}'", ch, segment),
            ));
        }
    }

    if namespace.chars().any(|c| c.is_ascii_uppercase()) {
        log::warn!("'{}' has uppercase (convention: lowercase)", namespace);
    }

    if !namespace.contains('.') {
        log::warn!("'{}' has a single segment", namespace);
    }

    Ok(())
}
