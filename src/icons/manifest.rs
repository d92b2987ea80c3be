//! Making sure the manifest references the generated launcher icons.

use crate::error::{Result, TemplateError};
use crate::layout::{ICON_REFERENCE, ROUND_ICON_REFERENCE};

use std::fs;
use std::path::Path;

const APPLICATION_TAG: &str = "<application";

/// Inserts missing `android:icon`/`android:roundIcon` attributes right after
/// the opening `<application` tag.
///
/// Existing attributes are left alone and the file is only written when
/// something was inserted, so repeated calls leave it byte-identical.
/// Returns true if the manifest was changed.
pub fn ensure_manifest_icons(manifest_path: &Path) -> Result<bool> {
    let content = fs::read_to_string(manifest_path)
        .map_err(|e| TemplateError::io_at("read", manifest_path, e))?;

    let updated = with_icon_attributes(&content);
    if updated == content {
        log::debug!("Manifest already declares launcher icons");
        return Ok(false);
    }

    fs::write(manifest_path, &updated)
        .map_err(|e| TemplateError::io_at("write", manifest_path, e))?;
    log::info!("Added launcher icon attributes to {}", manifest_path.display());
    Ok(true)
}

fn with_icon_attributes(content: &str) -> String {
    let mut out = content.to_string();

    if !out.contains(r#"android:icon=""#) {
        out = out.replacen(
            APPLICATION_TAG,
            &format!(r#"{} android:icon="{}""#, APPLICATION_TAG, ICON_REFERENCE),
            1,
        );
    }
    if !out.contains(r#"android:roundIcon=""#) {
        out = out.replacen(
            APPLICATION_TAG,
            &format!(r#"{} android:roundIcon="{}""#, APPLICATION_TAG, ROUND_ICON_REFERENCE),
            1,
        );
    }

    out
}
