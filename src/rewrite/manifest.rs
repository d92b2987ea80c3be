//! Structural edits applied to the platform manifest during a rewrite.
//!
//! Beyond plain substitution the manifest gets its icon references forced
//! to the generated launcher icons, its label forced to the new display
//! label, and every `versionCode` bumped by one.

use crate::error::Result;
use crate::layout::{ICON_REFERENCE, ROUND_ICON_REFERENCE};
use regex::bytes::{Captures, NoExpand, Regex};

/// Compiled manifest edit rules.
#[derive(Debug, Clone)]
pub struct ManifestPatch {
    icon: Regex,
    round_icon: Regex,
    label: Regex,
    version_code: Regex,
}

impl ManifestPatch {
    pub fn new() -> Result<Self> {
        Ok(Self {
            icon: Regex::new(r#"android:icon\s*=\s*["'][^"']*["']"#)?,
            round_icon: Regex::new(r#"android:roundIcon\s*=\s*["'][^"']*["']"#)?,
            label: Regex::new(r#"android:label\s*=\s*["'][^"']*["']"#)?,
            version_code: Regex::new(r#"(versionCode\s*=\s*["'])(\d+)(["'])"#)?,
        })
    }

    /// Applies all manifest edits. The label is only forced when `label` is set.
    pub fn apply(&self, content: &[u8], label: Option<&str>) -> Vec<u8> {
        let icon = format!(r#"android:icon="{}""#, ICON_REFERENCE);
        let round_icon = format!(r#"android:roundIcon="{}""#, ROUND_ICON_REFERENCE);

        let out = self.icon.replace_all(content, NoExpand(icon.as_bytes()));
        let out = self
            .round_icon
            .replace_all(&out, NoExpand(round_icon.as_bytes()))
            .into_owned();

        let out = match label {
            Some(label) => {
                let attr = format!(r#"android:label="{}""#, label);
                self.label
                    .replace_all(&out, NoExpand(attr.as_bytes()))
                    .into_owned()
            }
            None => out,
        };

        self.bump_version_codes(&out)
    }

    fn bump_version_codes(&self, content: &[u8]) -> Vec<u8> {
        self.version_code
            .replace_all(content, |caps: &Captures| {
                let digits = &caps[2];
                let bumped = std::str::from_utf8(digits)
                    .ok()
                    .and_then(|d| d.parse::<u64>().ok())
                    .and_then(|n| n.checked_add(1));

                match bumped {
                    Some(n) => {
                        let mut out = caps[1].to_vec();
                        out.extend_from_slice(n.to_string().as_bytes());
                        out.extend_from_slice(&caps[3]);
                        out
                    }
                    None => caps[0].to_vec(),
                }
            })
            .into_owned()
    }
}
