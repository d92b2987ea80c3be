//! Heuristic detection of the identifiers a template was built with.
//!
//! Scans the entries of a template archive for well-known project files and
//! extracts the project name, namespace and display label. The first value
//! found for a field wins; later matches are ignored.

pub mod rules;

pub use rules::{Field, Rule, android_rules};

use crate::error::{Result, TemplateError};
use std::fs;
use std::io::Read;
use std::path::Path;

/// Identifiers found in a template archive. Empty when not found.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DetectedIdentifiers {
    pub project_name: String,
    pub namespace: String,
    pub display_label: String,
}

impl DetectedIdentifiers {
    fn slot(&mut self, field: Field) -> &mut String {
        match field {
            Field::ProjectName => &mut self.project_name,
            Field::Namespace => &mut self.namespace,
            Field::DisplayLabel => &mut self.display_label,
        }
    }

    fn is_complete(&self) -> bool {
        !self.project_name.is_empty()
            && !self.namespace.is_empty()
            && !self.display_label.is_empty()
    }

    /// Fails unless both the project name and the namespace were found.
    pub fn require_identifiers(&self) -> Result<()> {
        let mut missing = Vec::new();
        if self.project_name.is_empty() {
            missing.push("project name");
        }
        if self.namespace.is_empty() {
            missing.push("namespace");
        }

        if missing.is_empty() {
            Ok(())
        } else {
            Err(TemplateError::InvalidInput(format!(
                "could not detect {} in template",
                missing.join(" or ")
            )))
        }
    }
}

/// Ordered rule list applied to every marker entry of an archive.
#[derive(Debug, Clone)]
pub struct Detector {
    rules: Vec<Rule>,
}

impl Detector {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// Detector for Gradle Android projects.
    pub fn android() -> Result<Self> {
        Ok(Self::new(android_rules()?))
    }

    /// Appends a rule evaluated after the existing ones.
    pub fn with_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    /// Scans the archive at `archive_path`.
    ///
    /// Read-only. Fails only if the archive cannot be opened or an entry
    /// cannot be read.
    pub fn detect(&self, archive_path: &Path) -> Result<DetectedIdentifiers> {
        let file = fs::File::open(archive_path)
            .map_err(|e| TemplateError::io_at("open", archive_path, e))?;
        let mut archive = zip::ZipArchive::new(file)?;
        let mut found = DetectedIdentifiers::default();

        for i in 0..archive.len() {
            let mut entry = archive.by_index(i)?;
            if entry.is_dir() {
                continue;
            }

            let lower = entry.name().to_lowercase();
            let applicable: Vec<&Rule> = self
                .rules
                .iter()
                .filter(|r| r.applies_to(&lower))
                .collect();
            if applicable.is_empty() {
                continue;
            }

            let mut content = Vec::new();
            entry.read_to_end(&mut content)?;
            let text = String::from_utf8_lossy(&content);

            for rule in applicable {
                let slot = found.slot(rule.field());
                if !slot.is_empty() {
                    continue;
                }
                if let Some(value) = rule.extract(&text) {
                    log::debug!("Detected {:?} '{}' in {}", rule.field(), value, entry.name());
                    *slot = value.to_string();
                }
            }

            if found.is_complete() {
                break;
            }
        }

        Ok(found)
    }
}

/// Detects identifiers using the Android rule set.
pub fn detect_identifiers(archive_path: &Path) -> Result<DetectedIdentifiers> {
    Detector::android()?.detect(archive_path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_identifiers_reports_missing_fields() {
        let found = DetectedIdentifiers {
            project_name: "Demo".into(),
            ..Default::default()
        };
        let err = found.require_identifiers().unwrap_err();
        assert!(matches!(err, TemplateError::InvalidInput(ref m) if m.contains("namespace")));

        let found = DetectedIdentifiers::default();
        let err = found.require_identifiers().unwrap_err().to_string();
        assert!(err.contains("project name or namespace"));
    }

    #[test]
    fn test_require_identifiers_ignores_label() {
        let found = DetectedIdentifiers {
            project_name: "Demo".into(),
            namespace: "com.example.demo".into(),
            display_label: String::new(),
        };
        assert!(found.require_identifiers().is_ok());
    }
}
