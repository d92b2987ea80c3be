//! Detection rules: which archive entries to sniff and what to pull out of them.
//!
//! A rule pairs an entry matcher (lowercase path markers) with an extractor
//! (a regex whose first capture group is the value). Rules are evaluated in
//! order, so earlier rules win when two of them resolve the same field.

use crate::error::Result;
use regex::Regex;

/// Lowercase path fragments of the files that carry project identifiers.
pub const ANDROID_MARKERS: [&str; 4] = [
    "settings.gradle",
    "build.gradle",
    "androidmanifest.xml",
    "res/values/strings.xml",
];

/// Identifier a rule resolves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    ProjectName,
    Namespace,
    DisplayLabel,
}

/// A single (matcher, extractor) pair.
#[derive(Debug, Clone)]
pub struct Rule {
    field: Field,
    markers: Vec<String>,
    pattern: Regex,
}

impl Rule {
    /// Compiles a rule. `pattern` must contain one capture group.
    pub fn new(field: Field, pattern: &str, markers: &[&str]) -> Result<Self> {
        Ok(Self {
            field,
            markers: markers.iter().map(|m| m.to_lowercase()).collect(),
            pattern: Regex::new(pattern)?,
        })
    }

    pub fn field(&self) -> Field {
        self.field
    }

    /// Returns true if the entry at `lower_path` should be scanned by this rule.
    pub fn applies_to(&self, lower_path: &str) -> bool {
        self.markers.iter().any(|m| lower_path.contains(m.as_str()))
    }

    /// Returns the first captured value in `text`, if any.
    pub fn extract<'t>(&self, text: &'t str) -> Option<&'t str> {
        self.pattern
            .captures(text)
            .and_then(|caps| caps.get(1))
            .map(|m| m.as_str())
    }
}

/// Rules for a Gradle Android project.
///
/// Order matters: the `package="..."` attribute is tried before the
/// `applicationId` assignment so the latter only fills in when the
/// attribute was not found.
pub fn android_rules() -> Result<Vec<Rule>> {
    Ok(vec![
        Rule::new(
            Field::ProjectName,
            r#"rootProject\.name\s*=\s*['"]([^'"]+)['"]"#,
            &ANDROID_MARKERS,
        )?,
        Rule::new(
            Field::Namespace,
            r#"package\s*=\s*['"]([^'"]+)['"]"#,
            &ANDROID_MARKERS,
        )?,
        Rule::new(
            Field::Namespace,
            r#"applicationId\s*['"]([^'"]+)['"]"#,
            &ANDROID_MARKERS,
        )?,
        Rule::new(
            Field::DisplayLabel,
            r#"<string\s+name="app_name"\s*>([^<]+)</string>"#,
            &ANDROID_MARKERS,
        )?,
    ])
}
