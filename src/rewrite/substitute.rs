//! Literal find/replace over raw entry bytes.
//!
//! Content is handled as bytes so binary entries pass through untouched
//! unless they happen to contain the searched literal. Search terms are
//! always escaped; replacement text is always inserted verbatim.

use crate::error::Result;
use regex::bytes::{NoExpand, Regex, RegexBuilder};

/// A compiled literal search term.
#[derive(Debug, Clone)]
pub struct Literal {
    pattern: Regex,
}

impl Literal {
    /// Matches `needle` in any letter case.
    pub fn case_insensitive(needle: &str) -> Result<Self> {
        Ok(Self {
            pattern: RegexBuilder::new(&regex::escape(needle))
                .case_insensitive(true)
                .build()?,
        })
    }

    /// Matches `needle` exactly.
    pub fn exact(needle: &str) -> Result<Self> {
        Ok(Self {
            pattern: Regex::new(&regex::escape(needle))?,
        })
    }

    /// Replaces every occurrence with `replacement`.
    ///
    /// The replacement is never case-adapted to the matched text.
    pub fn replace_all(&self, haystack: &[u8], replacement: &str) -> Vec<u8> {
        self.pattern
            .replace_all(haystack, NoExpand(replacement.as_bytes()))
            .into_owned()
    }
}
