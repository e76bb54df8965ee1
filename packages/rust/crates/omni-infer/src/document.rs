//! Document under analysis.

use regex::Regex;
use std::sync::LazyLock;

fn compile_regex(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(regex) => regex,
        Err(_compile_err) => match Regex::new(r"$^") {
            Ok(fallback) => fallback,
            Err(fallback_err) => panic!("hardcoded fallback regex must compile: {fallback_err}"),
        },
    }
}

/// Opening ```` ``` ```` delimiter, shortest span, closing delimiter.
static FENCED_CODE_REGEX: LazyLock<Regex> = LazyLock::new(|| compile_regex(r"(?s)```.*?```"));

/// Markdown text with its lowercased form derived once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    raw: String,
    lowered: String,
}

impl Document {
    /// Wrap raw text.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let lowered = raw.to_lowercase();
        Self { raw, lowered }
    }

    /// Original text.
    #[must_use]
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// Lowercased text used for keyword matching.
    #[must_use]
    pub fn lowered(&self) -> &str {
        &self.lowered
    }

    /// Length in characters (not bytes).
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.raw.chars().count()
    }

    /// Whether `keyword` occurs in the lowercased text.
    #[inline]
    #[must_use]
    pub fn contains(&self, keyword: &str) -> bool {
        self.lowered.contains(keyword)
    }

    /// Whether the raw text holds a fenced code block.
    #[must_use]
    pub fn has_fenced_code_block(&self) -> bool {
        FENCED_CODE_REGEX.is_match(&self.raw)
    }
}

impl From<String> for Document {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

impl From<&str> for Document {
    fn from(raw: &str) -> Self {
        Self::new(raw)
    }
}
