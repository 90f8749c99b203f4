//! Text pulled out of an uploaded document

use serde::{Deserialize, Serialize};
use std::fmt;

/// Extracted document text, trimmed of surrounding whitespace
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExtractedText(String);

impl ExtractedText {
    /// Wrap raw extractor output, trimming leading and trailing whitespace
    #[must_use]
    pub fn new(raw: impl AsRef<str>) -> Self {
        Self(raw.as_ref().trim().to_string())
    }

    /// Text produced when nothing could be extracted
    #[must_use]
    pub const fn empty() -> Self {
        Self(String::new())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of whitespace-separated tokens
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.0.split_whitespace().count()
    }

    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for ExtractedText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for ExtractedText {
    fn from(raw: String) -> Self {
        Self::new(raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trims_surrounding_whitespace() {
        let text = ExtractedText::new("\n  Hello world \t\n");
        assert_eq!(text.as_str(), "Hello world");
    }

    #[test]
    fn counts_words() {
        assert_eq!(ExtractedText::new("Hello world").word_count(), 2);
        assert_eq!(ExtractedText::new("one\ttwo\nthree   four").word_count(), 4);
        assert_eq!(ExtractedText::empty().word_count(), 0);
    }

    #[test]
    fn whitespace_only_is_empty() {
        assert!(ExtractedText::new(" \n\t ").is_empty());
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&ExtractedText::new("hi")).unwrap();
        assert_eq!(json, "\"hi\"");
    }
}
