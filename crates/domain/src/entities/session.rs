//! Per-session preferences and upload history
//!
//! Lives only in memory for the duration of one interactive session.

use serde::Serialize;

use crate::value_objects::Language;

/// Number of recent uploads shown to the user
pub const RECENT_UPLOADS_VISIBLE: usize = 5;

/// File names uploaded during the session, most recent first
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RecentUploads {
    names: Vec<String>,
}

impl RecentUploads {
    #[must_use]
    pub const fn new() -> Self {
        Self { names: Vec::new() }
    }

    /// Record an upload
    ///
    /// The name goes to the front unless it is already present, in which case
    /// the list is left untouched. Returns whether the name was inserted.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.names.insert(0, name);
        true
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|existing| existing == name)
    }

    /// Entries surfaced for display (at most [`RECENT_UPLOADS_VISIBLE`])
    #[must_use]
    pub fn visible(&self) -> &[String] {
        let end = self.names.len().min(RECENT_UPLOADS_VISIBLE);
        &self.names[..end]
    }

    /// Every recorded name, including those no longer displayed
    #[must_use]
    pub fn all(&self) -> &[String] {
        &self.names
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Session-scoped preferences
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SessionPreferences {
    recent_uploads: RecentUploads,
    preferred_language: Language,
}

impl SessionPreferences {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file name to the upload history
    pub fn record_upload(&mut self, name: impl Into<String>) -> bool {
        self.recent_uploads.insert(name)
    }

    #[must_use]
    pub const fn recent_uploads(&self) -> &RecentUploads {
        &self.recent_uploads
    }

    /// Language preselected in the selector
    #[must_use]
    pub const fn preferred_language(&self) -> Language {
        self.preferred_language
    }

    pub fn set_preferred_language(&mut self, language: Language) {
        self.preferred_language = language;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inserts_at_front() {
        let mut recent = RecentUploads::new();
        recent.insert("a.pdf");
        recent.insert("b.pdf");
        assert_eq!(recent.visible(), ["b.pdf", "a.pdf"]);
    }

    #[test]
    fn duplicate_is_not_reinserted() {
        let mut recent = RecentUploads::new();
        assert!(recent.insert("a.pdf"));
        assert!(!recent.insert("a.pdf"));
        assert_eq!(recent.len(), 1);
        assert_eq!(recent.visible(), ["a.pdf"]);
    }

    #[test]
    fn duplicate_keeps_original_position() {
        let mut recent = RecentUploads::new();
        recent.insert("a.pdf");
        recent.insert("b.pdf");
        recent.insert("a.pdf");
        assert_eq!(recent.visible(), ["b.pdf", "a.pdf"]);
    }

    #[test]
    fn only_five_are_visible() {
        let mut recent = RecentUploads::new();
        for name in ["1", "2", "3", "4", "5", "6"] {
            recent.insert(name);
        }
        assert_eq!(recent.len(), 6);
        assert_eq!(recent.visible(), ["6", "5", "4", "3", "2"]);
    }

    #[test]
    fn preferences_default_to_english() {
        let prefs = SessionPreferences::new();
        assert_eq!(prefs.preferred_language(), Language::English);
        assert!(prefs.recent_uploads().is_empty());
    }

    #[test]
    fn preferred_language_is_overwritten() {
        let mut prefs = SessionPreferences::new();
        prefs.set_preferred_language(Language::Hindi);
        prefs.set_preferred_language(Language::German);
        assert_eq!(prefs.preferred_language(), Language::German);
    }

    #[test]
    fn record_upload_feeds_history() {
        let mut prefs = SessionPreferences::new();
        prefs.record_upload("lesson.pdf");
        assert!(prefs.recent_uploads().contains("lesson.pdf"));
    }
}
