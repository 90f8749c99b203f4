//! Per-browser-session state

use domain::{AudioArtifact, Language, SessionPreferences};

use crate::view_model::{ViewModel, ViewSnapshot};

/// Preferences plus the page state they seed
#[derive(Debug, Clone, Default)]
pub struct Session {
    preferences: SessionPreferences,
    view: ViewModel,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::with_preferences(SessionPreferences::new())
    }

    /// Start a session whose selector is preset to the preferred language
    #[must_use]
    pub fn with_preferences(preferences: SessionPreferences) -> Self {
        let view = ViewModel::new(preferences.preferred_language());
        Self { preferences, view }
    }

    #[must_use]
    pub const fn preferences(&self) -> &SessionPreferences {
        &self.preferences
    }

    pub const fn preferences_mut(&mut self) -> &mut SessionPreferences {
        &mut self.preferences
    }

    #[must_use]
    pub const fn view(&self) -> &ViewModel {
        &self.view
    }

    pub const fn view_mut(&mut self) -> &mut ViewModel {
        &mut self.view
    }

    #[must_use]
    pub fn preferred_language(&self) -> Language {
        self.preferences.preferred_language()
    }

    /// Audio of the last successful conversion, if still current
    #[must_use]
    pub const fn current_audio(&self) -> Option<&AudioArtifact> {
        self.view.audio()
    }

    #[must_use]
    pub fn snapshot(&self) -> ViewSnapshot {
        self.view.snapshot(&self.preferences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_english() {
        let session = Session::new();
        assert_eq!(session.preferred_language(), Language::English);
        assert_eq!(session.view().selected_language(), Language::English);
        assert!(session.current_audio().is_none());
    }

    #[test]
    fn selector_is_seeded_from_preferences() {
        let mut preferences = SessionPreferences::new();
        preferences.set_preferred_language(Language::Telugu);

        let session = Session::with_preferences(preferences);
        assert_eq!(session.view().selected_language(), Language::Telugu);
        assert_eq!(session.snapshot().selected_language, Language::Telugu);
    }
}
