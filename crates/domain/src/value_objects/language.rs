//! Supported speech languages and detection results

use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::DomainError;

/// Display name used for detected languages outside the supported set
pub const UNKNOWN_LANGUAGE_NAME: &str = "Unknown";

/// Language that text can be read aloud in
///
/// Serialized as its ISO 639-1 code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Language {
    #[default]
    #[serde(rename = "en")]
    English,
    #[serde(rename = "hi")]
    Hindi,
    #[serde(rename = "es")]
    Spanish,
    #[serde(rename = "fr")]
    French,
    #[serde(rename = "de")]
    German,
    #[serde(rename = "ta")]
    Tamil,
    #[serde(rename = "te")]
    Telugu,
}

impl Language {
    /// Every supported language, in selector order
    pub const ALL: [Self; 7] = [
        Self::English,
        Self::Hindi,
        Self::Spanish,
        Self::French,
        Self::German,
        Self::Tamil,
        Self::Telugu,
    ];

    /// ISO 639-1 code
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::English => "en",
            Self::Hindi => "hi",
            Self::Spanish => "es",
            Self::French => "fr",
            Self::German => "de",
            Self::Tamil => "ta",
            Self::Telugu => "te",
        }
    }

    /// Human-readable English name
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::English => "English",
            Self::Hindi => "Hindi",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Tamil => "Tamil",
            Self::Telugu => "Telugu",
        }
    }

    /// Look up a language by code
    ///
    /// Matching ignores case and any region suffix, so `"en-US"` and `"EN"`
    /// both resolve to English.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        let primary = code
            .trim()
            .split(['-', '_'])
            .next()
            .unwrap_or_default()
            .to_ascii_lowercase();

        Self::ALL.into_iter().find(|lang| lang.code() == primary)
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for Language {
    type Err = DomainError;

    /// Accepts either a code (`"fr"`) or a display name (`"French"`)
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
            .or_else(|| {
                Self::ALL
                    .into_iter()
                    .find(|lang| lang.name().eq_ignore_ascii_case(s.trim()))
            })
            .ok_or_else(|| DomainError::UnsupportedLanguage(s.to_string()))
    }
}

/// Outcome of automatic language identification
///
/// Keeps the raw detected code so that a language outside the supported set
/// can still be reported as "Unknown", while synthesis falls back to English.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageGuess {
    detected_code: Option<String>,
    language: Option<Language>,
    fallback: bool,
}

impl LanguageGuess {
    /// Guess produced by a successful detection
    #[must_use]
    pub fn detected(code: impl Into<String>) -> Self {
        let code = code.into();
        let language = Language::from_code(&code);
        Self {
            detected_code: Some(code),
            language,
            fallback: false,
        }
    }

    /// Guess used when detection failed or the text was too short
    #[must_use]
    pub const fn fallback() -> Self {
        Self {
            detected_code: None,
            language: Some(Language::English),
            fallback: true,
        }
    }

    /// Raw code returned by the detector, if detection ran
    #[must_use]
    pub fn detected_code(&self) -> Option<&str> {
        self.detected_code.as_deref()
    }

    /// Supported language matching the detection, if any
    #[must_use]
    pub const fn language(&self) -> Option<Language> {
        self.language
    }

    /// Whether the English fallback was applied
    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        self.fallback
    }

    /// Name shown to the user: the language name or "Unknown"
    #[must_use]
    pub fn display_name(&self) -> &'static str {
        self.language.map_or(UNKNOWN_LANGUAGE_NAME, Language::name)
    }

    /// Language to synthesize in when the user has not overridden it
    #[must_use]
    pub fn effective(&self) -> Language {
        self.language.unwrap_or_default()
    }
}

impl Default for LanguageGuess {
    fn default() -> Self {
        Self::fallback()
    }
}
