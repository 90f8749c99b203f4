//! Language detector - Implements LanguageDetectionPort using whatlang
//!
//! Detection runs twice. An open pass over every language whatlang knows
//! reports a reliable match outside the supported set as-is (shown as
//! "Unknown"). Otherwise a pass restricted to the supported languages picks
//! the closest of them, so short but ordinary English is not mistaken for a
//! neighbouring language.

use application::ports::LanguageDetectionPort;
use domain::LanguageGuess;
use tracing::{debug, instrument};
use whatlang::{Detector, Lang};

use crate::config::LanguageConfig;

/// Statistical language identification over the whole text
#[derive(Debug, Clone)]
pub struct WhatlangDetector {
    min_chars: usize,
}

impl WhatlangDetector {
    #[must_use]
    pub const fn new(config: &LanguageConfig) -> Self {
        Self {
            min_chars: config.min_detection_chars,
        }
    }
}

impl Default for WhatlangDetector {
    fn default() -> Self {
        Self::new(&LanguageConfig::default())
    }
}

/// whatlang counterparts of the supported languages
const SUPPORTED: [Lang; 7] = [
    Lang::Eng,
    Lang::Hin,
    Lang::Spa,
    Lang::Fra,
    Lang::Deu,
    Lang::Tam,
    Lang::Tel,
];

/// ISO 639-1 code for the supported languages, ISO 639-3 for the rest
fn iso_code(lang: Lang) -> &'static str {
    match lang {
        Lang::Eng => "en",
        Lang::Hin => "hi",
        Lang::Spa => "es",
        Lang::Fra => "fr",
        Lang::Deu => "de",
        Lang::Tam => "ta",
        Lang::Tel => "te",
        other => other.code(),
    }
}

impl LanguageDetectionPort for WhatlangDetector {
    #[instrument(skip(self, text), fields(text_len = text.len()))]
    fn detect(&self, text: &str) -> LanguageGuess {
        let letters = text.chars().filter(|c| !c.is_whitespace()).count();
        if letters < self.min_chars {
            debug!(letters, min = self.min_chars, "Text too short to identify");
            return LanguageGuess::fallback();
        }

        if let Some(info) = whatlang::detect(text) {
            debug!(
                lang = info.lang().code(),
                confidence = info.confidence(),
                reliable = info.is_reliable(),
                "Open detection"
            );
            if info.is_reliable() && !SUPPORTED.contains(&info.lang()) {
                return LanguageGuess::detected(iso_code(info.lang()));
            }
        }

        match Detector::with_allowlist(SUPPORTED.to_vec()).detect(text) {
            Some(info) => {
                debug!(
                    lang = info.lang().code(),
                    confidence = info.confidence(),
                    "Language identified among supported"
                );
                LanguageGuess::detected(iso_code(info.lang()))
            },
            None => {
                debug!("No language identified");
                LanguageGuess::fallback()
            },
        }
    }
}
