//! Language detection port - Interface for identifying the language of text

use domain::LanguageGuess;
#[cfg(test)]
use mockall::automock;

/// Port for statistical language identification
///
/// Detection never fails: text that cannot be classified yields the English
/// fallback guess.
#[cfg_attr(test, automock)]
pub trait LanguageDetectionPort: Send + Sync {
    /// Guess the language of `text`
    fn detect(&self, text: &str) -> LanguageGuess;
}
