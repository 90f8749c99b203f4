//! Speech synthesis port - Interface for text-to-speech

use async_trait::async_trait;
use domain::{Language, SpeechControls};
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for speech synthesis
#[cfg_attr(test, automock)]
#[async_trait]
pub trait SpeechSynthesisPort: Send + Sync {
    /// Synthesize speech for the given text
    ///
    /// # Arguments
    /// * `text` - Text to read aloud
    /// * `language` - Language to speak in
    /// * `controls` - Requested speed and pitch
    ///
    /// # Returns
    /// MP3 bytes
    async fn synthesize(
        &self,
        text: &str,
        language: Language,
        controls: SpeechControls,
    ) -> Result<Vec<u8>, ApplicationError>;

    /// Whether the speech service is reachable
    async fn is_available(&self) -> bool;
}
