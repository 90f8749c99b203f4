//! Port definitions for speech processing
//!
//! Defines the traits (ports) that speech processing adapters must implement.

use async_trait::async_trait;

use crate::error::SpeechError;
use crate::types::AudioData;

/// Port for Text-to-Speech (TTS) implementations
///
/// # Example
///
/// ```ignore
/// use ai_speech::TextToSpeech;
///
/// async fn read_aloud(tts: &impl TextToSpeech, text: &str) -> Result<Vec<u8>, SpeechError> {
///     let audio = tts.synthesize(text, "en").await?;
///     Ok(audio.into_data())
/// }
/// ```
#[async_trait]
pub trait TextToSpeech: Send + Sync {
    /// Convert text to speech
    ///
    /// # Arguments
    ///
    /// * `text` - Text to synthesize
    /// * `language` - ISO 639-1 language code (e.g., "en", "hi", "ta")
    ///
    /// # Errors
    ///
    /// Returns `SpeechError` if synthesis fails.
    async fn synthesize(&self, text: &str, language: &str) -> Result<AudioData, SpeechError>;

    /// Check if the TTS service is reachable
    async fn is_available(&self) -> bool;

    /// Short identifier of the provider, used in logs and health output
    fn provider_name(&self) -> &'static str;
}
