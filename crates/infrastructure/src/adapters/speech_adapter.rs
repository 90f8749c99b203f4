//! Speech adapter - Implements SpeechSynthesisPort using ai_speech crate

use std::sync::Arc;

use ai_speech::{GoogleTranslateTts, SpeechConfig, SpeechError, TextToSpeech};
use application::error::ApplicationError;
use application::ports::SpeechSynthesisPort;
use async_trait::async_trait;
use domain::{Language, SpeechControls};
use tracing::{debug, instrument};

/// Adapter for speech synthesis using ai_speech crate
pub struct SpeechAdapter {
    provider: Arc<dyn TextToSpeech>,
}

impl std::fmt::Debug for SpeechAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpeechAdapter")
            .field("provider", &self.provider.provider_name())
            .finish()
    }
}

impl SpeechAdapter {
    /// Create a new speech adapter backed by Google Translate TTS
    ///
    /// # Errors
    ///
    /// Returns an error if the provider fails to initialize.
    pub fn new(config: SpeechConfig) -> Result<Self, ApplicationError> {
        let provider = GoogleTranslateTts::new(config).map_err(Self::map_error)?;
        Ok(Self::with_provider(Arc::new(provider)))
    }

    /// Create a speech adapter around any provider
    pub fn with_provider(provider: Arc<dyn TextToSpeech>) -> Self {
        Self { provider }
    }

    /// Map speech error to application error
    fn map_error(err: SpeechError) -> ApplicationError {
        match err {
            SpeechError::Configuration(e) => ApplicationError::Configuration(e),
            SpeechError::ConnectionFailed(e) | SpeechError::RequestFailed(e) => {
                ApplicationError::ExternalService(e)
            },
            SpeechError::TextTooLong { chars, max } => ApplicationError::InvalidOperation(
                format!("Text too long for speech: {chars} characters exceeds {max}"),
            ),
            SpeechError::SynthesisFailed(e) => {
                ApplicationError::ExternalService(format!("Synthesis failed: {e}"))
            },
            SpeechError::InvalidResponse(e) => {
                ApplicationError::ExternalService(format!("Invalid response: {e}"))
            },
            SpeechError::Timeout(ms) => {
                ApplicationError::ExternalService(format!("Speech service timeout after {ms}ms"))
            },
            SpeechError::RateLimited => ApplicationError::ExternalService(
                "Speech service rate limit exceeded".to_string(),
            ),
        }
    }
}

#[async_trait]
impl SpeechSynthesisPort for SpeechAdapter {
    #[instrument(skip(self, text, controls), fields(text_len = text.len(), language = %language))]
    async fn synthesize(
        &self,
        text: &str,
        language: Language,
        controls: SpeechControls,
    ) -> Result<Vec<u8>, ApplicationError> {
        if !controls.is_neutral() {
            debug!(
                speed = controls.speed(),
                pitch = controls.pitch(),
                "Provider has no speed or pitch parameters; ignoring"
            );
        }

        let audio = self
            .provider
            .synthesize(text, language.code())
            .await
            .map_err(Self::map_error)?;

        debug!(
            bytes = audio.size_bytes(),
            segments = audio.segments(),
            provider = self.provider.provider_name(),
            "Speech synthesized"
        );

        Ok(audio.into_data())
    }

    async fn is_available(&self) -> bool {
        self.provider.is_available().await
    }
}
