//! Google Translate Text-to-Speech Provider
//!
//! Implements `TextToSpeech` on top of the public `translate_tts` endpoint,
//! the same service used by the gTTS library.
//!
//! # Request flow
//!
//! 1. The text is split into chunks of at most `max_chunk_chars` characters
//! 2. Each chunk is requested as MP3 with `tl=<language code>`
//! 3. The MP3 segments are concatenated in order
//!
//! MP3 frames are self-delimiting, so concatenated segments play back as one
//! stream.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, header::CONTENT_TYPE};
use tracing::{debug, instrument, warn};

use crate::chunking::split_text;
use crate::config::SpeechConfig;
use crate::error::SpeechError;
use crate::ports::TextToSpeech;
use crate::types::{AudioData, AudioFormat};

/// Client identifier accepted by the endpoint without a token
const CLIENT_ID: &str = "tw-ob";

/// Google Translate speech provider
#[derive(Debug, Clone)]
pub struct GoogleTranslateTts {
    client: Client,
    config: SpeechConfig,
}

impl GoogleTranslateTts {
    /// Create a new provider
    ///
    /// # Errors
    ///
    /// Returns `SpeechError::Configuration` if the configuration is invalid.
    pub fn new(config: SpeechConfig) -> Result<Self, SpeechError> {
        config.validate().map_err(SpeechError::Configuration)?;

        let client = Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| {
                SpeechError::Configuration(format!("Failed to create HTTP client: {e}"))
            })?;

        Ok(Self { client, config })
    }

    /// Build the TTS endpoint URL
    fn tts_url(&self) -> String {
        format!("{}/translate_tts", self.config.base_url.trim_end_matches('/'))
    }

    /// Request the audio for one chunk
    #[instrument(skip(self, chunk), fields(idx = index, chars = chunk.chars().count()))]
    async fn fetch_chunk(
        &self,
        chunk: &str,
        language: &str,
        index: usize,
        total: usize,
    ) -> Result<Vec<u8>, SpeechError> {
        let index = index.to_string();
        let total = total.to_string();
        let textlen = chunk.chars().count().to_string();

        let response = self
            .client
            .get(self.tts_url())
            .query(&[
                ("ie", "UTF-8"),
                ("q", chunk),
                ("tl", language),
                ("client", CLIENT_ID),
                ("total", total.as_str()),
                ("idx", index.as_str()),
                ("textlen", textlen.as_str()),
            ])
            .send()
            .await
            .map_err(|e| SpeechError::from_request(&e, self.config.timeout_ms))?;

        let status = response.status();
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(SpeechError::RateLimited);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let snippet: String = body.chars().take(200).collect();
            warn!(status = %status, "Speech endpoint rejected request");
            return Err(SpeechError::SynthesisFailed(format!(
                "Speech endpoint returned {status}: {}",
                snippet.trim()
            )));
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(ToString::to_string);
        if let Some(content_type) = content_type.as_deref() {
            if !is_mp3_content_type(content_type) {
                return Err(SpeechError::InvalidResponse(format!(
                    "Expected MP3 audio, got {content_type}"
                )));
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| SpeechError::from_request(&e, self.config.timeout_ms))?;
        if bytes.is_empty() {
            return Err(SpeechError::InvalidResponse(
                "Speech endpoint returned no audio".to_string(),
            ));
        }

        Ok(bytes.to_vec())
    }
}

/// Whether a response content type can carry the MP3 stream
fn is_mp3_content_type(content_type: &str) -> bool {
    AudioFormat::from_mime_type(content_type) == Some(AudioFormat::Mp3)
        || content_type
            .split(';')
            .next()
            .is_some_and(|base| base.trim().eq_ignore_ascii_case("application/octet-stream"))
}

#[async_trait]
impl TextToSpeech for GoogleTranslateTts {
    #[instrument(skip(self, text), fields(text_len = text.len(), language = %language))]
    async fn synthesize(&self, text: &str, language: &str) -> Result<AudioData, SpeechError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Text cannot be empty".to_string(),
            ));
        }

        if language.trim().is_empty() {
            return Err(SpeechError::SynthesisFailed(
                "Language code cannot be empty".to_string(),
            ));
        }

        let chars = text.chars().count();
        if chars > self.config.max_text_chars {
            return Err(SpeechError::TextTooLong {
                chars,
                max: self.config.max_text_chars,
            });
        }

        let chunks = split_text(text, self.config.max_chunk_chars);
        let total = chunks.len();
        debug!(chunks = total, "Synthesizing speech with Google Translate TTS");

        let mut audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            let segment = self.fetch_chunk(chunk, language, index, total).await?;
            audio.extend_from_slice(&segment);
        }

        Ok(AudioData::new(audio, AudioFormat::Mp3).with_segments(total))
    }

    async fn is_available(&self) -> bool {
        self.client
            .head(&self.config.base_url)
            .send()
            .await
            .is_ok_and(|response| !response.status().is_server_error())
    }

    fn provider_name(&self) -> &'static str {
        "google-translate"
    }
}
