//! Synthesized audio kept in memory for playback and download

use chrono::{DateTime, Utc};
use std::fmt;

use crate::value_objects::{Language, SpeechControls};

/// File name offered when the user downloads the audio
pub const AUDIO_DOWNLOAD_FILE_NAME: &str = "eduvision_audio.mp3";

/// MIME type of the synthesized audio
pub const AUDIO_MIME_TYPE: &str = "audio/mpeg";

/// MP3 stream produced by one convert action
///
/// Never written to disk and never reused across conversions.
#[derive(Clone, PartialEq)]
pub struct AudioArtifact {
    data: Vec<u8>,
    language: Language,
    controls: SpeechControls,
    created_at: DateTime<Utc>,
}

impl AudioArtifact {
    #[must_use]
    pub fn new(data: Vec<u8>, language: Language, controls: SpeechControls) -> Self {
        Self {
            data,
            language,
            controls,
            created_at: Utc::now(),
        }
    }

    /// Encoded MP3 bytes
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[must_use]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.data.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Language the text was spoken in
    #[must_use]
    pub const fn language(&self) -> Language {
        self.language
    }

    /// Controls requested when the audio was generated
    #[must_use]
    pub const fn controls(&self) -> SpeechControls {
        self.controls
    }

    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    #[must_use]
    pub const fn file_name(&self) -> &'static str {
        AUDIO_DOWNLOAD_FILE_NAME
    }

    #[must_use]
    pub const fn mime_type(&self) -> &'static str {
        AUDIO_MIME_TYPE
    }
}

impl fmt::Debug for AudioArtifact {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AudioArtifact")
            .field("size_bytes", &self.data.len())
            .field("language", &self.language)
            .field("controls", &self.controls)
            .field("created_at", &self.created_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exposes_fixed_download_name() {
        let audio = AudioArtifact::new(vec![0xFF, 0xFB], Language::English, SpeechControls::default());
        assert_eq!(audio.file_name(), "eduvision_audio.mp3");
        assert_eq!(audio.mime_type(), "audio/mpeg");
        assert_eq!(audio.size_bytes(), 2);
        assert!(!audio.is_empty());
    }

    #[test]
    fn keeps_language_and_controls() {
        let controls = SpeechControls::new(1.5, 0.8).unwrap();
        let audio = AudioArtifact::new(vec![1], Language::Tamil, controls);
        assert_eq!(audio.language(), Language::Tamil);
        assert_eq!(audio.controls(), controls);
    }

    #[test]
    fn debug_omits_bytes() {
        let audio = AudioArtifact::new(vec![7; 64], Language::English, SpeechControls::default());
        let debug = format!("{audio:?}");
        assert!(debug.contains("size_bytes: 64"));
    }
}
