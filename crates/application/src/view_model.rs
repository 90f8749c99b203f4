//! View model - Finite-state description of what the page shows
//!
//! The page moves through
//! `NoFile -> Extracting -> AwaitingLanguage -> Synthesizing -> AudioReady`
//! driven by [`UiEvent`]s. A new upload always restarts at `Extracting`.
//! Rendering (HTML or JSON) only reads a [`ViewSnapshot`].

use std::fmt;

use domain::{
    AudioArtifact, DocumentKind, ExtractedText, Language, LanguageGuess, SessionPreferences,
    SpeechControls,
};
use serde::Serialize;

use crate::error::ApplicationError;

/// Shown when extraction produced text
pub const TEXT_EXTRACTED_NOTICE: &str = "Text extracted successfully!";
/// Shown when nothing could be extracted
pub const NO_TEXT_NOTICE: &str = "Couldn't extract any text. Please try another file.";
/// Shown after a successful conversion
pub const AUDIO_READY_NOTICE: &str = "Audio generated successfully!";
/// Shown when extraction stopped before finishing
pub const EXTRACTION_INTERRUPTED_NOTICE: &str =
    "Processing was interrupted. Please upload the file again.";
/// Shown when synthesis stopped before finishing
pub const AUDIO_INTERRUPTED_NOTICE: &str = "Audio generation was interrupted. Please try again.";

/// Lifecycle phase of the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Nothing usable uploaded yet
    #[default]
    NoFile,
    /// Upload received, text being extracted
    Extracting,
    /// Text available, waiting for the convert action
    AwaitingLanguage,
    /// Speech being generated
    Synthesizing,
    /// Audio available for playback and download
    AudioReady,
}

impl Phase {
    /// Whether work is in flight and controls are locked
    #[must_use]
    pub const fn is_busy(self) -> bool {
        matches!(self, Self::Extracting | Self::Synthesizing)
    }

    /// Whether extracted text is on display
    #[must_use]
    pub const fn has_text(self) -> bool {
        matches!(
            self,
            Self::AwaitingLanguage | Self::Synthesizing | Self::AudioReady
        )
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoFile => "no_file",
            Self::Extracting => "extracting",
            Self::AwaitingLanguage => "awaiting_language",
            Self::Synthesizing => "synthesizing",
            Self::AudioReady => "audio_ready",
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Error,
}

/// Dismissable message shown above the page content
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Discrete input to the view model
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// A file was handed over; any previous document is discarded
    FileUploaded {
        name: String,
        kind: Option<DocumentKind>,
    },
    /// Extraction failed; reported, then treated as empty text
    ExtractionFailed { reason: String },
    /// Extraction finished (possibly with empty text)
    TextExtracted { text: ExtractedText },
    /// Automatic language identification finished
    LanguageDetected { guess: LanguageGuess },
    /// The language selector changed
    LanguageSelected { language: Language },
    /// The manual override checkbox changed
    OverrideToggled { enabled: bool },
    SpeedChanged { value: f32 },
    PitchChanged { value: f32 },
    /// The convert button was pressed
    ConvertRequested,
    AudioGenerated { audio: AudioArtifact },
    AudioFailed { reason: String },
    /// The in-flight extraction or synthesis was abandoned
    Interrupted,
    NoticesDismissed,
}

impl UiEvent {
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::FileUploaded { .. } => "FileUploaded",
            Self::ExtractionFailed { .. } => "ExtractionFailed",
            Self::TextExtracted { .. } => "TextExtracted",
            Self::LanguageDetected { .. } => "LanguageDetected",
            Self::LanguageSelected { .. } => "LanguageSelected",
            Self::OverrideToggled { .. } => "OverrideToggled",
            Self::SpeedChanged { .. } => "SpeedChanged",
            Self::PitchChanged { .. } => "PitchChanged",
            Self::ConvertRequested => "ConvertRequested",
            Self::AudioGenerated { .. } => "AudioGenerated",
            Self::AudioFailed { .. } => "AudioFailed",
            Self::Interrupted => "Interrupted",
            Self::NoticesDismissed => "NoticesDismissed",
        }
    }
}

/// State of the reader page
#[derive(Debug, Clone, Default)]
pub struct ViewModel {
    phase: Phase,
    file_name: Option<String>,
    document_kind: Option<DocumentKind>,
    text: ExtractedText,
    guess: Option<LanguageGuess>,
    selected_language: Language,
    override_enabled: bool,
    controls: SpeechControls,
    audio: Option<AudioArtifact>,
    notices: Vec<Notice>,
}

impl ViewModel {
    /// Create a view model with the selector preset to `selected_language`
    #[must_use]
    pub fn new(selected_language: Language) -> Self {
        Self {
            selected_language,
            ..Self::default()
        }
    }

    /// Apply an event
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidOperation` if the event is not
    /// allowed in the current phase, or a domain error for out-of-range
    /// controls. The state is left unchanged in both cases.
    pub fn apply(&mut self, event: UiEvent) -> Result<(), ApplicationError> {
        let phase = self.phase;
        let name = event.name();
        let rejected = || {
            Err(ApplicationError::InvalidOperation(format!(
                "{name} is not allowed while {phase}"
            )))
        };

        match event {
            UiEvent::FileUploaded { name, kind } => {
                self.phase = Phase::Extracting;
                self.file_name = Some(name);
                self.document_kind = kind;
                self.text = ExtractedText::empty();
                self.guess = None;
                self.audio = None;
                self.notices.clear();
            },
            UiEvent::ExtractionFailed { reason } => {
                if phase != Phase::Extracting {
                    return rejected();
                }
                self.notices
                    .push(Notice::error(format!("Error processing file: {reason}")));
            },
            UiEvent::TextExtracted { text } => {
                if phase != Phase::Extracting {
                    return rejected();
                }
                if text.is_empty() {
                    self.phase = Phase::NoFile;
                    self.file_name = None;
                    self.document_kind = None;
                    self.notices.push(Notice::error(NO_TEXT_NOTICE));
                } else {
                    self.notices.push(Notice::success(TEXT_EXTRACTED_NOTICE));
                }
                self.text = text;
            },
            UiEvent::LanguageDetected { guess } => {
                if phase != Phase::Extracting || self.text.is_empty() {
                    return rejected();
                }
                self.guess = Some(guess);
                self.phase = Phase::AwaitingLanguage;
            },
            UiEvent::LanguageSelected { language } => {
                if phase.is_busy() {
                    return rejected();
                }
                self.selected_language = language;
            },
            UiEvent::OverrideToggled { enabled } => {
                if phase.is_busy() {
                    return rejected();
                }
                self.override_enabled = enabled;
            },
            UiEvent::SpeedChanged { value } => {
                if phase.is_busy() {
                    return rejected();
                }
                self.controls = self.controls.with_speed(value)?;
            },
            UiEvent::PitchChanged { value } => {
                if phase.is_busy() {
                    return rejected();
                }
                self.controls = self.controls.with_pitch(value)?;
            },
            UiEvent::ConvertRequested => {
                if !matches!(phase, Phase::AwaitingLanguage | Phase::AudioReady) {
                    return rejected();
                }
                self.audio = None;
                self.phase = Phase::Synthesizing;
            },
            UiEvent::AudioGenerated { audio } => {
                if phase != Phase::Synthesizing {
                    return rejected();
                }
                self.audio = Some(audio);
                self.phase = Phase::AudioReady;
                self.notices.push(Notice::success(AUDIO_READY_NOTICE));
            },
            UiEvent::AudioFailed { reason } => {
                if phase != Phase::Synthesizing {
                    return rejected();
                }
                self.phase = Phase::AwaitingLanguage;
                self.notices
                    .push(Notice::error(format!("Audio generation failed: {reason}")));
            },
            UiEvent::Interrupted => match phase {
                Phase::Extracting => {
                    self.phase = Phase::NoFile;
                    self.file_name = None;
                    self.document_kind = None;
                    self.text = ExtractedText::empty();
                    self.guess = None;
                    self.notices.push(Notice::error(EXTRACTION_INTERRUPTED_NOTICE));
                },
                Phase::Synthesizing => {
                    self.phase = Phase::AwaitingLanguage;
                    self.notices.push(Notice::error(AUDIO_INTERRUPTED_NOTICE));
                },
                _ => return rejected(),
            },
            UiEvent::NoticesDismissed => self.notices.clear(),
        }

        Ok(())
    }

    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn file_name(&self) -> Option<&str> {
        self.file_name.as_deref()
    }

    /// Extracted text (empty until extraction succeeds)
    #[must_use]
    pub const fn text(&self) -> &ExtractedText {
        &self.text
    }

    #[must_use]
    pub const fn guess(&self) -> Option<&LanguageGuess> {
        self.guess.as_ref()
    }

    #[must_use]
    pub const fn selected_language(&self) -> Language {
        self.selected_language
    }

    #[must_use]
    pub const fn override_enabled(&self) -> bool {
        self.override_enabled
    }

    #[must_use]
    pub const fn controls(&self) -> SpeechControls {
        self.controls
    }

    #[must_use]
    pub const fn audio(&self) -> Option<&AudioArtifact> {
        self.audio.as_ref()
    }

    #[must_use]
    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    /// Language used for synthesis
    ///
    /// The selector wins when the override is on; otherwise the detected
    /// language, falling back to English for unsupported detections.
    #[must_use]
    pub fn effective_language(&self) -> Language {
        if self.override_enabled {
            self.selected_language
        } else {
            self.guess
                .as_ref()
                .map_or(Language::English, LanguageGuess::effective)
        }
    }

    /// Read-only projection for rendering
    #[must_use]
    pub fn snapshot(&self, preferences: &SessionPreferences) -> ViewSnapshot {
        let has_text = self.phase.has_text();
        ViewSnapshot {
            phase: self.phase,
            busy: self.phase.is_busy(),
            file_name: self.file_name.clone(),
            document_kind: self.document_kind.map(|kind| kind.label().to_string()),
            extracted_text: has_text.then(|| self.text.as_str().to_string()),
            word_count: self.text.word_count(),
            detected_language: self.guess.as_ref().map(|g| g.display_name().to_string()),
            detected_code: self
                .guess
                .as_ref()
                .and_then(|g| g.detected_code().map(ToString::to_string)),
            language_fallback: self.guess.as_ref().is_some_and(LanguageGuess::is_fallback),
            selected_language: self.selected_language,
            override_enabled: self.override_enabled,
            effective_language: self.effective_language(),
            languages: Language::ALL
                .into_iter()
                .map(|language| LanguageOption {
                    code: language.code(),
                    name: language.name(),
                    selected: language == self.selected_language,
                })
                .collect(),
            speed: self.controls.speed_value(),
            pitch: self.controls.pitch_value(),
            can_convert: matches!(self.phase, Phase::AwaitingLanguage | Phase::AudioReady),
            audio_available: self.audio.is_some(),
            audio_size_bytes: self.audio.as_ref().map(AudioArtifact::size_bytes),
            audio_language: self.audio.as_ref().map(AudioArtifact::language),
            recent_uploads: preferences.recent_uploads().visible().to_vec(),
            notices: self.notices.clone(),
        }
    }
}

/// Language selector entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageOption {
    pub code: &'static str,
    pub name: &'static str,
    pub selected: bool,
}

/// Everything a renderer needs, flattened
#[derive(Debug, Clone, Serialize)]
pub struct ViewSnapshot {
    pub phase: Phase,
    pub busy: bool,
    pub file_name: Option<String>,
    pub document_kind: Option<String>,
    pub extracted_text: Option<String>,
    pub word_count: usize,
    pub detected_language: Option<String>,
    pub detected_code: Option<String>,
    pub language_fallback: bool,
    pub selected_language: Language,
    pub override_enabled: bool,
    pub effective_language: Language,
    pub languages: Vec<LanguageOption>,
    pub speed: f64,
    pub pitch: f64,
    pub can_convert: bool,
    pub audio_available: bool,
    pub audio_size_bytes: Option<usize>,
    pub audio_language: Option<Language>,
    pub recent_uploads: Vec<String>,
    pub notices: Vec<Notice>,
}
