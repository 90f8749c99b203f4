//! Reader service - Upload, extract, detect and convert use cases
//!
//! Every operation takes the caller's [`Session`] explicitly and drives its
//! view model through [`UiEvent`]s. Extraction and synthesis failures never
//! escape as errors: they become notices on the page.

use std::{
    fmt,
    ops::{Deref, DerefMut},
    sync::Arc,
    time::Instant,
};

use domain::{AudioArtifact, ExtractedText, Language, UploadedFile};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApplicationError,
    ports::{DocumentExtractionPort, LanguageDetectionPort, SpeechSynthesisPort},
    session::Session,
    view_model::UiEvent,
};

/// Availability of the external collaborators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ReadinessReport {
    pub ocr: bool,
    pub speech: bool,
}

impl ReadinessReport {
    /// Whether every collaborator answered
    #[must_use]
    pub const fn all_ready(&self) -> bool {
        self.ocr && self.speech
    }
}

/// Borrow of the session for one extraction or synthesis
///
/// If the owning future is dropped while the view is still busy (client
/// disconnect, shutdown), the view is moved back to a stable phase.
struct InFlight<'a> {
    session: &'a mut Session,
}

impl<'a> InFlight<'a> {
    fn new(session: &'a mut Session) -> Self {
        Self { session }
    }
}

impl Deref for InFlight<'_> {
    type Target = Session;

    fn deref(&self) -> &Session {
        self.session
    }
}

impl DerefMut for InFlight<'_> {
    fn deref_mut(&mut self) -> &mut Session {
        self.session
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        let phase = self.session.view().phase();
        if phase.is_busy() {
            warn!(phase = %phase, "Operation abandoned before completion");
            if let Err(e) = self.session.view_mut().apply(UiEvent::Interrupted) {
                warn!(error = %e, "Failed to recover view after interruption");
            }
        }
    }
}

/// Orchestrates extraction, language detection and speech synthesis
pub struct ReaderService {
    extractor: Arc<dyn DocumentExtractionPort>,
    detector: Arc<dyn LanguageDetectionPort>,
    speech: Arc<dyn SpeechSynthesisPort>,
}

impl fmt::Debug for ReaderService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReaderService").finish_non_exhaustive()
    }
}

impl ReaderService {
    /// Create a new reader service
    pub fn new(
        extractor: Arc<dyn DocumentExtractionPort>,
        detector: Arc<dyn LanguageDetectionPort>,
        speech: Arc<dyn SpeechSynthesisPort>,
    ) -> Self {
        Self {
            extractor,
            detector,
            speech,
        }
    }

    /// Handle a new upload: record it, extract its text, detect the language
    ///
    /// # Errors
    ///
    /// Only returns an error if the view model rejects an event, which
    /// cannot happen for a fresh upload.
    #[instrument(skip(self, session, file), fields(file = %file.name(), size = file.size_bytes()))]
    pub async fn upload(
        &self,
        session: &mut Session,
        file: UploadedFile,
    ) -> Result<(), ApplicationError> {
        let mut session = InFlight::new(session);
        let kind = file.kind();
        session.preferences_mut().record_upload(file.name());
        session.view_mut().apply(UiEvent::FileUploaded {
            name: file.name().to_string(),
            kind,
        })?;

        let text = match kind {
            None => {
                warn!(media_type = %file.media_type(), "Unsupported file type");
                session.view_mut().apply(UiEvent::ExtractionFailed {
                    reason: format!("Unsupported file type: {}", display_type(&file)),
                })?;
                ExtractedText::empty()
            },
            Some(kind) => {
                let start = Instant::now();
                match self.extractor.extract(kind, file.into_bytes()).await {
                    Ok(raw) => {
                        let text = ExtractedText::new(raw);
                        debug!(
                            kind = %kind,
                            words = text.word_count(),
                            elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
                            "Text extracted"
                        );
                        text
                    },
                    Err(e) => {
                        warn!(kind = %kind, error = %e, "Extraction failed");
                        session.view_mut().apply(UiEvent::ExtractionFailed {
                            reason: extraction_reason(e),
                        })?;
                        ExtractedText::empty()
                    },
                }
            },
        };

        let has_text = !text.is_empty();
        let detection_input = has_text.then(|| text.as_str().to_string());
        session.view_mut().apply(UiEvent::TextExtracted { text })?;

        if let Some(input) = detection_input {
            let guess = self.detector.detect(&input);
            info!(
                detected = guess.detected_code().unwrap_or("-"),
                fallback = guess.is_fallback(),
                "Language identified"
            );
            session
                .view_mut()
                .apply(UiEvent::LanguageDetected { guess })?;
        }

        Ok(())
    }

    /// Change the language selector (also stored as the preference)
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidOperation` while work is in flight.
    pub fn select_language(
        &self,
        session: &mut Session,
        language: Language,
    ) -> Result<(), ApplicationError> {
        session
            .view_mut()
            .apply(UiEvent::LanguageSelected { language })?;
        session.preferences_mut().set_preferred_language(language);
        Ok(())
    }

    /// Toggle the manual language override
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidOperation` while work is in flight.
    pub fn set_override(&self, session: &mut Session, enabled: bool) -> Result<(), ApplicationError> {
        session
            .view_mut()
            .apply(UiEvent::OverrideToggled { enabled })
    }

    /// Set the speed slider
    ///
    /// # Errors
    ///
    /// Returns a domain error for values outside 0.5..=2.0.
    pub fn set_speed(&self, session: &mut Session, value: f32) -> Result<(), ApplicationError> {
        session.view_mut().apply(UiEvent::SpeedChanged { value })
    }

    /// Set the pitch slider
    ///
    /// # Errors
    ///
    /// Returns a domain error for values outside 0.5..=2.0.
    pub fn set_pitch(&self, session: &mut Session, value: f32) -> Result<(), ApplicationError> {
        session.view_mut().apply(UiEvent::PitchChanged { value })
    }

    /// Clear all notices
    ///
    /// # Errors
    ///
    /// Never fails in practice; the signature follows the other actions.
    pub fn dismiss_notices(&self, session: &mut Session) -> Result<(), ApplicationError> {
        session.view_mut().apply(UiEvent::NoticesDismissed)
    }

    /// Convert the extracted text to speech
    ///
    /// A synthesis failure is reported on the page and returns the view to
    /// awaiting language; it is not an error of this call.
    ///
    /// # Errors
    ///
    /// Returns `ApplicationError::InvalidOperation` when there is no text to
    /// convert or a conversion is already running.
    #[instrument(skip(self, session))]
    pub async fn convert(&self, session: &mut Session) -> Result<(), ApplicationError> {
        session.view_mut().apply(UiEvent::ConvertRequested)?;
        let mut session = InFlight::new(session);

        let view = session.view();
        let language = view.effective_language();
        let controls = view.controls();
        let text = view.text().as_str().to_string();

        if !controls.is_neutral() {
            debug!(
                speed = controls.speed(),
                pitch = controls.pitch(),
                "Speed and pitch are recorded but not applied to the audio"
            );
        }

        let start = Instant::now();
        let event = match self.speech.synthesize(&text, language, controls).await {
            Ok(data) if data.is_empty() => {
                warn!(language = %language, "Speech service returned no audio");
                UiEvent::AudioFailed {
                    reason: "the speech service returned no audio".to_string(),
                }
            },
            Ok(data) => {
                info!(
                    language = %language,
                    bytes = data.len(),
                    elapsed_ms = u64::try_from(start.elapsed().as_millis()).unwrap_or(u64::MAX),
                    "Audio generated"
                );
                UiEvent::AudioGenerated {
                    audio: AudioArtifact::new(data, language, controls),
                }
            },
            Err(e) => {
                warn!(language = %language, error = %e, "Speech synthesis failed");
                UiEvent::AudioFailed {
                    reason: failure_reason(e),
                }
            },
        };

        session.view_mut().apply(event)
    }

    /// Check the OCR engine and the speech service
    pub async fn readiness(&self) -> ReadinessReport {
        let (ocr, speech) = tokio::join!(
            self.extractor.is_ocr_available(),
            self.speech.is_available()
        );
        ReadinessReport { ocr, speech }
    }
}

fn display_type(file: &UploadedFile) -> &str {
    if file.media_type().trim().is_empty() {
        file.name()
    } else {
        file.media_type()
    }
}

fn extraction_reason(error: ApplicationError) -> String {
    match error {
        ApplicationError::Extraction(reason) => reason,
        other => other.to_string(),
    }
}

fn failure_reason(error: ApplicationError) -> String {
    match error {
        ApplicationError::ExternalService(reason) => reason,
        other => other.to_string(),
    }
}
