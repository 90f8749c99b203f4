//! Port definitions - Interfaces implemented by infrastructure adapters

mod document_extraction_port;
mod language_detection_port;
mod speech_synthesis_port;

pub use document_extraction_port::DocumentExtractionPort;
#[cfg(test)]
pub use document_extraction_port::MockDocumentExtractionPort;
pub use language_detection_port::LanguageDetectionPort;
#[cfg(test)]
pub use language_detection_port::MockLanguageDetectionPort;
pub use speech_synthesis_port::SpeechSynthesisPort;
#[cfg(test)]
pub use speech_synthesis_port::MockSpeechSynthesisPort;
