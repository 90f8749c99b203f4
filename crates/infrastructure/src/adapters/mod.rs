//! Adapters - Implementations of application ports

mod document_extraction_adapter;
mod speech_adapter;
mod whatlang_detector;

pub use document_extraction_adapter::DocumentExtractionAdapter;
pub use speech_adapter::SpeechAdapter;
pub use whatlang_detector::WhatlangDetector;
