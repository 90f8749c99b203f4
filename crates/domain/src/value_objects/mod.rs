//! Value Objects - Immutable, identity-less domain primitives

mod document_kind;
mod language;
mod speech_controls;

pub use document_kind::{
    DocumentKind, MEDIA_TYPE_DOC, MEDIA_TYPE_DOCX, MEDIA_TYPE_JPEG, MEDIA_TYPE_PDF, MEDIA_TYPE_PNG,
    MEDIA_TYPE_PPT, MEDIA_TYPE_PPTX, MEDIA_TYPE_TEXT,
};
pub use language::{Language, LanguageGuess, UNKNOWN_LANGUAGE_NAME};
pub use speech_controls::{
    CONTROL_DEFAULT, CONTROL_MAX, CONTROL_MIN, CONTROL_STEP, SpeechControls,
};
