//! Text extraction errors

use thiserror::Error;

/// Errors that can occur while extracting text from a document
#[derive(Debug, Error)]
pub enum ExtractionError {
    /// Plain text was not valid UTF-8
    #[error("Invalid text encoding: {0}")]
    InvalidEncoding(String),

    /// PDF could not be parsed
    #[error("PDF error: {0}")]
    Pdf(String),

    /// OOXML container could not be opened
    #[error("Archive error: {0}")]
    Archive(String),

    /// A required part is missing from the archive
    #[error("Missing document part: {0}")]
    MissingPart(String),

    /// Malformed XML inside an OOXML part
    #[error("XML error: {0}")]
    Xml(String),

    /// Image could not be decoded
    #[error("Image error: {0}")]
    Image(String),

    /// OCR run failed
    #[error("OCR failed: {0}")]
    OcrFailed(String),

    /// OCR run exceeded its time budget
    #[error("OCR timeout after {0}ms")]
    Timeout(u64),

    /// External tool not installed
    #[error("Extractor not available: {0}")]
    NotAvailable(String),

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Background extraction task failed
    #[error("Extraction task failed: {0}")]
    Task(String),
}

impl From<lopdf::Error> for ExtractionError {
    fn from(err: lopdf::Error) -> Self {
        Self::Pdf(err.to_string())
    }
}

impl From<zip::result::ZipError> for ExtractionError {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::FileNotFound => Self::MissingPart(err.to_string()),
            other => Self::Archive(other.to_string()),
        }
    }
}

impl From<quick_xml::Error> for ExtractionError {
    fn from(err: quick_xml::Error) -> Self {
        Self::Xml(err.to_string())
    }
}

impl From<image::ImageError> for ExtractionError {
    fn from(err: image::ImageError) -> Self {
        Self::Image(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ExtractionError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::Task(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_encoding_error_message() {
        let err = ExtractionError::InvalidEncoding("byte 0xff".to_string());
        assert_eq!(err.to_string(), "Invalid text encoding: byte 0xff");
    }

    #[test]
    fn timeout_error_message() {
        let err = ExtractionError::Timeout(60_000);
        assert_eq!(err.to_string(), "OCR timeout after 60000ms");
    }

    #[test]
    fn missing_zip_entry_maps_to_missing_part() {
        let err: ExtractionError = zip::result::ZipError::FileNotFound.into();
        assert!(matches!(err, ExtractionError::MissingPart(_)));
    }

    #[test]
    fn not_available_error_message() {
        let err = ExtractionError::NotAvailable("tesseract".to_string());
        assert_eq!(err.to_string(), "Extractor not available: tesseract");
    }
}
