//! Configuration for document text extraction

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for the extractors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Path to the Tesseract executable
    #[serde(default = "default_tesseract_path")]
    pub tesseract_path: PathBuf,

    /// Tesseract language pack(s), e.g. "eng" or "eng+hin"
    #[serde(default = "default_ocr_language")]
    pub ocr_language: String,

    /// Upper bound for a single OCR run in milliseconds
    #[serde(default = "default_ocr_timeout_ms")]
    pub ocr_timeout_ms: u64,
}

fn default_tesseract_path() -> PathBuf {
    PathBuf::from("tesseract")
}

fn default_ocr_language() -> String {
    "eng".to_string()
}

const fn default_ocr_timeout_ms() -> u64 {
    60_000
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            tesseract_path: default_tesseract_path(),
            ocr_language: default_ocr_language(),
            ocr_timeout_ms: default_ocr_timeout_ms(),
        }
    }
}

impl ExtractionConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.tesseract_path.as_os_str().is_empty() {
            return Err("Tesseract path cannot be empty".to_string());
        }

        if self.ocr_language.trim().is_empty() {
            return Err("OCR language cannot be empty".to_string());
        }

        if !self
            .ocr_language
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '_')
        {
            return Err(format!("Invalid OCR language: {}", self.ocr_language));
        }

        if self.ocr_timeout_ms == 0 {
            return Err("OCR timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}
