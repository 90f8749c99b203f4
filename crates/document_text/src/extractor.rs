//! Dispatch from document kind to extractor

use domain::DocumentKind;
use tracing::{debug, instrument};

use crate::config::ExtractionConfig;
use crate::error::ExtractionError;
use crate::ocr::TesseractOcr;
use crate::{ooxml, pdf, plain_text};

/// Extracts raw text from uploaded documents
///
/// Parsing work runs on the blocking pool; OCR runs as a subprocess.
#[derive(Debug, Clone)]
pub struct DocumentExtractor {
    ocr: TesseractOcr,
}

impl DocumentExtractor {
    /// Create a new extractor
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::Configuration` if the configuration is invalid.
    pub fn new(config: ExtractionConfig) -> Result<Self, ExtractionError> {
        Ok(Self {
            ocr: TesseractOcr::new(config)?,
        })
    }

    /// Extract the text of a document of the given kind
    ///
    /// The result is returned as produced by the extractor, untrimmed.
    #[instrument(skip(self, bytes), fields(kind = %kind, size = bytes.len()))]
    pub async fn extract(
        &self,
        kind: DocumentKind,
        bytes: Vec<u8>,
    ) -> Result<String, ExtractionError> {
        let text = match kind {
            DocumentKind::Pdf => run_blocking(move || pdf::extract(&bytes)).await?,
            DocumentKind::PlainText => plain_text::extract(&bytes)?,
            DocumentKind::Image => self.ocr.recognize(bytes).await?,
            DocumentKind::WordDocument => {
                run_blocking(move || ooxml::extract_word_document(&bytes)).await?
            },
            DocumentKind::SlideDeck => {
                run_blocking(move || ooxml::extract_slide_deck(&bytes)).await?
            },
        };

        debug!(chars = text.chars().count(), "Extracted text");
        Ok(text)
    }

    /// Whether the OCR tool can be started
    pub async fn ocr_available(&self) -> bool {
        self.ocr.is_available().await
    }
}

async fn run_blocking<F>(task: F) -> Result<String, ExtractionError>
where
    F: FnOnce() -> Result<String, ExtractionError> + Send + 'static,
{
    tokio::task::spawn_blocking(task).await?
}
