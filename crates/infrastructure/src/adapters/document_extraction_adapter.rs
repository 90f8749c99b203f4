//! Document extraction adapter - Implements DocumentExtractionPort using document_text crate

use application::error::ApplicationError;
use application::ports::DocumentExtractionPort;
use async_trait::async_trait;
use document_text::{DocumentExtractor, ExtractionConfig, ExtractionError};
use domain::DocumentKind;
use tracing::instrument;

/// Adapter for text extraction using document_text crate
#[derive(Debug, Clone)]
pub struct DocumentExtractionAdapter {
    extractor: DocumentExtractor,
}

impl DocumentExtractionAdapter {
    /// Create a new extraction adapter
    ///
    /// # Errors
    ///
    /// Returns an error if the extraction configuration is invalid.
    pub fn new(config: ExtractionConfig) -> Result<Self, ApplicationError> {
        let extractor = DocumentExtractor::new(config).map_err(Self::map_error)?;
        Ok(Self { extractor })
    }

    fn map_error(err: ExtractionError) -> ApplicationError {
        match err {
            ExtractionError::Configuration(e) => ApplicationError::Configuration(e),
            ExtractionError::Task(e) => ApplicationError::Internal(e),
            other => ApplicationError::Extraction(other.to_string()),
        }
    }
}

#[async_trait]
impl DocumentExtractionPort for DocumentExtractionAdapter {
    #[instrument(skip(self, bytes), fields(kind = %kind, size = bytes.len()))]
    async fn extract(
        &self,
        kind: DocumentKind,
        bytes: Vec<u8>,
    ) -> Result<String, ApplicationError> {
        self.extractor
            .extract(kind, bytes)
            .await
            .map_err(Self::map_error)
    }

    async fn is_ocr_available(&self) -> bool {
        self.extractor.ocr_available().await
    }
}
