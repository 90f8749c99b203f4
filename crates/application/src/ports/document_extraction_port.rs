//! Document extraction port - Interface for turning uploads into text

use async_trait::async_trait;
use domain::DocumentKind;
#[cfg(test)]
use mockall::automock;

use crate::error::ApplicationError;

/// Port for text extraction
#[cfg_attr(test, automock)]
#[async_trait]
pub trait DocumentExtractionPort: Send + Sync {
    /// Extract the raw text of a document
    ///
    /// # Arguments
    /// * `kind` - Document kind, already resolved from the media type
    /// * `bytes` - Raw file content
    ///
    /// # Returns
    /// Text as produced by the extractor, not yet trimmed
    async fn extract(&self, kind: DocumentKind, bytes: Vec<u8>)
    -> Result<String, ApplicationError>;

    /// Whether image uploads can be processed (OCR tool present)
    async fn is_ocr_available(&self) -> bool;
}
