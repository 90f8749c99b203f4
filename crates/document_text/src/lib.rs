//! Document Text - Text extraction for uploaded documents
//!
//! Turns the raw bytes of an upload into a single string:
//! - PDF pages via `lopdf`
//! - Word documents and slide decks by reading the OOXML parts with `zip`
//!   and `quick-xml`
//! - Plain text as strict UTF-8
//! - PNG/JPEG images through the Tesseract OCR command line tool
//!
//! # Example
//!
//! ```ignore
//! use document_text::{DocumentExtractor, ExtractionConfig};
//! use domain::DocumentKind;
//!
//! let extractor = DocumentExtractor::new(ExtractionConfig::default())?;
//! let text = extractor.extract(DocumentKind::Pdf, bytes).await?;
//! ```

pub mod config;
pub mod error;
pub mod extractor;
pub mod ocr;
pub mod ooxml;
pub mod pdf;
pub mod plain_text;

pub use config::ExtractionConfig;
pub use error::ExtractionError;
pub use extractor::DocumentExtractor;
