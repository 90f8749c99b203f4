//! PDF text extraction

use lopdf::Document;
use tracing::debug;

use crate::error::ExtractionError;

/// Extract the text of every page, in page order
///
/// Pages whose text cannot be extracted contribute nothing. Page texts are
/// concatenated without a separator.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    let document = Document::load_mem(bytes)?;
    let pages = document.get_pages();

    let mut text = String::new();
    for page_number in pages.into_keys() {
        match document.extract_text(&[page_number]) {
            Ok(page_text) => text.push_str(&page_text),
            Err(e) => {
                debug!(page = page_number, error = %e, "Skipping page without extractable text");
            },
        }
    }

    Ok(text)
}
