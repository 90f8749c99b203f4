//! Plain text decoding

use crate::error::ExtractionError;

const UTF8_BOM: &str = "\u{feff}";

/// Decode the bytes as strict UTF-8
///
/// A leading byte order mark is dropped; everything else is kept verbatim.
pub fn extract(bytes: &[u8]) -> Result<String, ExtractionError> {
    let text =
        std::str::from_utf8(bytes).map_err(|e| ExtractionError::InvalidEncoding(e.to_string()))?;
    Ok(text.strip_prefix(UTF8_BOM).unwrap_or(text).to_string())
}
