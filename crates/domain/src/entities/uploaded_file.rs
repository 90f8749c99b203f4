//! Uploaded file entity

use std::fmt;

use crate::{errors::DomainError, value_objects::DocumentKind};

/// A file handed over by the user, valid until the next upload replaces it
#[derive(Clone, PartialEq, Eq)]
pub struct UploadedFile {
    name: String,
    media_type: String,
    bytes: Vec<u8>,
}

impl UploadedFile {
    /// Create an uploaded file
    ///
    /// # Errors
    ///
    /// Returns a validation error when the file name is blank.
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::ValidationError(
                "file name cannot be empty".to_string(),
            ));
        }

        Ok(Self {
            name,
            media_type: media_type.into(),
            bytes,
        })
    }

    /// Original file name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Media type declared by the client
    #[must_use]
    pub fn media_type(&self) -> &str {
        &self.media_type
    }

    /// Raw content
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the file, keeping only its content
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    #[must_use]
    pub fn size_bytes(&self) -> usize {
        self.bytes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Document kind derived from the declared type (or extension)
    #[must_use]
    pub fn kind(&self) -> Option<DocumentKind> {
        DocumentKind::detect(&self.media_type, &self.name)
    }
}

impl fmt::Debug for UploadedFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UploadedFile")
            .field("name", &self.name)
            .field("media_type", &self.media_type)
            .field("size_bytes", &self.bytes.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_blank_name() {
        assert!(UploadedFile::new("  ", "text/plain", vec![]).is_err());
    }

    #[test]
    fn exposes_kind_from_media_type() {
        let file = UploadedFile::new("notes.txt", "text/plain", b"hi".to_vec()).unwrap();
        assert_eq!(file.kind(), Some(DocumentKind::PlainText));
        assert_eq!(file.size_bytes(), 2);
        assert!(!file.is_empty());
    }

    #[test]
    fn unknown_type_has_no_kind() {
        let file = UploadedFile::new("clip.mp4", "video/mp4", vec![1, 2, 3]).unwrap();
        assert_eq!(file.kind(), None);
    }

    #[test]
    fn debug_omits_content() {
        let file = UploadedFile::new("secret.txt", "text/plain", b"classified".to_vec()).unwrap();
        let debug = format!("{file:?}");
        assert!(debug.contains("secret.txt"));
        assert!(!debug.contains("classified"));
    }
}
