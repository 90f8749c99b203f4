//! Document kind value object
//!
//! Maps the media type declared by an upload to one of the document kinds the
//! extractor understands.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const MEDIA_TYPE_PDF: &str = "application/pdf";
pub const MEDIA_TYPE_TEXT: &str = "text/plain";
pub const MEDIA_TYPE_PNG: &str = "image/png";
pub const MEDIA_TYPE_JPEG: &str = "image/jpeg";
pub const MEDIA_TYPE_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";
pub const MEDIA_TYPE_DOC: &str = "application/msword";
pub const MEDIA_TYPE_PPTX: &str =
    "application/vnd.openxmlformats-officedocument.presentationml.presentation";
pub const MEDIA_TYPE_PPT: &str = "application/vnd.ms-powerpoint";

/// Generic binary type sent by browsers that could not guess a better one
const MEDIA_TYPE_OCTET_STREAM: &str = "application/octet-stream";

/// Kind of document an upload contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentKind {
    /// Multi-page PDF
    Pdf,
    /// UTF-8 plain text
    PlainText,
    /// Raster image (PNG or JPEG) read through OCR
    Image,
    /// Word-processor document
    WordDocument,
    /// Slide deck
    SlideDeck,
}

impl DocumentKind {
    /// Route a declared media type to a document kind
    ///
    /// Parameters such as `; charset=utf-8` and letter case are ignored.
    #[must_use]
    pub fn from_media_type(media_type: &str) -> Option<Self> {
        let base = normalize(media_type);
        match base.as_str() {
            MEDIA_TYPE_PDF => Some(Self::Pdf),
            MEDIA_TYPE_TEXT => Some(Self::PlainText),
            MEDIA_TYPE_PNG | MEDIA_TYPE_JPEG | "image/jpg" => Some(Self::Image),
            MEDIA_TYPE_DOCX | MEDIA_TYPE_DOC => Some(Self::WordDocument),
            MEDIA_TYPE_PPTX | MEDIA_TYPE_PPT => Some(Self::SlideDeck),
            _ => None,
        }
    }

    /// Route a file name to a document kind by its extension
    #[must_use]
    pub fn from_file_name(file_name: &str) -> Option<Self> {
        let (_, extension) = file_name.rsplit_once('.')?;
        match extension.to_ascii_lowercase().as_str() {
            "pdf" => Some(Self::Pdf),
            "txt" => Some(Self::PlainText),
            "png" | "jpg" | "jpeg" => Some(Self::Image),
            "docx" | "doc" => Some(Self::WordDocument),
            "pptx" | "ppt" => Some(Self::SlideDeck),
            _ => None,
        }
    }

    /// Detect the kind of an upload
    ///
    /// The declared media type wins; the file extension is consulted only when
    /// the browser sent no type or the generic octet-stream type.
    #[must_use]
    pub fn detect(media_type: &str, file_name: &str) -> Option<Self> {
        let base = normalize(media_type);
        if base.is_empty() || base == MEDIA_TYPE_OCTET_STREAM {
            Self::from_file_name(file_name)
        } else {
            Self::from_media_type(&base)
        }
    }

    /// Short human-readable label
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::PlainText => "Plain text",
            Self::Image => "Image",
            Self::WordDocument => "Word document",
            Self::SlideDeck => "Slide deck",
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

fn normalize(media_type: &str) -> String {
    media_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routes_supported_media_types() {
        assert_eq!(DocumentKind::from_media_type(MEDIA_TYPE_PDF), Some(DocumentKind::Pdf));
        assert_eq!(
            DocumentKind::from_media_type(MEDIA_TYPE_TEXT),
            Some(DocumentKind::PlainText)
        );
        assert_eq!(DocumentKind::from_media_type(MEDIA_TYPE_PNG), Some(DocumentKind::Image));
        assert_eq!(DocumentKind::from_media_type(MEDIA_TYPE_JPEG), Some(DocumentKind::Image));
        assert_eq!(DocumentKind::from_media_type("image/jpg"), Some(DocumentKind::Image));
        assert_eq!(
            DocumentKind::from_media_type(MEDIA_TYPE_DOCX),
            Some(DocumentKind::WordDocument)
        );
        assert_eq!(
            DocumentKind::from_media_type(MEDIA_TYPE_DOC),
            Some(DocumentKind::WordDocument)
        );
        assert_eq!(
            DocumentKind::from_media_type(MEDIA_TYPE_PPTX),
            Some(DocumentKind::SlideDeck)
        );
        assert_eq!(
            DocumentKind::from_media_type(MEDIA_TYPE_PPT),
            Some(DocumentKind::SlideDeck)
        );
    }

    #[test]
    fn ignores_parameters_and_case() {
        assert_eq!(
            DocumentKind::from_media_type("Text/Plain; charset=utf-8"),
            Some(DocumentKind::PlainText)
        );
    }

    #[test]
    fn unknown_media_type_has_no_kind() {
        assert_eq!(DocumentKind::from_media_type("application/zip"), None);
        assert_eq!(DocumentKind::from_media_type("image/gif"), None);
    }

    #[test]
    fn extension_routing() {
        assert_eq!(DocumentKind::from_file_name("notes.TXT"), Some(DocumentKind::PlainText));
        assert_eq!(DocumentKind::from_file_name("scan.jpeg"), Some(DocumentKind::Image));
        assert_eq!(DocumentKind::from_file_name("deck.pptx"), Some(DocumentKind::SlideDeck));
        assert_eq!(DocumentKind::from_file_name("README"), None);
        assert_eq!(DocumentKind::from_file_name("archive.tar.gz"), None);
    }

    #[test]
    fn detect_prefers_declared_type() {
        assert_eq!(
            DocumentKind::detect(MEDIA_TYPE_PDF, "mislabelled.txt"),
            Some(DocumentKind::Pdf)
        );
        assert_eq!(DocumentKind::detect("application/zip", "lesson.pdf"), None);
    }

    #[test]
    fn detect_falls_back_to_extension_for_generic_types() {
        assert_eq!(
            DocumentKind::detect("application/octet-stream", "lesson.docx"),
            Some(DocumentKind::WordDocument)
        );
        assert_eq!(DocumentKind::detect("", "lesson.pdf"), Some(DocumentKind::Pdf));
    }
}
