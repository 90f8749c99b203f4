//! Tesseract OCR for raster images
//!
//! # Prerequisites
//!
//! - Tesseract must be installed and available in PATH (or configured)
//! - Language packs for every configured OCR language
//!
//! ```bash
//! sudo apt install tesseract-ocr tesseract-ocr-hin tesseract-ocr-tam
//! ```

use std::io::Cursor;
use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use image::ImageFormat;
use tempfile::NamedTempFile;
use tokio::process::Command;
use tracing::{debug, error, instrument};

use crate::config::ExtractionConfig;
use crate::error::ExtractionError;

/// OCR engine backed by the Tesseract command line tool
#[derive(Debug, Clone)]
pub struct TesseractOcr {
    config: ExtractionConfig,
}

impl TesseractOcr {
    /// Create a new OCR engine
    ///
    /// # Errors
    ///
    /// Returns `ExtractionError::Configuration` if the configuration is invalid.
    pub fn new(config: ExtractionConfig) -> Result<Self, ExtractionError> {
        config.validate().map_err(ExtractionError::Configuration)?;
        Ok(Self { config })
    }

    fn executable(&self) -> &Path {
        &self.config.tesseract_path
    }

    /// Recognize the text in a PNG or JPEG image
    ///
    /// The image is decoded first so that corrupt uploads fail before
    /// Tesseract is started.
    #[instrument(skip(self, bytes), fields(size = bytes.len()))]
    pub async fn recognize(&self, bytes: Vec<u8>) -> Result<String, ExtractionError> {
        let png = tokio::task::spawn_blocking(move || normalize_image(&bytes)).await??;

        let image_file = NamedTempFile::with_suffix(".png").map_err(|e| {
            ExtractionError::OcrFailed(format!("Failed to create temp file: {e}"))
        })?;
        tokio::fs::write(image_file.path(), &png)
            .await
            .map_err(|e| ExtractionError::OcrFailed(format!("Failed to write temp image: {e}")))?;

        let mut cmd = Command::new(self.executable());
        cmd.arg(image_file.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.config.ocr_language)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        debug!("Running tesseract: {:?}", cmd);

        let child = cmd.spawn().map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ExtractionError::NotAvailable(format!(
                    "Tesseract not found at '{}'. Please install Tesseract.",
                    self.executable().display()
                ))
            } else {
                ExtractionError::OcrFailed(format!("Failed to run tesseract: {e}"))
            }
        })?;

        let timeout_ms = self.config.ocr_timeout_ms;
        let output = tokio::time::timeout(Duration::from_millis(timeout_ms), child.wait_with_output())
            .await
            .map_err(|_| ExtractionError::Timeout(timeout_ms))?
            .map_err(|e| ExtractionError::OcrFailed(format!("Failed to wait for tesseract: {e}")))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            error!("Tesseract failed: {}", stderr);
            return Err(ExtractionError::OcrFailed(format!(
                "Tesseract exited with status {}: {}",
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Check whether the Tesseract executable can be started
    pub async fn is_available(&self) -> bool {
        Command::new(self.executable())
            .arg("--version")
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .is_ok_and(|status| status.success())
    }
}

/// Decode a PNG/JPEG upload and re-encode it as PNG for Tesseract
fn normalize_image(bytes: &[u8]) -> Result<Vec<u8>, ExtractionError> {
    let image = image::load_from_memory(bytes)?;
    debug!(width = image.width(), height = image.height(), "Decoded image");

    let mut png = Vec::new();
    image.write_to(&mut Cursor::new(&mut png), ImageFormat::Png)?;
    Ok(png)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn tiny_png() -> Vec<u8> {
        let image = image::RgbImage::from_pixel(4, 4, image::Rgb([255, 255, 255]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn normalizes_png() {
        let png = normalize_image(&tiny_png()).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[test]
    fn corrupt_image_is_rejected() {
        let err = normalize_image(b"\x89PNG but not really").unwrap_err();
        assert!(matches!(err, ExtractionError::Image(_)));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let config = ExtractionConfig {
            ocr_timeout_ms: 0,
            ..Default::default()
        };
        assert!(TesseractOcr::new(config).is_err());
    }

    #[tokio::test]
    async fn missing_binary_is_not_available() {
        let ocr = TesseractOcr::new(ExtractionConfig {
            tesseract_path: PathBuf::from("/nonexistent/tesseract-binary"),
            ..Default::default()
        })
        .unwrap();

        assert!(!ocr.is_available().await);
        let err = ocr.recognize(tiny_png()).await.unwrap_err();
        assert!(matches!(err, ExtractionError::NotAvailable(_)));
    }

    #[tokio::test]
    async fn corrupt_image_fails_before_running_tesseract() {
        let ocr = TesseractOcr::new(ExtractionConfig {
            tesseract_path: PathBuf::from("/nonexistent/tesseract-binary"),
            ..Default::default()
        })
        .unwrap();

        let err = ocr.recognize(b"garbage".to_vec()).await.unwrap_err();
        assert!(matches!(err, ExtractionError::Image(_)));
    }
}
