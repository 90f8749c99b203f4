//! Application configuration
//!
//! Split into focused sub-modules:
//! - `server`: HTTP server and logging settings
//! - `language`: Language identification settings
//!
//! Speech, extraction and template settings are owned by their crates
//! or modules
//! (`ai_speech::SpeechConfig`, `document_text::ExtractionConfig`).

mod language;
mod server;

use ai_speech::SpeechConfig;
use document_text::ExtractionConfig;
use serde::{Deserialize, Serialize};

use crate::templates::TemplateConfig;

pub use language::LanguageConfig;
pub use server::{LogFormat, ServerConfig};

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Speech synthesis configuration
    #[serde(default)]
    pub speech: SpeechConfig,

    /// Text extraction and OCR configuration
    #[serde(default)]
    pub extraction: ExtractionConfig,

    /// Language identification configuration
    #[serde(default)]
    pub language: LanguageConfig,

    /// Page template configuration
    #[serde(default)]
    pub templates: TemplateConfig,
}

impl AppConfig {
    /// Load configuration from `config.toml` (optional) and environment
    ///
    /// Environment variables use the `EDUVISION_` prefix and a double
    /// underscore between section and key, e.g.
    /// `EDUVISION_SERVER__MAX_UPLOAD_BYTES=1048576`.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be parsed or a value has the
    /// wrong type.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            // Load from file if exists
            .add_source(config::File::with_name("config").required(false))
            // Override with environment variables
            .add_source(
                config::Environment::with_prefix("EDUVISION")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let config = builder.build()?;
        config.try_deserialize()
    }

    /// Validate every section
    ///
    /// # Errors
    ///
    /// Returns the first invalid setting, prefixed with its section.
    pub fn validate(&self) -> Result<(), String> {
        self.server.validate().map_err(|e| format!("server: {e}"))?;
        self.speech.validate().map_err(|e| format!("speech: {e}"))?;
        self.extraction
            .validate()
            .map_err(|e| format!("extraction: {e}"))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.language.min_detection_chars, 20);
        assert_eq!(config.speech.max_chunk_chars, 100);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [server]
            port = 9000
            log_format = "json"

            [extraction]
            ocr_language = "eng+hin"
            "#,
        )
        .unwrap();

        assert_eq!(config.server.port, 9000);
        assert_eq!(config.server.log_format, LogFormat::Json);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.extraction.ocr_language, "eng+hin");
        assert_eq!(config.speech.timeout_ms, 30_000);
        assert!(config.templates.templates_dir.is_none());
    }

    #[test]
    fn templates_dir_is_configurable() {
        let config: AppConfig = toml::from_str(
            r#"
            [templates]
            templates_dir = "/srv/eduvision/templates"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.templates.templates_dir.as_deref(),
            Some("/srv/eduvision/templates")
        );
    }

    #[test]
    fn invalid_section_is_named() {
        let mut config = AppConfig::default();
        config.speech.timeout_ms = 0;
        let err = config.validate().unwrap_err();
        assert!(err.starts_with("speech:"));
    }

    #[test]
    fn builder_reads_file_source() {
        let config: AppConfig = config::Config::builder()
            .add_source(config::File::from_str(
                "[language]\nmin_detection_chars = 5\n",
                config::FileFormat::Toml,
            ))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.language.min_detection_chars, 5);
        assert_eq!(config.server.port, 8501);
    }
}
