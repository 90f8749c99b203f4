//! Configuration for speech synthesis

use serde::{Deserialize, Serialize};

/// Largest chunk the Google Translate speech endpoint accepts
pub const MAX_CHUNK_CHARS_LIMIT: usize = 200;

/// Configuration for the speech synthesis service
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SpeechConfig {
    /// Base URL of the speech endpoint (without the `/translate_tts` path)
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in milliseconds, applied to every chunk request
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Maximum characters sent in a single request
    #[serde(default = "default_max_chunk_chars")]
    pub max_chunk_chars: usize,

    /// Maximum characters accepted for one synthesis
    #[serde(default = "default_max_text_chars")]
    pub max_text_chars: usize,

    /// User agent sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_base_url() -> String {
    "https://translate.google.com".to_string()
}

const fn default_timeout_ms() -> u64 {
    30000 // 30 seconds
}

const fn default_max_chunk_chars() -> usize {
    100
}

const fn default_max_text_chars() -> usize {
    50_000
}

fn default_user_agent() -> String {
    concat!("EduVision/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_ms: default_timeout_ms(),
            max_chunk_chars: default_max_chunk_chars(),
            max_text_chars: default_max_text_chars(),
            user_agent: default_user_agent(),
        }
    }
}

impl SpeechConfig {
    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(format!(
                "Base URL must start with http:// or https://, got {}",
                self.base_url
            ));
        }

        if self.timeout_ms == 0 {
            return Err("Timeout must be greater than 0".to_string());
        }

        if self.max_chunk_chars == 0 || self.max_chunk_chars > MAX_CHUNK_CHARS_LIMIT {
            return Err(format!(
                "Max chunk size must be between 1 and {MAX_CHUNK_CHARS_LIMIT}, got {}",
                self.max_chunk_chars
            ));
        }

        if self.max_text_chars < self.max_chunk_chars {
            return Err("Max text size must not be smaller than the chunk size".to_string());
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_has_expected_values() {
        let config = SpeechConfig::default();

        assert_eq!(config.base_url, "https://translate.google.com");
        assert_eq!(config.timeout_ms, 30000);
        assert_eq!(config.max_chunk_chars, 100);
        assert_eq!(config.max_text_chars, 50_000);
        assert!(config.user_agent.starts_with("EduVision/"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn validate_fails_with_zero_timeout() {
        let config = SpeechConfig {
            timeout_ms: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_fails_with_invalid_chunk_size() {
        let mut config = SpeechConfig {
            max_chunk_chars: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());

        config.max_chunk_chars = 500;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_fails_with_non_http_url() {
        let config = SpeechConfig {
            base_url: "ftp://example.com".to_string(),
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_fails_when_text_limit_below_chunk() {
        let config = SpeechConfig {
            max_text_chars: 10,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn config_deserializes_from_toml() {
        let toml = r#"
            base_url = "http://localhost:9000"
            timeout_ms = 5000
            max_chunk_chars = 80
        "#;

        let config: SpeechConfig = toml::from_str(toml).unwrap();

        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_ms, 5000);
        assert_eq!(config.max_chunk_chars, 80);
        assert_eq!(config.max_text_chars, 50_000);
    }
}
