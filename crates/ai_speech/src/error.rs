//! Speech processing errors

use thiserror::Error;

/// Errors that can occur during speech synthesis
#[derive(Debug, Error)]
pub enum SpeechError {
    /// Failed to connect to speech service
    #[error("Connection failed: {0}")]
    ConnectionFailed(String),

    /// Request to speech service failed
    #[error("Request failed: {0}")]
    RequestFailed(String),

    /// Text too long for a single synthesis
    #[error("Text too long: {chars} characters exceeds maximum of {max}")]
    TextTooLong {
        /// Characters in the submitted text
        chars: usize,
        /// Maximum allowed characters
        max: usize,
    },

    /// Synthesis failed
    #[error("Synthesis failed: {0}")]
    SynthesisFailed(String),

    /// Invalid response from service
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Timeout during processing
    #[error("Speech processing timeout after {0}ms")]
    Timeout(u64),

    /// Rate limit exceeded
    #[error("Rate limit exceeded")]
    RateLimited,

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl SpeechError {
    /// Classify a transport error, reporting timeouts with the configured budget
    #[must_use]
    pub fn from_request(err: &reqwest::Error, timeout_ms: u64) -> Self {
        if err.is_timeout() {
            Self::Timeout(timeout_ms)
        } else if err.is_connect() {
            Self::ConnectionFailed(err.to_string())
        } else {
            Self::RequestFailed(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn connection_failed_error_message() {
        let err = SpeechError::ConnectionFailed("refused".to_string());
        assert_eq!(err.to_string(), "Connection failed: refused");
    }

    #[test]
    fn request_failed_error_message() {
        let err = SpeechError::RequestFailed("500 error".to_string());
        assert_eq!(err.to_string(), "Request failed: 500 error");
    }

    #[test]
    fn text_too_long_error_message() {
        let err = SpeechError::TextTooLong {
            chars: 60_000,
            max: 50_000,
        };
        assert_eq!(
            err.to_string(),
            "Text too long: 60000 characters exceeds maximum of 50000"
        );
    }

    #[test]
    fn synthesis_failed_error_message() {
        let err = SpeechError::SynthesisFailed("invalid text".to_string());
        assert_eq!(err.to_string(), "Synthesis failed: invalid text");
    }

    #[test]
    fn timeout_error_message() {
        let err = SpeechError::Timeout(30000);
        assert_eq!(err.to_string(), "Speech processing timeout after 30000ms");
    }

    #[test]
    fn rate_limited_error_message() {
        let err = SpeechError::RateLimited;
        assert_eq!(err.to_string(), "Rate limit exceeded");
    }

    #[test]
    fn configuration_error_message() {
        let err = SpeechError::Configuration("bad url".to_string());
        assert_eq!(err.to_string(), "Configuration error: bad url");
    }
}
