//! Domain-level errors

use thiserror::Error;

/// Errors that can occur in the domain layer
#[derive(Debug, Error)]
pub enum DomainError {
    /// Language code outside the supported set
    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    /// Speech control outside its allowed range
    #[error("{control} must be between {min} and {max}, got {value}")]
    ControlOutOfRange {
        control: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// Validation failed
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

impl DomainError {
    /// Create an out-of-range error for a speech control
    pub const fn out_of_range(control: &'static str, value: f32, min: f32, max: f32) -> Self {
        Self::ControlOutOfRange {
            control,
            value,
            min,
            max,
        }
    }
}
