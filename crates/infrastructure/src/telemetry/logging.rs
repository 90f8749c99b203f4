//! Tracing subscriber initialization
//!
//! `RUST_LOG` wins over the configured filter. Output is either
//! human-readable text or one JSON object per event.

use thiserror::Error;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, ServerConfig};

/// Errors raised while installing the subscriber
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// The configured filter directive does not parse
    #[error("Invalid log filter '{filter}': {reason}")]
    InvalidFilter { filter: String, reason: String },

    /// A global subscriber is already installed
    #[error("Tracing subscriber already initialized: {0}")]
    AlreadyInitialized(String),
}

/// Build the filter from `RUST_LOG`, or from `default_filter` when unset
///
/// # Errors
///
/// Returns `TelemetryError::InvalidFilter` if `default_filter` is used and
/// does not parse.
pub fn build_filter(default_filter: &str) -> Result<EnvFilter, TelemetryError> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(default_filter).map_err(|e| TelemetryError::InvalidFilter {
            filter: default_filter.to_string(),
            reason: e.to_string(),
        })
    })
}

/// Install the global tracing subscriber
///
/// # Errors
///
/// Returns an error if the filter is invalid or a subscriber is already set.
pub fn init_logging(config: &ServerConfig) -> Result<(), TelemetryError> {
    let filter = build_filter(&config.log_filter)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.log_format {
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(false),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .try_init(),
    };

    result.map_err(|e| TelemetryError::AlreadyInitialized(e.to_string()))
}
