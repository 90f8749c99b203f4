//! Infrastructure layer - Adapters for external systems
//!
//! Implements ports defined in the application layer on top of the
//! extraction, language identification and speech crates, and provides
//! configuration loading, logging setup and page templates.

pub mod adapters;
pub mod config;
pub mod telemetry;
pub mod templates;

pub use adapters::*;
pub use config::{AppConfig, LanguageConfig, LogFormat, ServerConfig};
pub use telemetry::{TelemetryError, init_logging};
pub use templates::{TemplateConfig, TemplateEngine, TemplateError};
