//! Logging infrastructure
//!
//! Provides the `tracing` subscriber setup used by the server binary.

mod logging;

pub use logging::{TelemetryError, build_filter, init_logging};
