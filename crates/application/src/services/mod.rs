//! Application services - Use case implementations

mod reader_service;

pub use reader_service::{ReadinessReport, ReaderService};
