//! Application state shared across handlers

use std::sync::Arc;

use application::{ReaderService, Session};
use infrastructure::{AppConfig, TemplateEngine};
use tokio::sync::Mutex;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Reader workflow (extract, detect, convert)
    pub reader: Arc<ReaderService>,
    /// The interactive session; one per server process
    pub session: Arc<Mutex<Session>>,
    /// Page templates
    pub templates: TemplateEngine,
    /// Application configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Create state with a fresh session
    pub fn new(reader: ReaderService, templates: TemplateEngine, config: AppConfig) -> Self {
        Self {
            reader: Arc::new(reader),
            session: Arc::new(Mutex::new(Session::new())),
            templates,
            config: Arc::new(config),
        }
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("reader", &self.reader)
            .field("templates", &self.templates)
            .finish_non_exhaustive()
    }
}
