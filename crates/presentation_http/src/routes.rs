//! Route definitions

use axum::{
    Router,
    extract::DefaultBodyLimit,
    middleware::from_fn,
    routing::{get, post},
};
use tower_http::{limit::RequestBodyLimitLayer, trace::TraceLayer};

use crate::{handlers, middleware::request_id, state::AppState};

/// Create the main router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let max_upload_bytes = state.config.server.max_upload_bytes;

    Router::new()
        // Page and form actions
        .route("/", get(handlers::page::index))
        .route("/upload", post(handlers::reader::upload))
        .route("/controls", post(handlers::reader::update_controls))
        .route("/convert", post(handlers::reader::convert))
        .route("/notices/dismiss", post(handlers::reader::dismiss_notices))
        // Audio
        .route("/audio", get(handlers::audio::play))
        .route("/audio/download", get(handlers::audio::download))
        // View model API (v1)
        .route("/v1/view", get(handlers::page::view))
        // Health and status endpoints
        .route("/health", get(handlers::health::health_check))
        .route("/ready", get(handlers::health::readiness_check))
        // Middleware (last added = outermost)
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(max_upload_bytes))
        .layer(TraceLayer::new_for_http())
        .layer(from_fn(request_id))
        // Attach state
        .with_state(state)
}
