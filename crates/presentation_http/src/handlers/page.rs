//! Page rendering handlers

use application::ViewSnapshot;
use axum::{Json, extract::State, response::Html};

use crate::{error::ApiError, state::AppState};

/// Render the reader page from the current session
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, ApiError> {
    let snapshot = state.session.lock().await.snapshot();
    let html = state.templates.render_reader_page(&snapshot)?;
    Ok(Html(html))
}

/// The view model as JSON
pub async fn view(State(state): State<AppState>) -> Json<ViewSnapshot> {
    Json(state.session.lock().await.snapshot())
}
