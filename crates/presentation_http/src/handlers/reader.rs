//! Reader action handlers
//!
//! Every action mutates the session and redirects back to the page
//! (post/redirect/get).

use application::Session;
use axum::{
    extract::{Multipart, State, multipart::MultipartError},
    http::StatusCode,
    response::Redirect,
};
use domain::{Language, UploadedFile};
use serde::Deserialize;
use tracing::{debug, instrument};
use validator::Validate;

use crate::{error::ApiError, middleware::ValidatedForm, state::AppState};

/// Multipart field carrying the document
pub const FILE_FIELD: &str = "file";

/// Name used when the browser sends no file name
const UNNAMED_UPLOAD: &str = "upload";

/// Speech settings posted by the page
#[derive(Debug, Default, Deserialize, Validate)]
pub struct ControlsForm {
    /// ISO 639-1 code from the language selector
    #[serde(default)]
    #[validate(length(min = 2, max = 16))]
    pub language: Option<String>,

    /// Manual override checkbox; absent when unchecked
    #[serde(default, rename = "override")]
    pub override_enabled: bool,

    #[serde(default)]
    #[validate(range(min = 0.5, max = 2.0))]
    pub speed: Option<f32>,

    #[serde(default)]
    #[validate(range(min = 0.5, max = 2.0))]
    pub pitch: Option<f32>,
}

fn multipart_error(err: &MultipartError) -> ApiError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(err.body_text())
    } else {
        ApiError::BadRequest(err.body_text())
    }
}

/// Accept a document upload and run extraction and detection
#[instrument(skip(state, multipart))]
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Redirect, ApiError> {
    let mut file = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| multipart_error(&e))?
    {
        if field.name() != Some(FILE_FIELD) {
            continue;
        }

        let name = field
            .file_name()
            .filter(|n| !n.trim().is_empty())
            .unwrap_or(UNNAMED_UPLOAD)
            .to_string();
        let media_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|e| multipart_error(&e))?;
        debug!(name = %name, media_type = %media_type, size = bytes.len(), "Received upload");

        file = Some(UploadedFile::new(name, media_type, bytes.to_vec()).map_err(|e| {
            ApiError::BadRequest(e.to_string())
        })?);
        break;
    }

    let file =
        file.ok_or_else(|| ApiError::BadRequest(format!("Missing '{FILE_FIELD}' field")))?;

    let mut session = state.session.lock().await;
    state.reader.upload(&mut session, file).await?;

    Ok(Redirect::to("/"))
}

fn apply_controls(
    state: &AppState,
    session: &mut Session,
    form: &ControlsForm,
) -> Result<(), ApiError> {
    if let Some(code) = form.language.as_deref() {
        let language = Language::from_code(code)
            .ok_or_else(|| ApiError::BadRequest(format!("Unsupported language: {code}")))?;
        state.reader.select_language(session, language)?;
    }

    state.reader.set_override(session, form.override_enabled)?;

    if let Some(speed) = form.speed {
        state.reader.set_speed(session, speed)?;
    }
    if let Some(pitch) = form.pitch {
        state.reader.set_pitch(session, pitch)?;
    }

    Ok(())
}

/// Save the speech settings
#[instrument(skip(state))]
pub async fn update_controls(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<ControlsForm>,
) -> Result<Redirect, ApiError> {
    let mut session = state.session.lock().await;
    apply_controls(&state, &mut session, &form)?;
    Ok(Redirect::to("/"))
}

/// Save the speech settings, then convert the text to speech
#[instrument(skip(state))]
pub async fn convert(
    State(state): State<AppState>,
    ValidatedForm(form): ValidatedForm<ControlsForm>,
) -> Result<Redirect, ApiError> {
    let mut session = state.session.lock().await;
    apply_controls(&state, &mut session, &form)?;
    state.reader.convert(&mut session).await?;
    Ok(Redirect::to("/"))
}

/// Clear all notices
pub async fn dismiss_notices(State(state): State<AppState>) -> Result<Redirect, ApiError> {
    let mut session = state.session.lock().await;
    state.reader.dismiss_notices(&mut session)?;
    Ok(Redirect::to("/"))
}
