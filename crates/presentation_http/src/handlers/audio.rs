//! Audio playback and download

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::{error::ApiError, state::AppState};

async fn current_audio(state: &AppState) -> Result<(Vec<u8>, &'static str, &'static str), ApiError> {
    let session = state.session.lock().await;
    let audio = session
        .current_audio()
        .ok_or_else(|| ApiError::NotFound("No audio has been generated".to_string()))?;
    Ok((audio.data().to_vec(), audio.mime_type(), audio.file_name()))
}

/// Inline MP3 for the page's audio player
pub async fn play(State(state): State<AppState>) -> Result<Response, ApiError> {
    let (data, mime_type, _) = current_audio(&state).await?;
    Ok((
        [
            (header::CONTENT_TYPE, mime_type.to_string()),
            (header::CACHE_CONTROL, "no-store".to_string()),
        ],
        data,
    )
        .into_response())
}

/// MP3 as an attachment named `eduvision_audio.mp3`
pub async fn download(State(state): State<AppState>) -> Result<Response, ApiError> {
    let (data, mime_type, file_name) = current_audio(&state).await?;
    Ok((
        [
            (header::CONTENT_TYPE, mime_type.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{file_name}\""),
            ),
        ],
        data,
    )
        .into_response())
}
