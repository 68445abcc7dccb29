//! Multipart upload handler for the talk endpoint.

use std::sync::Arc;

use axum::extract::multipart::{Field, Multipart, MultipartRejection};
use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::response::{IntoResponse, Response};
use tracing::info;

use super::client::{SpeechRequest, DEFAULT_WHISPER_LANGUAGE, DEFAULT_XTTS_LANGUAGE};
use crate::error::{ApiError, ProxyError};
use crate::state::AppState;

/// `POST /api/robot_functions/talk_to_fathy/execute`
///
/// Fields: `audio` (required file), `whisper_language`, `xtts_language`.
pub(crate) async fn talk_to_fathy_s2s(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<Response, ApiError> {
    let multipart = multipart.map_err(|e| ProxyError::BadRequest(e.body_text()))?;
    let request = read_upload(multipart).await?;
    info!("Received audio file for speech-to-speech: {}", request.filename);

    let reply = state.speech.forward(request).await?;
    Ok(([(CONTENT_TYPE, reply.content_type)], reply.audio).into_response())
}

async fn read_upload(mut multipart: Multipart) -> Result<SpeechRequest, ProxyError> {
    let mut upload: Option<SpeechRequest> = None;
    let mut whisper_language = DEFAULT_WHISPER_LANGUAGE.to_string();
    let mut xtts_language = DEFAULT_XTTS_LANGUAGE.to_string();

    while let Some(field) = multipart.next_field().await.map_err(bad_multipart)? {
        let name = field.name().map(str::to_string);
        match name.as_deref() {
            Some("audio") => upload = Some(read_audio(field).await?),
            Some("whisper_language") => {
                whisper_language = field.text().await.map_err(bad_multipart)?;
            }
            Some("xtts_language") => {
                xtts_language = field.text().await.map_err(bad_multipart)?;
            }
            _ => {}
        }
    }

    let mut request = upload
        .ok_or_else(|| ProxyError::BadRequest("missing required file field: audio".to_string()))?;
    request.whisper_language = whisper_language;
    request.xtts_language = xtts_language;
    Ok(request)
}

async fn read_audio(field: Field<'_>) -> Result<SpeechRequest, ProxyError> {
    let filename = field.file_name().unwrap_or_default().to_string();
    let content_type = field.content_type().map(str::to_string);
    let audio = field.bytes().await.map_err(bad_multipart)?;

    let request = SpeechRequest::new(audio, filename);
    Ok(match content_type {
        Some(content_type) => request.with_content_type(content_type),
        None => request,
    })
}

fn bad_multipart(err: axum::extract::multipart::MultipartError) -> ProxyError {
    ProxyError::BadRequest(err.body_text())
}

#[cfg(test)]
#[path = "handler_tests.rs"]
mod tests;
