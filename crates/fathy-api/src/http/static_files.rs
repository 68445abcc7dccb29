//! Touch interface and favicon.

use std::sync::Arc;

use axum::extract::State;
use axum::http::header::CONTENT_TYPE;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::error::ApiError;
use crate::state::AppState;

const FAVICON_CONTENT_TYPE: &str = "image/vnd.microsoft.icon";

pub(crate) async fn index(State(state): State<Arc<AppState>>) -> Result<Response, ApiError> {
    let path = state.static_dir.join("index.html");
    let html = tokio::fs::read(&path)
        .await
        .map_err(|_| ApiError::NotFound("index.html not found in static folder.".to_string()))?;
    Ok(([(CONTENT_TYPE, "text/html; charset=utf-8")], html).into_response())
}

/// `204 No Content` when there is no favicon.
pub(crate) async fn favicon(State(state): State<Arc<AppState>>) -> Response {
    match tokio::fs::read(state.static_dir.join("favicon.ico")).await {
        Ok(icon) => ([(CONTENT_TYPE, FAVICON_CONTENT_TYPE)], icon).into_response(),
        Err(_) => StatusCode::NO_CONTENT.into_response(),
    }
}
