//! Generic handler behind every operation route.

use std::sync::Arc;

use axum::extract::rejection::BytesRejection;
use axum::extract::{MatchedPath, Query, State};
use axum::http::{Method, StatusCode};
use axum::Json;
use bytes::Bytes;
use serde_json::Value;
use tracing::{error, warn};

use fathy_protocols::RequestInput;

use crate::error::ApiError;
use crate::state::AppState;

/// Normalize the request into an input mapping and invoke the bound operation.
///
/// `POST` reads the JSON body; every other method reads the query string.
/// A body that cannot be buffered (over the route's limit, for instance) is
/// answered with the JSON error shape rather than axum's plain-text rejection.
pub(crate) async fn handle(
    State(state): State<Arc<AppState>>,
    matched: MatchedPath,
    method: Method,
    Query(pairs): Query<Vec<(String, String)>>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<Value>, ApiError> {
    let binding = state
        .endpoints
        .get(matched.as_str())
        .ok_or_else(|| ApiError::NotFound(format!("No operation bound to {}", matched.as_str())))?;

    let input = if method == Method::POST {
        RequestInput::Body(body.map_err(|rejection| body_error(&binding.path, rejection))?)
    } else {
        RequestInput::Query(pairs)
    };

    match binding.invoke(input.into_input_map()).await {
        Ok(value) => Ok(Json(value)),
        Err(e) => {
            error!("Error in {}: {}", binding.path, e);
            Err(e.into())
        }
    }
}

fn body_error(path: &str, rejection: BytesRejection) -> ApiError {
    warn!("Rejected body for {}: {}", path, rejection.body_text());
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(format!("Request body too large for {}", path))
    } else {
        ApiError::BadRequest(rejection.body_text())
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
