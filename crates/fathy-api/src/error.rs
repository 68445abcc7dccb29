//! HTTP error types.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use fathy_protocols::OperationError;

/// Error returned by a request handler.
///
/// Rendered as `{"status": "error", "code": <status>, "error": <message>}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    PayloadTooLarge(String),

    #[error("{0}")]
    Internal(String),

    #[error("{0}")]
    ServiceUnavailable(String),

    #[error("{0}")]
    GatewayTimeout(String),
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            Self::GatewayTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    status: &'static str,
    code: u16,
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = ErrorBody {
            status: "error",
            code: status.as_u16(),
            error: self.to_string(),
        };
        (status, Json(body)).into_response()
    }
}

impl From<OperationError> for ApiError {
    fn from(err: OperationError) -> Self {
        Self::Internal(err.to_string())
    }
}

/// Failure while relaying audio to the speech service.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Speech processing service timed out.")]
    Timeout,

    #[error("Could not connect to speech processing service.")]
    Unreachable(String),

    #[error("Speech processing service returned status {status}: {message}")]
    Upstream { status: u16, message: String },

    #[error("Main workflow returned unexpected content type: {0}")]
    UnexpectedContentType(String),

    #[error("Invalid upload: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Client(String),
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else if err.is_connect() || err.is_request() {
            Self::Unreachable(err.to_string())
        } else if let Some(status) = err.status() {
            Self::Upstream {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            Self::Client(err.to_string())
        }
    }
}

impl From<ProxyError> for ApiError {
    fn from(err: ProxyError) -> Self {
        match err {
            ProxyError::Timeout => Self::GatewayTimeout(err.to_string()),
            ProxyError::Unreachable(_) => Self::ServiceUnavailable(err.to_string()),
            ProxyError::BadRequest(_) => Self::BadRequest(err.to_string()),
            ProxyError::Upstream { .. }
            | ProxyError::UnexpectedContentType(_)
            | ProxyError::Client(_) => Self::Internal(err.to_string()),
        }
    }
}
