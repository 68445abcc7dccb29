//! HTTP client for the speech service.

use std::time::Duration;

use bytes::Bytes;
use reqwest::header::CONTENT_TYPE;
use reqwest::multipart::{Form, Part};
use tracing::{error, info};

use crate::error::ProxyError;

pub const DEFAULT_WHISPER_LANGUAGE: &str = "Auto-Detect";
pub const DEFAULT_XTTS_LANGUAGE: &str = "en";

/// Name used when sanitizing leaves nothing.
const FALLBACK_FILENAME: &str = "audio";

/// Audio upload to forward.
#[derive(Debug, Clone)]
pub struct SpeechRequest {
    pub audio: Bytes,
    pub filename: String,
    pub content_type: Option<String>,
    pub whisper_language: String,
    pub xtts_language: String,
}

impl SpeechRequest {
    pub fn new(audio: impl Into<Bytes>, filename: impl Into<String>) -> Self {
        Self {
            audio: audio.into(),
            filename: filename.into(),
            content_type: None,
            whisper_language: DEFAULT_WHISPER_LANGUAGE.to_string(),
            xtts_language: DEFAULT_XTTS_LANGUAGE.to_string(),
        }
    }

    pub fn with_content_type(mut self, content_type: impl Into<String>) -> Self {
        self.content_type = Some(content_type.into());
        self
    }
}

/// Audio reply from the speech service.
#[derive(Debug, Clone)]
pub struct SpeechResponse {
    pub content_type: String,
    pub audio: Bytes,
}

/// Client for the speech-to-speech service.
#[derive(Debug, Clone)]
pub struct SpeechClient {
    client: reqwest::Client,
    url: String,
}

impl SpeechClient {
    /// The timeout covers the whole exchange, upload included.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self, ProxyError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("fathy/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| ProxyError::Client(e.to_string()))?;

        Ok(Self {
            client,
            url: url.into(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Forward an upload and return the audio reply.
    pub async fn forward(&self, request: SpeechRequest) -> Result<SpeechResponse, ProxyError> {
        let mut part = Part::bytes(request.audio.to_vec())
            .file_name(secure_filename(&request.filename));
        if let Some(content_type) = request.content_type.as_deref().filter(|c| !c.is_empty()) {
            part = part
                .mime_str(content_type)
                .map_err(|e| ProxyError::BadRequest(format!("invalid content type: {}", e)))?;
        }
        let form = Form::new()
            .part("audio", part)
            .text("whisper_language", request.whisper_language)
            .text("xtts_language", request.xtts_language);

        info!("Forwarding audio to speech service at {}", self.url);
        let response = self
            .client
            .post(&self.url)
            .multipart(form)
            .send()
            .await
            .map_err(|e| log_failure(&self.url, e))?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            error!("Speech service returned {}: {}", status, message);
            return Err(ProxyError::Upstream {
                status: status.as_u16(),
                message,
            });
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();
        if !content_type.starts_with("audio/") {
            error!("Speech service returned unexpected content type: {}", content_type);
            return Err(ProxyError::UnexpectedContentType(content_type));
        }

        let audio = response
            .bytes()
            .await
            .map_err(|e| log_failure(&self.url, e))?;
        info!("Relaying {} bytes of {} from speech service", audio.len(), content_type);

        Ok(SpeechResponse {
            content_type,
            audio,
        })
    }
}

fn log_failure(url: &str, err: reqwest::Error) -> ProxyError {
    let err = ProxyError::from(err);
    match &err {
        ProxyError::Timeout => error!("Timeout calling speech service at {}", url),
        ProxyError::Unreachable(detail) => error!("Network error calling speech service: {}", detail),
        other => error!("Speech service call failed: {}", other),
    }
    err
}

/// Reduce an uploaded filename to a safe ASCII form.
///
/// Path separators become word breaks, whitespace runs become `_`, and
/// anything outside `[A-Za-z0-9._-]` is dropped. Leading and trailing dots
/// and underscores are stripped, so `../../etc/passwd` becomes `etc_passwd`.
pub fn secure_filename(name: &str) -> String {
    let spaced: String = name
        .chars()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();
    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod tests;
