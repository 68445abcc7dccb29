use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;
use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

use fathy_core::EndpointTable;

use crate::http::routes::create_router;
use crate::http::system::TALK_TO_FATHY_PATH;
use crate::proxy::SpeechClient;

use super::*;

const BOUNDARY: &str = "fathy-test-boundary";

fn router(url: String, timeout: Duration) -> axum::Router {
    let speech = SpeechClient::new(url, timeout).unwrap();
    let state = AppState::new(Arc::new(EndpointTable::default()), speech, "does-not-exist");
    create_router(Arc::new(state))
}

fn multipart_body(parts: &[(&str, Option<&str>, &str)]) -> String {
    let mut body = String::new();
    for (name, filename, value) in parts {
        body.push_str(&format!("--{}\r\n", BOUNDARY));
        match filename {
            Some(filename) => {
                body.push_str(&format!(
                    "Content-Disposition: form-data; name=\"{}\"; filename=\"{}\"\r\n",
                    name, filename
                ));
                body.push_str("Content-Type: audio/webm\r\n\r\n");
            }
            None => {
                body.push_str(&format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name));
            }
        }
        body.push_str(value);
        body.push_str("\r\n");
    }
    body.push_str(&format!("--{}--\r\n", BOUNDARY));
    body
}

fn upload_request(body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(TALK_TO_FATHY_PATH)
        .header(
            "content-type",
            format!("multipart/form-data; boundary={}", BOUNDARY),
        )
        .body(Body::from(body))
        .unwrap()
}

fn audio_upload() -> Request<Body> {
    upload_request(multipart_body(&[
        ("audio", Some("my clip.webm"), "WEBM-bytes"),
        ("xtts_language", None, "ar"),
    ]))
}

async fn json_body(response: Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_upload_relays_audio() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .and(matchers::path("/s2s"))
        .and(matchers::body_string_contains("filename=\"my_clip.webm\""))
        .and(matchers::body_string_contains("WEBM-bytes"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(b"RIFF-reply".to_vec(), "audio/wav"))
        .expect(1)
        .mount(&server)
        .await;

    let app = router(format!("{}/s2s", server.uri()), Duration::from_secs(5));
    let response = app.oneshot(audio_upload()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(response.headers()["content-type"], "audio/wav");
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"RIFF-reply");
}

#[tokio::test]
async fn test_missing_audio_is_400() {
    let app = router("http://127.0.0.1:9/s2s".to_string(), Duration::from_secs(1));
    let body = multipart_body(&[("whisper_language", None, "English")]);
    let response = app.oneshot(upload_request(body)).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = json_body(response).await;
    assert_eq!(body["status"], "error");
    assert!(body["error"].as_str().unwrap().contains("audio"));
}

#[tokio::test]
async fn test_not_multipart_is_400() {
    let app = router("http://127.0.0.1:9/s2s".to_string(), Duration::from_secs(1));
    let request = Request::builder()
        .method("POST")
        .uri(TALK_TO_FATHY_PATH)
        .header("content-type", "text/plain")
        .body(Body::from("hello"))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_upstream_timeout_is_504() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(b"late".to_vec(), "audio/wav")
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let app = router(format!("{}/s2s", server.uri()), Duration::from_millis(200));
    let response = app.oneshot(audio_upload()).await.unwrap();

    assert_eq!(response.status(), StatusCode::GATEWAY_TIMEOUT);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Speech processing service timed out.");
}

#[tokio::test]
async fn test_upstream_unreachable_is_503() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let app = router(format!("http://127.0.0.1:{}/s2s", port), Duration::from_secs(5));
    let response = app.oneshot(audio_upload()).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
    let body = json_body(response).await;
    assert_eq!(body["error"], "Could not connect to speech processing service.");
}

#[tokio::test]
async fn test_upstream_non_audio_is_500() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(r#"{"ok":true}"#, "application/json"))
        .mount(&server)
        .await;

    let app = router(format!("{}/s2s", server.uri()), Duration::from_secs(5));
    let response = app.oneshot(audio_upload()).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert_eq!(
        body["error"],
        "Main workflow returned unexpected content type: application/json"
    );
}

#[tokio::test]
async fn test_upstream_error_status_is_500() {
    let server = MockServer::start().await;
    Mock::given(matchers::method("POST"))
        .respond_with(ResponseTemplate::new(502).set_body_string("bad gateway"))
        .mount(&server)
        .await;

    let app = router(format!("{}/s2s", server.uri()), Duration::from_secs(5));
    let response = app.oneshot(audio_upload()).await.unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = json_body(response).await;
    assert!(body["error"].as_str().unwrap().contains("502"));
}
