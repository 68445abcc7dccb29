use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;
use tower::ServiceExt;

use fathy_core::{Binding, EndpointTableBuilder};
use fathy_protocols::{FnOperation, OperationDefinition, OperationError, ParameterSpec};

use crate::http::routes::create_router;
use crate::proxy::SpeechClient;
use crate::state::AppState;

use super::*;

fn test_router() -> axum::Router {
    let mut builder = EndpointTableBuilder::new();
    builder
        .insert(Binding::new(
            "/api/demo/echo/execute",
            "demo.echo",
            Arc::new(FnOperation::new(
                OperationDefinition::new("execute", "Echo the input")
                    .with_parameter(ParameterSpec::optional("mode", "normal")),
                |input| Ok(json!({ "input": input.to_value() })),
            )),
        ))
        .unwrap();
    builder
        .insert(Binding::new(
            "/api/demo/echo/fail",
            "demo.echo",
            Arc::new(FnOperation::new(
                OperationDefinition::new("fail", "Always fails"),
                |_| Err(OperationError::ExecutionFailed("arm jammed".to_string())),
            )),
        ))
        .unwrap();
    builder
        .insert(Binding::new(
            "/api/demo/echo/boom",
            "demo.echo",
            Arc::new(FnOperation::new(
                OperationDefinition::new("boom", "Always panics"),
                |_| panic!("sensor exploded"),
            )),
        ))
        .unwrap();

    let speech = SpeechClient::new("http://127.0.0.1:9/s2s", Duration::from_secs(1)).unwrap();
    let state = AppState::new(Arc::new(builder.build()), speech, "does-not-exist");
    create_router(Arc::new(state))
}

async fn send(request: Request<Body>) -> (StatusCode, Value) {
    let response = test_router().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn post(uri: &str, body: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

#[tokio::test]
async fn test_get_uses_query() {
    let (status, body) = send(get("/api/demo/echo/execute?type=quick&lang=en")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["input"],
        json!({"type": "quick", "lang": "en", "mode": "normal"})
    );
}

#[tokio::test]
async fn test_get_repeated_key_last_wins() {
    let (_, body) = send(get("/api/demo/echo/execute?type=a&type=b")).await;
    assert_eq!(body["input"]["type"], "b");
}

#[tokio::test]
async fn test_post_uses_json_body() {
    let (status, body) = send(post(
        "/api/demo/echo/execute",
        r#"{"type": "detailed", "count": 2, "mode": "gentle"}"#,
    ))
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body["input"],
        json!({"type": "detailed", "count": 2, "mode": "gentle"})
    );
}

#[tokio::test]
async fn test_post_ignores_query() {
    let (_, body) = send(post("/api/demo/echo/execute?type=quick", "{}")).await;
    assert_eq!(body["input"], json!({"mode": "normal"}));
}

#[tokio::test]
async fn test_post_empty_body_is_empty_input() {
    let (status, body) = send(post("/api/demo/echo/execute", "")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input"], json!({"mode": "normal"}));
}

#[tokio::test]
async fn test_post_invalid_json_is_empty_input() {
    let (status, body) = send(post("/api/demo/echo/execute", "{not json")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input"], json!({"mode": "normal"}));
}

#[tokio::test]
async fn test_post_oversized_body_is_json_413() {
    let padding = "x".repeat(3 * 1024 * 1024);
    let payload = format!(r#"{{"type": "quick", "padding": "{}"}}"#, padding);
    let (status, body) = send(post("/api/demo/echo/execute", &payload)).await;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    assert_eq!(body["status"], "error");
    assert_eq!(body["code"], 413);
    assert!(body["error"].as_str().unwrap().contains("/api/demo/echo/execute"));
}

#[tokio::test]
async fn test_post_body_within_limit_is_accepted() {
    let padding = "x".repeat(512 * 1024);
    let payload = format!(r#"{{"padding": "{}"}}"#, padding);
    let (status, body) = send(post("/api/demo/echo/execute", &payload)).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input"]["padding"].as_str().unwrap().len(), 512 * 1024);
}

#[tokio::test]
async fn test_post_non_object_is_empty_input() {
    let (status, body) = send(post("/api/demo/echo/execute", "[1, 2, 3]")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input"], json!({"mode": "normal"}));
}

#[tokio::test]
async fn test_operation_error_is_500_with_message() {
    let (status, body) = send(get("/api/demo/echo/fail")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    assert_eq!(body["error"], "arm jammed");
}

#[tokio::test]
async fn test_operation_panic_is_500() {
    let (status, body) = send(post("/api/demo/echo/boom", "{}")).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["status"], "error");
    let message = body["error"].as_str().unwrap();
    assert!(message.contains("sensor exploded"));
    assert!(!message.contains("panicked at"));
}

#[tokio::test]
async fn test_server_survives_panic() {
    let router = test_router();
    let response = router.clone().oneshot(get("/api/demo/echo/boom")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let response = router.oneshot(get("/api/demo/echo/execute")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
