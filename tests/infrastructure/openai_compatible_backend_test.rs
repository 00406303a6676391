use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::http::{HeaderMap, StatusCode};
use axum::routing::post;
use axum::{Json, Router};
use image::DynamicImage;
use serde_json::{Value, json};

use radialog::application::ports::{InferenceBackend, InferenceError};
use radialog::infrastructure::llm::OpenAiCompatibleBackend;

use crate::helpers::serve;

const COMPLETIONS_PATH: &str = "/v1/chat/completions";

#[derive(Default)]
struct Captured {
    authorization: Option<String>,
    body: Option<Value>,
}

fn backend(base_url: &str, api_key: Option<&str>) -> OpenAiCompatibleBackend {
    OpenAiCompatibleBackend::new(
        base_url,
        "llava",
        api_key.map(str::to_string),
        256,
        0.2,
        Duration::from_secs(5),
    )
    .unwrap()
}

async fn serve_canned(status: StatusCode, body: &'static str) -> String {
    let router = Router::new().route(
        COMPLETIONS_PATH,
        post(move || async move { (status, [("content-type", "application/json")], body) }),
    );
    serve(router).await
}

#[tokio::test]
async fn given_completion_when_inferring_then_sends_image_and_returns_trimmed_content() {
    let captured = Arc::new(Mutex::new(Captured::default()));
    let sink = Arc::clone(&captured);
    let router = Router::new().route(
        COMPLETIONS_PATH,
        post(move |headers: HeaderMap, Json(body): Json<Value>| {
            let sink = Arc::clone(&sink);
            async move {
                let mut captured = sink.lock().unwrap();
                captured.authorization = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string);
                captured.body = Some(body);
                Json(json!({
                    "choices": [{ "message": { "content": "  Technique: MRI brain.\n" } }]
                }))
            }
        }),
    );
    let base_url = serve(router).await;

    let text = backend(&format!("{base_url}/"), Some("secret"))
        .infer(&DynamicImage::new_rgb8(8, 8), "Describe the scan")
        .await
        .unwrap();

    assert_eq!(text, "Technique: MRI brain.");
    let captured = captured.lock().unwrap();
    assert_eq!(captured.authorization.as_deref(), Some("Bearer secret"));
    let body = captured.body.as_ref().unwrap();
    assert_eq!(body["model"], "llava");
    let content = &body["messages"][0]["content"];
    assert!(
        content[0]["image_url"]["url"]
            .as_str()
            .unwrap()
            .starts_with("data:image/jpeg;base64,")
    );
    assert_eq!(content[1]["text"], "Describe the scan");
}

#[tokio::test]
async fn given_server_error_when_inferring_then_returns_api_request_failed() {
    let base_url = serve_canned(StatusCode::INTERNAL_SERVER_ERROR, r#"{"error":"boom"}"#).await;

    let result = backend(&base_url, None)
        .infer(&DynamicImage::new_rgb8(4, 4), "prompt")
        .await;

    assert!(matches!(result, Err(InferenceError::ApiRequestFailed(msg)) if msg.contains("500")));
}

#[tokio::test]
async fn given_malformed_json_when_inferring_then_returns_invalid_response() {
    let base_url = serve_canned(StatusCode::OK, "{not json").await;

    let result = backend(&base_url, None)
        .infer(&DynamicImage::new_rgb8(4, 4), "prompt")
        .await;

    assert!(matches!(result, Err(InferenceError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_blank_content_when_inferring_then_returns_invalid_response() {
    let base_url =
        serve_canned(StatusCode::OK, r#"{"choices":[{"message":{"content":"   "}}]}"#).await;

    let result = backend(&base_url, None)
        .infer(&DynamicImage::new_rgb8(4, 4), "prompt")
        .await;

    assert!(matches!(result, Err(InferenceError::InvalidResponse(_))));
}

#[tokio::test]
async fn given_no_choices_when_inferring_then_returns_invalid_response() {
    let base_url = serve_canned(StatusCode::OK, r#"{"choices":[]}"#).await;

    let result = backend(&base_url, None)
        .infer(&DynamicImage::new_rgb8(4, 4), "prompt")
        .await;

    assert!(matches!(result, Err(InferenceError::InvalidResponse(_))));
}
