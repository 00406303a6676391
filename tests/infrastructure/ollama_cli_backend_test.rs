use std::time::Duration;

use image::DynamicImage;

use radialog::application::ports::{InferenceBackend, InferenceError};
use radialog::infrastructure::llm::OllamaCliBackend;

#[tokio::test]
async fn given_missing_binary_when_inferring_then_returns_unavailable() {
    let backend = OllamaCliBackend::new(
        "/nonexistent/radialog-ollama",
        "llava",
        Duration::from_secs(5),
    );

    let result = backend.infer(&DynamicImage::new_rgb8(4, 4), "prompt").await;

    assert!(matches!(result, Err(InferenceError::Unavailable(_))));
}

#[cfg(unix)]
#[tokio::test]
async fn given_binary_exiting_non_zero_when_inferring_then_returns_process_failed() {
    let backend = OllamaCliBackend::new("false", "llava", Duration::from_secs(5));

    let result = backend.infer(&DynamicImage::new_rgb8(4, 4), "prompt").await;

    assert!(matches!(result, Err(InferenceError::ProcessFailed(_))));
}

#[cfg(unix)]
fn stand_in_binary(dir: &tempfile::TempDir, body: &str) -> String {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.path().join("ollama");
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path.to_string_lossy().into_owned()
}

#[cfg(unix)]
#[tokio::test]
async fn given_echoing_binary_when_inferring_then_prompt_references_staged_jpeg() {
    let dir = tempfile::tempdir().unwrap();
    let binary = stand_in_binary(&dir, "cat");
    let backend = OllamaCliBackend::new(&binary, "llava", Duration::from_secs(5));

    let text = backend
        .infer(&DynamicImage::new_rgb8(4, 4), "Describe the scan")
        .await
        .unwrap();

    let (tag, prompt) = text.split_once('\n').unwrap();
    assert!(tag.starts_with("<image:"));
    assert!(tag.ends_with(".jpg>"));
    assert_eq!(prompt, "Describe the scan");
}

#[cfg(unix)]
#[tokio::test]
async fn given_silent_binary_when_inferring_then_returns_invalid_response() {
    let dir = tempfile::tempdir().unwrap();
    let binary = stand_in_binary(&dir, "cat > /dev/null");
    let backend = OllamaCliBackend::new(&binary, "llava", Duration::from_secs(5));

    let result = backend.infer(&DynamicImage::new_rgb8(4, 4), "prompt").await;

    assert!(matches!(result, Err(InferenceError::InvalidResponse(_))));
}

#[cfg(unix)]
#[tokio::test]
async fn given_hanging_binary_when_inferring_then_times_out() {
    let dir = tempfile::tempdir().unwrap();
    let binary = stand_in_binary(&dir, "sleep 5");
    let backend = OllamaCliBackend::new(&binary, "llava", Duration::from_millis(200));

    let result = backend.infer(&DynamicImage::new_rgb8(4, 4), "prompt").await;

    assert!(matches!(result, Err(InferenceError::Timeout(_))));
}

#[cfg(unix)]
#[tokio::test]
async fn given_prompt_larger_than_pipe_buffer_and_stalled_binary_when_inferring_then_times_out() {
    let dir = tempfile::tempdir().unwrap();
    let binary = stand_in_binary(&dir, "sleep 30");
    let backend = OllamaCliBackend::new(&binary, "llava", Duration::from_millis(500));
    let prompt = "x".repeat(256 * 1024);

    let result = tokio::time::timeout(
        Duration::from_secs(10),
        backend.infer(&DynamicImage::new_rgb8(4, 4), &prompt),
    )
    .await
    .expect("backend ignored its own deadline");

    assert!(matches!(result, Err(InferenceError::Timeout(_))));
}
