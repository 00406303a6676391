use std::sync::Arc;

use image::DynamicImage;

use radialog::application::services::{BACKEND_ERROR_MARKER, InferenceClient, InferenceOutcome};
use radialog::infrastructure::llm::UnconfiguredBackend;

use crate::helpers::{ScriptedBackend, TEST_REPORT};

fn blank_image() -> DynamicImage {
    DynamicImage::new_rgb8(4, 4)
}

#[tokio::test]
async fn given_successful_backend_when_inferring_then_returns_completed() {
    let client = InferenceClient::new(Arc::new(ScriptedBackend::default()));

    let outcome = client.infer(&blank_image(), "initial").await;

    assert_eq!(outcome, InferenceOutcome::Completed(TEST_REPORT.to_string()));
    assert!(!outcome.is_backend_error());
}

#[tokio::test]
async fn given_failing_backend_when_inferring_then_returns_marked_backend_error() {
    let client = InferenceClient::new(Arc::new(ScriptedBackend::failing()));

    let outcome = client.infer(&blank_image(), "initial").await;

    assert!(outcome.is_backend_error());
    assert!(outcome.text().starts_with(BACKEND_ERROR_MARKER));
    assert!(outcome.text().contains("scripted error"));
    assert!(outcome.text().contains("exit status 1"));
}

#[tokio::test]
async fn given_unconfigured_backend_when_inferring_then_explains_not_configured() {
    let client = InferenceClient::new(Arc::new(UnconfiguredBackend::new("radialog")));

    let outcome = client.infer(&blank_image(), "initial").await;

    assert!(outcome.is_backend_error());
    assert!(outcome.text().contains("not configured"));
    assert!(outcome.text().contains("\"radialog\""));
}
