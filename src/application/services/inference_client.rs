use std::sync::Arc;

use image::DynamicImage;

use crate::application::ports::{InferenceBackend, InferenceError};

/// Prefix that marks assistant content produced by a failed backend call.
pub const BACKEND_ERROR_MARKER: &str = "⚠️";

/// Result of one model call. Failures stay distinguishable here and are
/// flattened to plain text only when appended to a conversation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InferenceOutcome {
    Completed(String),
    BackendError(String),
}

impl InferenceOutcome {
    pub fn text(&self) -> &str {
        match self {
            InferenceOutcome::Completed(t) | InferenceOutcome::BackendError(t) => t,
        }
    }

    pub fn into_text(self) -> String {
        match self {
            InferenceOutcome::Completed(t) | InferenceOutcome::BackendError(t) => t,
        }
    }

    pub fn is_backend_error(&self) -> bool {
        matches!(self, InferenceOutcome::BackendError(_))
    }
}

/// Calls the configured backend and never fails: transport and process
/// errors come back as `BackendError` text.
pub struct InferenceClient {
    backend: Arc<dyn InferenceBackend>,
}

impl InferenceClient {
    pub fn new(backend: Arc<dyn InferenceBackend>) -> Self {
        Self { backend }
    }

    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    #[tracing::instrument(skip_all, fields(backend = %self.backend.name(), prompt_chars = prompt.len()))]
    pub async fn infer(&self, image: &DynamicImage, prompt: &str) -> InferenceOutcome {
        match self.backend.infer(image, prompt).await {
            Ok(text) => {
                tracing::debug!(response_chars = text.len(), "Inference completed");
                InferenceOutcome::Completed(text)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Inference backend failed");
                InferenceOutcome::BackendError(self.describe(&e))
            }
        }
    }

    fn describe(&self, error: &InferenceError) -> String {
        match error {
            InferenceError::NotConfigured(detail) => {
                format!("{BACKEND_ERROR_MARKER} Inference backend not configured: {detail}")
            }
            other => format!(
                "{BACKEND_ERROR_MARKER} {} error: {other}",
                self.backend.name()
            ),
        }
    }
}
