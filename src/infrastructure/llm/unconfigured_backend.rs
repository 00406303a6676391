use async_trait::async_trait;
use image::DynamicImage;

use crate::application::ports::{InferenceBackend, InferenceError};

use super::inference_backend_factory::SUPPORTED_PROVIDERS;

/// Placeholder used when the configured provider is unset, unknown or
/// missing a required setting. It never attempts a call.
pub struct UnconfiguredBackend {
    detail: String,
}

impl UnconfiguredBackend {
    pub fn new(requested: &str) -> Self {
        let requested = if requested.trim().is_empty() {
            "<unset>"
        } else {
            requested
        };
        Self {
            detail: format!(
                "provider {requested:?} is not supported; set inference.provider to one of {}",
                SUPPORTED_PROVIDERS.join(", ")
            ),
        }
    }

    pub fn missing_setting(provider: &str, setting: &str) -> Self {
        Self {
            detail: format!("provider {provider:?} requires {setting}"),
        }
    }
}

#[async_trait]
impl InferenceBackend for UnconfiguredBackend {
    fn name(&self) -> &str {
        "unconfigured"
    }

    async fn infer(&self, _image: &DynamicImage, _prompt: &str) -> Result<String, InferenceError> {
        Err(InferenceError::NotConfigured(self.detail.clone()))
    }
}
