use async_trait::async_trait;
use image::DynamicImage;

/// A vision-language model that completes a text prompt about one image.
#[async_trait]
pub trait InferenceBackend: Send + Sync {
    /// Short identifier used in logs and in contained error messages.
    fn name(&self) -> &str;

    async fn infer(&self, image: &DynamicImage, prompt: &str) -> Result<String, InferenceError>;
}

#[derive(Debug, thiserror::Error)]
pub enum InferenceError {
    #[error("backend not configured: {0}")]
    NotConfigured(String),
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("process failed: {0}")]
    ProcessFailed(String),
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("image encoding failed: {0}")]
    ImageEncoding(String),
    #[error("timed out after {0}s")]
    Timeout(u64),
}
