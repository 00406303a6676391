use async_trait::async_trait;

use crate::domain::Detection;

/// Remote object detector that locates tumor regions in an MRI slice.
#[async_trait]
pub trait DetectionService: Send + Sync {
    async fn detect(&self, image_bytes: &[u8]) -> Result<Detection, DetectionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DetectionError {
    #[error("detection disabled")]
    Disabled,
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}
