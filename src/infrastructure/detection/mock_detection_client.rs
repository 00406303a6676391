use async_trait::async_trait;

use crate::application::ports::{DetectionError, DetectionService};
use crate::domain::Detection;

/// Returns a fixed detection regardless of input.
pub struct MockDetectionClient {
    detection: Detection,
}

impl MockDetectionClient {
    pub fn new(detection: Detection) -> Self {
        Self { detection }
    }
}

#[async_trait]
impl DetectionService for MockDetectionClient {
    async fn detect(&self, _image_bytes: &[u8]) -> Result<Detection, DetectionError> {
        Ok(self.detection.clone())
    }
}

pub struct DisabledDetectionService;

#[async_trait]
impl DetectionService for DisabledDetectionService {
    async fn detect(&self, _image_bytes: &[u8]) -> Result<Detection, DetectionError> {
        Err(DetectionError::Disabled)
    }
}
