use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use reqwest::multipart::{Form, Part};

use crate::application::ports::{DetectionError, DetectionService};
use crate::domain::Detection;

/// Hosted Roboflow object-detection model.
pub struct RoboflowDetectionClient {
    client: Client,
    endpoint: String,
    api_key: String,
}

impl RoboflowDetectionClient {
    pub fn new(
        base_url: &str,
        model_id: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, DetectionError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DetectionError::ApiRequestFailed(format!("http client: {e}")))?;
        Ok(Self {
            client,
            endpoint: format!(
                "{}/{}",
                base_url.trim_end_matches('/'),
                model_id.trim_matches('/')
            ),
            api_key: api_key.to_string(),
        })
    }
}

#[async_trait]
impl DetectionService for RoboflowDetectionClient {
    #[tracing::instrument(skip(self, image_bytes), fields(bytes = image_bytes.len()))]
    async fn detect(&self, image_bytes: &[u8]) -> Result<Detection, DetectionError> {
        let form = Form::new().part(
            "file",
            Part::bytes(image_bytes.to_vec()).file_name("upload.jpg"),
        );

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("api_key", self.api_key.as_str())])
            .multipart(form)
            .send()
            .await
            .map_err(|e| DetectionError::ApiRequestFailed(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let text = response.text().await.unwrap_or_default();
            return Err(DetectionError::ApiRequestFailed(format!(
                "detection returned {status}: {text}"
            )));
        }

        let detection: Detection = response
            .json()
            .await
            .map_err(|e| DetectionError::InvalidResponse(e.to_string()))?;

        tracing::info!(
            predictions = detection.predictions.len(),
            "Detection completed"
        );

        Ok(detection)
    }
}
