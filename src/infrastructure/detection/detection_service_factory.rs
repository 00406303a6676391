use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::{DetectionError, DetectionService};
use crate::domain::{Detection, Prediction};
use crate::presentation::config::{DetectionProviderSetting, DetectionSettings};

use super::mock_detection_client::{DisabledDetectionService, MockDetectionClient};
use super::roboflow_detection_client::RoboflowDetectionClient;

pub struct DetectionServiceFactory;

impl DetectionServiceFactory {
    pub fn create(settings: &DetectionSettings) -> Result<Arc<dyn DetectionService>, DetectionError> {
        match settings.provider {
            DetectionProviderSetting::Roboflow => {
                let key = settings.api_key.as_deref().ok_or_else(|| {
                    DetectionError::ApiRequestFailed(
                        "detection.api_key required for roboflow".to_string(),
                    )
                })?;
                let client = RoboflowDetectionClient::new(
                    &settings.base_url,
                    &settings.model_id,
                    key,
                    Duration::from_secs(settings.timeout_seconds),
                )?;
                Ok(Arc::new(client))
            }
            DetectionProviderSetting::Mock => Ok(Arc::new(MockDetectionClient::new(Detection {
                predictions: vec![Prediction {
                    class: "glioma".to_string(),
                    x: 128.0,
                    y: 128.0,
                    width: 64.0,
                    height: 48.0,
                    confidence: 0.87,
                }],
            }))),
            DetectionProviderSetting::Disabled => Ok(Arc::new(DisabledDetectionService)),
        }
    }
}
