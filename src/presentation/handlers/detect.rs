use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use base64::{Engine as _, engine::general_purpose};
use image::DynamicImage;
use serde::Serialize;

use crate::application::ports::DetectionError;
use crate::application::services::image_codec;
use crate::domain::Prediction;
use crate::infrastructure::detection::annotate;
use crate::presentation::state::AppState;

use super::error::error_response;
use super::upload::read_image_upload;

#[derive(Serialize)]
pub struct PredictionView {
    #[serde(flatten)]
    pub prediction: Prediction,
    pub label: String,
}

#[derive(Serialize)]
pub struct DetectResponse {
    pub findings: String,
    pub tumor_detected: bool,
    pub predictions: Vec<PredictionView>,
    /// Base64 JPEG with bounding boxes drawn.
    pub annotated_image: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn detect_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> impl IntoResponse {
    let upload = match read_image_upload(multipart).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };

    let Some(bytes) = upload.image.filter(|b| !b.is_empty()) else {
        return error_response(StatusCode::BAD_REQUEST, "No image uploaded");
    };

    let decoded = match image_codec::decode_image(&bytes) {
        Ok(image) => image,
        Err(e) => {
            tracing::warn!(error = %e, "Rejected undecodable upload");
            return error_response(StatusCode::BAD_REQUEST, format!("Could not decode image: {e}"));
        }
    };

    let detection = match state.detection_service.detect(&bytes).await {
        Ok(detection) => detection,
        Err(DetectionError::Disabled) => {
            return error_response(
                StatusCode::SERVICE_UNAVAILABLE,
                "Detection service is not configured",
            );
        }
        Err(e) => {
            tracing::error!(error = %e, "Detection failed");
            return error_response(StatusCode::BAD_GATEWAY, format!("Detection failed: {e}"));
        }
    };

    let annotated = DynamicImage::ImageRgb8(annotate(&decoded, &detection));
    let annotated_image = match image_codec::encode_jpeg(&annotated) {
        Ok(jpeg) => general_purpose::STANDARD.encode(jpeg),
        Err(e) => {
            tracing::error!(error = %e, "Failed to encode annotated image");
            return error_response(StatusCode::INTERNAL_SERVER_ERROR, e.to_string());
        }
    };

    if detection.is_empty() {
        tracing::info!("No tumor detected");
    }
    let findings = detection.findings();
    let predictions: Vec<PredictionView> = detection
        .predictions
        .into_iter()
        .map(|prediction| {
            let label = prediction.label();
            tracing::debug!(label = %label, "Detected region");
            PredictionView { prediction, label }
        })
        .collect();

    (
        StatusCode::OK,
        Json(DetectResponse {
            tumor_detected: !predictions.is_empty(),
            findings,
            predictions,
            annotated_image,
        }),
    )
        .into_response()
}
