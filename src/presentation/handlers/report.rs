use axum::Json;
use axum::extract::{Multipart, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Serialize;

use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::error::{error_response, session_error_response};
use super::upload::read_image_upload;

#[derive(Serialize)]
pub struct GenerateReportResponse {
    pub conversation_id: String,
    pub report: String,
}

#[tracing::instrument(skip(state, multipart))]
pub async fn generate_report_handler(
    State(state): State<AppState>,
    multipart: Multipart,
) -> impl IntoResponse {
    let upload = match read_image_upload(multipart).await {
        Ok(upload) => upload,
        Err(response) => return response,
    };

    let Some(image) = upload.image.filter(|bytes| !bytes.is_empty()) else {
        tracing::warn!("Report request without an image");
        return error_response(StatusCode::BAD_REQUEST, "No image uploaded");
    };

    let findings = upload
        .findings
        .filter(|f| !f.trim().is_empty())
        .unwrap_or_else(|| state.settings.session.default_findings.clone());

    tracing::debug!(
        bytes = image.len(),
        findings = %sanitize_for_log(&findings),
        "Generating initial report"
    );

    match state.session_service.generate(&image, &findings).await {
        Ok(reply) => (
            StatusCode::OK,
            Json(GenerateReportResponse {
                conversation_id: reply.conversation_id.to_string(),
                report: reply.outcome.into_text(),
            }),
        )
            .into_response(),
        Err(e) => session_error_response(&e),
    }
}
