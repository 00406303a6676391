use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::application::services::SessionError;

#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (
        status,
        Json(ErrorResponse {
            error: message.into(),
        }),
    )
        .into_response()
}

/// Input problems are the caller's to fix; storage or stored-image faults
/// are ours.
pub fn session_error_response(error: &SessionError) -> Response {
    let status = match error {
        SessionError::InvalidImage(_) | SessionError::EmptyInput(_) => StatusCode::BAD_REQUEST,
        SessionError::ConversationNotFound(_) => StatusCode::NOT_FOUND,
        SessionError::MissingImage(_) => StatusCode::CONFLICT,
        SessionError::CorruptStoredImage(..)
        | SessionError::Conversation(_)
        | SessionError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    if status.is_server_error() {
        tracing::error!(error = %error, "Session operation failed");
    } else {
        tracing::warn!(error = %error, "Session request rejected");
    }

    error_response(status, error.to_string())
}
