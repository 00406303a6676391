use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::{ConversationId, MessageRole};
use crate::presentation::state::AppState;

use super::error::{error_response, session_error_response};

#[derive(Serialize)]
pub struct TurnView {
    pub role: MessageRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Serialize)]
pub struct ConversationView {
    pub conversation_id: String,
    pub has_image: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub current_report: Option<String>,
    pub history: Vec<TurnView>,
}

#[tracing::instrument(skip(state))]
pub async fn conversation_handler(
    State(state): State<AppState>,
    Path(conversation_id): Path<String>,
) -> impl IntoResponse {
    let id = match conversation_id.parse::<ConversationId>() {
        Ok(id) => id,
        Err(e) => return error_response(StatusCode::BAD_REQUEST, e),
    };

    match state.session_service.snapshot(id).await {
        Ok(Some(conversation)) => (
            StatusCode::OK,
            Json(ConversationView {
                conversation_id: id.to_string(),
                has_image: conversation.image().is_some(),
                created_at: conversation.created_at(),
                updated_at: conversation.updated_at(),
                current_report: conversation.current_report().map(str::to_string),
                history: conversation
                    .history()
                    .iter()
                    .map(|t| TurnView {
                        role: t.role,
                        content: t.content.clone(),
                        created_at: t.created_at,
                    })
                    .collect(),
            }),
        )
            .into_response(),
        Ok(None) => error_response(
            StatusCode::NOT_FOUND,
            format!("conversation not found: {id}"),
        ),
        Err(e) => session_error_response(&e),
    }
}
