use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Form, Json};
use serde::{Deserialize, Serialize};

use crate::domain::ConversationId;
use crate::infrastructure::observability::sanitize_for_log;
use crate::presentation::state::AppState;

use super::error::{error_response, session_error_response};

#[derive(Deserialize)]
pub struct ChatRequest {
    pub conversation_id: String,
    pub message: String,
}

#[derive(Serialize)]
pub struct ChatResponse {
    pub reply: String,
}

#[derive(Deserialize)]
pub struct ReportQaRequest {
    pub conversation_id: String,
    pub question: String,
}

#[derive(Serialize)]
pub struct ReportQaResponse {
    pub answer: String,
}

fn parse_conversation_id(raw: &str) -> Result<ConversationId, Response> {
    raw.parse::<ConversationId>()
        .map_err(|e| error_response(StatusCode::BAD_REQUEST, e))
}

fn form_rejection_response(rejection: FormRejection) -> Response {
    tracing::warn!(error = %rejection, "Malformed form body");
    error_response(StatusCode::BAD_REQUEST, rejection.body_text())
}

#[tracing::instrument(skip(state, payload))]
pub async fn chat_handler(
    State(state): State<AppState>,
    payload: Result<Form<ChatRequest>, FormRejection>,
) -> impl IntoResponse {
    let Form(request) = match payload {
        Ok(form) => form,
        Err(rejection) => return form_rejection_response(rejection),
    };
    let id = match parse_conversation_id(&request.conversation_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    tracing::debug!(
        conversation_id = %id,
        message = %sanitize_for_log(&request.message),
        "Refining report"
    );

    match state.session_service.refine(id, &request.message).await {
        Ok(reply) => (
            StatusCode::OK,
            Json(ChatResponse {
                reply: reply.outcome.into_text(),
            }),
        )
            .into_response(),
        Err(e) => session_error_response(&e),
    }
}

#[tracing::instrument(skip(state, payload))]
pub async fn report_qa_handler(
    State(state): State<AppState>,
    payload: Result<Form<ReportQaRequest>, FormRejection>,
) -> impl IntoResponse {
    let Form(request) = match payload {
        Ok(form) => form,
        Err(rejection) => return form_rejection_response(rejection),
    };
    let id = match parse_conversation_id(&request.conversation_id) {
        Ok(id) => id,
        Err(response) => return response,
    };

    tracing::debug!(
        conversation_id = %id,
        question = %sanitize_for_log(&request.question),
        "Answering report question"
    );

    match state.session_service.ask(id, &request.question).await {
        Ok(reply) => (
            StatusCode::OK,
            Json(ReportQaResponse {
                answer: reply.outcome.into_text(),
            }),
        )
            .into_response(),
        Err(e) => session_error_response(&e),
    }
}
