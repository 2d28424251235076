use axum::extract::rejection::JsonRejection;
use axum::Json;

use crate::errors::AppError;
use crate::models::{ChatRequest, ChatResponse};
use crate::services::recommender;

// POST /api/chat
pub async fn chat(
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload.map_err(|e| AppError::Validation(e.body_text()))?;

    let text = request
        .latest_text()
        .ok_or_else(|| AppError::BadRequest("No messages provided".to_string()))?;

    tracing::debug!(messages = request.messages.len(), "chat request");
    Ok(Json(recommender::recommend(text)))
}
