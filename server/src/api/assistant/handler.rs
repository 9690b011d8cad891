//! Assistant API Handlers

use axum::{extract::State, Json};

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::assistant::{ChatReply, ChatRequest};

/// Longest accepted chat message
const MAX_MESSAGE_LEN: usize = 2000;

/// POST /api/assistant/chat
pub async fn chat(
    State(state): State<ServerState>,
    Json(req): Json<ChatRequest>,
) -> AppResult<Json<ChatReply>> {
    let message = req.message.trim();
    if message.is_empty() {
        return Err(AppError::validation("Message must not be empty"));
    }
    if message.len() > MAX_MESSAGE_LEN {
        return Err(AppError::validation(format!(
            "Message exceeds {} characters",
            MAX_MESSAGE_LEN
        )));
    }

    let reply = state.assistant.chat(message).await;
    Ok(Json(reply))
}
