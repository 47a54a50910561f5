//! Chat reply endpoint.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use tracing::warn;
use wire::{ChatApiError, ChatReply, ChatRequest};

use crate::services::reply::{self as reply_service, GENERIC_FAILURE_REPLY};
use crate::state::AppState;

/// `POST /api/chat` — forward one message to the completion provider and
/// relay its reply. Every failure collapses to a fixed 500 payload the
/// widget can render as an ordinary bot message; provider detail stays in
/// the server log.
pub async fn reply(State(state): State<AppState>, Json(req): Json<ChatRequest>) -> (StatusCode, Json<ChatReply>) {
    match reply_service::get_reply(state.llm.as_ref(), &req.message).await {
        Ok(text) => (StatusCode::OK, Json(ChatReply { reply: text })),
        Err(e) => {
            warn!(error = %e, "chat: reply failed");
            (StatusCode::INTERNAL_SERVER_ERROR, Json(ChatReply { reply: GENERIC_FAILURE_REPLY.to_owned() }))
        }
    }
}

/// Any non-POST method on `/api/chat`.
pub async fn method_not_allowed() -> (StatusCode, Json<ChatApiError>) {
    (StatusCode::METHOD_NOT_ALLOWED, Json(ChatApiError { error: "Only POST allowed".to_owned() }))
}

#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;
