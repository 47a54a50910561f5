//! Shared wire types for the chat endpoint.
//!
//! This crate owns the JSON request/reply shapes exchanged between the
//! `client` chat widget and the `server` reply endpoint, so both sides
//! agree on field names without duplicating serde structs.

use serde::{Deserialize, Serialize};

/// Request body for `POST /api/chat`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatRequest {
    /// The user's message, forwarded verbatim to the completion provider.
    pub message: String,
}

/// Success (and generic-failure) response body for `POST /api/chat`.
///
/// Failures deliberately reuse this shape with a fixed apology string so
/// the widget can render them as an ordinary bot message.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatReply {
    pub reply: String,
}

/// Error body for invocations that never reach the reply flow,
/// e.g. a non-POST method on the chat endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatApiError {
    pub error: String,
}
