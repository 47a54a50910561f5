//! Reply service — forwards one user message to the completion provider.
//!
//! DESIGN
//! ======
//! Stateless: each call is a single-turn exchange with a fixed system
//! prompt, no prior turns and no retries. Provider failures surface as a
//! [`ReplyError`] that the route layer collapses into a generic payload;
//! raw provider detail never reaches the caller.

use std::sync::Arc;

use tracing::info;

use crate::llm::ChatCompletion;
use crate::llm::types::LlmError;

/// Fixed payload returned on any reply failure.
pub const GENERIC_FAILURE_REPLY: &str = "Server error. Try again.";

/// Persona/context instruction sent with every message.
pub(crate) const SYSTEM_PROMPT: &str = "You are the BAHO Healthcare Assistant for a healthcare provider \
serving patients across Africa. Provide:\n\
- Information on BAHO services (TeleCare, e-Pharmacy, Diagnostics, ChronicCare, \
LifeTrack, Mental Health, Preventive Programs, GlobalCare)\n\
- General medical information and health tips\n\
- Patient education\n\
- When relevant, point to site sections such as /telecare, /pharmacy, /diagnostics, \
/chroniccare, /lifetrack, /mental, /preventive, /globalcare";

#[derive(Debug, thiserror::Error)]
pub enum ReplyError {
    #[error("completion client not configured")]
    NotConfigured,
    #[error("completion error: {0}")]
    Llm(#[from] LlmError),
}

/// Forward `message` to the completion provider and return its reply text
/// verbatim.
///
/// # Errors
///
/// Returns [`ReplyError::NotConfigured`] when no client was built at
/// startup, or [`ReplyError::Llm`] for any provider failure.
pub async fn get_reply(llm: Option<&Arc<dyn ChatCompletion>>, message: &str) -> Result<String, ReplyError> {
    let llm = llm.ok_or(ReplyError::NotConfigured)?;
    info!(message_len = message.len(), "chat: forwarding message to provider");
    Ok(llm.complete(SYSTEM_PROMPT, message).await?)
}

#[cfg(test)]
#[path = "reply_test.rs"]
mod tests;
