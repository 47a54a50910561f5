//! Completion provider — thin client for the external text-completion API.
//!
//! DESIGN
//! ======
//! The reply endpoint forwards a single-turn exchange (fixed system prompt
//! plus one user message) and relays the provider's text verbatim. The
//! provider is reached over the OpenAI chat-completions wire format;
//! configuration comes from environment variables read once at startup.

pub mod config;
pub mod openai;
pub mod types;

pub use types::ChatCompletion;

use config::LlmConfig;
use types::LlmError;

/// Build the completion client from environment variables.
///
/// # Errors
///
/// Returns an error if the API key is missing or the HTTP client fails
/// to build.
pub fn client_from_env() -> Result<openai::OpenAiClient, LlmError> {
    let config = LlmConfig::from_env()?;
    openai::OpenAiClient::new(config)
}
