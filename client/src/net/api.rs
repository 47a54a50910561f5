//! REST helper for the chat endpoint.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): a stub error, so prerendering never fires network
//! calls — the widget maps any error to its fixed apology message.

#![allow(clippy::unused_async)]

#[cfg(feature = "hydrate")]
use wire::{ChatReply, ChatRequest};

/// POST the user's message to `/api/chat` and return the reply text.
///
/// # Errors
///
/// Returns a display string on transport failure, non-2xx status, or a
/// malformed body.
pub async fn post_chat(message: &str) -> Result<String, String> {
    #[cfg(feature = "hydrate")]
    {
        let body = ChatRequest { message: message.to_owned() };
        let resp = gloo_net::http::Request::post("/api/chat")
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(format!("chat request failed: {}", resp.status()));
        }
        let reply: ChatReply = resp.json().await.map_err(|e| e.to_string())?;
        Ok(reply.reply)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = message;
        Err("not available on server".to_owned())
    }
}
