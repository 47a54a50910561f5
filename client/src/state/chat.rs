//! Chat widget state — conversation, shortcut resolution, pending replies.
//!
//! DESIGN
//! ======
//! The conversation is append-only except for one mutation: a pending
//! placeholder resolving into its final text. Each placeholder carries a
//! correlation id generated at send time, and resolution matches on that
//! id rather than on position — a second send may push past an earlier
//! placeholder before its reply arrives, so "replace the last message"
//! would target the wrong entry.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

use crate::state::shortcuts;

/// Seed greeting every conversation starts with.
pub const GREETING: &str = "👋 Hello! How can I help you today?";

/// Transient placeholder text shown while a reply is in flight.
pub const TYPING_PLACEHOLDER: &str = "Typing...";

/// Fixed apology shown when the reply call fails for any reason.
pub const UNREACHABLE_REPLY: &str = "⚠️ Server is unreachable. Please try again later.";

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Sender {
    User,
    Bot,
}

/// A single chat message.
#[derive(Clone, Debug)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
    /// Correlation id while this bot entry awaits its reply; `None` once
    /// resolved (or for messages that were never pending).
    pub pending: Option<u64>,
}

impl ChatMessage {
    fn user(text: &str) -> Self {
        Self { sender: Sender::User, text: text.to_owned(), pending: None }
    }

    fn bot(text: &str) -> Self {
        Self { sender: Sender::Bot, text: text.to_owned(), pending: None }
    }

    fn placeholder(id: u64) -> Self {
        Self { sender: Sender::Bot, text: TYPING_PLACEHOLDER.to_owned(), pending: Some(id) }
    }
}

/// What a call to [`ChatState::send`] decided to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SendOutcome {
    /// Blank input — nothing changed, nothing to do.
    Ignored,
    /// A canned shortcut answered locally; no network call needed.
    Shortcut,
    /// A placeholder was appended; the caller must fetch a reply for
    /// `message` and then resolve or fail the placeholder by `id`.
    Pending { id: u64, message: String },
}

/// State for the chat widget: open flag, input buffer, conversation.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub open: bool,
    pub input: String,
    pub messages: Vec<ChatMessage>,
    next_send_id: u64,
}

impl Default for ChatState {
    fn default() -> Self {
        Self { open: false, input: String::new(), messages: vec![ChatMessage::bot(GREETING)], next_send_id: 0 }
    }
}

impl ChatState {
    /// Send a message: the explicit text when given (quick-action buttons),
    /// otherwise the input buffer.
    ///
    /// Blank-after-trim input is a no-op. Otherwise exactly one user entry
    /// and one bot entry (canned reply or placeholder) are appended, and
    /// the input buffer is cleared.
    pub fn send(&mut self, explicit: Option<&str>) -> SendOutcome {
        let text = match explicit {
            Some(t) => t.to_owned(),
            None => self.input.clone(),
        };
        if text.trim().is_empty() {
            return SendOutcome::Ignored;
        }

        self.messages.push(ChatMessage::user(&text));
        self.input.clear();

        if let Some(canned) = shortcuts::reply_for(&text) {
            self.messages.push(ChatMessage::bot(canned));
            return SendOutcome::Shortcut;
        }

        let id = self.next_send_id;
        self.next_send_id += 1;
        self.messages.push(ChatMessage::placeholder(id));
        SendOutcome::Pending { id, message: text }
    }

    /// Replace the placeholder tagged `id` with the provider's reply.
    /// No-op when no such placeholder exists (widget torn down, already
    /// resolved).
    pub fn resolve_pending(&mut self, id: u64, reply: &str) {
        self.finish_pending(id, reply);
    }

    /// Replace the placeholder tagged `id` with the fixed apology message.
    pub fn fail_pending(&mut self, id: u64) {
        self.finish_pending(id, UNREACHABLE_REPLY);
    }

    fn finish_pending(&mut self, id: u64, text: &str) {
        if let Some(msg) = self.messages.iter_mut().find(|m| m.pending == Some(id)) {
            msg.text = text.to_owned();
            msg.pending = None;
        }
    }
}

/// Split a bot reply into display lines: newlines and `*` bullets both
/// break, blank segments are dropped.
#[must_use]
pub fn bot_reply_lines(text: &str) -> Vec<String> {
    text.split(['\n', '*'])
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect()
}
