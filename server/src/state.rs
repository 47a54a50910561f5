//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! Each chat request is handled independently; the only shared piece is
//! the completion client, absent when no API key was configured.

use std::sync::Arc;

use crate::llm::ChatCompletion;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum — the inner client is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub llm: Option<Arc<dyn ChatCompletion>>,
}

impl AppState {
    #[must_use]
    pub fn new(llm: Option<Arc<dyn ChatCompletion>>) -> Self {
        Self { llm }
    }
}
