use std::sync::Arc;
use std::time::Duration;

use crate::interview::collaborators::{QuestionGenerator, ResponseScorer};
use crate::interview::store::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable collaborators. Default: the chat-completions `LlmClient` for both.
    pub question_generator: Arc<dyn QuestionGenerator>,
    pub response_scorer: Arc<dyn ResponseScorer>,
    pub sessions: SessionStore,
    /// Bound applied to each collaborator call.
    pub llm_timeout: Duration,
}
