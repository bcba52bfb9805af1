//! External text-generation collaborators.
//!
//! The interview core only sees raw model text. `AppState` carries each collaborator
//! as an `Arc<dyn ...>` so the LLM backend can be swapped (or faked in tests)
//! without touching the pipeline or the handlers.

use async_trait::async_trait;

use crate::interview::prompts::{
    QUESTION_GENERATION_PROMPT, QUESTION_GENERATION_SYSTEM, RESPONSE_SCORING_PROMPT_TEMPLATE,
    RESPONSE_SCORING_SYSTEM,
};
use crate::llm_client::{LlmClient, LlmError};

/// Produces raw text expected to contain a JSON array of question strings.
#[async_trait]
pub trait QuestionGenerator: Send + Sync {
    async fn generate(&self) -> Result<String, LlmError>;
}

/// Produces raw text expected to contain a JSON object with
/// `technical_score`, `communication_score` and `feedback`.
#[async_trait]
pub trait ResponseScorer: Send + Sync {
    async fn score(&self, answer_text: &str) -> Result<String, LlmError>;
}

#[async_trait]
impl QuestionGenerator for LlmClient {
    async fn generate(&self) -> Result<String, LlmError> {
        self.call_text(QUESTION_GENERATION_PROMPT, QUESTION_GENERATION_SYSTEM)
            .await
    }
}

#[async_trait]
impl ResponseScorer for LlmClient {
    async fn score(&self, answer_text: &str) -> Result<String, LlmError> {
        let prompt = RESPONSE_SCORING_PROMPT_TEMPLATE.replace("{answer_text}", answer_text);
        self.call_text(&prompt, RESPONSE_SCORING_SYSTEM).await
    }
}

#[cfg(test)]
pub mod fakes {
    //! Scripted collaborators with call counters.

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    use super::*;

    pub struct FakeGenerator {
        reply: Result<String, u16>,
        delay: Option<Duration>,
        pub calls: AtomicUsize,
    }

    impl FakeGenerator {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                delay: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                delay: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn stalling(delay: Duration) -> Self {
            Self {
                reply: Ok(r#"["Too late"]"#.to_string()),
                delay: Some(delay),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl QuestionGenerator for FakeGenerator {
        async fn generate(&self) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.reply.clone().map_err(|status| LlmError::Api {
                status,
                message: "scripted failure".to_string(),
            })
        }
    }

    pub struct FakeScorer {
        reply: Result<String, u16>,
        delay: Option<Duration>,
        pub calls: AtomicUsize,
    }

    impl FakeScorer {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                delay: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                reply: Err(status),
                delay: None,
                calls: AtomicUsize::new(0),
            }
        }

        pub fn stalling(delay: Duration) -> Self {
            Self {
                reply: Ok("{}".to_string()),
                delay: Some(delay),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn call_count(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ResponseScorer for FakeScorer {
        async fn score(&self, _answer_text: &str) -> Result<String, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            self.reply.clone().map_err(|status| LlmError::Api {
                status,
                message: "scripted failure".to_string(),
            })
        }
    }
}
