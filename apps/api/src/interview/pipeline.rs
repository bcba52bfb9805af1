//! Interview pipeline: one collaborator call per step, always producing usable data.
//!
//! Transport failures are absorbed here: question generation degrades to an empty
//! list, scoring degrades to a zero-score [`Analysis`] with an apology.

use std::future::Future;
use std::time::Duration;

use tracing::{info, warn};

use crate::interview::collaborators::{QuestionGenerator, ResponseScorer};
use crate::interview::normalizer::{normalize, Analysis};
use crate::interview::question_parser::parse_questions;
use crate::interview::response_parser::parse_response;
use crate::interview::Question;
use crate::llm_client::LlmError;

pub const EMPTY_ANSWER_FEEDBACK: &str = "Please provide a response before submitting.";
pub const SCORING_FAILED_FEEDBACK: &str =
    "An error occurred while analyzing your response. Please try again.";

/// Asks the generator for questions. An empty result means the interview cannot start.
pub async fn fetch_questions(generator: &dyn QuestionGenerator, timeout: Duration) -> Vec<Question> {
    let raw = match bounded(timeout, generator.generate()).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("Error generating questions: {e}");
            return Vec::new();
        }
    };

    let questions = parse_questions(&raw);
    info!("Generated {} interview questions", questions.len());
    questions
}

/// Scores one answer. Blank answers never reach the scorer.
pub async fn analyze_answer(
    scorer: &dyn ResponseScorer,
    text: &str,
    timeout: Duration,
) -> Analysis {
    if text.trim().is_empty() {
        return Analysis::zero(EMPTY_ANSWER_FEEDBACK);
    }

    match bounded(timeout, scorer.score(text)).await {
        Ok(raw) => normalize(&parse_response(&raw)),
        Err(e) => {
            warn!("Error analyzing response: {e}");
            Analysis::zero(SCORING_FAILED_FEEDBACK)
        }
    }
}

/// Runs one collaborator call, turning an elapsed deadline into `LlmError::Timeout`.
async fn bounded<F>(timeout: Duration, call: F) -> Result<String, LlmError>
where
    F: Future<Output = Result<String, LlmError>>,
{
    tokio::time::timeout(timeout, call)
        .await
        .unwrap_or(Err(LlmError::Timeout(timeout)))
}
