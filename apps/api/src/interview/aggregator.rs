//! Aggregator: deterministic pass/fail verdict over a session's recorded answers.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interview::session::ResponseRecord;

/// Overall average needed to pass, inclusive.
pub const PASS_THRESHOLD: f64 = 7.0;

#[derive(Debug, Error, PartialEq)]
pub enum AggregateError {
    #[error("Cannot assess an interview with no recorded responses")]
    EmptyInput,
}

/// Derived verdict for a whole session. Always recomputed from the responses, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinalAssessment {
    pub avg_technical: f64,
    pub avg_communication: f64,
    pub avg_overall: f64,
    pub passed: bool,
}

impl FinalAssessment {
    /// Candidate-facing summary of the verdict.
    pub fn verdict_message(&self) -> String {
        if self.passed {
            format!(
                "PASSED - Congratulations! You've successfully passed the interview with an overall score of {:.1}/10.",
                self.avg_overall
            )
        } else {
            format!(
                "NOT PASSED - Thank you for your participation. Your overall score was {:.1}/10, which is below our threshold of {:.1}/10.",
                self.avg_overall, PASS_THRESHOLD
            )
        }
    }
}

/// Plain means of each score, then the mean of the two means.
pub fn aggregate(responses: &[ResponseRecord]) -> Result<FinalAssessment, AggregateError> {
    if responses.is_empty() {
        return Err(AggregateError::EmptyInput);
    }

    let count = responses.len() as f64;
    let (total_technical, total_communication) =
        responses.iter().fold((0.0_f64, 0.0_f64), |(t, c), r| {
            (
                t + r.analysis.technical_score,
                c + r.analysis.communication_score,
            )
        });

    let avg_technical = total_technical / count;
    let avg_communication = total_communication / count;
    let avg_overall = (avg_technical + avg_communication) / 2.0;

    Ok(FinalAssessment {
        avg_technical,
        avg_communication,
        avg_overall,
        passed: avg_overall >= PASS_THRESHOLD,
    })
}
