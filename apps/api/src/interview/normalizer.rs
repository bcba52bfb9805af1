//! Score normalizer: turns loosely-typed fields into a well-formed [`Analysis`].
//!
//! Each field is defaulted on its own: a reply missing only `feedback` keeps its scores.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::interview::response_parser::RawAnalysis;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 10.0;
pub const MISSING_FEEDBACK: &str = "No feedback provided.";

/// Normalized score for one candidate answer.
/// Both scores lie in `[0, 10]` and `feedback` is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub technical_score: f64,
    pub communication_score: f64,
    pub feedback: String,
}

impl Analysis {
    /// A zero-score analysis carrying only an explanatory message.
    pub fn zero(feedback: impl Into<String>) -> Self {
        Self {
            technical_score: MIN_SCORE,
            communication_score: MIN_SCORE,
            feedback: feedback.into(),
        }
    }
}

pub fn normalize(fields: &RawAnalysis) -> Analysis {
    Analysis {
        technical_score: clamp_score(fields.get("technical_score")),
        communication_score: clamp_score(fields.get("communication_score")),
        feedback: feedback_text(fields.get("feedback")),
    }
}

fn clamp_score(value: Option<&Value>) -> f64 {
    let score = value.and_then(coerce_number).unwrap_or(MIN_SCORE);
    if score.is_nan() {
        return MIN_SCORE;
    }
    score.clamp(MIN_SCORE, MAX_SCORE)
}

/// Numbers, numeric strings and booleans convert; anything else does not.
fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
        _ => None,
    }
}

fn feedback_text(value: Option<&Value>) -> String {
    let text = match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    };
    if text.trim().is_empty() {
        MISSING_FEEDBACK.to_string()
    } else {
        text
    }
}
