//! Response parser: extracts the score fields from a scorer's raw reply.
//!
//! Strategies, first success wins:
//! 1. the whole text decodes as a JSON object;
//! 2. key/value patterns for both scores and the feedback are found in the text,
//!    in which case the FIRST match of each label is used;
//! 3. a fixed zero-score mapping explaining that the format was not understood.
//!
//! Fields in the returned mapping may be missing or malformed. Clamping and
//! defaulting belong to [`crate::interview::normalizer`].

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{json, Map, Number, Value};
use tracing::{debug, warn};

/// Loosely-typed score fields as produced by the model.
pub type RawAnalysis = Map<String, Value>;

pub const UNPARSEABLE_FEEDBACK: &str =
    "Could not analyze response format. Please try rephrasing your answer.";

/// `technical_score: 8`, `"communication_score" : 7.5`, `'Technical_Score':9` ...
static SCORE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)(["']?(?:technical|communication)_score["']?)\s*:\s*(\d+(?:\.\d+)?)"#)
        .expect("valid regex")
});

/// `"feedback": "..."` where the value holds no double quote.
static FEEDBACK_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"["']?feedback["']?\s*:\s*["']([^"]+)["']"#).expect("valid regex")
});

/// Parses raw scorer text into loosely-typed fields. Never fails.
pub fn parse_response(raw_text: &str) -> RawAnalysis {
    let raw_text = raw_text.trim();

    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(raw_text) {
        return fields;
    }

    if let Some(fields) = extract_by_pattern(raw_text) {
        debug!("Scorer output was not JSON; recovered fields by pattern");
        return fields;
    }

    warn!("Could not extract score fields from scorer output");
    unparseable_default()
}

fn extract_by_pattern(text: &str) -> Option<RawAnalysis> {
    let mut technical = None;
    let mut communication = None;

    for caps in SCORE_PATTERN.captures_iter(text) {
        let label = caps[1].to_lowercase();
        let slot = if label.contains("technical") {
            &mut technical
        } else {
            &mut communication
        };
        if slot.is_none() {
            *slot = Some(score_value(&caps[2]));
        }
    }

    let feedback = FEEDBACK_PATTERN.captures(text)?[1].to_string();

    let mut fields = Map::new();
    fields.insert("technical_score".to_string(), technical?);
    fields.insert("communication_score".to_string(), communication?);
    fields.insert("feedback".to_string(), Value::String(feedback));
    Some(fields)
}

/// The first match of a label always wins, even when it is not a finite ASCII number.
/// Such captures stay text and are resolved by the normalizer.
fn score_value(capture: &str) -> Value {
    capture
        .parse::<f64>()
        .ok()
        .and_then(Number::from_f64)
        .map(Value::Number)
        .unwrap_or_else(|| Value::String(capture.to_string()))
}

fn unparseable_default() -> RawAnalysis {
    let mut fields = Map::new();
    fields.insert("technical_score".to_string(), json!(0.0));
    fields.insert("communication_score".to_string(), json!(0.0));
    fields.insert("feedback".to_string(), json!(UNPARSEABLE_FEEDBACK));
    fields
}
