//! Question list parser: pulls an ordered list of questions out of a model reply.

use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::Value;
use tracing::warn;

use crate::interview::Question;

/// First `[` through the last `]`, spanning newlines.
static BRACKETED: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)\[.*\]").expect("valid regex"));

/// Parses raw model text into an ordered list of questions.
///
/// The whole text is decoded as JSON first. Only when it is not valid JSON at all is
/// the first bracketed span tried instead. Anything that does not decode to a non-empty
/// array of strings yields an empty list; this function never fails.
pub fn parse_questions(raw_text: &str) -> Vec<Question> {
    let raw_text = raw_text.trim();

    let decoded = match serde_json::from_str::<Value>(raw_text) {
        Ok(value) => Some(value),
        Err(_) => BRACKETED
            .find(raw_text)
            .and_then(|m| serde_json::from_str::<Value>(m.as_str()).ok()),
    };

    match decoded.and_then(into_question_list) {
        Some(questions) => questions,
        None => {
            warn!("Could not extract a question list from model output");
            Vec::new()
        }
    }
}

fn into_question_list(value: Value) -> Option<Vec<Question>> {
    let Value::Array(items) = value else {
        return None;
    };
    if items.is_empty() {
        return None;
    }
    items
        .into_iter()
        .map(|item| match item {
            Value::String(text) => Some(text),
            _ => None,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_json_array_preserves_order() {
        let raw = r#"["Design a rate limiter.", "Explain ACID.", "How do you secure an API?"]"#;
        assert_eq!(
            parse_questions(raw),
            vec![
                "Design a rate limiter.".to_string(),
                "Explain ACID.".to_string(),
                "How do you secure an API?".to_string(),
            ]
        );
    }

    #[test]
    fn test_array_wrapped_in_prose() {
        let raw = "Sure! Here are your questions:\n[\n  \"What is sharding?\",\n  \"What is CQRS?\"\n]\nGood luck.";
        assert_eq!(
            parse_questions(raw),
            vec!["What is sharding?".to_string(), "What is CQRS?".to_string()]
        );
    }

    #[test]
    fn test_array_inside_markdown_fence() {
        let raw = "```json\n[\"Explain idempotency.\"]\n```";
        assert_eq!(parse_questions(raw), vec!["Explain idempotency.".to_string()]);
    }

    #[test]
    fn test_brackets_inside_question_text() {
        let raw = "Questions: [\"What does arr[0] return?\", \"Explain O(n).\"] done";
        assert_eq!(
            parse_questions(raw),
            vec!["What does arr[0] return?".to_string(), "Explain O(n).".to_string()]
        );
    }

    #[test]
    fn test_greedy_span_across_two_arrays_fails() {
        // The span runs from the first `[` to the last `]`, which is not valid JSON here.
        let raw = "First [\"a\"] and then [\"b\"]";
        assert!(parse_questions(raw).is_empty());
    }

    #[test]
    fn test_no_brackets_returns_empty() {
        assert!(parse_questions("I cannot help with that request.").is_empty());
    }

    #[test]
    fn test_empty_text_returns_empty() {
        assert!(parse_questions("").is_empty());
        assert!(parse_questions("   \n").is_empty());
    }

    #[test]
    fn test_empty_array_returns_empty() {
        assert!(parse_questions("[]").is_empty());
    }

    #[test]
    fn test_valid_json_object_is_not_searched() {
        let raw = r#"{"questions": ["What is a deadlock?"]}"#;
        assert!(parse_questions(raw).is_empty());
    }

    #[test]
    fn test_non_string_items_return_empty() {
        assert!(parse_questions(r#"["Q1", 2, "Q3"]"#).is_empty());
    }

    #[test]
    fn test_malformed_bracketed_span_returns_empty() {
        assert!(parse_questions("here: [\"unterminated, \"x\" ]").is_empty());
    }
}
