//! Interview session: ordered questions, current position, recorded answers.
//!
//! A session is plain data. Callers drive it explicitly: read `current_question`,
//! score an answer, then `record_answer` and react to the returned [`Transition`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::interview::aggregator::{aggregate, AggregateError, FinalAssessment};
use crate::interview::normalizer::Analysis;
use crate::interview::Question;

#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    #[error("Interview has no question at the current position")]
    OutOfRange,

    #[error("Interview is already complete")]
    AlreadyComplete,

    #[error("Answer was for question {answered}, but the interview has moved to question {current}")]
    StaleAnswer { answered: usize, current: usize },
}

/// One scored answer. Immutable once recorded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseRecord {
    pub question: Question,
    pub text: String,
    pub analysis: Analysis,
    pub recorded_at: DateTime<Utc>,
}

/// State change produced by recording an answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Transition {
    /// Moved on; the question at `next_index` is now current.
    Advanced { next_index: usize },
    /// The last question was answered.
    Completed,
}

#[derive(Debug, Clone)]
pub struct InterviewSession {
    questions: Vec<Question>,
    current_index: usize,
    responses: Vec<ResponseRecord>,
    complete: bool,
    started_at: DateTime<Utc>,
}

impl InterviewSession {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            current_index: 0,
            responses: Vec::new(),
            complete: false,
            started_at: Utc::now(),
        }
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn responses(&self) -> &[ResponseRecord] {
        &self.responses
    }

    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    pub fn current_question(&self) -> Result<&Question, SessionError> {
        self.questions
            .get(self.current_index)
            .ok_or(SessionError::OutOfRange)
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// Fraction of the interview reached, counting the current question.
    pub fn progress(&self) -> f64 {
        if self.questions.is_empty() {
            return 0.0;
        }
        (self.current_index + 1) as f64 / self.questions.len() as f64
    }

    /// Records the answer to the current question.
    ///
    /// Advances by exactly one unless the current question is the last one, in which
    /// case the index stays put and the session completes.
    pub fn record_answer(
        &mut self,
        text: impl Into<String>,
        analysis: Analysis,
    ) -> Result<Transition, SessionError> {
        if self.complete {
            return Err(SessionError::AlreadyComplete);
        }
        let question = self.current_question()?.clone();

        self.responses.push(ResponseRecord {
            question,
            text: text.into(),
            analysis,
            recorded_at: Utc::now(),
        });

        if self.current_index + 1 < self.questions.len() {
            self.current_index += 1;
            Ok(Transition::Advanced {
                next_index: self.current_index,
            })
        } else {
            self.complete = true;
            Ok(Transition::Completed)
        }
    }

    /// Like [`Self::record_answer`], but only if `question_index` is still current.
    /// Guards against an answer scored for a question that has since been answered.
    pub fn record_answer_for(
        &mut self,
        question_index: usize,
        text: impl Into<String>,
        analysis: Analysis,
    ) -> Result<Transition, SessionError> {
        if self.complete {
            return Err(SessionError::AlreadyComplete);
        }
        if question_index != self.current_index {
            return Err(SessionError::StaleAnswer {
                answered: question_index,
                current: self.current_index,
            });
        }
        self.record_answer(text, analysis)
    }

    pub fn final_assessment(&self) -> Result<FinalAssessment, AggregateError> {
        aggregate(&self.responses)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(n: usize) -> InterviewSession {
        InterviewSession::new((1..=n).map(|i| format!("Question {i}")).collect())
    }

    fn analysis(score: f64) -> Analysis {
        Analysis {
            technical_score: score,
            communication_score: score,
            feedback: "ok".to_string(),
        }
    }

    #[test]
    fn test_new_session_starts_at_first_question() {
        let s = session(3);
        assert_eq!(s.current_index(), 0);
        assert_eq!(s.current_question().unwrap(), "Question 1");
        assert!(!s.is_complete());
        assert!(s.responses().is_empty());
    }

    #[test]
    fn test_non_final_answer_advances_by_one() {
        let mut s = session(3);
        let transition = s.record_answer("answer one", analysis(8.0)).unwrap();
        assert_eq!(transition, Transition::Advanced { next_index: 1 });
        assert_eq!(s.current_index(), 1);
        assert!(!s.is_complete());
        assert_eq!(s.current_question().unwrap(), "Question 2");
    }

    #[test]
    fn test_final_answer_completes_without_advancing() {
        let mut s = session(2);
        s.record_answer("a", analysis(8.0)).unwrap();
        let transition = s.record_answer("b", analysis(9.0)).unwrap();
        assert_eq!(transition, Transition::Completed);
        assert_eq!(s.current_index(), 1);
        assert!(s.is_complete());
        assert_eq!(s.current_question().unwrap(), "Question 2");
    }

    #[test]
    fn test_single_question_session() {
        let mut s = session(1);
        assert_eq!(s.record_answer("a", analysis(5.0)).unwrap(), Transition::Completed);
        assert_eq!(s.current_index(), 0);
        assert!(s.is_complete());
    }

    #[test]
    fn test_records_capture_question_and_text_in_order() {
        let mut s = session(2);
        s.record_answer("first", analysis(3.0)).unwrap();
        s.record_answer("second", analysis(4.0)).unwrap();
        let responses = s.responses();
        assert_eq!(responses.len(), 2);
        assert_eq!(responses[0].question, "Question 1");
        assert_eq!(responses[0].text, "first");
        assert_eq!(responses[1].question, "Question 2");
        assert_eq!(responses[1].analysis.technical_score, 4.0);
    }

    #[test]
    fn test_recording_after_completion_is_rejected() {
        let mut s = session(1);
        s.record_answer("a", analysis(5.0)).unwrap();
        assert_eq!(
            s.record_answer("again", analysis(5.0)),
            Err(SessionError::AlreadyComplete)
        );
        assert_eq!(s.responses().len(), 1);
    }

    #[test]
    fn test_answer_for_superseded_question_is_rejected() {
        let mut s = session(3);
        let snapshot_index = s.current_index();
        s.record_answer_for(snapshot_index, "first submit", analysis(6.0))
            .unwrap();

        assert_eq!(
            s.record_answer_for(snapshot_index, "second submit", analysis(9.0)),
            Err(SessionError::StaleAnswer {
                answered: 0,
                current: 1
            })
        );
        assert_eq!(s.responses().len(), 1);
        assert_eq!(s.current_index(), 1);
        assert_eq!(
            s.record_answer_for(1, "next", analysis(7.0)).unwrap(),
            Transition::Advanced { next_index: 2 }
        );
    }

    #[test]
    fn test_empty_session_is_out_of_range() {
        let mut s = session(0);
        assert_eq!(s.current_question(), Err(SessionError::OutOfRange));
        assert_eq!(s.record_answer("a", analysis(5.0)), Err(SessionError::OutOfRange));
        assert!(s.responses().is_empty());
        assert!(!s.is_complete());
    }

    #[test]
    fn test_progress_counts_current_question() {
        let mut s = session(4);
        assert_eq!(s.progress(), 0.25);
        s.record_answer("a", analysis(5.0)).unwrap();
        assert_eq!(s.progress(), 0.5);
        assert_eq!(session(0).progress(), 0.0);
    }

    #[test]
    fn test_final_assessment_recomputed_from_responses() {
        let mut s = session(2);
        assert_eq!(s.final_assessment(), Err(AggregateError::EmptyInput));
        s.record_answer("a", analysis(8.0)).unwrap();
        s.record_answer("b", analysis(6.0)).unwrap();
        let assessment = s.final_assessment().unwrap();
        assert_eq!(assessment.avg_overall, 7.0);
        assert!(assessment.passed);
    }
}
