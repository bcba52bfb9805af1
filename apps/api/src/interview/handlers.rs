//! Axum route handlers for the Interview API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::interview::aggregator::FinalAssessment;
use crate::interview::normalizer::Analysis;
use crate::interview::pipeline::{analyze_answer, fetch_questions};
use crate::interview::session::{InterviewSession, ResponseRecord, SessionError, Transition};
use crate::interview::Question;
use crate::state::AppState;

const NO_QUESTIONS_MESSAGE: &str = "Failed to load questions. Please try again.";
const EMPTY_SUBMISSION_MESSAGE: &str = "Please enter your response before submitting.";

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Serialize, Deserialize)]
pub struct QuestionsResponse {
    pub questions: Vec<Question>,
}

#[derive(Debug, Deserialize)]
pub struct AnswerRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct InterviewView {
    pub interview_id: Uuid,
    pub current_index: usize,
    pub total_questions: usize,
    pub current_question: Option<Question>,
    pub progress: f64,
    pub complete: bool,
    pub started_at: DateTime<Utc>,
    pub responses: Vec<ResponseRecord>,
}

impl InterviewView {
    fn new(interview_id: Uuid, session: &InterviewSession) -> Self {
        Self {
            interview_id,
            current_index: session.current_index(),
            total_questions: session.questions().len(),
            current_question: session.current_question().ok().cloned(),
            progress: session.progress(),
            complete: session.is_complete(),
            started_at: session.started_at(),
            responses: session.responses().to_vec(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AssessmentResponse {
    #[serde(flatten)]
    pub assessment: FinalAssessment,
    pub message: String,
}

impl From<FinalAssessment> for AssessmentResponse {
    fn from(assessment: FinalAssessment) -> Self {
        let message = assessment.verdict_message();
        Self {
            assessment,
            message,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct AnswerResponse {
    pub analysis: Analysis,
    pub transition: Transition,
    pub interview: InterviewView,
    pub final_assessment: Option<AssessmentResponse>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// GET /api/v1/questions
///
/// Generates a fresh question list. Any failure yields an empty list.
pub async fn handle_get_questions(State(state): State<AppState>) -> Json<QuestionsResponse> {
    let questions = fetch_questions(state.question_generator.as_ref(), state.llm_timeout).await;
    Json(QuestionsResponse { questions })
}

/// POST /api/v1/analyze-response
///
/// Scores a free-text answer outside of any session. Always returns a well-formed analysis.
pub async fn handle_analyze_response(
    State(state): State<AppState>,
    Json(request): Json<AnswerRequest>,
) -> Json<Analysis> {
    let analysis =
        analyze_answer(state.response_scorer.as_ref(), &request.text, state.llm_timeout).await;
    Json(analysis)
}

/// POST /api/v1/interviews
///
/// Starts an interview. Without questions there is no interview.
pub async fn handle_start_interview(
    State(state): State<AppState>,
) -> Result<(StatusCode, Json<InterviewView>), AppError> {
    let questions = fetch_questions(state.question_generator.as_ref(), state.llm_timeout).await;
    if questions.is_empty() {
        return Err(AppError::Unavailable(NO_QUESTIONS_MESSAGE.to_string()));
    }

    let session = InterviewSession::new(questions);
    let view_session = session.clone();
    let interview_id = state.sessions.create(session).await;
    info!(
        "Interview {interview_id} started with {} questions",
        view_session.questions().len()
    );

    Ok((
        StatusCode::CREATED,
        Json(InterviewView::new(interview_id, &view_session)),
    ))
}

/// GET /api/v1/interviews/:id
pub async fn handle_get_interview(
    State(state): State<AppState>,
    Path(interview_id): Path<Uuid>,
) -> Result<Json<InterviewView>, AppError> {
    let session = find_session(&state, interview_id).await?;
    Ok(Json(InterviewView::new(interview_id, &session)))
}

/// POST /api/v1/interviews/:id/answers
///
/// Scores the answer to the current question, records it and advances the interview.
/// The scorer runs outside the store lock; the answer is recorded afterwards, and only
/// if no other submission has moved the interview on in the meantime (409 otherwise).
pub async fn handle_submit_answer(
    State(state): State<AppState>,
    Path(interview_id): Path<Uuid>,
    Json(request): Json<AnswerRequest>,
) -> Result<Json<AnswerResponse>, AppError> {
    if request.text.trim().is_empty() {
        return Err(AppError::Validation(EMPTY_SUBMISSION_MESSAGE.to_string()));
    }

    let session = find_session(&state, interview_id).await?;
    if session.is_complete() {
        return Err(SessionError::AlreadyComplete.into());
    }
    session.current_question()?;
    let question_index = session.current_index();

    let analysis =
        analyze_answer(state.response_scorer.as_ref(), &request.text, state.llm_timeout).await;

    let (transition, session) = state
        .sessions
        .update(interview_id, |s| {
            s.record_answer_for(question_index, request.text, analysis.clone())
                .map(|transition| (transition, s.clone()))
        })
        .await
        .ok_or_else(|| not_found(interview_id))??;

    let final_assessment = match transition {
        Transition::Completed => {
            info!("Interview {interview_id} complete");
            session.final_assessment().ok().map(AssessmentResponse::from)
        }
        Transition::Advanced { .. } => None,
    };

    Ok(Json(AnswerResponse {
        analysis,
        transition,
        interview: InterviewView::new(interview_id, &session),
        final_assessment,
    }))
}

/// GET /api/v1/interviews/:id/assessment
pub async fn handle_get_assessment(
    State(state): State<AppState>,
    Path(interview_id): Path<Uuid>,
) -> Result<Json<AssessmentResponse>, AppError> {
    let session = find_session(&state, interview_id).await?;
    if !session.is_complete() {
        return Err(AppError::Conflict(format!(
            "Interview {interview_id} is not complete yet"
        )));
    }

    let assessment = session
        .final_assessment()
        .map_err(|e| AppError::Conflict(e.to_string()))?;
    Ok(Json(assessment.into()))
}

/// DELETE /api/v1/interviews/:id
///
/// Abandons the interview and discards its responses.
pub async fn handle_abandon_interview(
    State(state): State<AppState>,
    Path(interview_id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    if !state.sessions.remove(interview_id).await {
        return Err(not_found(interview_id));
    }
    info!("Interview {interview_id} abandoned");
    Ok(StatusCode::NO_CONTENT)
}

async fn find_session(state: &AppState, interview_id: Uuid) -> Result<InterviewSession, AppError> {
    state
        .sessions
        .get(interview_id)
        .await
        .ok_or_else(|| not_found(interview_id))
}

fn not_found(interview_id: Uuid) -> AppError {
    AppError::NotFound(format!("Interview {interview_id} not found"))
}
