pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::interview::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Stateless endpoints
        .route("/api/v1/questions", get(handlers::handle_get_questions))
        .route(
            "/api/v1/analyze-response",
            post(handlers::handle_analyze_response),
        )
        // Interview sessions
        .route("/api/v1/interviews", post(handlers::handle_start_interview))
        .route(
            "/api/v1/interviews/:id",
            get(handlers::handle_get_interview).delete(handlers::handle_abandon_interview),
        )
        .route(
            "/api/v1/interviews/:id/answers",
            post(handlers::handle_submit_answer),
        )
        .route(
            "/api/v1/interviews/:id/assessment",
            get(handlers::handle_get_assessment),
        )
        .with_state(state)
}
