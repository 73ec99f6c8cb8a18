pub mod health;
pub mod ideas;
pub mod jobs;
pub mod skills;

use axum::{
    routing::{get, post},
    Router,
};

use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Job postings
        .route(
            "/api/v1/jobs",
            get(jobs::handle_list_jobs).post(jobs::handle_add_job),
        )
        // Extraction round over all postings
        .route("/api/v1/extract", post(skills::handle_extract))
        // Aggregate skill view
        .route("/api/v1/skills", get(skills::handle_get_skills))
        // Project ideas
        .route(
            "/api/v1/ideas",
            get(ideas::handle_get_ideas).post(ideas::handle_generate_ideas),
        )
        .with_state(state)
}
