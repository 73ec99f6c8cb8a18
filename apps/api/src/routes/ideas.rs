use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::info;

use crate::errors::AppError;
use crate::extraction::aggregate::{top_skills, DEFAULT_TOP_SKILLS};
use crate::models::ProjectIdea;
use crate::state::AppState;

#[derive(Serialize)]
pub struct IdeaListResponse {
    pub ideas: Vec<ProjectIdea>,
}

/// POST /api/v1/ideas
/// Generates project ideas from the current top-3 skills and replaces the
/// session's idea set wholesale. 422 when no extraction results exist yet.
pub async fn handle_generate_ideas(
    State(state): State<AppState>,
) -> Result<Json<IdeaListResponse>, AppError> {
    let mut session = state.session.lock().await;

    if !session.has_extraction_results() {
        return Err(AppError::UnprocessableEntity(
            "No skills extracted. Add job postings and run extraction first.".to_string(),
        ));
    }

    let results = session.extraction_results();
    let top = top_skills(&results, DEFAULT_TOP_SKILLS);
    if top.is_empty() {
        return Err(AppError::UnprocessableEntity(
            "No skills found in the current postings.".to_string(),
        ));
    }

    info!(skills = ?top, "generating project ideas");
    let ideas = state.idea_generator.generate_ideas(&top).await;
    session.set_ideas(ideas.clone());

    Ok(Json(IdeaListResponse { ideas }))
}

/// GET /api/v1/ideas
/// The currently held idea set; empty after invalidation (new posting or
/// new extraction round) until regenerated.
pub async fn handle_get_ideas(State(state): State<AppState>) -> Json<IdeaListResponse> {
    let session = state.session.lock().await;
    Json(IdeaListResponse {
        ideas: session.ideas().to_vec(),
    })
}
