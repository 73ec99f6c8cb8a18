use axum::extract::{Query, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::extraction::aggregate::{aggregate_skills, top_skills, DEFAULT_TOP_SKILLS};
use crate::models::AggregateSkill;
use crate::routes::jobs::{JobListResponse, JobView};
use crate::state::AppState;

/// POST /api/v1/extract
/// Runs skill extraction over every posting in the session, one at a time in
/// insertion order. The session lock is held for the whole round, so no two
/// rounds interleave and the posting list cannot change underneath it.
/// Attaches one result per posting and invalidates any generated ideas.
pub async fn handle_extract(State(state): State<AppState>) -> Json<JobListResponse> {
    let mut session = state.session.lock().await;

    let descriptions: Vec<String> = session
        .postings()
        .iter()
        .map(|p| p.description.clone())
        .collect();

    let mut results = Vec::with_capacity(descriptions.len());
    for (i, description) in descriptions.iter().enumerate() {
        info!(posting = i + 1, total = descriptions.len(), "extracting skills");
        results.push(state.extractor.extract(description).await);
    }
    session.record_extraction_round(results);

    let jobs = session
        .entries()
        .map(|(posting, result)| JobView::from_entry(posting, result))
        .collect();
    Json(JobListResponse { jobs })
}

#[derive(Deserialize)]
pub struct SkillsQuery {
    pub limit: Option<usize>,
}

#[derive(Serialize)]
pub struct SkillAggregateResponse {
    /// Every skill group with its mean confidence, ranked.
    pub skills: Vec<AggregateSkill>,
    /// The top `limit` names only — what feeds idea generation.
    pub top: Vec<String>,
}

/// GET /api/v1/skills?limit=N
/// The aggregate view, recomputed from the current extraction results on
/// every request. `limit` defaults to 3.
pub async fn handle_get_skills(
    State(state): State<AppState>,
    Query(query): Query<SkillsQuery>,
) -> Json<SkillAggregateResponse> {
    let limit = query.limit.unwrap_or(DEFAULT_TOP_SKILLS);

    let session = state.session.lock().await;
    let results = session.extraction_results();

    Json(SkillAggregateResponse {
        skills: aggregate_skills(&results),
        top: top_skills(&results, limit),
    })
}
