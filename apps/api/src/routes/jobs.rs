use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::{ExtractionResult, JobPosting, SkillScore};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AddJobRequest {
    pub title: String,
    pub company: String,
    pub description: String,
}

/// One posting as returned to clients, with its extraction result (when an
/// extraction round has run) and the human-readable "skill (NN%)" summary.
#[derive(Serialize)]
pub struct JobView {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub added_at: DateTime<Utc>,
    pub extracted: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<SkillScore>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills_summary: Option<String>,
}

impl JobView {
    pub fn from_entry(posting: &JobPosting, result: Option<&ExtractionResult>) -> Self {
        Self {
            id: posting.id,
            title: posting.title.clone(),
            company: posting.company.clone(),
            added_at: posting.added_at,
            extracted: result.is_some(),
            skills: result.cloned(),
            skills_summary: result.map(|r| format_skills(r)),
        }
    }
}

#[derive(Serialize)]
pub struct JobListResponse {
    pub jobs: Vec<JobView>,
}

/// POST /api/v1/jobs
/// Adds a posting to the session. All three fields must be non-empty.
/// Invalidates any generated ideas.
pub async fn handle_add_job(
    State(state): State<AppState>,
    Json(req): Json<AddJobRequest>,
) -> Result<(StatusCode, Json<JobView>), AppError> {
    for (field, value) in [
        ("title", &req.title),
        ("company", &req.company),
        ("description", &req.description),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("'{field}' must not be empty")));
        }
    }

    let posting = JobPosting::new(req.title, req.company, req.description);
    let view = JobView::from_entry(&posting, None);

    let mut session = state.session.lock().await;
    session.add_posting(posting);

    Ok((StatusCode::CREATED, Json(view)))
}

/// GET /api/v1/jobs
/// Lists postings in insertion order with any attached extraction results.
pub async fn handle_list_jobs(State(state): State<AppState>) -> Json<JobListResponse> {
    let session = state.session.lock().await;
    let jobs = session
        .entries()
        .map(|(posting, result)| JobView::from_entry(posting, result))
        .collect();
    Json(JobListResponse { jobs })
}

/// Renders an extraction result as a display summary: "Python (98%), R (95%)".
fn format_skills(result: &ExtractionResult) -> String {
    result
        .iter()
        .map(|s| format!("{} ({:.0}%)", s.skill, s.confidence_score))
        .collect::<Vec<_>>()
        .join(", ")
}
