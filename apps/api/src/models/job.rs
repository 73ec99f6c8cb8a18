use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A job posting entered by the user. Immutable once added to a session;
/// postings are held in insertion order for the session lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobPosting {
    pub id: Uuid,
    pub title: String,
    pub company: String,
    pub description: String,
    pub added_at: DateTime<Utc>,
}

impl JobPosting {
    pub fn new(title: String, company: String, description: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            title,
            company,
            description,
            added_at: Utc::now(),
        }
    }
}
