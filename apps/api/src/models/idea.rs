use serde::{Deserialize, Serialize};

/// A portfolio project suggestion generated from the top-ranked skills.
/// The idea set is replaced wholesale on regeneration and cleared whenever
/// the job list changes or a new extraction round runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectIdea {
    pub title: String,
    pub description: String,
}
