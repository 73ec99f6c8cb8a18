use serde::{Deserialize, Serialize};

/// A single extracted skill with the model's confidence that it is relevant.
///
/// Skill strings are free text straight from the model — duplicates may differ
/// only in casing or punctuation and are NOT normalized. Matches the
/// `skill_extraction_schema` contract field for field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillScore {
    pub skill: String,
    /// Model-reported, uncalibrated certainty in [0, 100].
    pub confidence_score: f64,
}

impl SkillScore {
    /// Clamps the confidence into [0, 100]. Applied at the deserialization
    /// boundary so out-of-range values from the model never leak past it.
    pub fn clamped(mut self) -> Self {
        self.confidence_score = self.confidence_score.clamp(0.0, 100.0);
        self
    }
}

/// The ordered skill list attached to one job posting after an extraction
/// round. May be empty: "no skills found" and "extraction gave up after
/// retries" both produce an empty result (see DESIGN.md).
pub type ExtractionResult = Vec<SkillScore>;

/// Per-skill mean confidence across all current extraction results.
/// Transient — recomputed fully on each aggregation request, never persisted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateSkill {
    pub skill: String,
    pub average_confidence: f64,
}
