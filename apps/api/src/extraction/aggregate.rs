//! Aggregation — per-skill mean confidence across all current extraction
//! results, ranked for the idea generator.
//!
//! Grouping is by exact (case-sensitive) string equality. "Python" and
//! "python" are different groups on purpose: skill strings are free text
//! from the model and this service does not pretend to own a taxonomy.

use std::cmp::Ordering;
use std::collections::HashMap;

use crate::models::{AggregateSkill, ExtractionResult};

/// How many top skills feed idea generation by default.
pub const DEFAULT_TOP_SKILLS: usize = 3;

/// Groups every `SkillScore` across all results by exact skill string and
/// computes the arithmetic mean confidence per group. Sorted descending by
/// mean; the sort is stable over first-seen order, so equal means keep the
/// order in which the skills first appeared. Fully recomputed on every call.
pub fn aggregate_skills(results: &[ExtractionResult]) -> Vec<AggregateSkill> {
    struct Group {
        skill: String,
        total: f64,
        count: u32,
    }

    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<&str, usize> = HashMap::new();

    for result in results {
        for score in result {
            match index.get(score.skill.as_str()) {
                Some(&i) => {
                    groups[i].total += score.confidence_score;
                    groups[i].count += 1;
                }
                None => {
                    index.insert(score.skill.as_str(), groups.len());
                    groups.push(Group {
                        skill: score.skill.clone(),
                        total: score.confidence_score,
                        count: 1,
                    });
                }
            }
        }
    }

    let mut aggregated: Vec<AggregateSkill> = groups
        .into_iter()
        .map(|g| AggregateSkill {
            skill: g.skill,
            average_confidence: g.total / f64::from(g.count),
        })
        .collect();

    // Stable sort: ties stay in first-seen order. Confidences are clamped
    // upstream, so NaN never reaches the comparator.
    aggregated.sort_by(|a, b| {
        b.average_confidence
            .partial_cmp(&a.average_confidence)
            .unwrap_or(Ordering::Equal)
    });

    aggregated
}

/// The top `limit` skill names by mean confidence. Scores are dropped here:
/// only the names feed the idea prompt. Empty input yields empty output for
/// any limit.
pub fn top_skills(results: &[ExtractionResult], limit: usize) -> Vec<String> {
    aggregate_skills(results)
        .into_iter()
        .take(limit)
        .map(|a| a.skill)
        .collect()
}
