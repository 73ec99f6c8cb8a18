//! Session — explicit, caller-owned state for one user session.
//!
//! The job list, extraction results, and generated ideas live in one struct
//! that enforces the invalidation rules in a single place:
//!   - every extraction result belongs to exactly one posting (parallel slot);
//!   - adding a posting clears the generated ideas;
//!   - a new extraction round clears the generated ideas.

use crate::models::{ExtractionResult, JobPosting, ProjectIdea};

#[derive(Default)]
pub struct Session {
    postings: Vec<JobPosting>,
    /// Parallel to `postings`. `None` until an extraction round has run for
    /// that posting.
    results: Vec<Option<ExtractionResult>>,
    ideas: Option<Vec<ProjectIdea>>,
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a posting at the end of the session, invalidating any ideas.
    pub fn add_posting(&mut self, posting: JobPosting) {
        self.postings.push(posting);
        self.results.push(None);
        self.ideas = None;
    }

    pub fn postings(&self) -> &[JobPosting] {
        &self.postings
    }

    /// Postings paired with their extraction result, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&JobPosting, Option<&ExtractionResult>)> {
        self.postings
            .iter()
            .zip(self.results.iter().map(|r| r.as_ref()))
    }

    /// Records the results of one full extraction round, one result per
    /// posting in insertion order, and invalidates any ideas. Caller must
    /// pass exactly one result per posting.
    pub fn record_extraction_round(&mut self, results: Vec<ExtractionResult>) {
        debug_assert_eq!(results.len(), self.postings.len());
        self.results = results.into_iter().map(Some).collect();
        self.ideas = None;
    }

    /// All extraction results currently present, for aggregation.
    pub fn extraction_results(&self) -> Vec<ExtractionResult> {
        self.results.iter().flatten().cloned().collect()
    }

    pub fn has_extraction_results(&self) -> bool {
        self.results.iter().any(|r| r.is_some())
    }

    /// Replaces the idea set wholesale.
    pub fn set_ideas(&mut self, ideas: Vec<ProjectIdea>) {
        self.ideas = Some(ideas);
    }

    pub fn ideas(&self) -> &[ProjectIdea] {
        self.ideas.as_deref().unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillScore;

    fn posting(title: &str) -> JobPosting {
        JobPosting::new(
            title.to_string(),
            "Acme".to_string(),
            format!("{title} description"),
        )
    }

    fn result(skill: &str) -> ExtractionResult {
        vec![SkillScore {
            skill: skill.to_string(),
            confidence_score: 90.0,
        }]
    }

    #[test]
    fn test_postings_keep_insertion_order() {
        let mut session = Session::new();
        session.add_posting(posting("first"));
        session.add_posting(posting("second"));

        let titles: Vec<_> = session.postings().iter().map(|p| p.title.as_str()).collect();
        assert_eq!(titles, vec!["first", "second"]);
    }

    #[test]
    fn test_results_attach_one_to_one() {
        let mut session = Session::new();
        session.add_posting(posting("a"));
        session.add_posting(posting("b"));
        session.record_extraction_round(vec![result("Python"), result("SQL")]);

        let attached: Vec<_> = session
            .entries()
            .map(|(p, r)| (p.title.clone(), r.unwrap()[0].skill.clone()))
            .collect();
        assert_eq!(
            attached,
            vec![
                ("a".to_string(), "Python".to_string()),
                ("b".to_string(), "SQL".to_string())
            ]
        );
    }

    #[test]
    fn test_results_absent_until_extraction_runs() {
        let mut session = Session::new();
        session.add_posting(posting("a"));
        assert!(!session.has_extraction_results());
        assert!(session.extraction_results().is_empty());
    }

    #[test]
    fn test_adding_posting_invalidates_ideas() {
        let mut session = Session::new();
        session.add_posting(posting("a"));
        session.set_ideas(vec![ProjectIdea {
            title: "t".to_string(),
            description: "d".to_string(),
        }]);
        assert_eq!(session.ideas().len(), 1);

        session.add_posting(posting("b"));
        assert!(session.ideas().is_empty());
    }

    #[test]
    fn test_extraction_round_invalidates_ideas() {
        let mut session = Session::new();
        session.add_posting(posting("a"));
        session.set_ideas(vec![ProjectIdea {
            title: "t".to_string(),
            description: "d".to_string(),
        }]);

        session.record_extraction_round(vec![result("Python")]);
        assert!(session.ideas().is_empty());
    }
}
