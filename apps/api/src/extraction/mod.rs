//! Extraction — the resilient structured-extraction client.
//!
//! Wraps a `GenerativeModel` with the retry/backoff and response-shape
//! validation that make the loosely-typed Gemini contract safe to consume.
//! This is the only call site in Skillscope that retries: idea generation
//! is deliberately single-shot (see `ideas`).

pub mod aggregate;
pub mod cache;
pub mod prompts;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, warn};

use crate::llm_client::schema::skill_extraction_schema;
use crate::llm_client::GenerativeModel;
use crate::models::SkillScore;

use cache::ExtractionCache;
use prompts::build_extraction_prompt;

pub const DEFAULT_MAX_RETRIES: u32 = 5;
pub const DEFAULT_INITIAL_DELAY: Duration = Duration::from_secs(1);

/// Extracts skill/confidence pairs from a job description, retrying
/// transport and parse failures with pure exponential backoff (no jitter,
/// no cap). Results are memoized by exact description text in an injected
/// `ExtractionCache`, so repeated requests for the same posting skip the
/// network entirely.
///
/// `extract` never propagates an error past its boundary. Exhausted retries
/// degrade to an empty result — the same value as a legitimate "no skills
/// found" answer, so callers cannot tell the two apart. DESIGN.md discusses
/// the tri-state alternative.
pub struct SkillExtractor {
    model: Arc<dyn GenerativeModel>,
    cache: ExtractionCache,
    max_retries: u32,
    initial_delay: Duration,
}

impl SkillExtractor {
    pub fn new(model: Arc<dyn GenerativeModel>, cache: ExtractionCache) -> Self {
        Self::with_retry_policy(model, cache, DEFAULT_MAX_RETRIES, DEFAULT_INITIAL_DELAY)
    }

    pub fn with_retry_policy(
        model: Arc<dyn GenerativeModel>,
        cache: ExtractionCache,
        max_retries: u32,
        initial_delay: Duration,
    ) -> Self {
        Self {
            model,
            cache,
            max_retries,
            initial_delay,
        }
    }

    /// Extracts skills for one job description. Always returns; an empty
    /// vector means either "no skills found" or "gave up after retries".
    pub async fn extract(&self, description: &str) -> Vec<SkillScore> {
        if let Some(hit) = self.cache.get(description) {
            debug!("extraction cache hit");
            return hit;
        }

        let skills = self.extract_uncached(description).await;
        // Failures are memoized too: the cache stores whatever the round
        // returned, so a failed description is not re-attempted this session.
        self.cache.put(description, skills.clone());
        skills
    }

    async fn extract_uncached(&self, description: &str) -> Vec<SkillScore> {
        let prompt = build_extraction_prompt(description);
        let schema = skill_extraction_schema();

        let mut delay = self.initial_delay;

        for attempt in 1..=self.max_retries {
            if attempt > 1 {
                // Backoff before attempt k is initial_delay * 2^(k-2).
                debug!(attempt, delay_ms = delay.as_millis() as u64, "backing off");
                tokio::time::sleep(delay).await;
                delay *= 2;
            }

            match self.model.generate(&prompt, &schema).await {
                Ok(Some(text)) => match serde_json::from_str::<Vec<SkillScore>>(&text) {
                    Ok(skills) => {
                        debug!(count = skills.len(), "skill extraction succeeded");
                        return skills.into_iter().map(SkillScore::clamped).collect();
                    }
                    Err(e) => {
                        warn!(attempt, "skill payload failed schema validation: {e}");
                    }
                },
                // A well-formed response with no candidates is a valid
                // "no skills" answer, not a failure. No retry.
                Ok(None) => {
                    debug!("response carried no candidates; empty extraction");
                    return Vec::new();
                }
                Err(e) => {
                    warn!(attempt, "extraction attempt failed: {e}");
                }
            }
        }

        error!(
            "skill extraction gave up after {} attempts",
            self.max_retries
        );
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;
    use tokio::time::Instant;

    use crate::llm_client::schema::Schema;
    use crate::llm_client::LlmError;

    fn api_error() -> LlmError {
        LlmError::Api {
            status: 503,
            message: "upstream unavailable".to_string(),
        }
    }

    /// Fake backend that replays a scripted sequence of outcomes and records
    /// every call instant. Once the script runs out it keeps failing.
    struct ScriptedModel {
        script: Mutex<VecDeque<Result<Option<String>, LlmError>>>,
        calls: AtomicUsize,
        call_instants: Mutex<Vec<Instant>>,
    }

    impl ScriptedModel {
        fn new(script: Vec<Result<Option<String>, LlmError>>) -> Arc<Self> {
            Arc::new(Self {
                script: Mutex::new(script.into()),
                calls: AtomicUsize::new(0),
                call_instants: Mutex::new(Vec::new()),
            })
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl GenerativeModel for ScriptedModel {
        async fn generate(
            &self,
            _prompt: &str,
            _schema: &Schema,
        ) -> Result<Option<String>, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.call_instants.lock().unwrap().push(Instant::now());
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(api_error()))
        }
    }

    fn extractor_with(model: Arc<ScriptedModel>, max_retries: u32) -> SkillExtractor {
        SkillExtractor::with_retry_policy(
            model,
            ExtractionCache::new(),
            max_retries,
            Duration::from_secs(1),
        )
    }

    #[tokio::test]
    async fn test_successful_extraction_parses_and_returns_scores() {
        let model = ScriptedModel::new(vec![Ok(Some(
            r#"[{"skill": "Python", "confidence_score": 98}, {"skill": "R", "confidence_score": 95}]"#
                .to_string(),
        ))]);
        let extractor = extractor_with(model.clone(), 5);

        let skills = extractor.extract("needs Python and R").await;
        assert_eq!(skills.len(), 2);
        assert_eq!(skills[0].skill, "Python");
        assert_eq!(skills[0].confidence_score, 98.0);
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test]
    async fn test_out_of_range_confidence_is_clamped() {
        let model = ScriptedModel::new(vec![Ok(Some(
            r#"[{"skill": "Python", "confidence_score": 150}]"#.to_string(),
        ))]);
        let extractor = extractor_with(model, 5);

        let skills = extractor.extract("desc").await;
        assert_eq!(skills[0].confidence_score, 100.0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_transport_failure_exhausts_exactly_max_retries_attempts() {
        let model = ScriptedModel::new(vec![]);
        let extractor = extractor_with(model.clone(), 3);

        let skills = extractor.extract("desc").await;
        assert!(skills.is_empty());
        assert_eq!(model.calls(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_backoff_doubles_between_attempts() {
        let model = ScriptedModel::new(vec![]);
        let extractor = extractor_with(model.clone(), 4);

        extractor.extract("desc").await;

        let instants = model.call_instants.lock().unwrap();
        assert_eq!(instants.len(), 4);
        // Delays before attempts 2..4: 1s, 2s, 4s.
        assert_eq!(instants[1] - instants[0], Duration::from_secs(1));
        assert_eq!(instants[2] - instants[1], Duration::from_secs(2));
        assert_eq!(instants[3] - instants[2], Duration::from_secs(4));
    }

    #[tokio::test]
    async fn test_empty_candidates_returns_empty_with_zero_retries() {
        let model = ScriptedModel::new(vec![Ok(None)]);
        let extractor = extractor_with(model.clone(), 5);

        let skills = extractor.extract("desc").await;
        assert!(skills.is_empty());
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_malformed_payload_is_retried_then_recovers() {
        let model = ScriptedModel::new(vec![
            Ok(Some("not json at all".to_string())),
            Ok(Some(
                r#"[{"skill": "SQL", "confidence_score": 88}]"#.to_string(),
            )),
        ]);
        let extractor = extractor_with(model.clone(), 5);

        let skills = extractor.extract("desc").await;
        assert_eq!(skills.len(), 1);
        assert_eq!(skills[0].skill, "SQL");
        assert_eq!(model.calls(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_wrong_shape_payload_counts_as_parse_failure() {
        // Valid JSON, wrong shape: objects missing confidence_score.
        let model = ScriptedModel::new(vec![Ok(Some(
            r#"[{"skill": "Python"}]"#.to_string(),
        ))]);
        let extractor = extractor_with(model.clone(), 2);

        let skills = extractor.extract("desc").await;
        assert!(skills.is_empty());
        assert_eq!(model.calls(), 2);
    }

    #[tokio::test]
    async fn test_repeat_extraction_hits_cache() {
        let model = ScriptedModel::new(vec![Ok(Some(
            r#"[{"skill": "Python", "confidence_score": 98}]"#.to_string(),
        ))]);
        let extractor = extractor_with(model.clone(), 5);

        let first = extractor.extract("same description").await;
        let second = extractor.extract("same description").await;
        assert_eq!(first, second);
        assert_eq!(model.calls(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_failed_extraction_is_memoized_as_empty() {
        let model = ScriptedModel::new(vec![]);
        let extractor = extractor_with(model.clone(), 2);

        assert!(extractor.extract("desc").await.is_empty());
        assert_eq!(model.calls(), 2);

        // Second call is served from the memo, not re-attempted.
        assert!(extractor.extract("desc").await.is_empty());
        assert_eq!(model.calls(), 2);
    }
}
