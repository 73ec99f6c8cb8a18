//! Ideas — single-shot project suggestion generation from ranked skills.
//!
//! Unlike extraction, an idea call is never retried: any transport or parse
//! failure degrades immediately to an empty list. The asymmetry with the
//! extraction client is deliberate (see DESIGN.md).

pub mod prompts;

use std::sync::Arc;

use tracing::{debug, error};

use crate::llm_client::schema::project_idea_schema;
use crate::llm_client::GenerativeModel;
use crate::models::ProjectIdea;

use prompts::build_idea_prompt;

pub struct IdeaGenerator {
    model: Arc<dyn GenerativeModel>,
}

impl IdeaGenerator {
    pub fn new(model: Arc<dyn GenerativeModel>) -> Self {
        Self { model }
    }

    /// Generates portfolio project ideas for the given skills. Exactly one
    /// call; never propagates an error past its boundary.
    pub async fn generate_ideas(&self, skills: &[String]) -> Vec<ProjectIdea> {
        let prompt = build_idea_prompt(skills);
        let schema = project_idea_schema();

        match self.model.generate(&prompt, &schema).await {
            Ok(Some(text)) => match serde_json::from_str::<Vec<ProjectIdea>>(&text) {
                Ok(ideas) => {
                    debug!(count = ideas.len(), "idea generation succeeded");
                    ideas
                }
                Err(e) => {
                    error!("idea payload failed schema validation: {e}");
                    Vec::new()
                }
            },
            Ok(None) => {
                debug!("idea response carried no candidates");
                Vec::new()
            }
            Err(e) => {
                error!("idea generation failed: {e}");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use async_trait::async_trait;

    use crate::llm_client::schema::Schema;
    use crate::llm_client::LlmError;

    /// Fake backend returning one fixed outcome, counting calls.
    struct FixedModel {
        outcome: Mutex<Option<Result<Option<String>, LlmError>>>,
        calls: AtomicUsize,
    }

    impl FixedModel {
        fn new(outcome: Result<Option<String>, LlmError>) -> Arc<Self> {
            Arc::new(Self {
                outcome: Mutex::new(Some(outcome)),
                calls: AtomicUsize::new(0),
            })
        }
    }

    #[async_trait]
    impl GenerativeModel for FixedModel {
        async fn generate(
            &self,
            _prompt: &str,
            _schema: &Schema,
        ) -> Result<Option<String>, LlmError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcome.lock().unwrap().take().unwrap_or_else(|| {
                Err(LlmError::Api {
                    status: 503,
                    message: "upstream unavailable".to_string(),
                })
            })
        }
    }

    #[tokio::test]
    async fn test_successful_generation_parses_ideas() {
        let model = FixedModel::new(Ok(Some(
            r#"[{"title": "Churn Dashboard", "description": "Predict churn with Python and visualize in Power BI."}]"#
                .to_string(),
        )));
        let generator = IdeaGenerator::new(model.clone());

        let ideas = generator
            .generate_ideas(&["Python".to_string(), "Power BI".to_string()])
            .await;
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].title, "Churn Dashboard");
    }

    #[tokio::test]
    async fn test_transport_failure_is_not_retried() {
        let model = FixedModel::new(Err(LlmError::Api {
            status: 500,
            message: "boom".to_string(),
        }));
        let generator = IdeaGenerator::new(model.clone());

        let ideas = generator.generate_ideas(&["Python".to_string()]).await;
        assert!(ideas.is_empty());
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_malformed_payload_degrades_to_empty() {
        let model = FixedModel::new(Ok(Some("no ideas today".to_string())));
        let generator = IdeaGenerator::new(model.clone());

        let ideas = generator.generate_ideas(&["Python".to_string()]).await;
        assert!(ideas.is_empty());
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_empty_skill_list_does_not_panic() {
        let model = FixedModel::new(Ok(None));
        let generator = IdeaGenerator::new(model.clone());

        let ideas = generator.generate_ideas(&[]).await;
        assert!(ideas.is_empty());
    }
}
