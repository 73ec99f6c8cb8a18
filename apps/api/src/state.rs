use std::sync::Arc;

use tokio::sync::Mutex;

use crate::config::Config;
use crate::extraction::SkillExtractor;
use crate::ideas::IdeaGenerator;
use crate::session::Session;

/// Shared application state injected into all route handlers via Axum
/// extractors.
///
/// The session sits behind one async mutex and handlers hold the guard for
/// the full operation, so core calls run strictly one at a time — postings
/// are extracted serially, never fanned out.
#[derive(Clone)]
pub struct AppState {
    pub extractor: Arc<SkillExtractor>,
    pub idea_generator: Arc<IdeaGenerator>,
    pub session: Arc<Mutex<Session>>,
    pub config: Config,
}
