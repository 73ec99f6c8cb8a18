mod config;
mod errors;
mod extraction;
mod ideas;
mod llm_client;
mod models;
mod routes;
mod session;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::sync::Mutex;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::cache::ExtractionCache;
use crate::extraction::SkillExtractor;
use crate::ideas::IdeaGenerator;
use crate::llm_client::GeminiClient;
use crate::routes::build_router;
use crate::session::Session;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillscope API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize the Gemini client — the single LLM entry point
    let gemini: Arc<GeminiClient> = Arc::new(GeminiClient::new(
        config.gemini_base_url.clone(),
        config.gemini_model.clone(),
        config.gemini_api_key.clone(),
    ));
    info!("LLM client initialized (model: {})", gemini.model());

    // Extraction client with its session-lifetime memo cache
    let extractor = Arc::new(SkillExtractor::new(
        gemini.clone(),
        ExtractionCache::new(),
    ));

    // Idea generator — single-shot, no retry
    let idea_generator = Arc::new(IdeaGenerator::new(gemini));

    // Build app state
    let state = AppState {
        extractor,
        idea_generator,
        session: Arc::new(Mutex::new(Session::new())),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
