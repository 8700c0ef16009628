mod analysis;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod models;
mod routes;
mod scoring;
mod state;

use anyhow::Result;
use std::net::SocketAddr;
use std::sync::Arc;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::extraction::facts::LlmFactExtractor;
use crate::extraction::profile::LlmProfileExtractor;
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::scoring::ScoringEngine;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume ATS API v{}", env!("CARGO_PKG_VERSION"));

    let llm = LlmClient::new(config.anthropic_api_key.clone());
    info!("LLM client initialized (model: {})", llm_client::MODEL);

    info!(
        "Scoring config: stuffing threshold {} ({:?}), readability ceiling {}",
        config.scoring.stuffing.threshold,
        config.scoring.stuffing.rule,
        config.scoring.readability_ceiling
    );
    let engine = Arc::new(ScoringEngine::new(config.scoring.clone()));

    let state = AppState {
        engine,
        fact_extractor: Arc::new(LlmFactExtractor(llm.clone())),
        profile_extractor: Arc::new(LlmProfileExtractor(llm)),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
