mod config;
mod errors;
mod routes;
mod scoring;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use std::sync::Arc;

use crate::config::Config;
use crate::routes::build_router;
use crate::scoring::composite::MatchEngine;
use crate::scoring::extract::HtmlTextExtractor;
use crate::scoring::skills::SkillVocabulary;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Matchscore API v{}", env!("CARGO_PKG_VERSION"));

    // Skill vocabulary: builtin unless overridden
    let vocabulary = match &config.skill_vocabulary {
        Some(terms) => SkillVocabulary::from_terms(terms.as_slice())
            .context("SKILL_VOCABULARY contains a term that cannot be compiled")?,
        None => SkillVocabulary::builtin(),
    };
    if vocabulary.is_empty() {
        anyhow::bail!("SKILL_VOCABULARY has no usable terms");
    }
    info!("Skill vocabulary loaded ({} terms)", vocabulary.len());

    let engine = Arc::new(MatchEngine::new(vocabulary, Arc::new(HtmlTextExtractor)));

    let state = AppState {
        config: config.clone(),
        engine,
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
