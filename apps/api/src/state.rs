use std::sync::Arc;

use crate::config::Config;
use crate::scoring::composite::MatchEngine;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Stateless scoring engine, built once at startup.
    pub engine: Arc<MatchEngine>,
}
