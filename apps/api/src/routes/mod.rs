pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Match API
        .route("/api/v1/match/score", post(handlers::handle_score))
        .route(
            "/api/v1/match/improvement",
            post(handlers::handle_improvement),
        )
        .with_state(state)
}
