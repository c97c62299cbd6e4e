use axum::{
    routing::{get, post},
    Router,
};

use crate::handlers::{artisan_agent, guide_agent, health_check, tourist_agent};
use crate::state::AppState;

/// Creates and configures all application routes
pub fn create_routes() -> Router<AppState> {
    Router::new()
        // Agent endpoints
        .route("/tourist-agent", post(tourist_agent))
        .route("/guide-agent", post(guide_agent))
        .route("/artisan-agent", post(artisan_agent))
        // Health check
        .route("/health", get(health_check))
}
