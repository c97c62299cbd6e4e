pub mod config;
pub mod error;
pub mod follow_up;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

use anyhow::Result;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Assembles the full application: routes plus the trace and CORS layers.
pub fn create_app(state: AppState) -> Result<Router> {
    let cors = state.config.cors_layer()?;

    Ok(Router::new()
        .merge(routes::create_routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state))
}
