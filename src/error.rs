use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use thiserror::Error;
use tracing::error;

use crate::models::ErrorBody;

/// The single failure class: anything that goes wrong while turning a
/// request into a reply.
#[derive(Debug, Error)]
pub enum AgentError {
    #[error("invalid request body: {0}")]
    InvalidBody(#[from] serde_json::Error),
}

impl IntoResponse for AgentError {
    fn into_response(self) -> Response {
        error!("Request processing failed: {}", self);
        let body = ErrorBody {
            error: "Internal server error",
            message: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
