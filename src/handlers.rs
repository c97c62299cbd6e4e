use axum::body::Bytes;
use axum::extract::State;
use axum::Json;
use tracing::{debug, info};

use crate::error::AgentError;
use crate::models::{AgentQuery, ArtisanReply, GuideReply, HealthReply, TouristReply};
use crate::state::AppState;

pub async fn tourist_agent(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TouristReply>, AgentError> {
    let query = parse_query(&body)?;
    info!("Tourist agent received query: {}", query.query);

    let reply = TouristReply::new(query, state.signals.draw());
    debug!("Tourist agent reply: {:?}", reply);

    Ok(Json(reply))
}

pub async fn guide_agent(
    State(_state): State<AppState>,
    body: Bytes,
) -> Result<Json<GuideReply>, AgentError> {
    let query = parse_query(&body)?;
    info!("Guide agent received query: {}", query.query);

    let reply = GuideReply::new(query);
    debug!("Guide agent reply: {:?}", reply);

    Ok(Json(reply))
}

pub async fn artisan_agent(
    State(_state): State<AppState>,
    body: Bytes,
) -> Result<Json<ArtisanReply>, AgentError> {
    let query = parse_query(&body)?;
    info!("Artisan agent received query: {}", query.query);

    let reply = ArtisanReply::new(query);
    debug!("Artisan agent reply: {:?}", reply);

    Ok(Json(reply))
}

pub async fn health_check() -> Json<HealthReply> {
    Json(HealthReply::healthy())
}

// Parsed by hand rather than through the Json extractor so a malformed body
// takes the uniform 500 path instead of a framework 4xx rejection.
fn parse_query(body: &[u8]) -> Result<AgentQuery, AgentError> {
    Ok(serde_json::from_slice(body)?)
}
