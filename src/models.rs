use serde::{Deserialize, Serialize};

use crate::follow_up::FollowUpSignal;

/// Canned highlights attached to every tourist reply.
pub const KNOWLEDGE_HIGHLIGHTS: [&str; 2] = [
    "Pottery techniques in Moroccan culture",
    "Traditional craftsmanship in Jamaa el Fna",
];

/// Canned hints attached to every guide reply.
pub const TRANSLATION_HINTS: [&str; 2] = ["Local dialect nuances", "Cultural context for terms"];

/// Canned details attached to every artisan reply.
pub const CRAFT_DETAILS: [&str; 2] = [
    "Traditional pottery techniques",
    "Materials used in local crafts",
];

/// Request payload shared by all agent endpoints. Both fields fall back to
/// the empty string when absent; unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AgentQuery {
    pub query: String,
    pub location: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TouristReply {
    pub message: String,
    pub location: String,
    pub knowledge_highlights: [&'static str; 2],
    #[serde(flatten)]
    pub follow_up: FollowUpSignal,
}

impl TouristReply {
    pub fn new(query: AgentQuery, follow_up: FollowUpSignal) -> Self {
        Self {
            message: format!("Tourist agent processed query about {}", query.query),
            location: query.location,
            knowledge_highlights: KNOWLEDGE_HIGHLIGHTS,
            follow_up,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuideReply {
    pub message: String,
    pub location: String,
    pub requires_cultural_translation: bool,
    pub translation_hints: [&'static str; 2],
}

impl GuideReply {
    pub fn new(query: AgentQuery) -> Self {
        Self {
            message: format!("Guide agent processed query about {}", query.query),
            location: query.location,
            requires_cultural_translation: true,
            translation_hints: TRANSLATION_HINTS,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArtisanReply {
    pub message: String,
    pub location: String,
    pub craft_details: [&'static str; 2],
    pub suggests_artisan_connection: bool,
}

impl ArtisanReply {
    pub fn new(query: AgentQuery) -> Self {
        Self {
            message: format!("Artisan agent processed query about {}", query.query),
            location: query.location,
            craft_details: CRAFT_DETAILS,
            suggests_artisan_connection: true,
        }
    }
}

/// Response payload for the liveness endpoint.
#[derive(Debug, Serialize)]
pub struct HealthReply {
    pub status: &'static str,
}

impl HealthReply {
    pub fn healthy() -> Self {
        Self { status: "healthy" }
    }
}

/// Uniform body for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: &'static str,
    pub message: String,
}
