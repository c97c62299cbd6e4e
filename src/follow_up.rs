use rand::Rng;
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Hint occasionally attached to tourist replies suggesting that further
/// agent interaction would be useful.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FollowUpSignal {
    KnowledgeEnrichment,
    CulturalTranslation,
    ArtisanConnection,
    None,
}

impl FollowUpSignal {
    pub const ALL: [FollowUpSignal; 4] = [
        FollowUpSignal::KnowledgeEnrichment,
        FollowUpSignal::CulturalTranslation,
        FollowUpSignal::ArtisanConnection,
        FollowUpSignal::None,
    ];

    /// The JSON field this signal contributes to a reply, if any.
    pub fn flag(&self) -> Option<&'static str> {
        match self {
            FollowUpSignal::KnowledgeEnrichment => Some("requiresKnowledgeEnrichment"),
            FollowUpSignal::CulturalTranslation => Some("requiresCulturalTranslation"),
            FollowUpSignal::ArtisanConnection => Some("suggestsArtisanConnection"),
            FollowUpSignal::None => None,
        }
    }
}

// Serializes as a map with at most one boolean entry so it can be flattened
// into a reply without ever adding more than one extra key.
impl Serialize for FollowUpSignal {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.flag() {
            Some(key) => {
                let mut map = serializer.serialize_map(Some(1))?;
                map.serialize_entry(key, &true)?;
                map.end()
            }
            None => serializer.serialize_map(Some(0))?.end(),
        }
    }
}

/// Source of follow-up signals. The production source draws at random;
/// tests substitute a fixed source to pin the selection.
pub trait SignalSource: Send + Sync {
    fn draw(&self) -> FollowUpSignal;
}

/// Uniform draw over the four variants, one independent draw per call.
pub struct RandomSignals;

impl SignalSource for RandomSignals {
    fn draw(&self) -> FollowUpSignal {
        let idx = rand::thread_rng().gen_range(0..FollowUpSignal::ALL.len());
        FollowUpSignal::ALL[idx]
    }
}

/// Always yields the same signal.
#[cfg(test)]
pub struct FixedSignals(pub FollowUpSignal);

#[cfg(test)]
impl SignalSource for FixedSignals {
    fn draw(&self) -> FollowUpSignal {
        self.0
    }
}
