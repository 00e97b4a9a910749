use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Coarse bucket derived from a prediction's confidence score.
///
/// Never stored on its own: always recomputed from the confidence it
/// describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ConfidenceTier {
    High,
    Medium,
    Low,
}

impl ConfidenceTier {
    /// Short qualifier shown to the user, one per tier.
    pub fn label(&self) -> &'static str {
        match self {
            Self::High => "very confident",
            Self::Medium => "moderately confident",
            Self::Low => "not very confident",
        }
    }
}

impl fmt::Display for ConfidenceTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::High => write!(f, "high"),
            Self::Medium => write!(f, "medium"),
            Self::Low => write!(f, "low"),
        }
    }
}
