use std::fmt;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Routing key for a user question. Closed set; never shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Intent {
    /// What does the prediction mean?
    Meaning,
    /// How accurate or reliable is the model?
    Accuracy,
    /// Can the result be trusted?
    Trust,
    /// How to take better pictures for better predictions.
    Improvement,
    /// Safety and professional-advice disclaimer.
    Disclaimer,
    /// Guidance specific to the predicted condition.
    DiseaseInfo,
    /// Nothing matched.
    Default,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Meaning => "meaning",
            Self::Accuracy => "accuracy",
            Self::Trust => "trust",
            Self::Improvement => "improvement",
            Self::Disclaimer => "disclaimer",
            Self::DiseaseInfo => "disease_info",
            Self::Default => "default",
        };
        f.write_str(name)
    }
}
