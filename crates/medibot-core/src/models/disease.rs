use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Label the classifier uses when it cannot name a class.
pub const UNKNOWN_LABEL: &str = "Unknown";

/// A class label produced by the skin-condition classifier.
///
/// The four trained classes get their own variants. Anything else the
/// service sends back is kept verbatim in [`DiseaseId::Other`] so it can
/// still be displayed; knowledge lookups for it fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DiseaseId {
    Measles,
    Monkeypox,
    Chickenpox,
    Normal,
    Other(String),
}

impl DiseaseId {
    /// The classes the model was trained on, in the service's output order.
    pub const KNOWN: [DiseaseId; 4] = [
        DiseaseId::Measles,
        DiseaseId::Monkeypox,
        DiseaseId::Normal,
        DiseaseId::Chickenpox,
    ];

    pub fn unknown() -> Self {
        DiseaseId::Other(UNKNOWN_LABEL.to_string())
    }

    pub fn as_str(&self) -> &str {
        match self {
            DiseaseId::Measles => "Measles",
            DiseaseId::Monkeypox => "Monkeypox",
            DiseaseId::Chickenpox => "Chickenpox",
            DiseaseId::Normal => "Normal",
            DiseaseId::Other(label) => label,
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, DiseaseId::Other(_))
    }
}

impl From<&str> for DiseaseId {
    /// Labels match case-sensitively, the way the classifier emits them.
    /// An empty label becomes [`UNKNOWN_LABEL`].
    fn from(label: &str) -> Self {
        match label.trim() {
            "Measles" => DiseaseId::Measles,
            "Monkeypox" => DiseaseId::Monkeypox,
            "Chickenpox" => DiseaseId::Chickenpox,
            "Normal" => DiseaseId::Normal,
            "" => DiseaseId::unknown(),
            other => DiseaseId::Other(other.to_string()),
        }
    }
}

impl From<String> for DiseaseId {
    fn from(label: String) -> Self {
        DiseaseId::from(label.as_str())
    }
}

impl FromStr for DiseaseId {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(DiseaseId::from(s))
    }
}

impl fmt::Display for DiseaseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl Serialize for DiseaseId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for DiseaseId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let label = String::deserialize(deserializer)?;
        Ok(DiseaseId::from(label))
    }
}
