use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use ts_rs::TS;

use super::disease::DiseaseId;
use crate::error::CoreError;

/// The result returned by the classifier service for one uploaded image.
///
/// Immutable once received. Decoding never fails on a missing or odd
/// field: the service is an external collaborator and the chat must keep
/// working with whatever it sent.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[ts(export)]
pub struct Prediction {
    #[ts(type = "string")]
    pub predicted_class: DiseaseId,
    /// Percentage, nominally 0–100.
    pub confidence: f64,
    #[ts(type = "Record<string, number>")]
    pub class_probabilities: BTreeMap<DiseaseId, f64>,
}

impl Prediction {
    pub fn new(predicted_class: DiseaseId, confidence: f64) -> Self {
        Self {
            predicted_class,
            confidence,
            class_probabilities: BTreeMap::new(),
        }
    }

    pub fn with_probabilities(
        mut self,
        probabilities: impl IntoIterator<Item = (DiseaseId, f64)>,
    ) -> Self {
        self.class_probabilities.extend(probabilities);
        self
    }

    /// Parse a bare prediction object (not the `{success, prediction}` envelope).
    pub fn from_json(json: &str) -> Result<Self, CoreError> {
        let value: Value = serde_json::from_str(json)?;
        if !value.is_object() {
            return Err(CoreError::NotAnObject("prediction".to_string()));
        }
        Ok(serde_json::from_value(value)?)
    }

    /// Class probabilities, highest first. Ties are ordered by label.
    pub fn ranked_probabilities(&self) -> Vec<(&DiseaseId, f64)> {
        let mut ranked: Vec<_> = self
            .class_probabilities
            .iter()
            .map(|(id, p)| (id, *p))
            .collect();
        ranked.sort_by(|a, b| {
            b.1.total_cmp(&a.1)
                .then_with(|| a.0.as_str().cmp(b.0.as_str()))
        });
        ranked
    }
}

#[derive(Deserialize)]
struct RawPrediction {
    #[serde(default)]
    predicted_class: Option<Value>,
    #[serde(default)]
    confidence: Option<Value>,
    #[serde(default)]
    class_probabilities: Option<Value>,
}

impl From<RawPrediction> for Prediction {
    fn from(raw: RawPrediction) -> Self {
        let predicted_class = match raw.predicted_class {
            Some(Value::String(label)) => DiseaseId::from(label),
            _ => DiseaseId::unknown(),
        };

        let confidence = raw.confidence.as_ref().and_then(number_of).unwrap_or(0.0);

        let class_probabilities = match raw.class_probabilities {
            Some(Value::Object(map)) => map
                .iter()
                .filter_map(|(label, v)| number_of(v).map(|p| (DiseaseId::from(label.as_str()), p)))
                .collect(),
            _ => BTreeMap::new(),
        };

        Prediction {
            predicted_class,
            confidence,
            class_probabilities,
        }
    }
}

impl<'de> Deserialize<'de> for Prediction {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        RawPrediction::deserialize(deserializer).map(Prediction::from)
    }
}

/// Accept JSON numbers and numeric strings such as `"82.5"` or `"82.5%"`.
fn number_of(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().trim_end_matches('%').trim().parse().ok(),
        _ => None,
    }
}
