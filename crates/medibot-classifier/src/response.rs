//! Wire types for the classifier service and envelope decoding.

use medibot_core::models::prediction::Prediction;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::ClassifierError;

/// `GET /api/info`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelInfo {
    pub title: String,
    pub description: String,
    pub instructions: String,
}

/// `GET /api/classes`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassList {
    pub classes: Vec<String>,
}

/// Decode a `/predict` body regardless of HTTP status.
///
/// - `{"success": true, "prediction": {...}}` yields the prediction. Fields
///   inside it are decoded leniently (see [`Prediction`]).
/// - `{"error": "..."}` with `success` not `true` yields
///   [`ClassifierError::Service`] carrying the message.
/// - Anything else, including non-JSON, is
///   [`ClassifierError::MalformedResponse`].
pub fn decode_response(body: &str) -> Result<Prediction, ClassifierError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ClassifierError::MalformedResponse(format!("not JSON: {e}")))?;

    let Value::Object(envelope) = value else {
        return Err(ClassifierError::MalformedResponse(
            "expected a JSON object".to_string(),
        ));
    };

    if envelope.get("success").and_then(Value::as_bool) == Some(true) {
        return match envelope.get("prediction") {
            Some(prediction @ Value::Object(_)) => serde_json::from_value(prediction.clone())
                .map_err(|e| ClassifierError::MalformedResponse(e.to_string())),
            _ => Err(ClassifierError::MalformedResponse(
                "success without a prediction object".to_string(),
            )),
        };
    }

    match envelope.get("error").and_then(Value::as_str) {
        Some(message) => Err(ClassifierError::Service(message.to_string())),
        None => Err(ClassifierError::MalformedResponse(
            "neither a prediction nor an error message".to_string(),
        )),
    }
}
