use medibot_core::models::confidence::ConfidenceTier;
use medibot_core::models::disease::DiseaseId;
use serde::Serialize;

/// Inclusive lower bounds for the `high` and `medium` tiers.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConfidenceThresholds {
    pub high: f64,
    pub medium: f64,
}

pub const THRESHOLDS: ConfidenceThresholds = ConfidenceThresholds {
    high: 75.0,
    medium: 50.0,
};

impl ConfidenceThresholds {
    /// First matching threshold wins, checked high → medium → low. Values
    /// outside 0–100 go through the same rule; NaN lands in `Low`.
    pub fn tier(&self, confidence: f64) -> ConfidenceTier {
        if confidence >= self.high {
            ConfidenceTier::High
        } else if confidence >= self.medium {
            ConfidenceTier::Medium
        } else {
            ConfidenceTier::Low
        }
    }
}

/// A classified confidence score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Confidence {
    pub score: f64,
    pub tier: ConfidenceTier,
    pub label: &'static str,
}

pub fn classify(confidence: f64) -> Confidence {
    let tier = THRESHOLDS.tier(confidence);
    Confidence {
        score: confidence,
        tier,
        label: tier.label(),
    }
}

/// Paragraph describing what a tier means, with `{confidence}` and
/// `{disease}` slots.
pub fn explanation_template(tier: ConfidenceTier) -> &'static str {
    match tier {
        ConfidenceTier::High => {
            "The model is very confident in this classification with {confidence}% confidence. This means the visual characteristics strongly match {disease}."
        }
        ConfidenceTier::Medium => {
            "The model has moderate confidence in this classification with {confidence}% confidence. The visual characteristics are somewhat consistent with {disease}."
        }
        ConfidenceTier::Low => {
            "The model has low confidence in this classification with {confidence}% confidence. The visual characteristics show some uncertainty, and expert review is highly recommended."
        }
    }
}

/// One-sentence reliability verdict for reports.
pub fn recommendation(confidence: f64, disease: &DiseaseId) -> String {
    match THRESHOLDS.tier(confidence) {
        ConfidenceTier::High => format!(
            "Since the model is very confident about {disease} ({confidence}%), the prediction is likely reliable. However, always consult a healthcare professional for final diagnosis."
        ),
        ConfidenceTier::Medium => format!(
            "The model has moderate confidence about {disease} ({confidence}%). While the prediction is reasonably reliable, I recommend consulting a healthcare professional to confirm."
        ),
        ConfidenceTier::Low => format!(
            "The model has low confidence about this prediction ({confidence}%). Please don't rely solely on this result. Consulting a healthcare professional is strongly recommended."
        ),
    }
}
