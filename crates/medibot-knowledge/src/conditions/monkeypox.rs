use medibot_core::models::disease::DiseaseId;

use crate::{Condition, ConditionProfile, Precautions};

/// Monkeypox (mpox). Spreads through direct contact with lesions.
pub struct Monkeypox;

static PROFILE: ConditionProfile = ConditionProfile {
    description: "a viral infection that spreads through direct contact, causing skin lesions and fever",
    severity: "moderate",
    seek_help: "Medical consultation recommended",
};

static PRECAUTIONS: Precautions = Precautions {
    warning: "Monkeypox is a viral infection that spreads through direct contact.",
    items: &[
        "Practice good personal hygiene and wash hands regularly",
        "Avoid direct contact with infected individuals or their lesions",
        "Do not share clothing, towels, or bedding",
        "Maintain clean and hygienic living and working environments",
        "Eat nutritious foods with balanced nutrients to support immunity",
        "Stay hydrated by drinking plenty of water",
        "Get regular physical activity to strengthen immune system",
        "Avoid touching animals or animal products from unknown sources",
        "Keep cuts and wounds covered and clean",
        "Seek immediate medical attention if symptoms develop",
    ],
};

impl Condition for Monkeypox {
    fn id(&self) -> DiseaseId {
        DiseaseId::Monkeypox
    }

    fn profile(&self) -> &ConditionProfile {
        &PROFILE
    }

    fn guidance(&self) -> &str {
        "Based on the prediction of Monkeypox:\n\
         • Medical consultation is strongly recommended\n\
         • Avoid direct contact with others\n\
         • Keep the area clean\n\
         • Monitor for symptom progression\n\n\
         ⚠️ This is not professional medical advice. Please consult a doctor."
    }

    fn precautions(&self) -> &Precautions {
        &PRECAUTIONS
    }
}
