use medibot_core::models::disease::DiseaseId;

use crate::{Condition, ConditionProfile, Precautions};

/// Chickenpox (varicella).
pub struct Chickenpox;

static PROFILE: ConditionProfile = ConditionProfile {
    description: "a highly contagious viral infection known for its characteristic chickenpox rash",
    severity: "mild to moderate",
    seek_help: "Medical consultation recommended",
};

static PRECAUTIONS: Precautions = Precautions {
    warning: "Chickenpox is a highly contagious viral infection.",
    items: &[
        "Ensure vaccination with varicella vaccine for prevention",
        "Maintain strict hand hygiene to prevent spreading infection",
        "Keep fingernails short to avoid scratching lesions",
        "Isolate from others if infected to prevent transmission",
        "Keep skin clean with gentle bathing in lukewarm water",
        "Eat healthy, nutrient-rich foods to support recovery",
        "Consume foods rich in vitamin C for immune support",
        "Drink adequate water and fluids for hydration",
        "Get adequate rest and sleep for faster recovery",
        "Wear clean, loose-fitting clothes to prevent irritation",
        "Use prescribed medications as directed by healthcare provider",
    ],
};

impl Condition for Chickenpox {
    fn id(&self) -> DiseaseId {
        DiseaseId::Chickenpox
    }

    fn profile(&self) -> &ConditionProfile {
        &PROFILE
    }

    fn guidance(&self) -> &str {
        "Based on the prediction of Chickenpox:\n\
         • Medical consultation is recommended\n\
         • Rest and hydration are important\n\
         • Avoid scratching to prevent infection\n\
         • Keep the area clean and dry\n\n\
         ⚠️ This is not professional medical advice. Please consult a doctor."
    }

    fn precautions(&self) -> &Precautions {
        &PRECAUTIONS
    }
}
