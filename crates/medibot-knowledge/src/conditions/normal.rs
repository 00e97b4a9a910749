use medibot_core::models::disease::DiseaseId;

use crate::{Condition, ConditionProfile, Precautions};

/// Healthy skin. Also the fallback entry for labels outside the trained set.
pub struct Normal;

static PROFILE: ConditionProfile = ConditionProfile {
    description: "healthy skin with no signs of the diseases being detected",
    severity: "none - normal",
    seek_help: "Continue maintaining good skin health practices",
};

static PRECAUTIONS: Precautions = Precautions {
    warning: "Your skin appears to be in normal, healthy condition.",
    items: &[
        "Continue maintaining good personal hygiene practices",
        "Wash hands regularly with soap and water for at least 20 seconds",
        "Keep your living spaces clean and well-organized",
        "Maintain a balanced diet rich in fruits and vegetables",
        "Stay hydrated by drinking 7-8 glasses of water daily",
        "Get regular physical exercise (at least 30 minutes daily)",
        "Ensure proper sleep and rest (7-9 hours per night)",
        "Protect skin from excessive sun exposure with sunscreen",
        "Avoid sharing personal items like towels and razors",
        "Keep vaccinations up to date as recommended by healthcare providers",
    ],
};

impl Condition for Normal {
    fn id(&self) -> DiseaseId {
        DiseaseId::Normal
    }

    fn profile(&self) -> &ConditionProfile {
        &PROFILE
    }

    fn guidance(&self) -> &str {
        "Great news! The model indicates normal, healthy skin.\n\
         ✓ Continue with your regular skin care routine\n\
         ✓ Maintain good hygiene practices\n\
         ✓ Protect your skin from environmental damage\n\
         ✓ If concerned about any changes, consult a doctor\n\n\
         Stay healthy!"
    }

    fn precautions(&self) -> &Precautions {
        &PRECAUTIONS
    }
}
