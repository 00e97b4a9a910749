use medibot_core::models::disease::DiseaseId;

use crate::{Condition, ConditionProfile, Precautions};

/// Measles (rubeola). Highly contagious; the only class that calls for
/// immediate consultation.
pub struct Measles;

static PROFILE: ConditionProfile = ConditionProfile {
    description: "a highly contagious viral infection characterized by fever, cough, and a distinctive rash",
    severity: "moderate to high",
    seek_help: "Immediate medical consultation recommended",
};

static PRECAUTIONS: Precautions = Precautions {
    warning: "Measles is a highly contagious viral infection.",
    items: &[
        "Maintain proper vaccination status - MMR vaccine is highly effective",
        "Keep hands clean and wash frequently with soap and water",
        "Avoid touching face, eyes, nose, and mouth",
        "Maintain respiratory hygiene by covering coughs and sneezes",
        "Ensure proper ventilation in living spaces",
        "Eat healthy foods rich in vitamins A, C, and D to boost immunity",
        "Get adequate sleep (7-9 hours) to support immune function",
        "Avoid sharing personal items like towels, utensils, and cups",
        "Keep living spaces clean and disinfected",
        "Consult a healthcare professional immediately if symptoms appear",
    ],
};

impl Condition for Measles {
    fn id(&self) -> DiseaseId {
        DiseaseId::Measles
    }

    fn profile(&self) -> &ConditionProfile {
        &PROFILE
    }

    fn guidance(&self) -> &str {
        "Based on the prediction of Measles:\n\
         • Seek immediate medical attention\n\
         • Isolation may be required\n\
         • Vaccination status is important\n\
         • Symptoms include fever, cough, and rash\n\n\
         ⚠️ This is not professional medical advice. Please consult a doctor immediately."
    }

    fn precautions(&self) -> &Precautions {
        &PRECAUTIONS
    }
}
