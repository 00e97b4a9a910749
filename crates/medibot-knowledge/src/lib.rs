//! medibot-knowledge
//!
//! Static knowledge for MediBot: per-condition metadata, chat guidance,
//! precaution lists, canned message templates and the confidence tiering
//! rule. Pure data, no I/O.

pub mod conditions;
pub mod confidence;
pub mod templates;

use medibot_core::models::disease::DiseaseId;
use serde::Serialize;

/// Descriptive metadata for a condition.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ConditionProfile {
    pub description: &'static str,
    pub severity: &'static str,
    pub seek_help: &'static str,
}

/// Warning line plus the recommended precautions shown with a result.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Precautions {
    pub warning: &'static str,
    pub items: &'static [&'static str],
}

/// Trait implemented by each condition the classifier can report.
pub trait Condition: Send + Sync {
    fn id(&self) -> DiseaseId;

    fn profile(&self) -> &ConditionProfile;

    /// Chat answer for "tell me about this condition".
    fn guidance(&self) -> &str;

    fn precautions(&self) -> &Precautions;

    /// Human-readable name (e.g. "Measles").
    fn name(&self) -> String {
        self.id().to_string()
    }

    /// One-line summary used in listings.
    fn summary(&self) -> String {
        let profile = self.profile();
        format!(
            "{} is {}. Severity: {}. {}.",
            self.name(),
            profile.description,
            profile.severity,
            profile.seek_help,
        )
    }
}

/// Return all registered conditions, in the classifier's output order.
pub fn all_conditions() -> Vec<Box<dyn Condition>> {
    vec![
        Box::new(conditions::measles::Measles),
        Box::new(conditions::monkeypox::Monkeypox),
        Box::new(conditions::normal::Normal),
        Box::new(conditions::chickenpox::Chickenpox),
    ]
}

/// Look up a condition by id. `None` for labels outside the trained set.
pub fn get_condition(id: &DiseaseId) -> Option<Box<dyn Condition>> {
    all_conditions().into_iter().find(|c| c.id() == *id)
}

/// Registry with guaranteed fallbacks. Every lookup is total.
pub struct KnowledgeBase {
    conditions: Vec<Box<dyn Condition>>,
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::new()
    }
}

impl KnowledgeBase {
    pub fn new() -> Self {
        Self {
            conditions: all_conditions(),
        }
    }

    pub fn conditions(&self) -> &[Box<dyn Condition>] {
        &self.conditions
    }

    pub fn get(&self, id: &DiseaseId) -> Option<&dyn Condition> {
        self.conditions
            .iter()
            .find(|c| c.id() == *id)
            .map(|c| c.as_ref())
    }

    /// The entry for `id`, or the `Normal` entry when `id` is unknown.
    pub fn entry(&self, id: &DiseaseId) -> &dyn Condition {
        match self.get(id) {
            Some(condition) => condition,
            None => {
                tracing::debug!(disease = %id, "no knowledge entry, using Normal");
                &conditions::normal::Normal
            }
        }
    }

    pub fn precautions(&self, id: &DiseaseId) -> &Precautions {
        self.entry(id).precautions()
    }

    /// Guidance template for `id`. Unknown ids get the generic referral
    /// template instead of the `Normal` text; its `{disease}` slot is left
    /// for the caller's renderer.
    pub fn guidance(&self, id: &DiseaseId) -> &str {
        match self.get(id) {
            Some(condition) => condition.guidance(),
            None => templates::UNKNOWN_GUIDANCE,
        }
    }
}
