//! `{slot}` substitution for canned messages.
//!
//! Rendering is total: a placeholder whose slot is unknown or has no value
//! renders as the empty string, and an unterminated `{` is copied as-is.
//! Templates carry no loops or conditionals; branching happens in the
//! composer before a template is picked.

use std::collections::HashMap;
use std::fmt;

/// The named placeholders a MediBot template may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Disease,
    Confidence,
    ConfidenceLevel,
    Accuracy,
}

impl Slot {
    pub fn name(&self) -> &'static str {
        match self {
            Slot::Disease => "disease",
            Slot::Confidence => "confidence",
            Slot::ConfidenceLevel => "confidenceLevel",
            Slot::Accuracy => "accuracy",
        }
    }

    pub fn from_name(name: &str) -> Option<Slot> {
        match name {
            "disease" => Some(Slot::Disease),
            "confidence" => Some(Slot::Confidence),
            "confidenceLevel" => Some(Slot::ConfidenceLevel),
            "accuracy" => Some(Slot::Accuracy),
            _ => None,
        }
    }
}

/// Values to substitute, keyed by slot.
#[derive(Debug, Clone, Default)]
pub struct SlotValues {
    values: HashMap<Slot, String>,
}

impl SlotValues {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, slot: Slot, value: impl fmt::Display) -> Self {
        self.values.insert(slot, value.to_string());
        self
    }

    pub fn get(&self, slot: Slot) -> Option<&str> {
        self.values.get(&slot).map(String::as_str)
    }
}

/// Fill every `{name}` in `template`. Every occurrence is replaced, not
/// just the first.
pub fn render(template: &str, values: &SlotValues) -> String {
    let mut out = String::with_capacity(template.len());
    let mut remaining = template;

    while let Some(start) = remaining.find('{') {
        out.push_str(&remaining[..start]);
        let after_open = &remaining[start + 1..];

        let Some(end) = after_open.find('}') else {
            out.push_str(&remaining[start..]);
            return out;
        };

        let name = &after_open[..end];
        if is_placeholder_name(name) {
            if let Some(value) = Slot::from_name(name).and_then(|slot| values.get(slot)) {
                out.push_str(value);
            }
            remaining = &after_open[end + 1..];
        } else {
            // Not a placeholder (e.g. "{ }" or "{{"): keep the brace literally.
            out.push('{');
            remaining = after_open;
        }
    }

    out.push_str(remaining);
    out
}

fn is_placeholder_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}
