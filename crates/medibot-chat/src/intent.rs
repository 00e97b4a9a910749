//! Keyword intent matching.
//!
//! One ordered rule table, one loop. A rule fires when the normalised
//! utterance contains any of its keywords as a substring; the first rule
//! that fires wins, so "how accurate and trustworthy is this" is an
//! accuracy question every time.

use medibot_core::models::intent::Intent;

use crate::session::ConversationSession;

/// A keyword set routed to one intent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntentRule {
    pub intent: Intent,
    pub keywords: &'static [&'static str],
}

/// Rules in priority order, highest first. Keywords are lowercase.
pub const RULES: &[IntentRule] = &[
    IntentRule {
        intent: Intent::Meaning,
        keywords: &["mean", "indicate", "what is this", "what does this"],
    },
    IntentRule {
        intent: Intent::Accuracy,
        keywords: &["accura", "reliable", "reliability"],
    },
    IntentRule {
        intent: Intent::Trust,
        keywords: &["trust", "believe", "confident"],
    },
    IntentRule {
        intent: Intent::Improvement,
        keywords: &["better", "improve", "guidance", "tips"],
    },
    IntentRule {
        intent: Intent::DiseaseInfo,
        keywords: &["disease", "condition"],
    },
    IntentRule {
        intent: Intent::Disclaimer,
        keywords: &["disclaimer", "safe", "professional", "medical"],
    },
];

#[derive(Debug, Clone, Copy)]
pub struct IntentMatcher {
    rules: &'static [IntentRule],
}

impl Default for IntentMatcher {
    fn default() -> Self {
        Self::new()
    }
}

impl IntentMatcher {
    pub fn new() -> Self {
        Self { rules: RULES }
    }

    pub fn rules(&self) -> &[IntentRule] {
        self.rules
    }

    /// Classify an utterance without touching any session.
    /// Empty and unmatched input is [`Intent::Default`].
    pub fn classify(&self, utterance: &str) -> Intent {
        let normalised = utterance.trim().to_lowercase();
        if normalised.is_empty() {
            return Intent::Default;
        }

        self.rules
            .iter()
            .find(|rule| rule.keywords.iter().any(|k| normalised.contains(k)))
            .map(|rule| rule.intent)
            .unwrap_or(Intent::Default)
    }

    /// Classify and record the match on the session (accuracy/trust flags).
    pub fn match_turn(&self, utterance: &str, session: &mut ConversationSession) -> Intent {
        let intent = self.classify(utterance);
        session.note_intent(intent);
        tracing::debug!(session = %session.id(), %intent, "matched intent");
        intent
    }
}
