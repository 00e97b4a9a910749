//! Response composition.
//!
//! Picks the canned template for an intent, fills it from the active
//! prediction and appends the result to the session. The only markup in
//! the output is `**bold**` and `\n`; turning those into HTML or ANSI is
//! the caller's job (see [`crate::markup`]).

use medibot_core::models::chat_history::Sender;
use medibot_core::models::confidence::ConfidenceTier;
use medibot_core::models::intent::Intent;
use medibot_core::models::prediction::Prediction;
use medibot_knowledge::confidence::{classify, explanation_template};
use medibot_knowledge::templates;
use medibot_knowledge::KnowledgeBase;
use serde::{Deserialize, Serialize};

use crate::random::{choose, RandomSource};
use crate::session::ConversationSession;
use crate::template::{render, Slot, SlotValues};

/// Tunables for composition and reply pacing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSettings {
    /// Quoted in the accuracy answer, e.g. `"88-95"`.
    pub accuracy_range: String,
    /// Chance of appending a follow-up prompt after an answer.
    pub follow_up_probability: f64,
    pub reply_delay_ms: u64,
    pub follow_up_delay_ms: u64,
}

impl Default for ChatSettings {
    fn default() -> Self {
        Self {
            accuracy_range: templates::DEFAULT_ACCURACY_RANGE.to_string(),
            follow_up_probability: 0.5,
            reply_delay_ms: 300,
            follow_up_delay_ms: 500,
        }
    }
}

/// An answer plus the follow-up prompt appended after it, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composed {
    pub reply: String,
    pub follow_up: Option<String>,
}

pub struct ResponseComposer<'a> {
    kb: &'a KnowledgeBase,
    settings: &'a ChatSettings,
}

impl<'a> ResponseComposer<'a> {
    pub fn new(kb: &'a KnowledgeBase, settings: &'a ChatSettings) -> Self {
        Self { kb, settings }
    }

    /// Answer `intent`, append it to the session and return it. A follow-up
    /// prompt may be appended after it; see [`Self::compose_turn`].
    pub fn compose(
        &self,
        intent: Intent,
        prediction: &Prediction,
        session: &mut ConversationSession,
        rng: &mut dyn RandomSource,
    ) -> String {
        self.compose_turn(intent, prediction, session, rng).reply
    }

    /// Like [`Self::compose`] but also reports the follow-up line.
    pub fn compose_turn(
        &self,
        intent: Intent,
        prediction: &Prediction,
        session: &mut ConversationSession,
        rng: &mut dyn RandomSource,
    ) -> Composed {
        let reply = self.answer(intent, prediction, rng);
        session.append_turn(Sender::Bot, reply.clone());

        let follow_up = if rng.chance(self.settings.follow_up_probability) {
            choose(rng, &templates::FOLLOW_UP_PROMPTS).map(|p| p.to_string())
        } else {
            None
        };
        if let Some(prompt) = &follow_up {
            session.append_turn(Sender::Bot, prompt.clone());
        }

        tracing::info!(
            session = %session.id(),
            %intent,
            disease = %prediction.predicted_class,
            follow_up = follow_up.is_some(),
            "composed reply"
        );

        Composed { reply, follow_up }
    }

    /// The answer text for `intent`, without touching any session. Only
    /// [`Intent::Default`] consumes randomness.
    pub fn answer(
        &self,
        intent: Intent,
        prediction: &Prediction,
        rng: &mut dyn RandomSource,
    ) -> String {
        let confidence = classify(prediction.confidence);
        let values = SlotValues::new()
            .with(Slot::Disease, &prediction.predicted_class)
            .with(Slot::Confidence, prediction.confidence)
            .with(Slot::ConfidenceLevel, confidence.label)
            .with(Slot::Accuracy, &self.settings.accuracy_range);

        match intent {
            Intent::Meaning => render(templates::MEANING, &values),
            Intent::Accuracy => render(templates::ACCURACY, &values),
            Intent::Trust => templates::TRUST.to_string(),
            Intent::Improvement => templates::IMPROVEMENT.to_string(),
            Intent::Disclaimer => templates::DISCLAIMER.to_string(),
            Intent::DiseaseInfo => render(self.kb.guidance(&prediction.predicted_class), &values),
            Intent::Default => {
                let template = choose(rng, &templates::DEFAULT_RESPONSES)
                    .copied()
                    .unwrap_or(templates::DEFAULT_RESPONSES[0]);
                render(template, &values)
            }
        }
    }

    /// The full write-up shown when a new prediction arrives. Deterministic.
    pub fn explain(&self, prediction: &Prediction) -> String {
        let confidence = classify(prediction.confidence);
        let values = SlotValues::new()
            .with(Slot::Disease, &prediction.predicted_class)
            .with(Slot::Confidence, prediction.confidence);

        let mut text = format!("{}\n\n", templates::EXPLANATION_HEADER);
        text.push_str(&format!(
            "🔍 **Predicted Disease:** {}\n",
            prediction.predicted_class
        ));
        text.push_str(&format!(
            "📊 **Confidence Score:** {}%\n",
            prediction.confidence
        ));
        text.push_str(&format!("💡 **Confidence Level:** {}\n\n", confidence.label));

        text.push_str(&render(explanation_template(confidence.tier), &values));
        text.push_str("\n\n");

        if confidence.tier == ConfidenceTier::Low {
            text.push_str(templates::LOW_CONFIDENCE_INTRO);
            text.push('\n');
            for line in templates::LOW_CONFIDENCE_ADVICE {
                text.push_str(&format!("• {line}\n"));
            }
            text.push('\n');
        }

        text.push_str(templates::EXPLANATION_CLOSING);
        text
    }

    pub fn greeting(&self, rng: &mut dyn RandomSource) -> &'static str {
        choose(rng, &templates::GREETINGS)
            .copied()
            .unwrap_or(templates::GREETINGS[0])
    }
}
