//! Turn orchestration: user input in, scheduled bot messages out.

use std::time::Duration;

use medibot_core::models::chat_history::Sender;
use medibot_core::models::prediction::Prediction;
use medibot_knowledge::templates;
use medibot_knowledge::KnowledgeBase;
use serde::Serialize;

use crate::compose::{ChatSettings, ResponseComposer};
use crate::intent::IntentMatcher;
use crate::random::{RandomSource, ThreadRandom};
use crate::session::ConversationSession;

/// A bot message and how long to wait before showing it, relative to the
/// previous message in the same reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScheduledMessage {
    pub delay: Duration,
    pub text: String,
}

/// Bot output for one user turn, in session order. The session already
/// holds these messages when the reply is returned; the delays are pacing
/// only.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reply {
    pub messages: Vec<ScheduledMessage>,
}

impl Reply {
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.messages.iter().map(|m| m.text.as_str())
    }
}

pub struct ChatEngine {
    kb: KnowledgeBase,
    matcher: IntentMatcher,
    settings: ChatSettings,
    rng: Box<dyn RandomSource>,
}

impl ChatEngine {
    pub fn new(settings: ChatSettings, rng: Box<dyn RandomSource>) -> Self {
        Self {
            kb: KnowledgeBase::new(),
            matcher: IntentMatcher::new(),
            settings,
            rng,
        }
    }

    /// Engine backed by the thread-local generator.
    pub fn with_thread_rng(settings: ChatSettings) -> Self {
        Self::new(settings, Box::new(ThreadRandom))
    }

    pub fn settings(&self) -> &ChatSettings {
        &self.settings
    }

    /// Greet on first open. Returns `None` if the session already has turns.
    pub fn open(&mut self, session: &mut ConversationSession) -> Option<String> {
        if !session.is_empty() {
            return None;
        }
        let composer = ResponseComposer::new(&self.kb, &self.settings);
        let greeting = composer.greeting(self.rng.as_mut());
        session.append_turn(Sender::Bot, greeting);
        tracing::info!(session = %session.id(), "chat opened");
        Some(greeting.to_string())
    }

    /// Make `prediction` the active result and explain it.
    pub fn present(&mut self, session: &mut ConversationSession, prediction: Prediction) -> String {
        let explanation = ResponseComposer::new(&self.kb, &self.settings).explain(&prediction);
        tracing::info!(
            session = %session.id(),
            disease = %prediction.predicted_class,
            confidence = prediction.confidence,
            "new prediction presented"
        );
        session.set_prediction(prediction);
        session.append_turn(Sender::Bot, explanation.clone());
        explanation
    }

    /// Handle one user utterance. Blank input is dropped without a turn.
    pub fn respond(&mut self, session: &mut ConversationSession, utterance: &str) -> Reply {
        let utterance = utterance.trim();
        if utterance.is_empty() {
            return Reply::default();
        }

        session.append_turn(Sender::User, utterance);
        let reply_delay = Duration::from_millis(self.settings.reply_delay_ms);

        let Some(prediction) = session.prediction().cloned() else {
            tracing::debug!(session = %session.id(), "question asked before any prediction");
            session.append_turn(Sender::Bot, templates::NO_PREDICTION);
            return Reply {
                messages: vec![ScheduledMessage {
                    delay: reply_delay,
                    text: templates::NO_PREDICTION.to_string(),
                }],
            };
        };

        let intent = self.matcher.match_turn(utterance, session);
        let composed = ResponseComposer::new(&self.kb, &self.settings).compose_turn(
            intent,
            &prediction,
            session,
            self.rng.as_mut(),
        );

        let mut messages = vec![ScheduledMessage {
            delay: reply_delay,
            text: composed.reply,
        }];
        if let Some(follow_up) = composed.follow_up {
            messages.push(ScheduledMessage {
                delay: Duration::from_millis(self.settings.follow_up_delay_ms),
                text: follow_up,
            });
        }
        Reply { messages }
    }
}
