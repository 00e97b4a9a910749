//! Per-conversation state.
//!
//! A session is created when the chat is first opened and owned by the
//! caller. Every operation takes it by `&mut`, so turns from one
//! conversation can never interleave.

use medibot_core::models::chat_history::{Sender, Turn};
use medibot_core::models::intent::Intent;
use medibot_core::models::prediction::Prediction;
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct ConversationSession {
    id: Uuid,
    created_at: jiff::Timestamp,
    turns: Vec<Turn>,
    prediction: Option<Prediction>,
    asked_about_accuracy: bool,
    asked_about_trust: bool,
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ConversationSession {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: jiff::Timestamp::now(),
            turns: Vec::new(),
            prediction: None,
            asked_about_accuracy: false,
            asked_about_trust: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> jiff::Timestamp {
        self.created_at
    }

    /// Append a turn. History is append-only.
    pub fn append_turn(&mut self, sender: Sender, text: impl Into<String>) -> &Turn {
        self.turns.push(Turn::new(sender, text));
        &self.turns[self.turns.len() - 1]
    }

    pub fn history(&self) -> &[Turn] {
        &self.turns
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// The active result the chat is talking about, if any.
    pub fn prediction(&self) -> Option<&Prediction> {
        self.prediction.as_ref()
    }

    /// Replace the active result without announcing it.
    pub fn set_prediction(&mut self, prediction: Prediction) {
        self.prediction = Some(prediction);
    }

    pub fn asked_about_accuracy(&self) -> bool {
        self.asked_about_accuracy
    }

    pub fn asked_about_trust(&self) -> bool {
        self.asked_about_trust
    }

    /// Record that an intent was matched. Flags only ever go false → true.
    pub(crate) fn note_intent(&mut self, intent: Intent) {
        match intent {
            Intent::Accuracy => self.asked_about_accuracy = true,
            Intent::Trust => self.asked_about_trust = true,
            _ => {}
        }
    }
}
