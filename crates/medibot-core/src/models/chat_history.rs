use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// One message in a MediBot conversation, in display order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Turn {
    pub sender: Sender,
    /// Text with `**bold**` and `\n` markers; the UI translates them.
    pub text: String,
    pub timestamp: jiff::Timestamp,
}

impl Turn {
    pub fn new(sender: Sender, text: impl Into<String>) -> Self {
        Self {
            sender,
            text: text.into(),
            timestamp: jiff::Timestamp::now(),
        }
    }
}

/// Who produced a turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Sender {
    Bot,
    User,
}
