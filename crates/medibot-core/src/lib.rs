//! medibot-core
//!
//! Pure domain types shared by every MediBot crate: disease ids, classifier
//! predictions, confidence tiers, chat intents and conversation turns.
//! Shared vocabulary of the system. No I/O here.

pub mod error;
pub mod models;
