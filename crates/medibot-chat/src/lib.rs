//! medibot-chat
//!
//! The rule-based MediBot response engine: keyword intent matching,
//! template rendering, response composition and conversation sessions.

pub mod compose;
pub mod engine;
pub mod intent;
pub mod markup;
pub mod random;
pub mod session;
pub mod template;
