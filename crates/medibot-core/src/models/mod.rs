pub mod chat_history;
pub mod confidence;
pub mod disease;
pub mod intent;
pub mod prediction;
