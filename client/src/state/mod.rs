pub mod chat;
pub mod shortcuts;
pub mod stats;
