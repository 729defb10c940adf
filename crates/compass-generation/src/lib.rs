//! # compass-generation
//!
//! Sends a fused prompt to a chat-completion provider with fixed decoding
//! parameters. One attempt per call.

pub mod generator;
pub mod providers;

pub use generator::AnswerGenerator;
pub use providers::OpenAiChatProvider;
