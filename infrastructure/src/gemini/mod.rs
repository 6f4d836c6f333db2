//! Gemini `generateContent` gateway adapter

pub mod gateway;
pub mod protocol;

pub use gateway::GeminiGateway;
