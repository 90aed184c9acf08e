//! Offline adapters that need no external system.

pub mod llm;

pub use llm::OfflineLlmClient;
