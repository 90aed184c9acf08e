//! Live adapters for real external interactions.

pub mod llm;

pub use llm::LiveLlmClient;
