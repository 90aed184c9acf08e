//! Port traits defining external boundaries.
//!
//! The only external system the quiz core talks to is the text-generation
//! model. Implementations live in `src/adapters/`.

pub mod llm;

pub use llm::{CompletionFuture, CompletionRequest, CompletionResponse, LlmClient, LlmError};
