//! Shared helpers for unit tests.

use std::sync::{Arc, Mutex};

use chrono::Utc;
use serde_json::json;

use crate::adapters::recording::RecordingLlmClient;
use crate::adapters::replaying::ReplayingLlmClient;
use crate::cassette::format::{Cassette, Interaction};
use crate::cassette::recorder::CassetteRecorder;
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::llm::{
    CompletionFuture, CompletionRequest, CompletionResponse, LlmClient, LlmError,
};

/// Builds an in-memory LLM cassette: `Ok(text)` replays a completion,
/// `Err(msg)` replays a failed call.
pub(crate) fn llm_cassette(replies: &[Result<&str, &str>]) -> Cassette {
    let interactions = replies
        .iter()
        .zip(0u64..)
        .map(|(reply, seq)| Interaction {
            seq,
            port: "llm".into(),
            method: "complete".into(),
            input: json!({}),
            output: match reply {
                Ok(text) => {
                    json!({"Ok": {"text": text, "prompt_tokens": 10, "completion_tokens": 5}})
                }
                Err(msg) => json!({"Err": msg}),
            },
        })
        .collect();

    Cassette {
        name: "unit-test".into(),
        recorded_at: Utc::now(),
        model: "claude-test".into(),
        interactions,
    }
}

/// An LLM client that replays `replies` in order.
pub(crate) fn replaying_llm(replies: &[Result<&str, &str>]) -> Arc<dyn LlmClient> {
    let replayer = CassetteReplayer::new(&llm_cassette(replies));
    Arc::new(ReplayingLlmClient::new(Arc::new(Mutex::new(replayer))))
}

/// Like [`replaying_llm`], but every request is also captured so tests can
/// inspect the prompts that were sent.
pub(crate) fn capturing_llm(
    replies: &[Result<&str, &str>],
) -> (Arc<dyn LlmClient>, Arc<Mutex<CassetteRecorder>>) {
    let recorder = Arc::new(Mutex::new(CassetteRecorder::new("/unused", "capture", "claude-test")));
    let client = RecordingLlmClient::new(replaying_llm(replies), Arc::clone(&recorder));
    (Arc::new(client), recorder)
}

/// A client whose calls never resolve.
struct StalledLlm;

impl LlmClient for StalledLlm {
    fn complete(&self, _request: &CompletionRequest) -> CompletionFuture<'_> {
        Box::pin(std::future::pending::<std::result::Result<CompletionResponse, LlmError>>())
    }
}

/// An LLM client that hangs forever, for deadline and cancellation tests.
pub(crate) fn stalled_llm() -> Arc<dyn LlmClient> {
    Arc::new(StalledLlm)
}

/// A minimal request carrying `prompt`.
pub(crate) fn request_for(prompt: &str) -> CompletionRequest {
    CompletionRequest {
        model: "claude-test".into(),
        system: String::new(),
        prompt: prompt.into(),
        max_tokens: 64,
        temperature: 0.7,
    }
}
