//! Replaying adapter for the `LlmClient` port.

use std::sync::{Arc, Mutex};

use super::{next_output, replay_result};
use crate::cassette::replayer::CassetteReplayer;
use crate::ports::{CompletionFuture, CompletionRequest, CompletionResponse, LlmClient};

/// Serves recorded LLM completions from a cassette.
pub struct ReplayingLlmClient {
    replayer: Arc<Mutex<CassetteReplayer>>,
}

impl ReplayingLlmClient {
    /// Create a replaying LLM client backed by the given replayer.
    #[must_use]
    pub fn new(replayer: Arc<Mutex<CassetteReplayer>>) -> Self {
        Self { replayer }
    }
}

impl LlmClient for ReplayingLlmClient {
    fn complete(&self, _request: &CompletionRequest) -> CompletionFuture<'_> {
        let result = next_output(&self.replayer, "llm", "complete")
            .and_then(replay_result::<CompletionResponse>);
        Box::pin(async move { result })
    }
}

#[cfg(test)]
mod tests {
    use crate::test_support::{replaying_llm, request_for};

    #[tokio::test]
    async fn serves_recorded_completions_in_order() {
        let llm = replaying_llm(&[Ok("first"), Ok("second")]);
        let a = llm.complete(&request_for("a")).await.unwrap();
        let b = llm.complete(&request_for("b")).await.unwrap();
        assert_eq!(a.text, "first");
        assert_eq!(b.text, "second");
    }

    #[tokio::test]
    async fn recorded_error_is_returned_as_error() {
        let llm = replaying_llm(&[Err("connection reset by peer")]);
        let err = llm.complete(&request_for("a")).await.unwrap_err();
        assert_eq!(err.to_string(), "connection reset by peer");
    }

    #[tokio::test]
    async fn exhausted_cassette_is_an_error_not_a_panic() {
        let llm = replaying_llm(&[]);
        let err = llm.complete(&request_for("a")).await.unwrap_err();
        assert!(err.to_string().contains("cassette exhausted"));
    }
}
