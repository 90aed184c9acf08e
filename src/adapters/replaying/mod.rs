//! Replaying adapters that serve recorded interactions.

pub mod llm;

use std::sync::{Arc, Mutex};

use serde::de::DeserializeOwned;

use crate::cassette::replayer::CassetteReplayer;
use crate::ports::LlmError;

pub use llm::ReplayingLlmClient;

/// Fetch the output of the next recorded interaction for `port::method`.
///
/// Mirror of `recording::record_result` - reads output instead of writing.
pub(crate) fn next_output(
    replayer: &Arc<Mutex<CassetteReplayer>>,
    port: &str,
    method: &str,
) -> Result<serde_json::Value, LlmError> {
    let mut guard =
        replayer.lock().map_err(|_| LlmError::from(format!("{port} replayer lock poisoned")))?;
    let interaction = guard.next_interaction(port, method)?;
    Ok(interaction.output.clone())
}

/// Decode a recorded `{"Ok": v}` / `{"Err": msg}` output back into a `Result`.
///
/// Lower-case `ok` / `err` keys are accepted as well.
pub(crate) fn replay_result<T: DeserializeOwned>(output: serde_json::Value) -> Result<T, LlmError> {
    let ok = output.get("Ok").or_else(|| output.get("ok"));
    let err = output.get("Err").or_else(|| output.get("err"));

    match (ok, err) {
        (Some(value), _) => serde_json::from_value(value.clone())
            .map_err(|e| format!("recorded Ok value has unexpected shape: {e}").into()),
        (None, Some(message)) => {
            Err(message.as_str().map_or_else(|| message.to_string(), str::to_string).into())
        }
        (None, None) => Err(format!("recorded output is neither Ok nor Err: {output}").into()),
    }
}
