//! Recording adapters that capture interactions to cassettes.

pub mod llm;

use std::sync::{Arc, Mutex};

use serde::Serialize;

use crate::cassette::recorder::CassetteRecorder;

pub use llm::RecordingLlmClient;

/// Record a `Result<T, E>` interaction using the Ok/Err JSON convention.
///
/// Mirror of `replaying::replay_result`.
///
/// Convention:
/// - `Ok(v)` is serialized as `{"Ok": v}`
/// - `Err(e)` is serialized as `{"Err": e.to_string()}`
///
/// Values that fail to serialize are recorded as JSON `null` with a warning
/// rather than aborting the call being recorded.
pub(crate) fn record_result<T, E, I>(
    recorder: &Arc<Mutex<CassetteRecorder>>,
    port: &str,
    method: &str,
    input: &I,
    result: &Result<T, E>,
) where
    T: Serialize,
    E: std::fmt::Display,
    I: Serialize,
{
    let input_json = to_json_or_null(input, port, method);

    let output_json = match result {
        Ok(v) => serde_json::json!({ "Ok": to_json_or_null(v, port, method) }),
        Err(e) => serde_json::json!({ "Err": e.to_string() }),
    };

    match recorder.lock() {
        Ok(mut guard) => guard.record(port, method, input_json, output_json),
        Err(_) => {
            eprintln!("Warning: recorder lock poisoned; dropped {port}::{method} interaction");
        }
    }
}

fn to_json_or_null<V: Serialize>(value: &V, port: &str, method: &str) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or_else(|e| {
        eprintln!("Warning: failed to serialize {port}::{method} interaction: {e}");
        serde_json::Value::Null
    })
}
