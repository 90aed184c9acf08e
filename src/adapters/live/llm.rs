//! Live adapter for the `LlmClient` port using the Anthropic messages API.

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::Settings;
use crate::ports::llm::{
    CompletionFuture, CompletionRequest, CompletionResponse, LlmClient, LlmError,
};

const ANTHROPIC_VERSION: &str = "2023-06-01";

/// Live LLM client that calls the Anthropic messages API.
pub struct LiveLlmClient {
    client: Client,
    api_url: String,
    api_key: Option<String>,
}

impl LiveLlmClient {
    /// Creates a live client for the endpoint and key in `settings`.
    #[must_use]
    pub fn new(settings: &Settings) -> Self {
        Self {
            client: Client::new(),
            api_url: settings.api_url.clone(),
            api_key: settings.api_key.clone(),
        }
    }
}

/// Request body sent to the messages API.
#[derive(Serialize)]
struct MessagesRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    system: Option<&'a str>,
    messages: Vec<Message<'a>>,
}

/// A single message in the request.
#[derive(Serialize)]
struct Message<'a> {
    role: &'a str,
    content: &'a str,
}

/// Top-level response from the messages API.
#[derive(Deserialize)]
struct MessagesResponse {
    content: Vec<ContentBlock>,
    usage: Usage,
}

/// A content block in the response. Non-text blocks carry no `text`.
#[derive(Deserialize)]
struct ContentBlock {
    #[serde(default)]
    text: String,
}

#[derive(Deserialize)]
struct Usage {
    input_tokens: u32,
    output_tokens: u32,
}

/// Error response from the API.
#[derive(Deserialize)]
struct ApiError {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

impl LlmClient for LiveLlmClient {
    fn complete(&self, request: &CompletionRequest) -> CompletionFuture<'_> {
        let request = request.clone();

        Box::pin(async move {
            let api_key = self
                .api_key
                .as_deref()
                .ok_or_else(|| LlmError::from("ANTHROPIC_API_KEY environment variable not set"))?;

            let body = MessagesRequest {
                model: &request.model,
                max_tokens: request.max_tokens,
                temperature: request.temperature,
                system: system_prompt(&request.system),
                messages: vec![Message {
                    role: "user",
                    content: &request.prompt,
                }],
            };

            let response = self
                .client
                .post(&self.api_url)
                .header("x-api-key", api_key)
                .header("anthropic-version", ANTHROPIC_VERSION)
                .json(&body)
                .send()
                .await
                .map_err(|e| -> LlmError {
                    format!("messages API request failed: {e}").into()
                })?;

            let status = response.status();
            let response_text = response
                .text()
                .await
                .map_err(|e| -> LlmError {
                    format!("failed to read messages API response: {e}").into()
                })?;

            if !status.is_success() {
                let msg = serde_json::from_str::<ApiError>(&response_text)
                    .map(|e| e.error.message)
                    .unwrap_or(response_text);
                return Err(format!("messages API error ({}): {msg}", status.as_u16()).into());
            }

            parse_response(&response_text)
        })
    }
}

fn system_prompt(system: &str) -> Option<&str> {
    (!system.trim().is_empty()).then_some(system)
}

/// Joins the text blocks of a successful response body.
fn parse_response(body: &str) -> Result<CompletionResponse, LlmError> {
    let parsed: MessagesResponse = serde_json::from_str(body).map_err(|e| -> LlmError {
        format!("failed to parse messages API response: {e}").into()
    })?;

    let text = parsed
        .content
        .into_iter()
        .map(|block| block.text)
        .collect::<String>();
    if text.trim().is_empty() {
        return Err("messages API returned no text content".into());
    }

    Ok(CompletionResponse {
        text,
        prompt_tokens: parsed.usage.input_tokens,
        completion_tokens: parsed.usage.output_tokens,
    })
}
