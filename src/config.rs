//! Environment-driven settings.
//!
//! `main` loads a `.env` file (if any) before these are read, so every value
//! can come from either the process environment or that file.

use std::env;
use std::time::Duration;

use crate::error::{QuizError, Result};

/// Default model identifier for generation calls.
pub const DEFAULT_MODEL: &str = "claude-sonnet-4-20250514";
/// Default messages endpoint.
pub const DEFAULT_API_URL: &str = "https://api.anthropic.com/v1/messages";
/// Default completion budget per generation call.
pub const DEFAULT_MAX_TOKENS: u32 = 1024;
/// Default sampling temperature.
pub const DEFAULT_TEMPERATURE: f32 = 0.7;
/// Default deadline for a single generation call, in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Generation and transport settings shared by every capability binding.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    /// Model identifier sent with every request.
    pub model: String,
    /// Messages endpoint for the live client.
    pub api_url: String,
    /// API key; only required once a live call is made.
    pub api_key: Option<String>,
    /// Completion budget per call.
    pub max_tokens: u32,
    /// Sampling temperature in `0.0..=1.0`.
    pub temperature: f32,
    /// Deadline applied to each generation call.
    pub generation_timeout: Duration,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.into(),
            api_url: DEFAULT_API_URL.into(),
            api_key: None,
            max_tokens: DEFAULT_MAX_TOKENS,
            temperature: DEFAULT_TEMPERATURE,
            generation_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Settings {
    /// Reads settings from the process environment.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::Config`] if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads settings through `lookup`, falling back to defaults for unset keys.
    ///
    /// # Errors
    ///
    /// Returns [`QuizError::Config`] if a value cannot be parsed or is out of range.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        let max_tokens = match get("WORKSHOP_MAX_TOKENS") {
            Some(raw) => parse_number::<u32>("WORKSHOP_MAX_TOKENS", &raw)?,
            None => defaults.max_tokens,
        };
        if max_tokens == 0 {
            return Err(QuizError::Config("WORKSHOP_MAX_TOKENS must be greater than 0".into()));
        }

        let temperature = match get("WORKSHOP_TEMPERATURE") {
            Some(raw) => parse_number::<f32>("WORKSHOP_TEMPERATURE", &raw)?,
            None => defaults.temperature,
        };
        if !(0.0..=1.0).contains(&temperature) {
            return Err(QuizError::Config(format!(
                "WORKSHOP_TEMPERATURE must be between 0.0 and 1.0, got {temperature}"
            )));
        }

        let timeout_secs = match get("WORKSHOP_TIMEOUT_SECS") {
            Some(raw) => parse_number::<u64>("WORKSHOP_TIMEOUT_SECS", &raw)?,
            None => defaults.generation_timeout.as_secs(),
        };
        if timeout_secs == 0 {
            return Err(QuizError::Config("WORKSHOP_TIMEOUT_SECS must be greater than 0".into()));
        }

        Ok(Self {
            model: get("WORKSHOP_MODEL").unwrap_or(defaults.model),
            api_url: get("WORKSHOP_API_URL").unwrap_or(defaults.api_url),
            api_key: get("ANTHROPIC_API_KEY"),
            max_tokens,
            temperature,
            generation_timeout: Duration::from_secs(timeout_secs),
        })
    }
}

fn parse_number<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T> {
    raw.parse::<T>()
        .map_err(|_| QuizError::Config(format!("{key} has invalid value '{raw}'")))
}
