//! Capability bindings: a persona paired with a text-generation client.

use std::fmt;
use std::sync::Arc;

use crate::config::Settings;
use crate::ports::llm::{CompletionRequest, LlmClient, LlmError};

/// Identity of a generation capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Persona {
    /// Who the model plays (e.g. "Santa Claus").
    pub role: String,
    /// What the persona is trying to achieve.
    pub goal: String,
    /// Background that shapes the persona's voice.
    pub backstory: String,
}

impl Persona {
    /// Creates a persona.
    pub fn new(
        role: impl Into<String>,
        goal: impl Into<String>,
        backstory: impl Into<String>,
    ) -> Self {
        Self {
            role: role.into(),
            goal: goal.into(),
            backstory: backstory.into(),
        }
    }

    /// System prompt carrying role, backstory and goal.
    #[must_use]
    pub fn system_prompt(&self) -> String {
        format!(
            "You are {}. {}\nYour personal goal is: {}",
            self.role, self.backstory, self.goal
        )
    }
}

/// A persona bound to a generation client and its sampling parameters.
///
/// Immutable once built; pipelines share bindings through `Arc`.
pub struct CapabilityBinding {
    persona: Persona,
    llm: Arc<dyn LlmClient>,
    model: String,
    max_tokens: u32,
    temperature: f32,
}

impl CapabilityBinding {
    /// Binds `persona` to `llm` using the model parameters in `settings`.
    pub fn new(persona: Persona, llm: Arc<dyn LlmClient>, settings: &Settings) -> Self {
        Self {
            persona,
            llm,
            model: settings.model.clone(),
            max_tokens: settings.max_tokens,
            temperature: settings.temperature,
        }
    }

    /// The bound persona.
    #[must_use]
    pub fn persona(&self) -> &Persona {
        &self.persona
    }

    /// Builds the completion request for `prompt`.
    #[must_use]
    pub fn request_for(&self, prompt: &str) -> CompletionRequest {
        CompletionRequest {
            model: self.model.clone(),
            system: self.persona.system_prompt(),
            prompt: prompt.to_string(),
            max_tokens: self.max_tokens,
            temperature: self.temperature,
        }
    }

    /// Generates text for `prompt` in this persona's voice.
    ///
    /// # Errors
    ///
    /// Returns the client's error unchanged; callers attach task identity.
    pub async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        let response = self.llm.complete(&self.request_for(prompt)).await?;
        Ok(response.text)
    }
}

impl fmt::Debug for CapabilityBinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CapabilityBinding")
            .field("persona", &self.persona)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .field("temperature", &self.temperature)
            .finish_non_exhaustive()
    }
}
