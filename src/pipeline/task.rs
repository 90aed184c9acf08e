//! Task specifications and results.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::binding::CapabilityBinding;

/// Identity of a task within one pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaskId(String);

impl TaskId {
    /// Creates a task id.
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The id as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One step of a pipeline.
#[derive(Debug, Clone)]
pub struct TaskSpec {
    /// Identity used for context references and error reporting.
    pub id: TaskId,
    /// Instruction given to the capability.
    pub description: String,
    /// Hint describing the expected shape of the answer.
    pub expected_output: String,
    /// Capability that executes this task.
    pub binding: Arc<CapabilityBinding>,
    /// Earlier tasks whose output is injected into this task's prompt, in order.
    pub context: Vec<TaskId>,
}

impl TaskSpec {
    /// Creates a task with no context dependencies.
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        expected_output: impl Into<String>,
        binding: Arc<CapabilityBinding>,
    ) -> Self {
        Self {
            id: TaskId::new(id),
            description: description.into(),
            expected_output: expected_output.into(),
            binding,
            context: Vec::new(),
        }
    }

    /// Declares `dependency` as context for this task.
    #[must_use]
    pub fn with_context(mut self, dependency: &TaskId) -> Self {
        self.context.push(dependency.clone());
        self
    }

    /// Builds the prompt sent to the capability.
    ///
    /// Context outputs come first and the task's own instruction last, so the
    /// instruction is the most recent thing the model reads.
    #[must_use]
    pub fn effective_prompt(&self, context: &[&TaskResult]) -> String {
        let mut prompt = String::new();
        if !context.is_empty() {
            prompt.push_str("This is the context you're working with:\n");
            for result in context {
                prompt.push_str(&result.text);
                prompt.push_str("\n\n");
            }
            prompt.push_str("---\n\n");
        }
        prompt.push_str(self.description.trim());
        if !self.expected_output.trim().is_empty() {
            prompt.push_str("\n\nThis is the expected criteria for your final answer: ");
            prompt.push_str(self.expected_output.trim());
        }
        prompt
    }
}

/// Output of one executed task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskResult {
    /// The task that produced this output.
    pub task: TaskId,
    /// Generated text.
    pub text: String,
}
