//! The three quiz personas and the two fixed pipelines built from them.

use std::sync::Arc;

use super::challenge::DELIMITER;
use super::Category;
use crate::config::Settings;
use crate::error::Result;
use crate::pipeline::{CapabilityBinding, Persona, PipelineExecutor, TaskSpec};
use crate::ports::llm::LlmClient;

/// Researcher persona: digs up one fact per category.
#[must_use]
pub fn researcher() -> Persona {
    Persona::new(
        "Christmas Folklore Historian",
        "Discover obscure Christmas facts based on a category.",
        "You are an expert in global traditions.",
    )
}

/// Host persona: turns a fact into a multiple-choice question.
#[must_use]
pub fn host() -> Persona {
    Persona::new(
        "Head Elf of Entertainment",
        format!("Turn facts into a festive MCQ with a {DELIMITER} separator."),
        "You are a high-energy game show host elf.",
    )
}

/// Judge persona: checks the player's answer against the key.
#[must_use]
pub fn judge() -> Persona {
    Persona::new(
        "Santa Claus",
        "Validate answers and spread Christmas cheer.",
        "You are Santa. You check the Nice List.",
    )
}

/// Pipeline configuration: one shared binding per persona and the executor
/// that runs their tasks.
#[derive(Debug, Clone)]
pub struct Crew {
    researcher: Arc<CapabilityBinding>,
    host: Arc<CapabilityBinding>,
    judge: Arc<CapabilityBinding>,
    executor: PipelineExecutor,
}

impl Crew {
    /// Binds all three personas to `llm` with the parameters in `settings`.
    pub fn new(llm: &Arc<dyn LlmClient>, settings: &Settings) -> Self {
        let bind = |persona| Arc::new(CapabilityBinding::new(persona, Arc::clone(llm), settings));
        Self {
            researcher: bind(researcher()),
            host: bind(host()),
            judge: bind(judge()),
            executor: PipelineExecutor::new(settings.generation_timeout),
        }
    }

    /// Two-task chain: research a fact, then format it as a delimited question.
    #[must_use]
    pub fn challenge_tasks(&self, category: Category) -> Vec<TaskSpec> {
        let research = TaskSpec::new(
            "research",
            format!("Find one specific Christmas fact about {category}."),
            "A summary.",
            Arc::clone(&self.researcher),
        );
        let format = TaskSpec::new(
            "format",
            format!(
                "Create MCQ. Format:\n[Question]: \n\nA)\nB)\nC)\nD)\n\n{DELIMITER} [Answer Letter]: [Fact]\n"
            ),
            format!("Question block separated by {DELIMITER}"),
            Arc::clone(&self.host),
        )
        .with_context(&research.id);

        vec![research, format]
    }

    /// Single task: judge `answer` against the stored `secret_key`.
    #[must_use]
    pub fn judge_tasks(&self, answer: &str, secret_key: &str) -> Vec<TaskSpec> {
        vec![TaskSpec::new(
            "judge",
            format!("User answered '{answer}'. Truth is '{secret_key}'. Reply as Santa."),
            "Santa's response.",
            Arc::clone(&self.judge),
        )]
    }

    /// Runs the challenge pipeline and returns the raw delimited text.
    ///
    /// # Errors
    ///
    /// Propagates the executor's error; see [`PipelineExecutor::run`].
    pub async fn generate_challenge(&self, category: Category) -> Result<String> {
        self.executor.run(&self.challenge_tasks(category)).await
    }

    /// Runs the judging pipeline and returns Santa's verdict.
    ///
    /// # Errors
    ///
    /// Propagates the executor's error; see [`PipelineExecutor::run`].
    pub async fn judge_answer(&self, answer: &str, secret_key: &str) -> Result<String> {
        self.executor.run(&self.judge_tasks(answer, secret_key)).await
    }
}
