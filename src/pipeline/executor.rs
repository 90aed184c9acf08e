//! Sequential pipeline execution.

use std::collections::HashMap;
use std::time::Duration;

use super::task::{TaskId, TaskResult, TaskSpec};
use crate::error::{QuizError, Result};

/// Results gathered while a pipeline runs, keyed by task id.
///
/// Lives for one [`PipelineExecutor::run`] call and is dropped afterwards,
/// including when the run fails part way.
#[derive(Debug, Default)]
struct PipelineRun {
    results: HashMap<TaskId, TaskResult>,
    last: Option<TaskId>,
}

impl PipelineRun {
    fn context_for<'a>(&'a self, task: &TaskSpec) -> Result<Vec<&'a TaskResult>> {
        task.context
            .iter()
            .map(|dep| {
                self.results.get(dep).ok_or_else(|| QuizError::UnresolvedContext {
                    task: task.id.clone(),
                    missing: dep.clone(),
                })
            })
            .collect()
    }

    fn insert(&mut self, result: TaskResult) {
        self.last = Some(result.task.clone());
        self.results.insert(result.task.clone(), result);
    }

    fn into_final_text(mut self) -> String {
        self.last
            .and_then(|id| self.results.remove(&id))
            .map(|r| r.text)
            .unwrap_or_default()
    }
}

/// Runs task lists in order, one generation call per task.
#[derive(Debug, Clone, Copy)]
pub struct PipelineExecutor {
    deadline: Duration,
}

impl PipelineExecutor {
    /// Creates an executor that gives each generation call at most `deadline`.
    #[must_use]
    pub fn new(deadline: Duration) -> Self {
        Self { deadline }
    }

    /// Runs `tasks` in the given order and returns the last task's output.
    ///
    /// `tasks` must already be in dependency order; the executor does not sort.
    /// An empty list yields an empty string.
    ///
    /// # Errors
    ///
    /// - [`QuizError::GenerationFailure`] if a capability call fails or exceeds
    ///   the deadline; the failing task is named and no retry is made.
    /// - [`QuizError::UnresolvedContext`] if a task names a dependency that has
    ///   not run before it.
    pub async fn run(&self, tasks: &[TaskSpec]) -> Result<String> {
        let mut run = PipelineRun::default();

        for task in tasks {
            let prompt = task.effective_prompt(&run.context_for(task)?);
            let text = self.invoke(task, &prompt).await?;
            run.insert(TaskResult {
                task: task.id.clone(),
                text,
            });
        }

        Ok(run.into_final_text())
    }

    async fn invoke(&self, task: &TaskSpec, prompt: &str) -> Result<String> {
        match tokio::time::timeout(self.deadline, task.binding.generate(prompt)).await {
            Ok(Ok(text)) => Ok(text),
            Ok(Err(e)) => Err(QuizError::GenerationFailure {
                task: task.id.clone(),
                reason: e.to_string(),
            }),
            Err(_) => Err(QuizError::GenerationFailure {
                task: task.id.clone(),
                reason: format!("no response within {}s", self.deadline.as_secs_f32()),
            }),
        }
    }
}
