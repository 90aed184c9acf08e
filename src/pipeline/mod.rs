//! Dependency-ordered task pipeline.
//!
//! A pipeline is an ordered list of [`TaskSpec`]s. Each task is bound to a
//! [`CapabilityBinding`] (a persona plus a generation client) and may name
//! earlier tasks as context; their outputs are spliced into its prompt.
//! [`PipelineExecutor::run`] returns the output of the last task.

pub mod binding;
pub mod executor;
pub mod task;

pub use binding::{CapabilityBinding, Persona};
pub use executor::PipelineExecutor;
pub use task::{TaskId, TaskResult, TaskSpec};
