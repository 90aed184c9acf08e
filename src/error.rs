//! Error types for the quiz engine.

use thiserror::Error;

use crate::pipeline::TaskId;

/// Process exit code for a clean run.
pub const EXIT_SUCCESS: u8 = 0;
/// Process exit code for bad configuration or arguments.
pub const EXIT_USER_ERROR: u8 = 1;
/// Process exit code when a generation call could not be completed.
pub const EXIT_GENERATION_FAILURE: u8 = 2;
/// Process exit code for cassette or terminal I/O failures.
pub const EXIT_IO_FAILURE: u8 = 3;

/// Main error type for quiz operations.
#[derive(Error, Debug)]
pub enum QuizError {
    /// A capability call failed or ran past its deadline.
    #[error("task '{task}' failed: {reason}")]
    GenerationFailure {
        /// The task whose capability call failed.
        task: TaskId,
        /// Transport, timeout or response detail.
        reason: String,
    },

    /// A task was scheduled before one of its context dependencies.
    #[error("task '{task}' needs the output of '{missing}', which has not run yet")]
    UnresolvedContext {
        /// The task that could not be prepared.
        task: TaskId,
        /// The dependency without a result.
        missing: TaskId,
    },

    /// Command-line arguments were rejected, or help/version was requested.
    #[error(transparent)]
    Usage(#[from] clap::Error),

    /// An environment setting has an invalid value.
    #[error("configuration error: {0}")]
    Config(String),

    /// A cassette could not be read, parsed or written.
    #[error("cassette error: {0}")]
    Cassette(String),

    /// Terminal I/O failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl QuizError {
    /// Returns the process exit code for this error.
    #[must_use]
    pub fn exit_code(&self) -> u8 {
        match self {
            QuizError::Usage(_) | QuizError::Config(_) => EXIT_USER_ERROR,
            QuizError::GenerationFailure { .. } | QuizError::UnresolvedContext { .. } => {
                EXIT_GENERATION_FAILURE
            }
            QuizError::Cassette(_) | QuizError::Io(_) => EXIT_IO_FAILURE,
        }
    }
}

/// Result type alias for quiz operations.
pub type Result<T> = std::result::Result<T, QuizError>;
