//! Recording session that captures generation calls to a cassette directory.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use chrono::Utc;

use super::recorder::CassetteRecorder;
use crate::error::{QuizError, Result};

/// File name of the LLM cassette inside a recording directory.
pub const LLM_CASSETTE_FILE: &str = "llm.cassette.yaml";

/// Owns the recorder for one recording run.
///
/// Cassettes are stored in a timestamped directory below the base directory
/// given to [`RecordingSession::at`].
pub struct RecordingSession {
    /// Recorder for LLM interactions.
    pub llm: Arc<Mutex<CassetteRecorder>>,
    output_dir: PathBuf,
}

impl RecordingSession {
    /// Create a recording session in `<base>/<timestamp>/`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The timestamped directory already exists
    /// - The directory cannot be created
    pub fn at(base: &Path, model: &str) -> Result<Self> {
        let timestamp = Utc::now().format("%Y-%m-%dT%H-%M-%S").to_string();
        let output_dir = base.join(&timestamp);

        if output_dir.exists() {
            return Err(QuizError::Cassette(format!(
                "cassette directory already exists: {}",
                output_dir.display()
            )));
        }

        std::fs::create_dir_all(&output_dir).map_err(|e| {
            QuizError::Cassette(format!(
                "failed to create cassette directory {}: {e}",
                output_dir.display()
            ))
        })?;

        let recorder = CassetteRecorder::new(
            output_dir.join(LLM_CASSETTE_FILE),
            format!("{timestamp}-llm"),
            model,
        );

        Ok(Self {
            llm: Arc::new(Mutex::new(recorder)),
            output_dir,
        })
    }

    /// Finish the recorder and write the cassette to disk.
    ///
    /// Every recording adapter holding the recorder must be dropped first.
    ///
    /// # Errors
    ///
    /// Returns an error if the recorder is still shared or the file cannot be written.
    pub fn finish(self) -> Result<PathBuf> {
        let recorder = Arc::try_unwrap(self.llm)
            .map_err(|_| {
                QuizError::Cassette("recording adapter for llm still has references".into())
            })?
            .into_inner()
            .map_err(|e| QuizError::Cassette(format!("recorder lock for llm poisoned: {e}")))?;
        recorder
            .finish()
            .map_err(|e| QuizError::Cassette(format!("failed to write llm cassette: {e}")))?;

        Ok(self.output_dir)
    }
}
