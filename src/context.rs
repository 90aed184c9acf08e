//! Service context bundling the generation port with its settings.

use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::adapters::live::LiveLlmClient;
use crate::adapters::offline::OfflineLlmClient;
use crate::adapters::recording::RecordingLlmClient;
use crate::adapters::replaying::ReplayingLlmClient;
use crate::cassette::format::Cassette;
use crate::cassette::replayer::CassetteReplayer;
use crate::cassette::session::RecordingSession;
use crate::config::Settings;
use crate::error::Result;
use crate::ports::llm::LlmClient;
use crate::quiz::Crew;

/// Bundles the LLM port and the settings the crew is built with.
///
/// Constructors wire up different adapter implementations (live, offline,
/// recording, replaying).
pub struct ServiceContext {
    /// LLM client shared by every capability binding.
    pub llm: Arc<dyn LlmClient>,
    /// Generation settings.
    pub settings: Settings,
}

impl ServiceContext {
    /// Creates a live context that calls the messages API.
    #[must_use]
    pub fn live(settings: Settings) -> Self {
        Self {
            llm: Arc::new(LiveLlmClient::new(&settings)),
            settings,
        }
    }

    /// Creates a context served by canned offline content.
    #[must_use]
    pub fn offline(settings: Settings) -> Self {
        Self {
            llm: Arc::new(OfflineLlmClient::new()),
            settings,
        }
    }

    /// Wraps `inner`'s client so every call is captured into a new recording
    /// session below `dir`.
    ///
    /// The returned session must be finished after this context (and every
    /// crew built from it) has been dropped. This is the developer-only
    /// mechanism for capturing cassettes via the `WORKSHOP_RECORD` env var.
    ///
    /// # Errors
    ///
    /// Returns an error if the recording directory cannot be created.
    pub fn recording_at(inner: ServiceContext, dir: &Path) -> Result<(Self, RecordingSession)> {
        let session = RecordingSession::at(dir, &inner.settings.model)?;
        let llm = RecordingLlmClient::new(inner.llm, Arc::clone(&session.llm));
        let ctx = Self {
            llm: Arc::new(llm),
            settings: inner.settings,
        };
        Ok((ctx, session))
    }

    /// Creates a context that replays LLM interactions from a cassette file.
    ///
    /// # Errors
    ///
    /// Returns an error if the cassette file cannot be read or parsed.
    pub fn replaying(path: &Path, settings: Settings) -> Result<Self> {
        let cassette = Cassette::load(path)?;
        let replayer = CassetteReplayer::new(&cassette);
        Ok(Self {
            llm: Arc::new(ReplayingLlmClient::new(Arc::new(Mutex::new(replayer)))),
            settings,
        })
    }

    /// Builds the quiz crew on top of this context.
    #[must_use]
    pub fn crew(&self) -> Crew {
        Crew::new(&self.llm, &self.settings)
    }
}
