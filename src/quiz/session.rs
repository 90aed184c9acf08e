//! Turn-based session state machine.
//!
//! A [`Session`] is a plain value owned by the driver. Each player input is
//! handed to [`Session::advance`], which consumes the session and returns a
//! [`TurnStream`]. Pulling the stream yields a placeholder snapshot right away
//! and the final snapshot once the pipeline call has resolved; the session is
//! then taken back with [`TurnStream::into_session`]. Since the stream owns the
//! session, a second turn cannot start while one is still in flight.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::challenge::decode;
use super::crew::Crew;
use super::render;
use super::Category;
use crate::error::QuizError;

/// Text substituted for an empty or missing player input.
pub const DEFAULT_INPUT: &str = "Let's play!";

/// Where the session is in the question/answer cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SessionStatus {
    /// No challenge outstanding.
    #[default]
    Idle,
    /// A challenge was issued and its key is held.
    WaitingForAnswer,
}

/// Status plus the hidden answer key of the outstanding challenge.
///
/// The key is readable only inside the crate, never serialized and redacted
/// from `Debug`, so snapshots can be handed to a presentation layer as is.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionState {
    status: SessionStatus,
    #[serde(skip)]
    secret_key: String,
}

impl SessionState {
    /// Current status.
    #[must_use]
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Whether an answer key is currently held.
    #[must_use]
    pub fn has_secret(&self) -> bool {
        !self.secret_key.is_empty()
    }

    pub(crate) fn secret_key(&self) -> &str {
        &self.secret_key
    }

    fn begin_challenge(&mut self, secret_key: String) {
        self.status = SessionStatus::WaitingForAnswer;
        self.secret_key = secret_key;
    }

    fn finish_challenge(&mut self) {
        self.status = SessionStatus::Idle;
        self.secret_key.clear();
    }
}

impl fmt::Debug for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionState")
            .field("status", &self.status)
            .field("secret_key", &if self.has_secret() { "<redacted>" } else { "" })
            .finish()
    }
}

/// Author of a history entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The player.
    User,
    /// The quiz.
    Assistant,
}

/// One rendered history entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Who wrote the entry.
    pub role: ChatRole,
    /// Rendered text.
    pub content: String,
}

impl ChatMessage {
    fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// A player-input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnInput {
    /// The start button.
    Start,
    /// The next-challenge button.
    Next,
    /// Free text, usually an answer letter.
    Text(String),
}

impl TurnInput {
    /// Text echoed into the history and used as the answer.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            TurnInput::Start => "Start".into(),
            TurnInput::Next => "Next".into(),
            TurnInput::Text(text) if text.trim().is_empty() => DEFAULT_INPUT.into(),
            TurnInput::Text(text) => text.trim().to_string(),
        }
    }
}

impl From<Option<&str>> for TurnInput {
    fn from(text: Option<&str>) -> Self {
        TurnInput::Text(text.unwrap_or_default().to_string())
    }
}

/// One rendering state emitted during a turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiSnapshot {
    /// Full chat history, oldest first.
    pub history: Vec<ChatMessage>,
    /// Session state after this step.
    pub state: SessionState,
    /// Whether the start button is visible.
    pub show_start: bool,
    /// Whether the next-challenge button is visible.
    pub show_next: bool,
}

impl UiSnapshot {
    /// Most recent history entry.
    #[must_use]
    pub fn latest(&self) -> Option<&ChatMessage> {
        self.history.last()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Controls {
    show_start: bool,
    show_next: bool,
}

impl Controls {
    const INITIAL: Controls = Controls {
        show_start: true,
        show_next: false,
    };
    const HIDDEN: Controls = Controls {
        show_start: false,
        show_next: false,
    };
    const NEXT: Controls = Controls {
        show_start: false,
        show_next: true,
    };
}

/// A single player's game: state, history and visible controls.
#[derive(Debug, Clone)]
pub struct Session {
    id: Uuid,
    state: SessionState,
    history: Vec<ChatMessage>,
    controls: Controls,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates an idle session with an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            state: SessionState::default(),
            history: Vec::new(),
            controls: Controls::INITIAL,
        }
    }

    /// Unique id of this session.
    #[must_use]
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Chat history so far.
    #[must_use]
    pub fn history(&self) -> &[ChatMessage] {
        &self.history
    }

    /// Snapshot of the session at rest (the last emitted state).
    #[must_use]
    pub fn snapshot(&self) -> UiSnapshot {
        UiSnapshot {
            history: self.history.clone(),
            state: self.state.clone(),
            show_start: self.controls.show_start,
            show_next: self.controls.show_next,
        }
    }

    /// Starts a turn for `input`.
    ///
    /// While idle this generates a challenge for `category` (default
    /// [`Category::Traditions`]); while waiting it judges `input` as the answer
    /// and `category` is ignored.
    #[must_use]
    pub fn advance(
        self,
        crew: &Crew,
        input: TurnInput,
        category: Option<Category>,
    ) -> TurnStream<'_> {
        let history_at_start = self.history.len();
        let controls_at_start = self.controls;
        TurnStream {
            crew,
            session: self,
            input: input.into_text(),
            category: category.unwrap_or_default(),
            step: Step::Placeholder,
            history_at_start,
            controls_at_start,
        }
    }

    fn emit(&mut self, controls: Controls) -> UiSnapshot {
        self.controls = controls;
        self.snapshot()
    }

    fn replace_latest(&mut self, message: ChatMessage) {
        match self.history.last_mut() {
            Some(last) => *last = message,
            None => self.history.push(message),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Placeholder,
    Resolve,
    Done,
}

/// The snapshots of one turn, produced on demand.
pub struct TurnStream<'c> {
    crew: &'c Crew,
    session: Session,
    input: String,
    category: Category,
    step: Step,
    history_at_start: usize,
    controls_at_start: Controls,
}

impl TurnStream<'_> {
    /// Produces the next snapshot, or `None` once the turn is complete.
    ///
    /// The first call returns the placeholder without touching the pipeline;
    /// the second awaits the pipeline and returns the result (or a failure
    /// card, leaving the status unchanged).
    pub async fn next(&mut self) -> Option<UiSnapshot> {
        match self.step {
            Step::Placeholder => {
                self.step = Step::Resolve;
                Some(self.placeholder())
            }
            Step::Resolve => {
                let snapshot = match self.session.state.status {
                    SessionStatus::Idle => self.resolve_challenge().await,
                    SessionStatus::WaitingForAnswer => self.resolve_answer().await,
                };
                // Only a resolved turn is done; a future dropped mid-await stays in Resolve.
                self.step = Step::Done;
                Some(snapshot)
            }
            Step::Done => None,
        }
    }

    /// Whether every snapshot of this turn has been produced.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.step == Step::Done
    }

    /// Drains the remaining snapshots and returns them with the session.
    pub async fn collect(mut self) -> (Vec<UiSnapshot>, Session) {
        let mut snapshots = Vec::new();
        while let Some(snapshot) = self.next().await {
            snapshots.push(snapshot);
        }
        (snapshots, self.session)
    }

    /// Returns the session.
    ///
    /// A turn abandoned after its placeholder (including one whose pending
    /// `next` future was dropped) has its placeholder entries removed; state
    /// is only changed by a completed turn.
    #[must_use]
    pub fn into_session(mut self) -> Session {
        if self.step == Step::Resolve {
            self.session.history.truncate(self.history_at_start);
            self.session.controls = self.controls_at_start;
        }
        self.session
    }

    fn placeholder(&mut self) -> UiSnapshot {
        let marker = match self.session.state.status {
            SessionStatus::Idle => render::researching(self.category),
            SessionStatus::WaitingForAnswer => render::judging(),
        };
        self.session.history.push(ChatMessage::user(self.input.clone()));
        self.session.history.push(ChatMessage::assistant(marker));
        self.session.emit(Controls::HIDDEN)
    }

    async fn resolve_challenge(&mut self) -> UiSnapshot {
        match self.crew.generate_challenge(self.category).await {
            Ok(raw) => {
                let record = decode(&raw);
                self.session.replace_latest(ChatMessage::assistant(render::question_card(
                    &record.public_question,
                )));
                self.session.state.begin_challenge(record.secret_key);
                self.session.emit(Controls::HIDDEN)
            }
            Err(err) => self.fail(&err, Controls::INITIAL),
        }
    }

    async fn resolve_answer(&mut self) -> UiSnapshot {
        let verdict = self.crew.judge_answer(&self.input, self.session.state.secret_key()).await;
        match verdict {
            Ok(verdict) => {
                self.session.replace_latest(ChatMessage::assistant(render::verdict_card(&verdict)));
                self.session.state.finish_challenge();
                self.session.emit(Controls::NEXT)
            }
            Err(err) => self.fail(&err, Controls::HIDDEN),
        }
    }

    fn fail(&mut self, err: &QuizError, controls: Controls) -> UiSnapshot {
        self.session.replace_latest(ChatMessage::assistant(render::failure_card(err)));
        self.session.emit(controls)
    }
}
