//! The holiday quiz: categories, the answer-key codec, the crew of personas,
//! card rendering and the turn-based session machine.

pub mod category;
pub mod challenge;
pub mod crew;
pub mod render;
pub mod session;

pub use category::Category;
pub use challenge::{decode, ChallengeRecord};
pub use crew::Crew;
pub use session::{
    ChatMessage, ChatRole, Session, SessionState, SessionStatus, TurnInput, TurnStream, UiSnapshot,
};
