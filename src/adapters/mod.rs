//! Adapter implementations of the port traits.
//!
//! - `live`: real network calls
//! - `recording`: wraps another adapter and captures interactions to a cassette
//! - `replaying`: serves interactions from a cassette
//! - `offline`: canned responses for playing without network access

pub mod live;
pub mod offline;
pub mod recording;
pub mod replaying;
