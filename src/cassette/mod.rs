//! Cassette format for recording and replaying generation calls.

pub mod format;
pub mod recorder;
pub mod replayer;
pub mod session;
