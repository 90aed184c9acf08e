//! Command dispatch and handlers.

pub mod categories;
pub mod play;

use std::env;
use std::io;
use std::path::PathBuf;

use crate::cassette::session::RecordingSession;
use crate::cli::Command;
use crate::config::Settings;
use crate::context::ServiceContext;
use crate::error::Result;

/// Dispatch a parsed command to its handler.
///
/// When `WORKSHOP_RECORD` is set to a directory path, all generation calls
/// are recorded to a cassette in a timestamped directory below it.
///
/// # Errors
///
/// Returns an error if configuration is invalid or the selected handler fails.
pub fn dispatch(command: &Command) -> Result<()> {
    match command {
        Command::Categories => categories::run(&mut io::stdout().lock()),
        Command::Play {
            category,
            offline,
            cassette,
        } => {
            let settings = Settings::from_env()?;
            let ctx = match cassette {
                Some(path) => ServiceContext::replaying(path, settings)?,
                None if *offline => ServiceContext::offline(settings),
                None => ServiceContext::live(settings),
            };

            let (ctx, session) = match env::var("WORKSHOP_RECORD") {
                Ok(dir) if !dir.trim().is_empty() => {
                    let (ctx, session) = ServiceContext::recording_at(ctx, &PathBuf::from(dir))?;
                    (ctx, Some(session))
                }
                _ => (ctx, None),
            };

            let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
            let result = runtime.block_on(play::run(
                &ctx,
                *category,
                io::stdin().lock(),
                io::stdout().lock(),
            ));

            // Drop context first to release Arc references
            drop(ctx);
            finish_recording(session);
            result
        }
    }
}

/// Finish a recording session, if any, and print the output directory.
///
/// Runs after the game ends (even on error); a failed write is only a warning
/// so the game's own outcome is what the caller reports.
fn finish_recording(session: Option<RecordingSession>) -> Option<PathBuf> {
    match session?.finish() {
        Ok(output_dir) => {
            eprintln!("Recording saved to: {}", output_dir.display());
            Some(output_dir)
        }
        Err(err) => {
            eprintln!("Warning: failed to save recording: {err}");
            None
        }
    }
}
