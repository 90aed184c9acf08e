//! Core library entry for the `workshop` quiz.
//!
//! A three-stage generation pipeline (research → format → judge) driven by a
//! two-state session machine that streams UI snapshots to its driver.

pub mod adapters;
pub mod cassette;
pub mod cli;
pub mod commands;
pub mod config;
pub mod context;
pub mod error;
pub mod pipeline;
pub mod ports;
pub mod quiz;

#[cfg(test)]
mod test_support;

use clap::Parser;

use crate::error::Result;

/// Run the CLI with the provided arguments.
///
/// # Errors
///
/// Returns [`error::QuizError::Usage`] when argument parsing fails (including
/// `--help` and `--version`, which clap reports as errors), or the command's
/// own error.
pub fn run<I, T>(args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    let cli = cli::Cli::try_parse_from(args)?;
    commands::dispatch(&cli.command)
}
