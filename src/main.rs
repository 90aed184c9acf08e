//! Binary entrypoint for the `workshop` CLI.

use std::process::ExitCode;

use workshop::error::{QuizError, EXIT_SUCCESS};

fn main() -> ExitCode {
    if let Err(err) = dotenvy::dotenv() {
        if !err.not_found() {
            eprintln!("Warning: failed to load .env: {err}");
        }
    }

    // Recording is handled in commands::dispatch via WORKSHOP_RECORD=<dir>.
    match workshop::run(std::env::args_os()) {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        // clap prints help/version to stdout and usage errors to stderr itself.
        Err(QuizError::Usage(err)) => err.exit(),
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
