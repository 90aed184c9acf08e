//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::quiz::Category;

/// Top-level CLI parser for `workshop`.
#[derive(Debug, Parser)]
#[command(name = "workshop", version, about = "Play the Christmas Workshop quiz")]
pub struct Cli {
    /// The command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported top-level subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Play the quiz in the terminal.
    Play {
        /// Category to draw challenges from (Traditions, Food, Clothing, Myths, Music).
        #[arg(long, short, default_value_t = Category::Traditions)]
        category: Category,
        /// Use canned offline content instead of the messages API.
        #[arg(long, conflicts_with = "cassette")]
        offline: bool,
        /// Replay generation calls from a recorded cassette file.
        #[arg(long, value_name = "PATH")]
        cassette: Option<PathBuf>,
    },
    /// List the available categories.
    Categories,
}
