use std::path::PathBuf;

use clap::Parser;

use crate::Commands;

/// Main CLI application arguments and command structure
#[derive(Parser)]
#[clap(version, about = "Minimal local note-taking application")]
pub struct Cli {
    /// Path to the notes file (defaults to the platform data directory)
    #[clap(long, value_parser)]
    pub notes_file: Option<PathBuf>,

    /// Verbose output mode
    #[clap(short, long)]
    pub verbose: bool,

    /// Subcommands for the mininotes application
    #[clap(subcommand)]
    pub command: Commands,
}
