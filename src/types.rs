//! Shared types for the mininotes application.

use clap::Subcommand;

use crate::NoteError;

/// A specialized Result type for mininotes operations.
pub type Result<T> = std::result::Result<T, NoteError>;

/// Available subcommands for the mininotes application
#[derive(Subcommand)]
pub enum Commands {
    /// List all notes
    List {
        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Add a new note
    Add {
        /// Title of the note
        #[clap(short = 'T', long)]
        title: String,

        /// Body text of the note
        #[clap(short, long)]
        description: String,
    },

    /// Edit an existing note
    Edit {
        /// ID of the note to edit
        id: String,

        /// New title (keeps the current title when omitted)
        #[clap(short = 'T', long)]
        title: Option<String>,

        /// New body text (keeps the current text when omitted)
        #[clap(short, long)]
        description: Option<String>,
    },

    /// Delete a note by ID
    Delete {
        /// ID of the note to delete
        id: String,

        /// Skip confirmation prompt
        #[clap(short, long)]
        force: bool,
    },
}
