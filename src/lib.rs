//! Minimal note-taking application library
//!
//! This library provides the persistence layer for short text notes: a
//! `NoteStore` offering list, add, update, and delete over a pluggable
//! storage backend, plus the record codec shared with the legacy format.

mod backend;
mod cli;
mod config;
mod errors;
mod helper;
mod note;
mod store;
mod types;

// Re-export key components
pub use backend::*;
pub use cli::*;
pub use config::*;
pub use errors::*;
pub use helper::*;
pub use note::*;
pub use store::*;
pub use types::*;
