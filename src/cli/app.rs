//! CLI command handlers for the mininotes application
//!
//! This module is the presentation layer: it collects and validates user
//! input, calls into the note store, and renders results. Validation of
//! empty fields happens here, before the store is ever called.

use log::{debug, info};

use crate::{Commands, Config, Note, NoteError, NoteStore, Result};

/// CLI Application handler - processes CLI commands and interfaces with NoteStore
pub struct App {
    /// The note storage backend
    store: NoteStore,

    /// Application configuration
    config: Config,

    /// Whether to display verbose output
    verbose: bool,
}

impl App {
    /// Create a new CLI application with the given store and config
    pub fn new(store: NoteStore, config: Config, verbose: bool) -> Self {
        Self {
            store,
            config,
            verbose,
        }
    }

    /// Run the CLI application with the given command
    pub fn run(&self, command: Commands) -> Result<()> {
        if self.verbose {
            println!("Notes file: {}", self.config.notes_file.display());
        }

        match command {
            Commands::List { json } => self.handle_list(json),

            Commands::Add { title, description } => self.handle_add(title, description),

            Commands::Edit {
                id,
                title,
                description,
            } => self.handle_edit(id, title, description),

            Commands::Delete { id, force } => self.handle_delete(id, force),
        }
    }

    fn handle_list(&self, json: bool) -> Result<()> {
        let notes = self.store.list_notes()?;

        if json {
            println!("{}", serde_json::to_string_pretty(&notes)?);
            return Ok(());
        }

        if notes.is_empty() {
            println!("No notes found.");
            return Ok(());
        }

        for (i, note) in notes.iter().enumerate() {
            if i > 0 {
                println!("{}", "-".repeat(40));
            }

            println!("ID: {} | Saved: {}", note.id, note.timestamp);
            println!("Title: {}", console::style(&note.title).bold());
            println!("{}", note.description);
        }

        println!(
            "\nFound {} note{}",
            notes.len(),
            if notes.len() == 1 { "" } else { "s" }
        );

        Ok(())
    }

    fn handle_add(&self, title: String, description: String) -> Result<()> {
        let title = title.trim().to_string();
        let description = description.trim().to_string();
        validate_fields(&title, &description)?;

        let note = self.store.add_note(title, description)?;
        info!("Created note {}", note.id);
        println!("Note created with ID: {}", note.id);

        Ok(())
    }

    fn handle_edit(
        &self,
        id: String,
        title: Option<String>,
        description: Option<String>,
    ) -> Result<()> {
        let original = self
            .store
            .get_note(&id)?
            .ok_or(NoteError::NoteNotFound { id })?;

        // Fields not supplied keep their current value
        let new_title = title
            .map(|t| t.trim().to_string())
            .unwrap_or_else(|| original.title.clone());
        let new_description = description
            .map(|d| d.trim().to_string())
            .unwrap_or_else(|| original.description.clone());
        validate_fields(&new_title, &new_description)?;

        let updated = self.store.update_note(&original, new_title, new_description)?;
        println!("Note {} updated successfully", updated.id);

        Ok(())
    }

    fn handle_delete(&self, id: String, force: bool) -> Result<()> {
        let note = self
            .store
            .get_note(&id)?
            .ok_or(NoteError::NoteNotFound { id })?;

        if !force && !self.confirm_delete(&note)? {
            println!("Deletion cancelled.");
            return Ok(());
        }

        self.store.delete_note(&note)?;
        println!("Note '{}' ({}) has been deleted.", note.title, note.id);

        Ok(())
    }

    fn confirm_delete(&self, note: &Note) -> Result<bool> {
        println!("You are about to delete the following note:");
        println!("ID:     {}", note.id);
        println!("Title:  {}", note.title);
        println!("Saved:  {}", note.timestamp);

        debug!("Prompting for delete confirmation on {}", note.id);
        crate::confirm("Are you sure you want to delete this note?")
    }
}

/// Rejects empty title or description before any store call is made.
fn validate_fields(title: &str, description: &str) -> Result<()> {
    if title.is_empty() || description.is_empty() {
        return Err(NoteError::ValidationFailed {
            message: "title and description must not be empty".to_string(),
        });
    }

    Ok(())
}
