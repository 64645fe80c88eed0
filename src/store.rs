//! Manages the storage and retrieval of notes.
//!
//! `NoteStore` is stateless between calls: every operation re-reads the full
//! record set from the backend, applies its change, and writes the full set
//! back. There is no cache, no background work, and no atomicity beyond what
//! the backend's own write provides.

use std::collections::HashSet;

use log::{debug, info, warn};

use crate::{Note, Result, StorageBackend};

/// Persistence layer for the note collection.
pub struct NoteStore {
    /// Durable storage for the record set, injected at construction
    backend: Box<dyn StorageBackend>,
}

impl NoteStore {
    /// Creates a store over the given backend.
    pub fn new(backend: Box<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Reads all notes from the backend.
    ///
    /// Records that parse as neither the structured nor the legacy format
    /// are skipped without surfacing an error, so one corrupt record cannot
    /// block the whole list. No ordering guarantee.
    pub fn list_notes(&self) -> Result<Vec<Note>> {
        let records = self.backend.load()?;
        let total = records.len();

        let notes: Vec<Note> = records
            .iter()
            .filter_map(|record| Note::from_record(record))
            .collect();

        if notes.len() < total {
            warn!(
                "Skipped {} unparseable record(s) while listing notes",
                total - notes.len()
            );
        }

        debug!("Listed {} of {} stored records", notes.len(), total);
        Ok(notes)
    }

    /// Looks up a single note by id.
    pub fn get_note(&self, id: &str) -> Result<Option<Note>> {
        Ok(self.list_notes()?.into_iter().find(|note| note.id == id))
    }

    /// Creates a note stamped with the current local time and persists it.
    ///
    /// Non-empty title and description are a caller-side precondition; the
    /// store accepts any strings it is given.
    pub fn add_note(&self, title: String, description: String) -> Result<Note> {
        let note = Note::new(title, description);
        let record = note.to_record()?;

        let mut records = self.backend.load()?;
        records.insert(record);
        self.backend.save(&records)?;

        info!("Added note {}", note.id);
        Ok(note)
    }

    /// Removes the record matching the note's identity and persists.
    ///
    /// A no-op (not an error) if no matching record exists, so deleting the
    /// same note twice is safe.
    pub fn delete_note(&self, note: &Note) -> Result<()> {
        let mut records = self.backend.load()?;

        if remove_matching(&mut records, &note.id) {
            self.backend.save(&records)?;
            info!("Deleted note {}", note.id);
        } else {
            debug!("Delete of {} matched no stored record", note.id);
        }

        Ok(())
    }

    /// Replaces a note's content, stamping the result with a fresh save time.
    ///
    /// The updated note keeps the original's identity (legacy originals are
    /// promoted to the structured format under a fresh id). If the original
    /// is no longer present its removal is a no-op and the updated note is
    /// inserted anyway, so the net effect degrades to an add.
    pub fn update_note(
        &self,
        original: &Note,
        new_title: String,
        new_description: String,
    ) -> Result<Note> {
        let updated = original.with_content(new_title, new_description);
        let record = updated.to_record()?;

        let mut records = self.backend.load()?;
        if !remove_matching(&mut records, &original.id) {
            debug!("Update of {} matched no stored record", original.id);
        }
        records.insert(record);
        self.backend.save(&records)?;

        info!("Updated note {} -> {}", original.id, updated.id);
        Ok(updated)
    }
}

/// Removes every record whose parsed identity matches `id`.
///
/// Unparseable records are left untouched: the lenient read policy must not
/// turn a mutation into silent data loss for records we cannot interpret.
fn remove_matching(records: &mut HashSet<String>, id: &str) -> bool {
    let before = records.len();
    records.retain(|record| Note::from_record(record).map_or(true, |note| note.id != id));
    records.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{serialize_legacy, MemoryBackend};

    fn memory_store() -> NoteStore {
        NoteStore::new(Box::new(MemoryBackend::new()))
    }

    fn store_with_records(records: &[&str]) -> NoteStore {
        NoteStore::new(Box::new(MemoryBackend::with_records(
            records.iter().map(|r| r.to_string()),
        )))
    }

    #[test]
    fn add_then_list() {
        let store = memory_store();
        store.add_note("A".to_string(), "B".to_string()).unwrap();

        let notes = store.list_notes().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "A");
        assert_eq!(notes[0].description, "B");
        assert_eq!(notes[0].timestamp.len(), 16);
    }

    #[test]
    fn delete_then_list() {
        let store = memory_store();
        let note = store.add_note("A".to_string(), "B".to_string()).unwrap();

        store.delete_note(&note).unwrap();

        assert!(store
            .list_notes()
            .unwrap()
            .iter()
            .all(|n| !(n.title == "A" && n.description == "B")));
    }

    #[test]
    fn delete_is_idempotent() {
        let store = memory_store();
        let note = store.add_note("A".to_string(), "B".to_string()).unwrap();

        store.delete_note(&note).unwrap();
        store.delete_note(&note).unwrap();

        assert!(store.list_notes().unwrap().is_empty());
    }

    #[test]
    fn update_replaces_content_and_keeps_id() {
        let store = memory_store();
        let note = store.add_note("A".to_string(), "B".to_string()).unwrap();

        let updated = store
            .update_note(&note, "A2".to_string(), "B2".to_string())
            .unwrap();

        assert_eq!(updated.id, note.id);

        let notes = store.list_notes().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "A2");
        assert!(notes.iter().all(|n| n.title != "A"));
    }

    #[test]
    fn update_on_absent_original_is_an_insert() {
        let store = memory_store();
        let orphan = Note::new("gone".to_string(), "gone".to_string());

        store
            .update_note(&orphan, "A2".to_string(), "B2".to_string())
            .unwrap();

        let notes = store.list_notes().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "A2");
    }

    #[test]
    fn unparseable_records_are_skipped_when_listing() {
        let store = store_with_records(&["", "only title", "a|b", "a|b|c|d", "{broken"]);

        assert!(store.list_notes().unwrap().is_empty());
    }

    #[test]
    fn mutations_preserve_unparseable_records() {
        let backend = std::sync::Arc::new(MemoryBackend::with_records(
            ["a|b|c|d".to_string()],
        ));
        let store = NoteStore::new(Box::new(std::sync::Arc::clone(&backend)));

        let note = store.add_note("A".to_string(), "B".to_string()).unwrap();
        store.delete_note(&note).unwrap();

        // The corrupt record is invisible to listing but must survive the
        // read-modify-write cycle.
        assert!(store.list_notes().unwrap().is_empty());
        assert!(backend.load().unwrap().contains("a|b|c|d"));
    }

    #[test]
    fn legacy_record_is_listed_and_deletable() {
        let record = serialize_legacy("Groceries", "milk", "2026-08-26 09:15");
        let store = store_with_records(&[&record]);

        let notes = store.list_notes().unwrap();
        assert_eq!(notes.len(), 1);
        assert!(notes[0].is_legacy());
        assert_eq!(notes[0].title, "Groceries");

        store.delete_note(&notes[0]).unwrap();
        assert!(store.list_notes().unwrap().is_empty());
    }

    #[test]
    fn updating_legacy_record_promotes_it() {
        let record = serialize_legacy("Groceries", "milk", "2026-08-26 09:15");
        let store = store_with_records(&[&record]);

        let legacy = store.list_notes().unwrap().remove(0);
        let updated = store
            .update_note(&legacy, "Groceries".to_string(), "milk and eggs".to_string())
            .unwrap();

        assert!(!updated.is_legacy());

        let notes = store.list_notes().unwrap();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].description, "milk and eggs");
        assert!(!notes[0].is_legacy());
    }

    #[test]
    fn get_note_finds_by_id() {
        let store = memory_store();
        let note = store.add_note("A".to_string(), "B".to_string()).unwrap();

        assert_eq!(store.get_note(&note.id).unwrap(), Some(note));
        assert_eq!(store.get_note("missing").unwrap(), None);
    }
}
