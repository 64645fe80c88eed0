//! Storage backends for the note collection.
//!
//! The collection is a single logical key (`notes`) mapping to an unordered
//! set of record strings. Backends only move that set in and out of durable
//! storage; they know nothing about the record format. The backend is
//! constructed once at startup and passed to the store explicitly, so tests
//! can inject [`MemoryBackend`] instead of touching the filesystem.

use std::{
    collections::HashSet,
    fs,
    io::Write,
    path::{Path, PathBuf},
    sync::Mutex,
};

use log::{debug, error};
use tempfile::NamedTempFile;

use crate::{NoteError, Result};

/// Durable storage for the set of note records.
///
/// No ordering guarantee: `load` may yield the records in any order, and
/// callers must not assume stability across loads.
pub trait StorageBackend {
    /// Reads the full record set. A store that has never been written reads
    /// as the empty set.
    fn load(&self) -> Result<HashSet<String>>;

    /// Replaces the full record set.
    fn save(&self, records: &HashSet<String>) -> Result<()>;
}

impl<B: StorageBackend + ?Sized> StorageBackend for std::sync::Arc<B> {
    fn load(&self) -> Result<HashSet<String>> {
        (**self).load()
    }

    fn save(&self, records: &HashSet<String>) -> Result<()> {
        (**self).save(records)
    }
}

/// File-backed storage: one newline-delimited file holding the record set.
pub struct FileBackend {
    /// Path of the notes file
    path: PathBuf,
}

impl FileBackend {
    /// Creates a backend storing its records at the given path.
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the underlying notes file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn load(&self) -> Result<HashSet<String>> {
        if !self.path.exists() {
            debug!("Notes file does not exist yet: {}", self.path.display());
            return Ok(HashSet::new());
        }

        let content = fs::read_to_string(&self.path).map_err(|e| {
            error!("Failed to read notes file {}: {}", self.path.display(), e);
            NoteError::Io(e)
        })?;

        let records: HashSet<String> = content
            .lines()
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();

        debug!(
            "Loaded {} records from {}",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }

    fn save(&self, records: &HashSet<String>) -> Result<()> {
        // Ensure the parent directory exists
        if let Some(parent) = self.path.parent() {
            if !parent.exists() {
                debug!("Creating notes directory: {}", parent.display());
                fs::create_dir_all(parent).map_err(|e| {
                    error!("Failed to create directory {}: {}", parent.display(), e);
                    NoteError::DirectoryError {
                        path: parent.to_path_buf(),
                    }
                })?;
            }
        }

        // Write to a temporary file in the same directory, then rename into
        // place so a crash mid-write cannot leave a truncated notes file.
        let dir = self.path.parent().unwrap_or_else(|| Path::new("."));
        let mut temp_file = NamedTempFile::new_in(dir).map_err(|e| {
            error!("Failed to create temporary file: {}", e);
            NoteError::Io(e)
        })?;

        for record in records {
            writeln!(temp_file, "{}", record).map_err(|e| {
                error!("Failed to write to temporary file: {}", e);
                NoteError::Io(e)
            })?;
        }

        temp_file.flush().map_err(|e| {
            error!("Failed to flush temporary file: {}", e);
            NoteError::Io(e)
        })?;

        temp_file.persist(&self.path).map_err(|e| {
            error!("Failed to persist file {}: {}", self.path.display(), e.error);
            NoteError::Io(e.error)
        })?;

        debug!(
            "Saved {} records to {}",
            records.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// In-memory storage, used by tests and embeddings that want no disk I/O.
#[derive(Default)]
pub struct MemoryBackend {
    records: Mutex<HashSet<String>>,
}

impl MemoryBackend {
    /// Creates an empty in-memory backend.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a backend pre-populated with the given record strings.
    pub fn with_records<I>(records: I) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        Self {
            records: Mutex::new(records.into_iter().collect()),
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Result<HashSet<String>> {
        let records = self
            .records
            .lock()
            .map_err(|_| NoteError::ApplicationError {
                message: "Failed to acquire lock on in-memory records".to_string(),
            })?;

        Ok(records.clone())
    }

    fn save(&self, records: &HashSet<String>) -> Result<()> {
        let mut current = self
            .records
            .lock()
            .map_err(|_| NoteError::ApplicationError {
                message: "Failed to acquire lock on in-memory records".to_string(),
            })?;

        *current = records.clone();
        Ok(())
    }
}
