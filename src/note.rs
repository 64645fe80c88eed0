//! Core data structures for the mininotes application.
//!
//! This module contains the `Note` record and the codec between notes and
//! their stored string form. New records are single-line JSON objects; the
//! pipe-delimited format of earlier releases is supported as a read-only
//! migration path.

use log::warn;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{current_timestamp, Result};

/// Field separator of the legacy record format.
pub const LEGACY_DELIMITER: char = '|';

/// Identity prefix for notes read from legacy records. A legacy record has no
/// stored id, so its identity is the record string itself, which matches the
/// value-equality semantics the legacy format relied on.
const LEGACY_ID_PREFIX: &str = "legacy:";

/// Represents a single note in our system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier, assigned at creation and stable across edits
    pub id: String,
    /// Note title
    pub title: String,
    /// Note body text
    pub description: String,
    /// Save time, formatted `YYYY-MM-DD HH:mm` in the local timezone
    pub timestamp: String,
}

impl Note {
    /// Creates a new note with the given title and description, stamped with
    /// the current local time.
    pub fn new(title: String, description: String) -> Self {
        Note {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            timestamp: current_timestamp(),
        }
    }

    /// Returns an edited copy of this note with a fresh save timestamp.
    ///
    /// The id is kept so that future updates and deletes keep matching,
    /// except for legacy notes: their identity is tied to the old record
    /// string, so editing promotes them to the structured format under a
    /// fresh id.
    pub fn with_content(&self, title: String, description: String) -> Self {
        let id = if self.is_legacy() {
            Uuid::new_v4().to_string()
        } else {
            self.id.clone()
        };

        Note {
            id,
            title,
            description,
            timestamp: current_timestamp(),
        }
    }

    /// Whether this note was parsed from a legacy pipe-delimited record.
    pub fn is_legacy(&self) -> bool {
        self.id.starts_with(LEGACY_ID_PREFIX)
    }

    /// Serializes the note to its stored record form (single-line JSON).
    pub fn to_record(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Parses a stored record string into a note.
    ///
    /// Tries the structured JSON format first, then the legacy pipe-delimited
    /// format. Returns `None` for records that match neither; callers treat
    /// those as unparseable and skip them rather than failing the whole load.
    pub fn from_record(record: &str) -> Option<Note> {
        if let Ok(note) = serde_json::from_str::<Note>(record) {
            return Some(note);
        }

        parse_legacy(record).map(|(title, description, timestamp)| Note {
            id: format!("{}{}", LEGACY_ID_PREFIX, record),
            title,
            description,
            timestamp,
        })
    }
}

/// Joins note fields into a legacy pipe-delimited record.
///
/// Only used by the migration tests and tooling; new records are written as
/// JSON. Fields containing the delimiter produce a record that will not
/// survive a round-trip, which is the known defect of this format.
pub fn serialize_legacy(title: &str, description: &str, timestamp: &str) -> String {
    format!(
        "{}{}{}{}{}",
        title, LEGACY_DELIMITER, description, LEGACY_DELIMITER, timestamp
    )
}

/// Splits a legacy record into its three fields.
///
/// Any arity other than exactly 3 marks the record unparseable and yields
/// `None`; a delimiter inside user text therefore shifts or breaks the split.
pub fn parse_legacy(record: &str) -> Option<(String, String, String)> {
    let parts: Vec<&str> = record.split(LEGACY_DELIMITER).collect();
    if parts.len() != 3 {
        warn!("Skipping unparseable record ({} fields)", parts.len());
        return None;
    }

    Some((
        parts[0].to_string(),
        parts[1].to_string(),
        parts[2].to_string(),
    ))
}
