use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Application configuration settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// File where the note collection is stored
    pub notes_file: PathBuf,
}

impl Config {
    /// Builds the configuration, falling back to the platform default
    /// location when no notes file is given.
    pub fn new(notes_file: Option<PathBuf>) -> Self {
        Self {
            notes_file: notes_file.unwrap_or_else(default_notes_file),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(None)
    }
}

/// Default notes file: `<platform data dir>/mininotes/notes`, with the
/// current directory as a last resort when no data directory is known.
pub fn default_notes_file() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("mininotes")
        .join("notes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_path_wins_over_default() {
        let config = Config::new(Some(PathBuf::from("/tmp/custom-notes")));
        assert_eq!(config.notes_file, PathBuf::from("/tmp/custom-notes"));
    }

    #[test]
    fn default_path_ends_with_app_directory() {
        let config = Config::default();
        assert!(config.notes_file.ends_with("mininotes/notes"));
    }
}
