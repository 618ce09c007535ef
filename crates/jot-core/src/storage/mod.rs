//! Storage layer for jot
//!
//! The collection is persisted as a pretty-printed JSON array of notes. Every
//! save rewrites the whole file; there is no incremental persistence.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Note;

/// Trait for durable persistence of the notes collection
pub trait NoteStore {
    /// Load the full collection; a missing storage file yields an empty one
    fn load(&self) -> Result<Vec<Note>>;

    /// Overwrite the storage location with the full collection
    fn save(&self, notes: &[Note]) -> Result<()>;
}

/// JSON file implementation of `NoteStore`
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Create a store backed by the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The storage file path
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl NoteStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Note>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let notes = serde_json::from_str(&raw)?;
        Ok(notes)
    }

    fn save(&self, notes: &[Note]) -> Result<()> {
        let rendered = serde_json::to_string_pretty(notes)?;
        fs::write(&self.path, rendered)?;
        Ok(())
    }
}
