//! Notes manager
//!
//! Single source of truth for id assignment and mutation semantics. Every
//! mutating operation updates the in-memory collection and then persists the
//! full collection through the store; reads never touch storage.

#![allow(clippy::cast_possible_truncation)] // collection size fits in u64

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::models::{Note, NoteId, NoteSummary};
use crate::storage::{JsonFileStore, NoteStore};

/// Owns the in-memory notes collection and its backing store
pub struct NotesManager<S: NoteStore> {
    notes: Vec<Note>,
    store: S,
}

impl NotesManager<JsonFileStore> {
    /// Open a manager backed by a JSON file, loading any existing collection
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        Self::with_store(JsonFileStore::new(path))
    }
}

impl<S: NoteStore> NotesManager<S> {
    /// Load the collection from the given store
    pub fn with_store(store: S) -> Result<Self> {
        let notes = store.load()?;
        tracing::debug!(count = notes.len(), "notes loaded");
        Ok(Self { notes, store })
    }

    /// Create a note and persist the collection, returning the assigned id
    ///
    /// Ids are assigned as `count + 1`, so deleting a note frees its id for
    /// reuse by a later create. See DESIGN.md for why this is kept as-is.
    pub fn create(&mut self, title: &str, body: &str) -> Result<NoteId> {
        let id = NoteId::new(self.notes.len() as u64 + 1);
        self.notes.push(Note::new(id, title, body));
        self.store.save(&self.notes)?;
        tracing::debug!(%id, "note created");
        Ok(id)
    }

    /// List all notes in insertion order
    #[must_use]
    pub fn list(&self) -> Vec<NoteSummary> {
        self.notes.iter().map(NoteSummary::from).collect()
    }

    /// Look up a note by id
    pub fn get(&self, id: NoteId) -> Result<&Note> {
        self.notes
            .iter()
            .find(|note| note.id == id)
            .ok_or(Error::NotFound(id))
    }

    /// Replace a note's title and body, stamping it with the current time
    ///
    /// The edit overwrites `created_at`; there is no separate modified field.
    pub fn edit(&mut self, id: NoteId, title: &str, body: &str) -> Result<()> {
        let note = self
            .notes
            .iter_mut()
            .find(|note| note.id == id)
            .ok_or(Error::NotFound(id))?;

        note.title = title.to_string();
        note.body = body.to_string();
        note.touch();

        self.store.save(&self.notes)?;
        tracing::debug!(%id, "note edited");
        Ok(())
    }

    /// Remove a note by id and persist, succeeding even when the id is absent
    pub fn delete(&mut self, id: NoteId) -> Result<()> {
        self.notes.retain(|note| note.id != id);
        self.store.save(&self.notes)?;
        tracing::debug!(%id, "note deleted");
        Ok(())
    }

    /// List notes whose `created_at` starts with the given literal prefix
    ///
    /// The prefix is matched as a plain string, so `"2024-03"` selects a whole
    /// month and `"2024-03-01"` a single day. No format validation is applied.
    #[must_use]
    pub fn filter_by_date(&self, prefix: &str) -> Vec<NoteSummary> {
        self.notes
            .iter()
            .filter(|note| note.created_at.starts_with(prefix))
            .map(NoteSummary::from)
            .collect()
    }

    /// Number of notes currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.notes.len()
    }

    /// Whether the collection is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }
}
