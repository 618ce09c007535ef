//! Note model

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

use chrono::Local;
use serde::{Deserialize, Serialize};

/// Timestamp format used for `created_at`, second resolution local time
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A note identifier: a positive integer assigned by the manager
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteId(u64);

impl NoteId {
    /// Wrap a raw numeric id
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Get the raw numeric value of this id
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for NoteId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.trim().parse()?))
    }
}

/// A note in the collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Identifier, unique within the collection at any point in time
    pub id: NoteId,
    /// User-supplied title, may be empty or duplicated
    pub title: String,
    /// User-supplied body text, may be empty
    pub body: String,
    /// Creation timestamp, overwritten whenever the note is edited
    pub created_at: String,
}

impl Note {
    /// Create a new note stamped with the current local time
    #[must_use]
    pub fn new(id: NoteId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            created_at: now_timestamp(),
        }
    }

    /// Reset `created_at` to the current local time
    pub fn touch(&mut self) {
        self.created_at = now_timestamp();
    }
}

/// The row shape produced by list and filter operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteSummary {
    pub id: NoteId,
    pub title: String,
    pub created_at: String,
}

impl From<&Note> for NoteSummary {
    fn from(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            created_at: note.created_at.clone(),
        }
    }
}

/// Current local time rendered in the storage timestamp format
#[must_use]
pub(crate) fn now_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}
