//! Data models for jot

mod note;

pub use note::{Note, NoteId, NoteSummary, TIMESTAMP_FORMAT};
