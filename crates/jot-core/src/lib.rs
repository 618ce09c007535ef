//! jot-core - Core library for jot
//!
//! This crate contains the note model, the JSON file storage layer, and the
//! notes manager that the CLI front end drives.

pub mod error;
pub mod manager;
pub mod models;
pub mod storage;

pub use error::{Error, Result};
pub use manager::NotesManager;
pub use models::{Note, NoteId, NoteSummary};
pub use storage::{JsonFileStore, NoteStore};
