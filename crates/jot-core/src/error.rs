//! Error types for jot-core

use thiserror::Error;

use crate::models::NoteId;

/// Result type alias using jot-core's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in jot-core operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error reading or writing the notes file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The notes file exists but does not parse as the expected JSON shape
    #[error("Malformed notes file: {0}")]
    Malformed(#[from] serde_json::Error),

    /// Note not found
    #[error("Note not found: {0}")]
    NotFound(NoteId),
}
