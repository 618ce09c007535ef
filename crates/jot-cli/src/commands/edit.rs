use std::path::Path;

use jot_core::NoteId;

use crate::commands::common::{join_words, open_manager};
use crate::error::CliError;

pub fn run_edit(
    id: NoteId,
    title: &str,
    body_parts: &[String],
    file: &Path,
) -> Result<(), CliError> {
    let mut manager = open_manager(file)?;
    manager.edit(id, title, &join_words(body_parts))?;

    println!("{id}");
    Ok(())
}
