use std::path::Path;

use jot_core::NoteId;

use crate::commands::common::open_manager;
use crate::error::CliError;

pub fn run_show(id: NoteId, file: &Path) -> Result<(), CliError> {
    let manager = open_manager(file)?;
    let note = manager.get(id)?;

    println!("ID:      {}", note.id);
    println!("Title:   {}", note.title);
    println!("Created: {}", note.created_at);
    println!();
    println!("{}", note.body);
    Ok(())
}
