use std::path::Path;

use jot_core::NoteId;

use crate::commands::common::open_manager;
use crate::error::CliError;

pub fn run_delete(id: NoteId, file: &Path) -> Result<(), CliError> {
    let mut manager = open_manager(file)?;
    manager.delete(id)?;

    println!("{id}");
    Ok(())
}
