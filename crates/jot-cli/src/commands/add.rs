use std::path::Path;

use crate::commands::common::{join_words, open_manager};
use crate::error::CliError;

pub fn run_add(title: &str, body_parts: &[String], file: &Path) -> Result<(), CliError> {
    let mut manager = open_manager(file)?;
    let id = manager.create(title, &join_words(body_parts))?;

    println!("{id}");
    Ok(())
}
