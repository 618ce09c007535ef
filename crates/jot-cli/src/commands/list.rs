use std::path::Path;

use crate::commands::common::{open_manager, print_summaries};
use crate::error::CliError;

pub fn run_list(as_json: bool, file: &Path) -> Result<(), CliError> {
    let manager = open_manager(file)?;
    print_summaries(&manager.list(), as_json)
}
