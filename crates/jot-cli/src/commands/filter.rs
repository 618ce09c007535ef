use std::path::Path;

use crate::commands::common::{open_manager, print_summaries};
use crate::error::CliError;

pub fn run_filter(prefix: &str, as_json: bool, file: &Path) -> Result<(), CliError> {
    let manager = open_manager(file)?;
    print_summaries(&manager.filter_by_date(prefix), as_json)
}
