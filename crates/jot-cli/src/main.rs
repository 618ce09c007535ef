//! jot CLI - keep short personal notes in a local JSON file
//!
//! Each subcommand maps 1:1 onto a notes manager operation; the notes file is
//! loaded at the start of the invocation and rewritten after any mutation.

use std::env;
use std::path::PathBuf;

use clap::{CommandFactory, Parser};

mod cli;
mod commands;
mod error;
#[cfg(test)]
mod tests;

use cli::{Cli, Commands};
use error::CliError;

fn main() {
    if let Err(error) = run() {
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("jot=info".parse().unwrap()),
        )
        .init();

    let cli = Cli::parse();
    let file = resolve_notes_file(cli.file);

    match cli.command {
        Some(Commands::Add { title, body }) => commands::run_add(&title, &body, &file)?,
        Some(Commands::List { json }) => commands::run_list(json, &file)?,
        Some(Commands::Show { id }) => commands::run_show(id, &file)?,
        Some(Commands::Edit { id, title, body }) => {
            commands::run_edit(id, &title, &body, &file)?;
        }
        Some(Commands::Delete { id }) => commands::run_delete(id, &file)?,
        Some(Commands::Filter { prefix, json }) => commands::run_filter(&prefix, json, &file)?,
        Some(Commands::Completions { shell, output }) => {
            commands::run_completions(shell, output.as_deref())?;
        }
        None => {
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}

fn resolve_notes_file(cli_file: Option<PathBuf>) -> PathBuf {
    cli_file
        .or_else(|| env::var_os("JOT_NOTES_FILE").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from("notes.json"))
}
