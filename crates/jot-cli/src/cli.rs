use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use jot_core::NoteId;

#[derive(Parser)]
#[command(name = "jot")]
#[command(about = "Keep short personal notes in a local JSON file")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to the notes file (defaults to notes.json in the working directory)
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a new note
    #[command(alias = "new")]
    Add {
        /// Note title
        title: String,
        /// Note body
        body: Vec<String>,
    },
    /// List all notes in creation order
    List {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show a single note in full
    #[command(alias = "read")]
    Show {
        /// Note ID
        id: NoteId,
    },
    /// Replace a note's title and body
    Edit {
        /// Note ID
        id: NoteId,
        /// New title
        title: String,
        /// New body
        body: Vec<String>,
    },
    /// Delete a note (succeeds even if the ID does not exist)
    Delete {
        /// Note ID
        id: NoteId,
    },
    /// List notes whose creation date starts with a prefix
    Filter {
        /// Date prefix, e.g. 2024-03 or 2024-03-01
        prefix: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Generate shell completion scripts
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: CompletionShell,
        /// Optional output path (stdout when omitted)
        #[arg(short, long, value_name = "PATH")]
        output: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
}
