use std::path::PathBuf;

use jot_core::{NoteId, NoteSummary, NotesManager};
use pretty_assertions::assert_eq;
use tempfile::tempdir;

use crate::commands::common::{format_summary_lines, join_words, title_preview};
use crate::commands::{run_add, run_completions, run_delete, run_edit, run_filter, run_show};
use crate::error::CliError;
use crate::resolve_notes_file;

#[test]
fn join_words_rebuilds_body_text() {
    let parts = vec!["milk,".to_string(), "eggs".to_string()];
    assert_eq!(join_words(&parts), "milk, eggs");
    assert_eq!(join_words(&[]), "");
}

#[test]
fn title_preview_collapses_whitespace() {
    assert_eq!(title_preview("hello   world", 40), "hello world");
    assert_eq!(title_preview("first line\nsecond line", 40), "first line");
}

#[test]
fn title_preview_truncates_with_ellipsis() {
    let preview = title_preview("This is a very long title that should be shortened", 20);
    assert_eq!(preview, "This is a very lo...");
}

#[test]
fn format_summary_lines_includes_id_title_and_timestamp() {
    let summaries = vec![NoteSummary {
        id: NoteId::new(1),
        title: "Groceries".to_string(),
        created_at: "2024-03-01 09:30:00".to_string(),
    }];

    let lines = format_summary_lines(&summaries);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains("   1  "));
    assert!(lines[0].contains("Groceries"));
    assert!(lines[0].contains("2024-03-01 09:30:00"));
}

#[test]
fn resolve_notes_file_prefers_cli_argument() {
    let resolved = resolve_notes_file(Some(PathBuf::from("/tmp/custom.json")));
    assert_eq!(resolved, PathBuf::from("/tmp/custom.json"));
}

#[test]
fn run_add_creates_a_note_on_disk() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("notes.json");

    run_add("Groceries", &["milk,".to_string(), "eggs".to_string()], &file).unwrap();

    let manager = NotesManager::open(&file).unwrap();
    let note = manager.get(NoteId::new(1)).unwrap();
    assert_eq!(note.title, "Groceries");
    assert_eq!(note.body, "milk, eggs");
}

#[test]
fn run_edit_replaces_title_and_body() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("notes.json");

    run_add("Groceries", &[], &file).unwrap();
    run_edit(
        NoteId::new(1),
        "Groceries v2",
        &["bread".to_string()],
        &file,
    )
    .unwrap();

    let manager = NotesManager::open(&file).unwrap();
    let note = manager.get(NoteId::new(1)).unwrap();
    assert_eq!(note.title, "Groceries v2");
    assert_eq!(note.body, "bread");
}

#[test]
fn run_edit_missing_id_reports_not_found() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("notes.json");

    let error = run_edit(NoteId::new(5), "x", &[], &file).unwrap_err();
    assert!(matches!(
        error,
        CliError::Core(jot_core::Error::NotFound(_))
    ));
}

#[test]
fn run_delete_removes_note_and_tolerates_repeats() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("notes.json");

    run_add("a", &[], &file).unwrap();
    run_add("b", &[], &file).unwrap();

    run_delete(NoteId::new(1), &file).unwrap();
    run_delete(NoteId::new(1), &file).unwrap();

    let manager = NotesManager::open(&file).unwrap();
    assert_eq!(manager.len(), 1);
    assert_eq!(manager.get(NoteId::new(2)).unwrap().title, "b");
}

#[test]
fn run_show_missing_id_reports_not_found() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("notes.json");

    let error = run_show(NoteId::new(3), &file).unwrap_err();
    assert!(matches!(
        error,
        CliError::Core(jot_core::Error::NotFound(_))
    ));
}

#[test]
fn run_filter_succeeds_on_empty_collection() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("notes.json");

    run_filter("2024-03", false, &file).unwrap();
    run_filter("2024-03", true, &file).unwrap();
}

#[test]
fn run_completions_writes_bash_script_file() {
    let dir = tempdir().unwrap();
    let output_path = dir.path().join("jot.bash");

    run_completions(crate::cli::CompletionShell::Bash, Some(&output_path)).unwrap();

    let script = std::fs::read_to_string(&output_path).unwrap();
    assert!(script.contains("_jot()"));
    assert!(script.contains("complete -F _jot"));
}
