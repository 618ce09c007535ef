use std::path::Path;

use jot_core::{JsonFileStore, NoteSummary, NotesManager};

use crate::error::CliError;

/// Open the notes manager against the given file, loading any existing notes
pub fn open_manager(file: &Path) -> Result<NotesManager<JsonFileStore>, CliError> {
    tracing::debug!(file = %file.display(), "opening notes file");
    Ok(NotesManager::open(file)?)
}

/// Join body words back into a single string
pub fn join_words(parts: &[String]) -> String {
    parts.join(" ")
}

/// Render summaries as aligned text columns for terminal output
pub fn format_summary_lines(summaries: &[NoteSummary]) -> Vec<String> {
    summaries
        .iter()
        .map(|summary| {
            let title = title_preview(&summary.title, 40);
            format!("{:>4}  {title:<40}  {}", summary.id, summary.created_at)
        })
        .collect()
}

/// Print summaries either as pretty JSON or as text columns
pub fn print_summaries(summaries: &[NoteSummary], as_json: bool) -> Result<(), CliError> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(summaries)?);
    } else {
        for line in format_summary_lines(summaries) {
            println!("{line}");
        }
    }
    Ok(())
}

/// Collapse a title to a single line, truncated with an ellipsis
pub fn title_preview(title: &str, max_chars: usize) -> String {
    let first_line = title.lines().next().unwrap_or("").trim();
    let collapsed = first_line.split_whitespace().collect::<Vec<_>>().join(" ");

    if collapsed.chars().count() <= max_chars {
        collapsed
    } else {
        let take_len = max_chars.saturating_sub(3);
        let mut truncated = collapsed.chars().take(take_len).collect::<String>();
        truncated.push_str("...");
        truncated
    }
}
