// Output — the result file and terminal display.

pub mod terminal;

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

/// Format a score with a fixed number of decimals, e.g. `0.87`.
pub fn format_score(score: f64, precision: usize) -> String {
    format!("{score:.precision$}")
}

/// Write the formatted score as the whole content of `path`.
pub fn write_score(path: &Path, score: f64, precision: usize) -> Result<()> {
    let formatted = format_score(score, precision);
    fs::write(path, &formatted)
        .with_context(|| format!("Error writing to output file {}", path.display()))?;
    info!(path = %path.display(), score = %formatted, "Wrote result");
    Ok(())
}

/// Truncate a string to at most `max_chars` characters, appending "..." if truncated.
///
/// Unlike byte slicing (`&text[..120]`), this respects UTF-8 character boundaries
/// and will never panic on multi-byte characters like Chinese text.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_chars).collect();
        format!("{truncated}...")
    }
}
