//! Story file loading.
//!
//! One user story per line, UTF-8. Lines are trimmed; blank and
//! whitespace-only lines are dropped before IDs are assigned, so they never
//! consume an ID. A missing or unreadable input file is logged as an error
//! and yields an empty list rather than failing the run.

use std::fs;
use std::path::Path;

/// Load user stories from a text file.
pub fn load_stories(path: &Path) -> Vec<String> {
    let text = match fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) => {
            log::error!("Failed to read {}: {}", path.display(), e);
            return Vec::new();
        }
    };
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
