//! Result aggregation and report formatting.
//!
//! Collects one [`ReportRecord`] per processed story, in arrival order, and
//! derives a [`SummaryRow`] for each. Rendering produces the flat-text
//! report: a detailed block per story followed by a single tabulated
//! summary. Output is deterministic, so re-running a pipeline on identical
//! input yields a byte-identical file.
//!
//! # Example
//!
//! ```rust
//! use storycase::{Report, ReportRecord};
//!
//! let mut report = Report::new();
//! report.push(ReportRecord {
//!     id: "US-1".into(),
//!     story: "As a user, I want to login so that I can access my account.".into(),
//!     positive: vec!["Ensure that I can login.".into()],
//!     negative: vec![],
//! });
//! println!("{}", report);
//! ```

use crate::Result;
use serde::Serialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Summary table column headers, in output order.
const SUMMARY_HEADERS: [&str; 4] = [
    "User Story ID",
    "User Story",
    "Positive Test Cases",
    "Negative Test Cases",
];

/// Full result for one story: the generated test case text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReportRecord {
    /// Story ID, e.g. "US-1".
    pub id: String,
    /// The raw story text.
    pub story: String,
    /// Generated positive test cases, in template order.
    pub positive: Vec<String>,
    /// Generated negative test cases, in template order.
    pub negative: Vec<String>,
}

/// One summary table row: test case counts for a story.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummaryRow {
    /// Story ID, e.g. "US-1".
    pub id: String,
    /// The raw story text.
    pub story: String,
    /// Number of positive test cases.
    pub positive_count: usize,
    /// Number of negative test cases.
    pub negative_count: usize,
}

/// Accumulates per-story results and renders the report.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Report {
    records: Vec<ReportRecord>,
    summary: Vec<SummaryRow>,
}

impl Report {
    /// Create an empty report.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record, deriving its summary row. Arrival order is kept.
    pub fn push(&mut self, record: ReportRecord) {
        self.summary.push(SummaryRow {
            id: record.id.clone(),
            story: record.story.clone(),
            positive_count: record.positive.len(),
            negative_count: record.negative.len(),
        });
        self.records.push(record);
    }

    /// All records, in arrival order.
    pub fn records(&self) -> &[ReportRecord] {
        &self.records
    }

    /// All summary rows, in arrival order.
    pub fn summary(&self) -> &[SummaryRow] {
        &self.summary
    }

    /// Number of stories recorded.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True when no stories were recorded.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Render the full flat-text report.
    pub fn render(&self) -> String {
        let mut out = String::new();

        for record in &self.records {
            out.push_str(&format!("User Story {}:\n", record.id));
            out.push_str(&format!("{}\n", record.story));
            out.push_str("Positive Test Cases:\n");
            for case in &record.positive {
                out.push_str(&format!("- {}\n", case));
            }
            out.push_str("Negative Test Cases:\n");
            for case in &record.negative {
                out.push_str(&format!("- {}\n", case));
            }
            out.push('\n');
        }

        out.push_str("Test Case Generation Report:\n");
        out.push_str(&self.summary_table());
        out
    }

    /// Render the summary table: right-aligned width-padded columns, two
    /// spaces between them, no index column.
    fn summary_table(&self) -> String {
        let rows: Vec<[String; 4]> = self
            .summary
            .iter()
            .map(|row| {
                [
                    row.id.clone(),
                    row.story.clone(),
                    row.positive_count.to_string(),
                    row.negative_count.to_string(),
                ]
            })
            .collect();

        let mut widths: [usize; 4] = SUMMARY_HEADERS.map(str::len);
        for row in &rows {
            for (width, cell) in widths.iter_mut().zip(row.iter()) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let render_line = |cells: [&str; 4]| -> String {
            let padded: Vec<String> = cells
                .iter()
                .zip(widths.iter())
                .map(|(cell, width)| {
                    let pad = width.saturating_sub(cell.chars().count());
                    format!("{}{}", " ".repeat(pad), cell)
                })
                .collect();
            padded.join("  ")
        };

        let mut out = String::new();
        out.push_str(&render_line(SUMMARY_HEADERS));
        out.push('\n');
        for row in &rows {
            out.push_str(&render_line([
                row[0].as_str(),
                row[1].as_str(),
                row[2].as_str(),
                row[3].as_str(),
            ]));
            out.push('\n');
        }
        out
    }

    /// Write the rendered report to `path`, overwriting any existing file.
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        Ok(())
    }

    /// Export the report as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.render())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, story: &str, positive: usize, negative: usize) -> ReportRecord {
        ReportRecord {
            id: id.to_string(),
            story: story.to_string(),
            positive: (0..positive).map(|i| format!("pos {}", i)).collect(),
            negative: (0..negative).map(|i| format!("neg {}", i)).collect(),
        }
    }

    #[test]
    fn record_block_format() {
        let mut report = Report::new();
        report.push(record("US-1", "As a user, I want things.", 2, 1));

        let text = report.render();
        let expected = "User Story US-1:\n\
                        As a user, I want things.\n\
                        Positive Test Cases:\n\
                        - pos 0\n\
                        - pos 1\n\
                        Negative Test Cases:\n\
                        - neg 0\n\n";
        assert!(text.starts_with(expected), "got:\n{}", text);
    }

    #[test]
    fn summary_table_has_exact_headers_in_order() {
        let report = Report::new();
        let text = report.render();
        let table = text.split("Test Case Generation Report:\n").nth(1).unwrap();
        let header = table.lines().next().unwrap();
        assert_eq!(
            header,
            "User Story ID  User Story  Positive Test Cases  Negative Test Cases"
        );
    }

    #[test]
    fn summary_cells_right_aligned() {
        let mut report = Report::new();
        report.push(record("US-1", "short", 4, 4));

        let text = report.render();
        let table = text.split("Test Case Generation Report:\n").nth(1).unwrap();
        let row = table.lines().nth(1).unwrap();
        // "User Story ID" is 13 wide; "US-1" is right-aligned within it.
        assert!(row.starts_with("         US-1"), "got: {:?}", row);
        assert!(row.ends_with("4"));
    }

    #[test]
    fn long_story_widens_its_column() {
        let story = "As a user, I want a story longer than the header text above it.";
        let mut report = Report::new();
        report.push(record("US-1", story, 0, 0));

        let text = report.render();
        let table = text.split("Test Case Generation Report:\n").nth(1).unwrap();
        let header = table.lines().next().unwrap();
        let row = table.lines().nth(1).unwrap();
        assert!(header.contains(&format!(
            "{}User Story",
            " ".repeat(story.len() - "User Story".len())
        )));
        assert!(row.contains(story));
    }

    #[test]
    fn records_keep_arrival_order() {
        let mut report = Report::new();
        report.push(record("US-1", "first", 0, 0));
        report.push(record("US-2", "second", 4, 4));

        assert_eq!(report.len(), 2);
        assert_eq!(report.records()[0].id, "US-1");
        assert_eq!(report.records()[1].id, "US-2");
        assert_eq!(report.summary()[0].positive_count, 0);
        assert_eq!(report.summary()[1].positive_count, 4);

        let text = report.render();
        let first = text.find("User Story US-1:").unwrap();
        let second = text.find("User Story US-2:").unwrap();
        assert!(first < second);
    }

    #[test]
    fn empty_record_still_prints_section_headers() {
        let mut report = Report::new();
        report.push(record("US-1", "an imperative line", 0, 0));

        let text = report.render();
        assert!(text.contains("Positive Test Cases:\nNegative Test Cases:\n"));
    }

    #[test]
    fn render_is_deterministic() {
        let mut a = Report::new();
        let mut b = Report::new();
        for report in [&mut a, &mut b] {
            report.push(record("US-1", "same story", 4, 4));
            report.push(record("US-2", "another story", 0, 0));
        }
        assert_eq!(a.render(), b.render());
    }

    #[test]
    fn json_export_contains_records_and_summary() {
        let mut report = Report::new();
        report.push(record("US-1", "story text", 1, 1));

        let json = report.to_json().unwrap();
        assert!(json.contains("\"id\": \"US-1\""));
        assert!(json.contains("\"positive_count\": 1"));
    }
}
