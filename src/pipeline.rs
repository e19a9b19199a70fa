//! Pipeline orchestration.
//!
//! Sequences the whole run: load stories, then for each story in input
//! order parse, extract, generate, and aggregate, then save the report.
//! Strictly sequential and synchronous; one story's outcome never affects
//! another's. A run over zero stories logs a warning and writes nothing.

use crate::extract::extract;
use crate::generate::generate;
use crate::ingest::load_stories;
use crate::report::{Report, ReportRecord};
use crate::{Parser, Result, TestCaseSet};
use std::path::{Path, PathBuf};

/// Ties a parser backend to an input and output path.
///
/// # Example
///
/// ```rust,no_run
/// use storycase::{HeuristicParser, Pipeline};
///
/// let pipeline = Pipeline::new(HeuristicParser::new(), "stories.txt", "test_cases.txt");
/// pipeline.run()?;
/// # Ok::<(), storycase::Error>(())
/// ```
pub struct Pipeline<P> {
    parser: P,
    input: PathBuf,
    output: PathBuf,
}

impl<P: Parser> Pipeline<P> {
    /// Create a pipeline over the given parser and paths.
    pub fn new(parser: P, input: impl Into<PathBuf>, output: impl Into<PathBuf>) -> Self {
        Self {
            parser,
            input: input.into(),
            output: output.into(),
        }
    }

    /// Input path this pipeline reads from.
    pub fn input(&self) -> &Path {
        &self.input
    }

    /// Output path this pipeline writes to.
    pub fn output(&self) -> &Path {
        &self.output
    }

    /// Execute the full run.
    ///
    /// Returns an error only when the output file cannot be written; every
    /// other condition degrades to a logged message. No output file is
    /// touched when the input yields zero stories.
    pub fn run(&self) -> Result<()> {
        let stories = load_stories(&self.input);
        if stories.is_empty() {
            log::warn!("No stories loaded.");
            return Ok(());
        }

        log::info!("Processing {} user stories...", stories.len());
        let report = self.process(&stories);
        report.save(&self.output)?;
        log::info!("Results saved to {}", self.output.display());
        Ok(())
    }

    /// Process stories into a report without touching the filesystem.
    ///
    /// IDs are `US-<n>`, 1-based, dense, in input order. Exactly one record
    /// is produced per story; a parse failure from the backend is logged and
    /// yields an empty test-case set for that story.
    pub fn process(&self, stories: &[String]) -> Report {
        let mut report = Report::new();
        for (idx, story) in stories.iter().enumerate() {
            let id = format!("US-{}", idx + 1);
            let cases = match self.parser.parse(story) {
                Ok(sentence) => {
                    let components = extract(&sentence);
                    generate(
                        components.role.as_deref(),
                        &components.action,
                        &components.goal,
                    )
                }
                Err(e) => {
                    log::error!("{}: {}", id, e);
                    TestCaseSet::default()
                }
            };
            report.push(ReportRecord {
                id,
                story: story.clone(),
                positive: cases.positive,
                negative: cases.negative,
            });
        }
        report
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{DepLabel, Sentence, Token};
    use crate::{Error, HeuristicParser, MockParser};

    struct FailingParser;

    impl Parser for FailingParser {
        fn parse(&self, _text: &str) -> Result<Sentence> {
            Err(Error::parse("engine unavailable"))
        }

        fn name(&self) -> &'static str {
            "failing"
        }
    }

    #[test]
    fn ids_are_dense_and_one_based() {
        let pipeline = Pipeline::new(HeuristicParser::new(), "in.txt", "out.txt");
        let stories = vec!["one".to_string(), "two".to_string(), "three".to_string()];
        let report = pipeline.process(&stories);

        let ids: Vec<&str> = report.records().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["US-1", "US-2", "US-3"]);
    }

    #[test]
    fn parse_failure_degrades_to_empty_cases() {
        let pipeline = Pipeline::new(FailingParser, "in.txt", "out.txt");
        let stories = vec!["a story".to_string(), "another".to_string()];
        let report = pipeline.process(&stories);

        assert_eq!(report.len(), 2);
        for record in report.records() {
            assert!(record.positive.is_empty());
            assert!(record.negative.is_empty());
        }
    }

    #[test]
    fn mock_parser_drives_the_full_path() {
        let sentence = Sentence::new(vec![
            Token::new("I", DepLabel::Subject, 0, 1),
            Token::new("want", DepLabel::Other, 1, 1),
            Token::new("login", DepLabel::Xcomp, 2, 1),
            Token::new("so", DepLabel::Other, 3, 1),
            Token::new("that", DepLabel::Other, 4, 1),
            Token::new("it", DepLabel::Other, 5, 1),
            Token::new("works", DepLabel::Other, 6, 1),
        ]);
        let pipeline = Pipeline::new(MockParser::returning(sentence), "in.txt", "out.txt");
        let report = pipeline.process(&["anything".to_string()]);

        assert_eq!(report.records()[0].positive.len(), 4);
        assert_eq!(report.records()[0].negative.len(), 4);
        assert_eq!(report.summary()[0].positive_count, 4);
    }
}
