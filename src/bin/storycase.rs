//! storycase - Test case generation from user stories
//!
//! Reads one user story per line, derives {role, action, goal} from each,
//! and writes a report with four positive and four negative test cases per
//! fully-extracted story.
//!
//! # Usage
//!
//! ```bash
//! # Default output path (test_cases.txt)
//! storycase stories.txt
//!
//! # Explicit output path, verbose logging
//! storycase stories.txt -o report.txt -v
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use is_terminal::IsTerminal;

use storycase::{HeuristicParser, Pipeline};

/// Test case generation from user stories
#[derive(Parser)]
#[command(name = "storycase")]
#[command(
    author,
    version,
    about = "Generate positive and negative test cases from user stories",
    long_about = r#"
storycase - test case generation from user stories

Reads a UTF-8 text file with one user story per line, e.g.

  As a customer, I want to reset my password so that I can regain access.

For each story it derives the acting role, the desired action, and the goal,
then expands them into four positive and four negative test-case
descriptions. Stories the parser cannot fully decompose still appear in the
report, with zero test cases.

EXAMPLES:
  storycase stories.txt
  storycase stories.txt -o report.txt
  storycase stories.txt --parser heuristic -vv
"#
)]
struct Cli {
    /// Input file with one user story per line
    input: PathBuf,

    /// Output path for the generated report
    #[arg(short, long, default_value = "test_cases.txt")]
    output: PathBuf,

    /// Parser backend to use
    #[arg(long, value_enum, default_value_t = ParserBackend::Heuristic)]
    parser: ParserBackend,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

/// Parser backend selection
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum ParserBackend {
    /// Cue-word heuristics over the user-story register (always available)
    #[default]
    Heuristic,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.parser {
        ParserBackend::Heuristic => {
            Pipeline::new(HeuristicParser::new(), &cli.input, &cli.output).run()
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {}", color("31", "error:"), e);
            ExitCode::FAILURE
        }
    }
}

/// Install the process-wide logger once, before any pipeline work.
/// `RUST_LOG` wins over the flag-derived default.
fn init_logging(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp_secs()
        .init();
}

/// Wrap `text` in an ANSI color code when stderr is a terminal.
fn color(code: &str, text: &str) -> String {
    if std::io::stderr().is_terminal() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}
