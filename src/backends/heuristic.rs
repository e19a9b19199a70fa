//! Heuristic dependency annotation for the user-story register.
//!
//! A cue-word annotator, not a grammar: it recognizes the shape
//! "As a <role>, <subject> want(s) to <verb> ... so that <goal>" and emits
//! the dependency labels the extractor needs. No lexicons, no ML, always
//! available.
//!
//! Core decisions:
//! 1. The root is the first desire verb ("want", "need", "would", ...);
//!    an imperative line has no subject candidate before its root, which is
//!    exactly how such lines end up with no role downstream.
//! 2. The open clausal complement is the first word after an infinitival
//!    "to" following the root. Words up to the goal-clause boundary attach
//!    to it, so its subtree reads back as the action phrase.
//! 3. Tokens from the first goal-trigger word onward attach to the root,
//!    keeping the goal clause out of the complement's subtree.

use crate::token::{DepLabel, Sentence, Token};
use crate::{Parser, Result};
use once_cell::sync::Lazy;
use regex::Regex;

/// Verbs that anchor the main clause of a user story.
const ROOT_CUES: &[&str] = &[
    "want", "wants", "wanted", "need", "needs", "needed", "would", "like", "likes", "wish",
    "wishes", "must", "should",
];

/// Function words skipped when searching for the subject left of the root.
const FUNCTION_WORDS: &[&str] = &[
    "a", "an", "the", "as", "of", "to", "for", "in", "on", "at", "by", "with", "and", "or", "but",
    "so", "that",
];

/// Goal-clause openers; attachment stops at the first occurrence.
const CLAUSE_BOUNDARY: &[&str] = &["so", "that", "in", "order"];

static TOKEN_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Za-z0-9]+(?:['’-][A-Za-z0-9]+)*|[^\sA-Za-z0-9]").expect("valid token regex")
});

/// Cue-word dependency annotator for English user stories.
#[derive(Debug, Clone, Default)]
pub struct HeuristicParser;

impl HeuristicParser {
    /// Create a new heuristic parser.
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Parser for HeuristicParser {
    fn parse(&self, text: &str) -> Result<Sentence> {
        Ok(annotate(tokenize(text)))
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn description(&self) -> &'static str {
        "Cue-word dependency annotation for the user-story register"
    }
}

/// Split text into word and single-character punctuation tokens.
fn tokenize(text: &str) -> Vec<String> {
    TOKEN_RE
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}

fn is_word(token: &str) -> bool {
    token.chars().next().is_some_and(|c| c.is_alphanumeric())
}

fn matches_ci(token: &str, table: &[&str]) -> bool {
    table.iter().any(|w| token.eq_ignore_ascii_case(w))
}

/// Assign dependency labels and head positions to a token sequence.
fn annotate(texts: Vec<String>) -> Sentence {
    let n = texts.len();
    if n == 0 {
        return Sentence::default();
    }

    let root = texts
        .iter()
        .position(|t| matches_ci(t, ROOT_CUES))
        .or_else(|| texts.iter().position(|t| is_word(t)))
        .unwrap_or(0);

    let mut deps = vec![DepLabel::Other; n];
    let mut heads = vec![root; n];
    for (i, text) in texts.iter().enumerate() {
        if !is_word(text) {
            deps[i] = DepLabel::Punct;
        }
    }

    // Subject: nearest content word left of the root.
    if let Some(subj) = (0..root)
        .rev()
        .find(|&i| is_word(&texts[i]) && !matches_ci(&texts[i], FUNCTION_WORDS))
    {
        deps[subj] = DepLabel::Subject;
    }

    // Goal clause boundary: nothing past it attaches to the complement.
    let clause_end = (root + 1..n)
        .find(|&i| matches_ci(&texts[i], CLAUSE_BOUNDARY))
        .unwrap_or(n);

    // Complement: first "to <word>" inside the main clause.
    for j in root + 1..clause_end {
        if texts[j].eq_ignore_ascii_case("to") && j + 1 < clause_end && is_word(&texts[j + 1]) {
            deps[j + 1] = DepLabel::Xcomp;
            for head in heads.iter_mut().take(clause_end).skip(j + 2) {
                *head = j + 1;
            }
            break;
        }
    }

    Sentence::new(
        texts
            .into_iter()
            .enumerate()
            .map(|(i, text)| Token::new(text, deps[i], i, heads[i]))
            .collect(),
    )
}
