//! Annotated tokens and sentences.
//!
//! A [`Sentence`] is the unit of exchange between a parser backend and the
//! component extractor: an ordered sequence of [`Token`]s, each carrying its
//! literal text, a dependency label, its 0-based position, and the position
//! of its syntactic head. A token whose head is itself is a root.
//!
//! Subtrees are derived, not stored: [`Sentence::subtree`] walks head chains
//! and returns the token plus everything it dominates, in sentence order.
//! Dominated tokens need not be contiguous.

use serde::{Deserialize, Serialize};

/// Syntactic dependency label.
///
/// The minimum tag set the extractor needs. Parsers with richer tag
/// inventories map everything else to [`DepLabel::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DepLabel {
    /// Nominal subject of a clause.
    Subject,
    /// Open clausal complement (the "want *to do X*" clause).
    Xcomp,
    /// Punctuation.
    Punct,
    /// Any other relation.
    Other,
}

impl DepLabel {
    /// Short label string, following the common dependency tag names.
    pub fn as_label(&self) -> &'static str {
        match self {
            DepLabel::Subject => "nsubj",
            DepLabel::Xcomp => "xcomp",
            DepLabel::Punct => "punct",
            DepLabel::Other => "dep",
        }
    }
}

/// A single annotated token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// Literal text of the token.
    pub text: String,
    /// Dependency relation to the head.
    pub dep: DepLabel,
    /// 0-based position within the sentence.
    pub index: usize,
    /// Position of the syntactic head. `head == index` marks a root.
    pub head: usize,
}

impl Token {
    /// Create a token.
    pub fn new(text: impl Into<String>, dep: DepLabel, index: usize, head: usize) -> Self {
        Self {
            text: text.into(),
            dep,
            index,
            head,
        }
    }
}

/// An ordered sequence of annotated tokens.
///
/// Positions are expected to be contiguous and 0-based; construction
/// re-indexes tokens to guarantee it and roots any head reference that
/// points outside the sentence, so downstream walks cannot escape.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sentence {
    tokens: Vec<Token>,
}

impl Sentence {
    /// Build a sentence from tokens, normalizing positions and stray heads.
    pub fn new(tokens: Vec<Token>) -> Self {
        let len = tokens.len();
        let tokens = tokens
            .into_iter()
            .enumerate()
            .map(|(i, mut token)| {
                token.index = i;
                if token.head >= len {
                    token.head = i;
                }
                token
            })
            .collect();
        Self { tokens }
    }

    /// All tokens, in sentence order.
    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when the sentence has no tokens.
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The token at `index` plus all tokens it dominates, in sentence order.
    ///
    /// Returns an empty vector for an out-of-range index.
    pub fn subtree(&self, index: usize) -> Vec<&Token> {
        if index >= self.tokens.len() {
            return Vec::new();
        }
        self.tokens
            .iter()
            .filter(|t| self.dominated_by(t.index, index))
            .collect()
    }

    /// Whether `node`'s head chain reaches `ancestor` (inclusive).
    ///
    /// The walk is bounded by sentence length, so malformed head cycles
    /// terminate instead of looping.
    fn dominated_by(&self, mut node: usize, ancestor: usize) -> bool {
        for _ in 0..=self.tokens.len() {
            if node == ancestor {
                return true;
            }
            let head = self.tokens[node].head;
            if head == node {
                return false;
            }
            node = head;
        }
        false
    }
}
