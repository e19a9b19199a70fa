//! Linguistic component extraction.
//!
//! Derives the {role, action, goal} triple from an annotated sentence in a
//! single left-to-right scan:
//!
//! - **role**: the literal text of the first [`DepLabel::Subject`] token.
//! - **action**: the space-joined subtree of the first [`DepLabel::Xcomp`]
//!   token, punctuation members excluded.
//! - **goal**: the space-joined text of every token more than one position
//!   past the first trigger word ("so", "that", "in", "order"); the extra
//!   offset skips a following particle such as "that" after "so". Hitting a
//!   trigger ends the scan entirely, so a subject or clausal complement that
//!   only appears after the trigger is never captured. That early exit is
//!   part of the contract, not an accident; see the quirk tests.
//!
//! The scan evaluates all three rules on each token before advancing, never
//! fails, and treats an empty sentence as a valid input with an all-empty
//! result.

use crate::token::{DepLabel, Sentence};
use serde::{Deserialize, Serialize};

/// Words that introduce the goal clause of a user story.
const TRIGGER_WORDS: &[&str] = &["so", "that", "in", "order"];

/// The {role, action, goal} triple extracted from one story.
///
/// Any subset of the fields may be missing; extraction is total and partial
/// triples are ordinary outputs, not errors.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Components {
    /// Acting role: a single token's text, e.g. "I" or "admin".
    pub role: Option<String>,
    /// What the role wants to do, e.g. "reset my password".
    pub action: String,
    /// Why, e.g. "I can regain access".
    pub goal: String,
}

impl Components {
    /// True when role, action, and goal are all present and non-empty.
    pub fn is_complete(&self) -> bool {
        self.role.as_deref().is_some_and(|r| !r.is_empty())
            && !self.action.is_empty()
            && !self.goal.is_empty()
    }
}

/// Extract {role, action, goal} from an annotated sentence.
pub fn extract(sentence: &Sentence) -> Components {
    let mut role = None;
    let mut action = String::new();
    let mut goal = String::new();
    let mut xcomp_seen = false;

    for token in sentence.tokens() {
        if role.is_none() && token.dep == DepLabel::Subject {
            role = Some(token.text.clone());
        }
        if !xcomp_seen && token.dep == DepLabel::Xcomp {
            xcomp_seen = true;
            action = sentence
                .subtree(token.index)
                .into_iter()
                .filter(|t| t.dep != DepLabel::Punct)
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
        }
        if TRIGGER_WORDS.contains(&token.text.as_str()) {
            // Skip the trigger and exactly one token after it, keep the rest.
            goal = sentence
                .tokens()
                .iter()
                .skip(token.index + 2)
                .map(|t| t.text.as_str())
                .collect::<Vec<_>>()
                .join(" ");
            break;
        }
    }

    Components { role, action, goal }
}
