use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// External form of a rule, as hand-authored in the builtin table or supplied
/// through a JSON rule document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RuleSpec {
    /// Literal reply text. May carry `<br>` line-break markup; the engine
    /// returns it verbatim and rendering is the caller's concern.
    pub response: String,
    /// Vocabulary the match percentage is computed over. Must be non-empty.
    pub trigger_words: Vec<String>,
    /// Exact rules qualify on trigger overlap alone, without a required-word
    /// gate.
    #[serde(default)]
    pub is_exact: bool,
    /// Words that must all appear (stemmed) in the input for a non-exact rule
    /// to be eligible.
    #[serde(default)]
    pub required_words: Vec<String>,
}

/// Compiled rule. Vocabulary is stemmed once at table construction; the
/// trigger list length (counted before stemming collapses duplicates) stays
/// the scoring divisor.
#[derive(Debug, Clone)]
pub struct Rule {
    pub response: String,
    pub trigger_stems: HashSet<String>,
    pub trigger_count: usize,
    pub required_stems: Vec<String>,
    pub is_exact: bool,
}

/// One row of the per-call score board.
#[derive(Debug, Clone, Serialize)]
pub struct RuleScore {
    pub response: String,
    pub score: u32,
}

/// Winner of one matching call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub reply_text: String,
    /// Integer match percentage, 0-100.
    pub score: u32,
    /// False when the fallback response was returned.
    pub matched: bool,
}

#[derive(Debug, Error)]
pub enum RuleSetError {
    #[error("rule at index {index} has no trigger words")]
    EmptyTriggerWords { index: usize },
    #[error("failed reading rule table: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed parsing rule table: {0}")]
    Parse(#[from] serde_json::Error),
}
