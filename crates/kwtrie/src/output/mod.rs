//! Output formatting for search results.

use serde::Serialize;

use crate::segment::Match;
use crate::trie::WordCount;

pub mod json;
pub mod text;

/// What a search produced for one input.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Findings {
    Matches(Vec<Match>),
    Gaps(Vec<String>),
    Counts(Vec<WordCount>),
}

impl Findings {
    pub fn is_empty(&self) -> bool {
        match self {
            Findings::Matches(matches) => matches.is_empty(),
            Findings::Gaps(gaps) => gaps.is_empty(),
            Findings::Counts(counts) => counts.is_empty(),
        }
    }
}

/// Findings for one input, keyed by its display path.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputReport {
    pub path: String,
    #[serde(flatten)]
    pub findings: Findings,
}

impl InputReport {
    pub fn new(path: impl Into<String>, findings: Findings) -> Self {
        Self {
            path: path.into(),
            findings,
        }
    }
}
