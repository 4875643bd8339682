// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword search facade.
//!
//! Normalizes keywords on insertion, scans text with the automaton and
//! applies the configured filters:
//! 1. whole-word filtering against the original text
//! 2. overlap removal via the interval tree

use std::collections::HashMap;
use std::iter;

use serde::Serialize;

use crate::automaton::{Automaton, Lifecycle};
use crate::error::{Error, Result};
use crate::interval::IntervalTree;
use crate::normalize::{fold_symbol, is_blank, is_word_symbol, prepare_keyword};
use crate::options::TrieOptions;
use crate::segment::Match;

/// Number of matches of one keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WordCount {
    pub keyword: String,
    pub occurrences: usize,
}

impl WordCount {
    pub fn new(keyword: impl Into<String>, occurrences: usize) -> Self {
        Self {
            keyword: keyword.into(),
            occurrences,
        }
    }
}

/// A set of keywords that can be searched for in text.
///
/// ```
/// use kwtrie::{Trie, TrieOptions};
///
/// let trie = Trie::new(["apple", "banana"], TrieOptions::default()).unwrap();
/// let found = trie.matches("apple banana");
/// assert_eq!(found[1].start, 6);
/// assert_eq!(trie.non_matches("an apple"), vec!["an ".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct Trie {
    options: TrieOptions,
    automaton: Automaton,
}

impl Trie {
    /// Build a trie from `keywords`.
    ///
    /// Fails with `InvalidInput` if any keyword is empty or only whitespace.
    pub fn new<I, S>(keywords: I, options: TrieOptions) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = Self::with_options(options);
        for keyword in keywords {
            trie.add_keyword(keyword.as_ref())?;
        }
        tracing::debug!(keywords = trie.keywords().len(), "created trie");
        Ok(trie)
    }

    /// An empty trie.
    pub fn with_options(options: TrieOptions) -> Self {
        Self {
            options,
            automaton: Automaton::new(),
        }
    }

    /// Add one keyword.
    ///
    /// Fails with `InvalidInput` for empty or whitespace-only keywords, and
    /// with `State` once the trie has been searched.
    pub fn add_keyword(&mut self, keyword: &str) -> Result<()> {
        if is_blank(keyword) {
            return Err(Error::empty_keyword());
        }
        let prepared = prepare_keyword(keyword, &self.options);
        self.automaton.insert(&prepared)
    }

    pub fn options(&self) -> &TrieOptions {
        &self.options
    }

    /// Keywords as stored, after normalization.
    pub fn keywords(&self) -> &[String] {
        self.automaton.keywords()
    }

    pub fn automaton(&self) -> &Automaton {
        &self.automaton
    }

    /// Construct failure links now instead of on the first search.
    pub fn build(&self) {
        self.automaton.build();
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.automaton.lifecycle()
    }

    /// Every keyword occurrence in `text` that passes the configured filters.
    ///
    /// Results are in scan order (ascending end position), or sorted by
    /// start when overlaps are removed.
    pub fn matches(&self, text: &str) -> Vec<Match> {
        // Any query freezes the trie, even on empty text.
        self.automaton.build();
        if text.is_empty() {
            return Vec::new();
        }

        let symbols: Vec<char> = text.chars().collect();
        let found = if self.options.case_sensitive {
            self.automaton.scan(symbols.iter().copied())
        } else {
            self.automaton.scan(symbols.iter().copied().map(fold_symbol))
        };

        let found = if self.options.whole_words {
            remove_partial_matches(&symbols, found)
        } else {
            found
        };

        if self.options.allow_overlap {
            found
        } else {
            IntervalTree::new(&found).remove_overlapping_segments(&found)
        }
    }

    /// Substrings of `text` not covered by any match, left to right.
    ///
    /// The whole text is returned when nothing matches; empty text gives an
    /// empty list.
    pub fn non_matches(&self, text: &str) -> Vec<String> {
        let mut matches = self.matches(text);
        matches.sort_by_key(|m| m.start);

        let offsets: Vec<usize> = text
            .char_indices()
            .map(|(offset, _)| offset)
            .chain(iter::once(text.len()))
            .collect();
        let len = offsets.len() - 1;
        let slice = |from: usize, to: usize| text[offsets[from]..offsets[to]].to_string();

        let mut gaps = Vec::new();
        let mut cursor = 0;
        for m in &matches {
            if cursor < m.start {
                gaps.push(slice(cursor, m.start));
            }
            cursor = cursor.max(m.end + 1);
        }
        if cursor < len {
            gaps.push(slice(cursor, len));
        }

        gaps
    }

    /// Occurrence count per keyword, in order of first match.
    pub fn string_occurrences(&self, text: &str) -> Vec<WordCount> {
        let mut counts: Vec<WordCount> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        for m in self.matches(text) {
            match index.get(&m.keyword) {
                Some(&i) => counts[i].occurrences += 1,
                None => {
                    index.insert(m.keyword.clone(), counts.len());
                    counts.push(WordCount::new(m.keyword, 1));
                }
            }
        }

        counts
    }
}

/// Drop matches preceded or followed by a word symbol.
fn remove_partial_matches(symbols: &[char], matches: Vec<Match>) -> Vec<Match> {
    matches
        .into_iter()
        .filter(|m| {
            let clear_before = m.start == 0 || !is_word_symbol(symbols[m.start - 1]);
            let clear_after = m.end + 1 == symbols.len() || !is_word_symbol(symbols[m.end + 1]);
            clear_before && clear_after
        })
        .collect()
}

#[cfg(test)]
#[path = "trie_tests.rs"]
mod tests;
