// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Matching options.

use serde::{Deserialize, Serialize};

/// How keywords are stored and how matches are filtered.
///
/// Fixed once the trie is built. Partial configuration uses struct update
/// syntax, or a config table where missing keys take their defaults:
///
/// ```
/// use kwtrie::TrieOptions;
///
/// let options = TrieOptions { whole_words: true, ..TrieOptions::default() };
/// assert!(options.allow_overlap);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrieOptions {
    /// Report matches that overlap each other (default: true).
    #[serde(alias = "allowOverlap")]
    pub allow_overlap: bool,

    /// Compare symbols exactly (default: false).
    #[serde(alias = "caseSensitive")]
    pub case_sensitive: bool,

    /// Reject matches flanked by alphanumeric symbols (default: false).
    #[serde(alias = "wholeWords")]
    pub whole_words: bool,

    /// Trim surrounding whitespace from keywords on insertion (default: false).
    #[serde(alias = "removeWhiteSpaces")]
    pub remove_white_spaces: bool,
}

impl Default for TrieOptions {
    fn default() -> Self {
        Self {
            allow_overlap: true,
            case_sensitive: false,
            whole_words: false,
            remove_white_spaces: false,
        }
    }
}

/// Known option keys, as accepted in config files.
pub const KNOWN_OPTION_KEYS: &[&str] = &[
    "allow_overlap",
    "allowOverlap",
    "case_sensitive",
    "caseSensitive",
    "whole_words",
    "wholeWords",
    "remove_white_spaces",
    "removeWhiteSpaces",
];

#[cfg(test)]
#[path = "options_tests.rs"]
mod tests;
