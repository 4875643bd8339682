// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Keyword and symbol normalization.

use crate::options::TrieOptions;

/// Lowercase a symbol when its lowercase form is a single symbol.
///
/// Symbols with multi-symbol lowercase forms (e.g. `İ`) are kept as-is, so
/// a folded keyword always has as many symbols as the original.
pub fn fold_symbol(symbol: char) -> char {
    let mut lower = symbol.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(folded), None) => folded,
        _ => symbol,
    }
}

/// True for a keyword that is empty or only whitespace.
pub fn is_blank(keyword: &str) -> bool {
    keyword.trim().is_empty()
}

/// Apply case folding and trimming as configured.
pub fn prepare_keyword(keyword: &str, options: &TrieOptions) -> String {
    let keyword = if options.remove_white_spaces {
        keyword.trim()
    } else {
        keyword
    };

    if options.case_sensitive {
        keyword.to_string()
    } else {
        keyword.chars().map(fold_symbol).collect()
    }
}

/// Symbols counted as part of a word by the whole-word filter.
pub fn is_word_symbol(symbol: char) -> bool {
    symbol.is_ascii_alphanumeric()
}

#[cfg(test)]
#[path = "normalize_tests.rs"]
mod tests;
