// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Multi-keyword search.
//!
//! An Aho-Corasick automaton reports every occurrence of every keyword in
//! one pass over the text; an interval tree optionally reduces the result to
//! non-overlapping matches.

pub mod automaton;
pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod error;
pub mod interval;
pub mod normalize;
pub mod options;
pub mod output;
pub mod reader;
pub mod segment;
pub mod trie;

pub use automaton::{Automaton, Lifecycle};
pub use cli::{Cli, Command, OutputFormat, SearchArgs};
pub use error::{Error, ExitCode, Result};
pub use interval::{IntervalNode, IntervalTree};
pub use options::TrieOptions;
pub use segment::{Interval, Match, Segment};
pub use trie::{Trie, WordCount};

#[cfg(test)]
pub mod test_utils;
