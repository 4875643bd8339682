// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::options::TrieOptions;

/// Find many keywords in text at once.
#[derive(Parser)]
#[command(name = "kwtrie")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Use specific config file
    #[arg(short = 'C', long = "config", global = true, env = "KWTRIE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Print every keyword match
    Matches(SearchArgs),
    /// Print the text between matches
    #[command(alias = "non-matches")]
    Gaps(SearchArgs),
    /// Print how often each keyword matched
    Count(SearchArgs),
}

impl Command {
    pub fn args(&self) -> &SearchArgs {
        match self {
            Command::Matches(args) | Command::Gaps(args) | Command::Count(args) => args,
        }
    }
}

#[derive(clap::Args, Default)]
pub struct SearchArgs {
    /// Files to search (stdin when omitted)
    #[arg(value_name = "PATH")]
    pub paths: Vec<PathBuf>,

    /// Keyword to search for (repeatable)
    #[arg(short, long = "keyword", value_name = "KEYWORD")]
    pub keywords: Vec<String>,

    /// File with one keyword per line
    #[arg(short = 'f', long, value_name = "FILE")]
    pub keywords_file: Option<PathBuf>,

    /// Match case exactly
    #[arg(long)]
    pub case_sensitive: bool,

    /// Only match whole words
    #[arg(long)]
    pub whole_words: bool,

    /// Drop overlapping matches, keeping the longest
    #[arg(long)]
    pub no_overlap: bool,

    /// Trim surrounding whitespace from keywords
    #[arg(long)]
    pub trim_keywords: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long)]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,
}

impl SearchArgs {
    /// Layer the command-line switches over `options`.
    ///
    /// Flags only ever turn behavior on; an unset flag keeps the config value.
    pub fn apply(&self, mut options: TrieOptions) -> TrieOptions {
        if self.case_sensitive {
            options.case_sensitive = true;
        }
        if self.whole_words {
            options.whole_words = true;
        }
        if self.no_overlap {
            options.allow_overlap = false;
        }
        if self.trim_keywords {
            options.remove_white_spaces = true;
        }
        options
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
