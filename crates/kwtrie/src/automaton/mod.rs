// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Aho-Corasick keyword automaton.
//!
//! Construction is two-phase:
//! 1. `insert` builds the goto trie, one state per keyword prefix
//! 2. `build` computes failure links breadth-first and propagates outputs
//!
//! Phase two runs once, lazily on the first scan or when `build` is called.
//! After that the goto trie is frozen and `insert` is rejected.

pub mod state;

use std::cell::OnceCell;
use std::collections::VecDeque;

pub use state::{KeywordId, State, StateId};

use crate::error::{Error, Result};
use crate::segment::Match;

/// Whether failure links have been constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Only goto transitions exist; keywords may still be inserted.
    Unbuilt,
    /// Failure links exist; the automaton is read-only.
    Built,
}

/// Failure function and full output sets, indexed by `StateId`.
#[derive(Debug)]
pub struct FailureLinks {
    failure: Vec<StateId>,
    outputs: Vec<Vec<KeywordId>>,
}

impl FailureLinks {
    fn construct(states: &[State]) -> Self {
        let mut failure = vec![StateId::ROOT; states.len()];
        let mut outputs: Vec<Vec<KeywordId>> =
            states.iter().map(|s| s.outputs().to_vec()).collect();
        let mut queue = VecDeque::new();

        for (_, child) in states[StateId::ROOT.index()].transitions() {
            failure[child.index()] = StateId::ROOT;
            queue.push_back(child);
        }

        while let Some(current) = queue.pop_front() {
            for (symbol, target) in states[current.index()].transitions() {
                queue.push_back(target);

                // Terminates at the root, which has a transition on every symbol.
                let mut trace = failure[current.index()];
                let fallback = loop {
                    if let Some(next) = states[trace.index()].transition(symbol, false) {
                        break next;
                    }
                    trace = failure[trace.index()];
                };

                failure[target.index()] = fallback;
                let inherited = outputs[fallback.index()].clone();
                outputs[target.index()].extend(inherited);
            }
        }

        Self { failure, outputs }
    }

    /// Failure target of `state`. The root fails to itself.
    pub fn failure(&self, state: StateId) -> StateId {
        self.failure[state.index()]
    }

    /// Keywords recognized on reaching `state`, inherited ones included.
    pub fn outputs(&self, state: StateId) -> &[KeywordId] {
        &self.outputs[state.index()]
    }
}

/// Keyword automaton owning every state in an arena.
#[derive(Debug)]
pub struct Automaton {
    states: Vec<State>,
    keywords: Vec<String>,
    /// Keyword lengths in symbols.
    lengths: Vec<usize>,
    links: OnceCell<FailureLinks>,
    state_limit: usize,
}

/// Most states an automaton can hold, bounded by the `StateId` range.
pub const MAX_STATES: usize = u32::MAX as usize;

impl Default for Automaton {
    fn default() -> Self {
        Self::new()
    }
}

impl Automaton {
    pub fn new() -> Self {
        Self::with_state_limit(MAX_STATES)
    }

    /// An automaton that refuses keywords once it would exceed `limit`
    /// states, the root included. Capped at `MAX_STATES`.
    pub fn with_state_limit(limit: usize) -> Self {
        Self {
            states: vec![State::new(0)],
            keywords: Vec::new(),
            lengths: Vec::new(),
            links: OnceCell::new(),
            state_limit: limit.min(MAX_STATES),
        }
    }

    /// Add a keyword to the goto trie.
    ///
    /// Fails with `InvalidInput` for an empty keyword, and with `State` once
    /// failure links have been built or when the keyword would exceed the
    /// state limit. No failure modifies the trie.
    pub fn insert(&mut self, keyword: &str) -> Result<()> {
        if keyword.is_empty() {
            return Err(Error::empty_keyword());
        }
        if self.lifecycle() == Lifecycle::Built {
            return Err(Error::State(format!(
                "cannot insert `{}`: automaton is already built",
                keyword
            )));
        }
        if self.states.len() + self.missing_states(keyword) > self.state_limit {
            return Err(Error::State(format!(
                "cannot insert `{}`: automaton is limited to {} states",
                keyword, self.state_limit
            )));
        }

        let mut current = StateId::ROOT;
        let mut length = 0;
        for symbol in keyword.chars() {
            current = self.ensure_child(current, symbol)?;
            length += 1;
        }

        let id = self.keywords.len();
        self.keywords.push(keyword.to_string());
        self.lengths.push(length);
        self.states[current.index()].add_outputs([id]);

        tracing::trace!(keyword, state = current.index(), "inserted keyword");
        Ok(())
    }

    /// Existing child of `from` on `symbol`, or a new one at the next depth.
    fn ensure_child(&mut self, from: StateId, symbol: char) -> Result<StateId> {
        if let Some(next) = self.states[from.index()].transition(symbol, true) {
            return Ok(next);
        }

        let depth = self.states[from.index()].depth() + 1;
        let id = StateId::from_index(self.states.len()).ok_or_else(|| {
            Error::State(format!("automaton is limited to {} states", MAX_STATES))
        })?;
        self.states.push(State::new(depth));
        self.states[from.index()].set_transition(symbol, id);
        Ok(id)
    }

    /// Number of states inserting `keyword` would add.
    fn missing_states(&self, keyword: &str) -> usize {
        let mut current = StateId::ROOT;
        for (walked, symbol) in keyword.chars().enumerate() {
            match self.states[current.index()].transition(symbol, true) {
                Some(next) => current = next,
                None => return keyword.chars().count() - walked,
            }
        }
        0
    }

    /// Construct failure links if needed. Idempotent.
    pub fn build(&self) -> &FailureLinks {
        self.links.get_or_init(|| {
            let links = FailureLinks::construct(&self.states);
            tracing::debug!(
                states = self.states.len(),
                keywords = self.keywords.len(),
                "built failure links"
            );
            links
        })
    }

    pub fn lifecycle(&self) -> Lifecycle {
        match self.links.get() {
            Some(_) => Lifecycle::Built,
            None => Lifecycle::Unbuilt,
        }
    }

    pub fn state(&self, id: StateId) -> &State {
        &self.states[id.index()]
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Inserted keywords in insertion order.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn keyword(&self, id: KeywordId) -> &str {
        &self.keywords[id]
    }

    /// Follow goto transitions, falling back through failure links.
    pub fn next_state(&self, current: StateId, symbol: char) -> StateId {
        let links = self.build();
        let mut state = current;
        loop {
            if let Some(next) = self.states[state.index()].transition(symbol, false) {
                return next;
            }
            state = links.failure(state);
        }
    }

    /// Run `symbols` through the automaton and report every keyword
    /// occurrence, in order of end position.
    ///
    /// Symbols are compared as given; callers fold case beforehand.
    pub fn scan(&self, symbols: impl IntoIterator<Item = char>) -> Vec<Match> {
        let links = self.build();
        let mut current = StateId::ROOT;
        let mut found = Vec::new();

        for (position, symbol) in symbols.into_iter().enumerate() {
            current = self.next_state(current, symbol);
            for &id in links.outputs(current) {
                let start = position + 1 - self.lengths[id];
                found.push(Match::new(start, position, self.keywords[id].as_str()));
            }
        }

        found
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
