// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Trie states and their arena handles.

use std::collections::BTreeMap;

/// Index of a state in the automaton arena.
///
/// Handles are plain integers, so failure links can point back at
/// ancestors without ownership cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(u32);

impl StateId {
    /// The root state is always the first one allocated.
    pub const ROOT: StateId = StateId(0);

    /// `None` once `index` no longer fits in a handle.
    pub(crate) fn from_index(index: usize) -> Option<Self> {
        u32::try_from(index).ok().map(StateId)
    }

    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Index of a keyword in the automaton's keyword table.
pub type KeywordId = usize;

/// A node of the keyword trie.
#[derive(Debug, Clone, Default)]
pub struct State {
    depth: usize,
    transitions: BTreeMap<char, StateId>,
    outputs: Vec<KeywordId>,
}

impl State {
    pub fn new(depth: usize) -> Self {
        Self {
            depth,
            ..Self::default()
        }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn is_root(&self) -> bool {
        self.depth == 0
    }

    /// The root handle if this is the root state.
    pub fn root(&self) -> Option<StateId> {
        self.is_root().then_some(StateId::ROOT)
    }

    /// Goto transition on `symbol`.
    ///
    /// Without a child, the root loops back to itself unless
    /// `ignore_root_fallback` is set.
    pub fn transition(&self, symbol: char, ignore_root_fallback: bool) -> Option<StateId> {
        match self.transitions.get(&symbol) {
            Some(&next) => Some(next),
            None if !ignore_root_fallback => self.root(),
            None => None,
        }
    }

    /// Outgoing goto edges in symbol order.
    pub fn transitions(&self) -> impl Iterator<Item = (char, StateId)> + '_ {
        self.transitions.iter().map(|(&c, &s)| (c, s))
    }

    /// Keywords terminating directly at this state.
    pub fn outputs(&self) -> &[KeywordId] {
        &self.outputs
    }

    pub fn add_outputs(&mut self, keywords: impl IntoIterator<Item = KeywordId>) {
        self.outputs.extend(keywords);
    }

    pub(crate) fn set_transition(&mut self, symbol: char, target: StateId) {
        self.transitions.insert(symbol, target);
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
