// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Interval tree over a fixed segment list.

use std::collections::HashSet;

use super::node::IntervalNode;
use crate::segment::{Interval, Segment};

/// Interval tree built once from a segment list.
#[derive(Debug)]
pub struct IntervalTree<T> {
    root: Option<IntervalNode<T>>,
}

impl<T: Interval + Clone> IntervalTree<T> {
    pub fn new(segments: &[T]) -> Self {
        Self {
            root: IntervalNode::build(segments.to_vec()),
        }
    }

    pub fn root(&self) -> Option<&IntervalNode<T>> {
        self.root.as_ref()
    }

    /// Stored segments intersecting `query`, excluding ones equal to it.
    pub fn overlapping_segments(&self, query: &impl Interval) -> Vec<&T> {
        match &self.root {
            Some(root) => root.overlapping_segments(query),
            None => Vec::new(),
        }
    }

    /// Greedy longest-first removal of overlapping segments.
    ///
    /// Segments are visited by size descending, ties by start ascending.
    /// Each visited segment that survived so far removes everything it
    /// overlaps. The survivors of `segments` are returned sorted by start.
    /// Segments are identified by coordinates.
    pub fn remove_overlapping_segments<S: Interval + Clone>(&self, segments: &[S]) -> Vec<S> {
        let mut by_size: Vec<&S> = segments.iter().collect();
        by_size.sort_by(|a, b| b.size().cmp(&a.size()).then(a.start().cmp(&b.start())));

        let mut removed: HashSet<Segment> = HashSet::new();
        for s in by_size {
            if removed.contains(&s.segment()) {
                continue;
            }
            for overlap in self.overlapping_segments(s) {
                removed.insert(overlap.segment());
            }
        }

        let mut kept: Vec<S> = segments
            .iter()
            .filter(|s| !removed.contains(&s.segment()))
            .cloned()
            .collect();
        kept.sort_by_key(Interval::start);
        kept
    }
}

#[cfg(test)]
#[path = "tree_tests.rs"]
mod tests;
