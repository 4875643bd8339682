// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Midpoint-partition node of the interval tree.

use crate::segment::Interval;

/// A node holding the segments that straddle its midpoint.
///
/// Segments entirely before the midpoint go to `left`, segments entirely
/// after it go to `right`.
#[derive(Debug)]
pub struct IntervalNode<T> {
    midpoint: usize,
    segments: Vec<T>,
    left: Option<Box<IntervalNode<T>>>,
    right: Option<Box<IntervalNode<T>>>,
}

impl<T: Interval + Clone> IntervalNode<T> {
    /// Build a node (and its subtrees) from a non-empty segment list.
    ///
    /// Returns `None` for an empty list.
    pub fn build(segments: Vec<T>) -> Option<Self> {
        let midpoint = midpoint(&segments)?;
        let mut left = Vec::new();
        let mut right = Vec::new();
        let mut own = Vec::new();

        for s in segments {
            if s.end() < midpoint {
                left.push(s);
            } else if s.start() > midpoint {
                right.push(s);
            } else {
                own.push(s);
            }
        }

        Some(Self {
            midpoint,
            segments: own,
            left: IntervalNode::build(left).map(Box::new),
            right: IntervalNode::build(right).map(Box::new),
        })
    }

    pub fn midpoint(&self) -> usize {
        self.midpoint
    }

    /// Segments stored at this node.
    pub fn segments(&self) -> &[T] {
        &self.segments
    }

    pub fn left(&self) -> Option<&IntervalNode<T>> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&IntervalNode<T>> {
        self.right.as_deref()
    }

    /// Every stored segment intersecting `query`, except those equal to it.
    pub fn overlapping_segments(&self, query: &impl Interval) -> Vec<&T> {
        let mut found = Vec::new();
        self.collect_overlapping(query, &mut found);
        let query = query.segment();
        found.retain(|s| s.segment() != query);
        found
    }

    fn collect_overlapping<'a>(&'a self, query: &impl Interval, found: &mut Vec<&'a T>) {
        if self.midpoint < query.start() {
            if let Some(right) = &self.right {
                right.collect_overlapping(query, found);
            }
            found.extend(self.segments.iter().filter(|s| s.end() >= query.start()));
        } else if query.end() < self.midpoint {
            if let Some(left) = &self.left {
                left.collect_overlapping(query, found);
            }
            found.extend(self.segments.iter().filter(|s| s.start() <= query.end()));
        } else {
            found.extend(self.segments.iter());
            if let Some(right) = &self.right {
                right.collect_overlapping(query, found);
            }
            if let Some(left) = &self.left {
                left.collect_overlapping(query, found);
            }
        }
    }
}

/// `floor((min start + max end) / 2)`, or `None` without segments.
fn midpoint<T: Interval>(segments: &[T]) -> Option<usize> {
    let lo = segments.iter().map(Interval::start).min()?;
    let hi = segments.iter().map(Interval::end).max()?;
    Some((lo + hi) / 2)
}

#[cfg(test)]
#[path = "node_tests.rs"]
mod tests;
