// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Closed intervals and keyword matches.
//!
//! Positions are symbol indices: the n-th Unicode scalar value of the
//! scanned text is at position n. Both ends are inclusive.

use serde::Serialize;

/// A closed integer interval `[start, end]`.
///
/// `start <= end` is assumed, not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

impl Segment {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }
}

/// Anything with closed-interval coordinates.
pub trait Interval {
    fn start(&self) -> usize;

    fn end(&self) -> usize;

    /// Number of points in the interval.
    fn size(&self) -> usize {
        self.end() - self.start() + 1
    }

    /// Coordinate-only view; equality between intervals is defined on it.
    fn segment(&self) -> Segment {
        Segment::new(self.start(), self.end())
    }

    /// True if neither interval lies entirely before the other.
    fn overlaps(&self, other: &impl Interval) -> bool {
        self.start() <= other.end() && self.end() >= other.start()
    }
}

impl Interval for Segment {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }
}

/// A keyword occurrence found by the automaton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    /// Position of the first symbol of the occurrence.
    pub start: usize,
    /// Position of the last symbol of the occurrence.
    pub end: usize,
    /// The keyword as stored in the automaton (after normalization).
    pub keyword: String,
}

impl Match {
    pub fn new(start: usize, end: usize, keyword: impl Into<String>) -> Self {
        Self {
            start,
            end,
            keyword: keyword.into(),
        }
    }
}

impl Interval for Match {
    fn start(&self) -> usize {
        self.start
    }

    fn end(&self) -> usize {
        self.end
    }
}

#[cfg(test)]
#[path = "segment_tests.rs"]
mod tests;
