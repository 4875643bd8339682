// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Overlap resolution for match lists.
//!
//! A midpoint-partition interval tree answers "which stored segments overlap
//! this one" and drives a greedy longest-first filter that keeps a set of
//! mutually non-overlapping segments.

pub mod node;
pub mod tree;

pub use node::IntervalNode;
pub use tree::IntervalTree;
