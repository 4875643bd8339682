// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use crate::segment::Segment;

fn seg(start: usize, end: usize) -> Segment {
    Segment::new(start, end)
}

fn node(segments: &[Segment]) -> IntervalNode<Segment> {
    IntervalNode::build(segments.to_vec()).unwrap()
}

#[test]
fn empty_list_builds_no_node() {
    assert!(IntervalNode::<Segment>::build(Vec::new()).is_none());
}

#[test]
fn straddling_segments_stay_at_the_node() {
    let n = node(&[seg(1, 5), seg(3, 8)]);
    assert_eq!(n.midpoint(), 4);
    assert_eq!(n.segments(), &[seg(1, 5), seg(3, 8)]);
    assert!(n.left().is_none());
    assert!(n.right().is_none());
}

#[test]
fn segments_are_partitioned_around_the_midpoint() {
    let n = node(&[seg(1, 5), seg(6, 10), seg(8, 12)]);
    assert_eq!(n.midpoint(), 6);
    assert_eq!(n.segments(), &[seg(6, 10)]);
    assert_eq!(n.left().unwrap().segments(), &[seg(1, 5)]);
    assert_eq!(n.right().unwrap().segments(), &[seg(8, 12)]);
}

#[test]
fn query_returns_overlapping_segments() {
    let n = node(&[seg(1, 5), seg(3, 8)]);
    let found = n.overlapping_segments(&seg(4, 7));
    assert_eq!(found, vec![&seg(1, 5), &seg(3, 8)]);
}

#[test]
fn query_excludes_an_equal_segment() {
    let n = node(&[seg(1, 5), seg(3, 8)]);
    let found = n.overlapping_segments(&seg(1, 5));
    assert_eq!(found, vec![&seg(3, 8)]);
}

#[test]
fn straddling_query_collects_node_then_right_then_left() {
    let n = node(&[seg(1, 5), seg(6, 10), seg(8, 12)]);
    let found = n.overlapping_segments(&seg(4, 9));
    assert_eq!(found, vec![&seg(6, 10), &seg(8, 12), &seg(1, 5)]);
}

#[test]
fn query_right_of_midpoint_skips_left_subtree() {
    let n = node(&[seg(0, 1), seg(2, 6), seg(9, 12)]);
    assert_eq!(n.midpoint(), 6);
    let found = n.overlapping_segments(&seg(7, 10));
    assert_eq!(found, vec![&seg(9, 12)]);
}

#[test]
fn query_left_of_midpoint_filters_node_segments_by_start() {
    let n = node(&[seg(0, 1), seg(2, 6), seg(9, 12)]);
    let found = n.overlapping_segments(&seg(1, 3));
    assert_eq!(found, vec![&seg(0, 1), &seg(2, 6)]);

    let found = n.overlapping_segments(&seg(0, 0));
    assert_eq!(found, vec![&seg(0, 1)]);
}

#[test]
fn disjoint_query_finds_nothing() {
    let n = node(&[seg(0, 1), seg(9, 12)]);
    assert!(n.overlapping_segments(&seg(4, 5)).is_empty());
}
