// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use yare::parameterized;

#[parameterized(
    single_point = { 3, 3, 1 },
    short = { 0, 1, 2 },
    long = { 2, 10, 9 },
)]
fn size_counts_both_ends(start: usize, end: usize, expected: usize) {
    assert_eq!(Segment::new(start, end).size(), expected);
}

#[test]
fn equality_is_coordinate_equality() {
    assert_eq!(Segment::new(1, 5), Segment::new(1, 5));
    assert_ne!(Segment::new(1, 5), Segment::new(1, 6));
    assert_ne!(Segment::new(0, 5), Segment::new(1, 5));
}

#[parameterized(
    nested = { (0, 10), (2, 3), true },
    touching = { (0, 2), (2, 4), true },
    adjacent = { (0, 1), (2, 3), false },
    disjoint = { (6, 7), (0, 4), false },
)]
fn overlap_is_symmetric(a: (usize, usize), b: (usize, usize), expected: bool) {
    let a = Segment::new(a.0, a.1);
    let b = Segment::new(b.0, b.1);
    assert_eq!(a.overlaps(&b), expected);
    assert_eq!(b.overlaps(&a), expected);
}

#[test]
fn match_exposes_its_segment() {
    let m = Match::new(4, 8, "apple");
    assert_eq!(m.segment(), Segment::new(4, 8));
    assert_eq!(m.size(), 5);
}

#[test]
fn matches_with_same_coordinates_share_a_segment() {
    let a = Match::new(0, 1, "ab");
    let b = Match::new(0, 1, "AB");
    assert_ne!(a, b);
    assert_eq!(a.segment(), b.segment());
}

#[test]
fn match_serializes_flat() {
    let json = serde_json::to_value(Match::new(0, 4, "apple")).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "start": 0, "end": 4, "keyword": "apple" })
    );
}
