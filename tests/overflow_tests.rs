//! Overflow detector tests
//!
//! Boundary semantics: comparisons are strict, so an element flush with a
//! container edge is not overflowing while one unit past is.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::indexing_slicing,
    clippy::panic
)]

use matview::overflow::{is_overflowing, BoundingBox, OverflowDirection};
use test_case::test_case;

fn container() -> BoundingBox {
    BoundingBox::new(0.0, 0.0, 200.0, 100.0)
}

fn element_at(top: f64, left: f64) -> BoundingBox {
    BoundingBox::new(top, left, 40.0, 20.0)
}

#[test_case(OverflowDirection::Left, element_at(0.0, -41.0), true; "right edge past left bound")]
#[test_case(OverflowDirection::Left, element_at(0.0, -40.0), false; "flush with left bound")]
#[test_case(OverflowDirection::Right, element_at(0.0, 201.0), true; "left edge past right bound")]
#[test_case(OverflowDirection::Right, element_at(0.0, 200.0), false; "flush with right bound")]
#[test_case(OverflowDirection::Top, element_at(-21.0, 0.0), true; "bottom edge past top bound")]
#[test_case(OverflowDirection::Top, element_at(-20.0, 0.0), false; "flush with top bound")]
#[test_case(OverflowDirection::Bottom, element_at(101.0, 0.0), true; "top edge past bottom bound")]
#[test_case(OverflowDirection::Bottom, element_at(100.0, 0.0), false; "flush with bottom bound")]
fn overflow_boundaries(direction: OverflowDirection, element: BoundingBox, expected: bool) {
    assert_eq!(is_overflowing(&element, &container(), direction), expected);
}

#[test]
fn element_inside_container_never_overflows() {
    let element = element_at(40.0, 80.0);
    for direction in OverflowDirection::ALL {
        assert!(!is_overflowing(&element, &container(), direction));
    }
}

#[test]
fn offsets_are_relative_to_the_container() {
    // Same geometry shifted by (500, 500) in page coordinates: results are
    // identical because offsets are taken relative to the container.
    let shifted_container = BoundingBox::new(500.0, 500.0, 200.0, 100.0);
    let shifted_element = BoundingBox::new(500.0, 701.0, 40.0, 20.0);
    assert!(is_overflowing(
        &shifted_element,
        &shifted_container,
        OverflowDirection::Right
    ));
    assert!(!is_overflowing(
        &shifted_element,
        &shifted_container,
        OverflowDirection::Left
    ));
}

#[test]
fn unknown_direction_names_mean_no_overflow() {
    assert_eq!(OverflowDirection::parse("up"), None);
    assert_eq!(OverflowDirection::parse("LEFT"), None);
}
