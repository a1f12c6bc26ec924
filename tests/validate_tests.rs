// Precondition checks
// Opt-in sortedness verification, outside the merge hot path.

use ranked_merge::validate::{check_sorted, check_sources, check_sources_by, first_violation};
use ranked_merge::{Error, Order};

// =============================================================================
// Test 1: Trivially sorted inputs
// =============================================================================
#[test]
fn empty_and_single_item_sources_are_sorted() {
    assert!(check_sorted::<i32>(&[], Order::Descending));
    assert!(check_sorted(&[7], Order::Descending));
    assert!(check_sorted(&[7], Order::Ascending));
}

#[test]
fn equal_neighbours_never_break_order() {
    assert!(check_sorted(&[3, 3, 3], Order::Descending));
    assert!(check_sorted(&[3, 3, 3], Order::Ascending));
}

// =============================================================================
// Test 2: Locating the first violation
// =============================================================================
#[test]
fn first_violation_points_at_offending_item() {
    let items = [9, 8, 8, 10, 1, 2];
    assert_eq!(first_violation(&items, Order::Descending, i32::cmp), Some(3));
    assert_eq!(first_violation(&items, Order::Ascending, i32::cmp), Some(1));
}

// =============================================================================
// Test 3: Checking whole source sets
// =============================================================================
#[test]
fn check_sources_reports_first_bad_source() {
    let sources = vec![vec![5, 4], vec![], vec![3, 2, 9], vec![1, 8]];
    assert_eq!(
        check_sources(&sources, Order::Descending),
        Err(Error::Unsorted { source: 2, position: 2 })
    );
}

#[test]
fn check_sources_accepts_sorted_input() {
    let sources: Vec<Vec<u64>> = vec![vec![], vec![10, 10, 1], vec![0]];
    assert_eq!(check_sources(&sources, Order::Descending), Ok(()));
}

// =============================================================================
// Test 4: Custom comparators
// =============================================================================
#[test]
fn check_sources_by_uses_the_given_comparator() {
    let sources = vec![vec!["kiwi", "fig"], vec!["apple", "banana"]];
    // Descending by length: "apple"(5) then "banana"(6) breaks the order.
    assert_eq!(
        check_sources_by(&sources, Order::Descending, |a: &&str, b: &&str| a
            .len()
            .cmp(&b.len())),
        Err(Error::Unsorted { source: 1, position: 1 })
    );
}
