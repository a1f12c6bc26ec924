use std::cmp::Ordering;

use crate::error::{Error, Result};
use crate::options::Order;

/// Index of the first item in `items` that breaks `order`, by `cmp`.
///
/// Returns `None` when the slice is sorted (empty and single-item slices
/// always are). Equal neighbours never break the order.
pub fn first_violation<T, F>(items: &[T], order: Order, mut cmp: F) -> Option<usize>
where
    F: FnMut(&T, &T) -> Ordering,
{
    items
        .windows(2)
        .position(|pair| !order.in_order(cmp(&pair[0], &pair[1])))
        .map(|i| i + 1)
}

/// Check that a single source is sorted in `order`.
pub fn check_sorted<T: Ord>(items: &[T], order: Order) -> bool {
    first_violation(items, order, T::cmp).is_none()
}

/// Check every source, reporting the first offending `(source, position)`.
///
/// This is the opt-in guard behind [`Options::verify_sorted`](crate::Options).
/// It costs one extra pass over the input; the merge itself never validates.
pub fn check_sources_by<S, T, F>(sources: &[S], order: Order, mut cmp: F) -> Result<()>
where
    S: AsRef<[T]>,
    F: FnMut(&T, &T) -> Ordering,
{
    for (source, items) in sources.iter().enumerate() {
        if let Some(position) = first_violation(items.as_ref(), order, &mut cmp) {
            tracing::warn!(source, position, "rejecting unsorted source");
            return Err(Error::Unsorted { source, position });
        }
    }
    Ok(())
}

/// [`check_sources_by`] for items that are their own key.
pub fn check_sources<S, T>(sources: &[S], order: Order) -> Result<()>
where
    S: AsRef<[T]>,
    T: Ord,
{
    check_sources_by(sources, order, T::cmp)
}
