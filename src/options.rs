use std::cmp::Ordering;

/// Direction in which sources are sorted, and in which the merged output
/// comes out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Order {
    /// Highest key first. Ranked lists (play counts, scores) use this.
    #[default]
    Descending,
    /// Lowest key first.
    Ascending,
}

impl Order {
    /// Turn a key comparison `a.cmp(b)` into a priority comparison:
    /// `Greater` means `a` is emitted before `b`.
    pub fn priority(self, key_order: Ordering) -> Ordering {
        match self {
            Order::Descending => key_order,
            Order::Ascending => key_order.reverse(),
        }
    }

    /// Whether `prev` followed by `next` respects this direction.
    /// Equal keys are always in order.
    pub fn in_order(self, prev_vs_next: Ordering) -> bool {
        self.priority(prev_vs_next) != Ordering::Less
    }
}

/// Tuning knobs for a [`RankedMerger`](crate::RankedMerger).
///
/// ```
/// use ranked_merge::{Options, Order};
///
/// let opts = Options::default().limit(10).verify_sorted(true);
/// assert_eq!(opts.order, Order::Descending);
/// assert_eq!(opts.limit, Some(10));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Options {
    /// Sort direction of the sources and of the output.
    pub order: Order,
    /// Stop after this many items (top-N). `None` merges everything.
    pub limit: Option<usize>,
    /// Check every source before merging. Only the fallible entry points
    /// read this: `merge*_checked`, `merge_from*` and `merge_into*`.
    /// The plain `merge*` calls return a bare `Vec` and always trust their
    /// input. Off by default.
    pub verify_sorted: bool,
}

impl Options {
    pub fn order(mut self, order: Order) -> Self {
        self.order = order;
        self
    }

    pub fn limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn verify_sorted(mut self, verify: bool) -> Self {
        self.verify_sorted = verify;
        self
    }
}
