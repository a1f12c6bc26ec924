use std::cmp::Ordering;
use std::convert::Infallible;

/// Array-backed binary heap ordered by a comparator value.
///
/// The comparator decides priority: `cmp(a, b) == Greater` means `a` is
/// popped before `b`. Passing `|a, b| a.cmp(b)` gives a max-heap,
/// `|a, b| b.cmp(a)` a min-heap.
///
/// Layout is the usual implicit tree over a `Vec`:
///
/// ```text
///             [0]
///          /       \
///       [1]         [2]
///      /   \       /   \
///    [3]   [4]   [5]   [6]
///
/// parent(i) = (i - 1) / 2      children(i) = 2i + 1, 2i + 2
/// ```
///
/// Unlike `std::collections::BinaryHeap` the ordering is not tied to
/// `T: Ord`, so the same element type can be ranked several ways, and the
/// comparator may be fallible (see [`try_push`](Self::try_push)).
pub struct BinaryHeap<T, F> {
    nodes: Vec<T>,
    cmp: F,
}

impl<T, F> BinaryHeap<T, F> {
    /// Create an empty heap with the given comparator.
    pub fn new(cmp: F) -> Self {
        Self::with_capacity(0, cmp)
    }

    /// Create an empty heap with room for `capacity` entries.
    /// The merger sizes this to the number of sources, which bounds the heap.
    pub fn with_capacity(capacity: usize, cmp: F) -> Self {
        BinaryHeap {
            nodes: Vec::with_capacity(capacity),
            cmp,
        }
    }

    /// Number of entries in the heap.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the heap is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// The entry that the next pop would return.
    pub fn peek(&self) -> Option<&T> {
        self.nodes.first()
    }

    /// Consume the heap, returning its entries in heap (not sorted) order.
    pub fn into_vec(self) -> Vec<T> {
        self.nodes
    }
}

impl<T, F> BinaryHeap<T, F>
where
    F: FnMut(&T, &T) -> Ordering,
{
    /// Insert an entry. O(log n).
    pub fn push(&mut self, item: T) {
        let Self { nodes, cmp } = self;
        nodes.push(item);
        let last = nodes.len() - 1;
        let Ok(()) = sift_up(nodes, last, &mut infallible::<T, F>(cmp));
    }

    /// Remove and return the highest-priority entry. O(log n).
    pub fn pop(&mut self) -> Option<T> {
        let Self { nodes, cmp } = self;
        if nodes.is_empty() {
            return None;
        }
        let top = nodes.swap_remove(0);
        let Ok(()) = sift_down(nodes, 0, &mut infallible::<T, F>(cmp));
        Some(top)
    }
}

impl<T, F, E> BinaryHeap<T, F>
where
    F: FnMut(&T, &T) -> Result<Ordering, E>,
{
    /// Insert an entry using a fallible comparator.
    ///
    /// On error the entry stays in the heap but the heap order is no longer
    /// guaranteed; callers are expected to abandon the heap.
    pub fn try_push(&mut self, item: T) -> Result<(), E> {
        let Self { nodes, cmp } = self;
        nodes.push(item);
        let last = nodes.len() - 1;
        sift_up(nodes, last, cmp)
    }

    /// Remove and return the highest-priority entry using a fallible
    /// comparator. Same caveat as [`try_push`](Self::try_push) on error.
    pub fn try_pop(&mut self) -> Result<Option<T>, E> {
        let Self { nodes, cmp } = self;
        if nodes.is_empty() {
            return Ok(None);
        }
        let top = nodes.swap_remove(0);
        sift_down(nodes, 0, cmp)?;
        Ok(Some(top))
    }
}

fn infallible<T, F>(cmp: &mut F) -> impl FnMut(&T, &T) -> Result<Ordering, Infallible> + '_
where
    F: FnMut(&T, &T) -> Ordering,
{
    move |a, b| Ok(cmp(a, b))
}

/// Move `nodes[index]` toward the root while it outranks its parent.
fn sift_up<T, E>(
    nodes: &mut [T],
    mut index: usize,
    cmp: &mut impl FnMut(&T, &T) -> Result<Ordering, E>,
) -> Result<(), E> {
    while index > 0 {
        let parent = (index - 1) / 2;
        if cmp(&nodes[index], &nodes[parent])? != Ordering::Greater {
            break;
        }
        nodes.swap(index, parent);
        index = parent;
    }
    Ok(())
}

/// Move `nodes[index]` toward the leaves while a child outranks it.
fn sift_down<T, E>(
    nodes: &mut [T],
    mut index: usize,
    cmp: &mut impl FnMut(&T, &T) -> Result<Ordering, E>,
) -> Result<(), E> {
    let len = nodes.len();
    loop {
        let left = 2 * index + 1;
        let right = left + 1;
        let mut best = index;

        if left < len && cmp(&nodes[left], &nodes[best])? == Ordering::Greater {
            best = left;
        }
        if right < len && cmp(&nodes[right], &nodes[best])? == Ordering::Greater {
            best = right;
        }
        if best == index {
            return Ok(());
        }

        nodes.swap(index, best);
        index = best;
    }
}
