use std::cmp::Ordering;

/// The head-of-line unconsumed item of one source.
///
/// Candidates only live inside the merge heap. There is at most one per
/// source at any time: a candidate is pushed when its source's next item
/// becomes eligible and dropped when it is popped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Candidate<I> {
    /// The item itself, or a reference to it.
    pub item: I,
    /// Index of the source this item came from.
    pub source: usize,
    /// Index of the item within its source.
    pub position: usize,
}

impl<I> Candidate<I> {
    pub fn new(item: I, source: usize, position: usize) -> Self {
        Candidate {
            item,
            source,
            position,
        }
    }

    /// Order two candidates whose items already compare as `by_item`
    /// (`Greater` = self goes first).
    ///
    /// Ties go to the lower source index, then to the earlier position.
    /// Since a source never has two candidates in the heap at once, the
    /// position tie-break never actually decides; it keeps the order total.
    pub fn rank(&self, other: &Self, by_item: Ordering) -> Ordering {
        by_item
            .then_with(|| other.source.cmp(&self.source))
            .then_with(|| other.position.cmp(&self.position))
    }
}
