use std::cmp::Ordering;
use std::convert::Infallible;
use std::iter::{Fuse, FusedIterator};

use crate::heap::BinaryHeap;
use crate::merger::candidate_order;
use crate::options::Order;
use crate::types::Candidate;

/// Lazily merges sorted iterators into a single sorted stream.
///
/// Same algorithm and guarantees as [`RankedMerger`](crate::RankedMerger),
/// but nothing is materialized: each call to `next()` pops one candidate
/// and pulls exactly one item from the source that produced it.
///
/// `C` is the heap comparator built by [`merge_iter`], [`merge_iter_by_key`]
/// or [`merge_iter_by`].
pub struct MergeIterator<I: Iterator, C> {
    sources: Vec<Fuse<I>>,
    heap: BinaryHeap<Candidate<I::Item>, C>,
}

impl<I, C> MergeIterator<I, C>
where
    I: Iterator,
    C: FnMut(&Candidate<I::Item>, &Candidate<I::Item>) -> Ordering,
{
    fn new(sources: Vec<Fuse<I>>, cmp: C) -> Self {
        let heap = BinaryHeap::with_capacity(sources.len(), cmp);
        let mut merger = MergeIterator { sources, heap };
        for source in 0..merger.sources.len() {
            merger.refill(source, 0);
        }
        tracing::debug!(
            sources = merger.sources.len(),
            active = merger.heap.len(),
            "merge iterator ready"
        );
        merger
    }

    /// The item the next call to `next()` will return.
    pub fn peek(&self) -> Option<&I::Item> {
        self.heap.peek().map(|candidate| &candidate.item)
    }

    /// Number of sources that still hold at least one unconsumed item.
    pub fn active_sources(&self) -> usize {
        self.heap.len()
    }

    /// Pull the next item of `source` into the heap, if there is one.
    fn refill(&mut self, source: usize, position: usize) {
        match self.sources[source].next() {
            Some(item) => self.heap.push(Candidate::new(item, source, position)),
            None => tracing::trace!(source, "source exhausted"),
        }
    }
}

impl<I, C> Iterator for MergeIterator<I, C>
where
    I: Iterator,
    C: FnMut(&Candidate<I::Item>, &Candidate<I::Item>) -> Ordering,
{
    type Item = I::Item;

    fn next(&mut self) -> Option<Self::Item> {
        let top = self.heap.pop()?;
        self.refill(top.source, top.position + 1);
        Some(top.item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let queued = self.heap.len();
        self.sources
            .iter()
            .map(Iterator::size_hint)
            .fold((queued, Some(queued)), |(lo, hi), (s_lo, s_hi)| {
                (
                    lo.saturating_add(s_lo),
                    hi.zip(s_hi).and_then(|(a, b)| a.checked_add(b)),
                )
            })
    }
}

impl<I, C> FusedIterator for MergeIterator<I, C>
where
    I: Iterator,
    C: FnMut(&Candidate<I::Item>, &Candidate<I::Item>) -> Ordering,
{
}

/// Merge sorted iterators of items that are their own key, highest first.
///
/// ```
/// use ranked_merge::merge_iter;
///
/// let merged: Vec<u32> = merge_iter(vec![vec![9, 4, 1], vec![7, 4]]).collect();
/// assert_eq!(merged, vec![9, 7, 4, 4, 1]);
/// ```
pub fn merge_iter<S, T>(
    sources: S,
) -> MergeIterator<<S::Item as IntoIterator>::IntoIter, impl FnMut(&Candidate<T>, &Candidate<T>) -> Ordering>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
    T: Ord,
{
    merge_iter_by(sources, Order::Descending, T::cmp)
}

/// Merge sorted iterators by a key extracted from each item, highest first.
pub fn merge_iter_by_key<S, T, K, F>(
    sources: S,
    mut key: F,
) -> MergeIterator<<S::Item as IntoIterator>::IntoIter, impl FnMut(&Candidate<T>, &Candidate<T>) -> Ordering>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
    K: Ord,
    F: FnMut(&T) -> K,
{
    merge_iter_by(sources, Order::Descending, move |a, b| key(a).cmp(&key(b)))
}

/// Merge sorted iterators by a comparator, in the given direction.
pub fn merge_iter_by<S, T, F>(
    sources: S,
    order: Order,
    mut cmp: F,
) -> MergeIterator<<S::Item as IntoIterator>::IntoIter, impl FnMut(&Candidate<T>, &Candidate<T>) -> Ordering>
where
    S: IntoIterator,
    S::Item: IntoIterator<Item = T>,
    F: FnMut(&T, &T) -> Ordering,
{
    let sources = sources
        .into_iter()
        .map(|source| source.into_iter().fuse())
        .collect();
    let mut by_candidate = candidate_order(order, move |a: &T, b: &T| Ok::<_, Infallible>(cmp(a, b)));
    MergeIterator::new(sources, move |a: &Candidate<T>, b: &Candidate<T>| {
        let Ok(ordering) = by_candidate(a, b);
        ordering
    })
}
