use std::cmp::Ordering;
use std::convert::Infallible;

use crate::error::Result;
use crate::heap::BinaryHeap;
use crate::iterator::merge_iter_by;
use crate::options::{Options, Order};
use crate::source::{Presenter, SourceProvider};
use crate::types::Candidate;
use crate::validate;

/// Merges independently sorted ranked lists into one ranked list.
///
/// Every source must already be sorted in the configured [`Order`]
/// (non-increasing by default). The merger keeps one [`Candidate`] per
/// source in a max-heap, pops the best one, and replaces it with the next
/// item of the same source:
///
/// ```text
/// A: [100, 80, 50]        heap: {100(A), 90(B), 70(C)}  → emit 100, push 80(A)
/// B: [ 90, 85]            heap: {90(B), 80(A), 70(C)}   → emit 90,  push 85(B)
/// C: [ 70]                ...
///                         out:  [100, 90, 85, 80, 70, 50]
/// ```
///
/// The heap never holds more than one entry per source, so N items from n
/// sources cost O(N log n) time and O(n) extra space.
///
/// Ties go to the lower source index; within a source, input order is kept.
///
/// Nothing survives between calls: the heap and output belong to one merge.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankedMerger {
    options: Options,
}

impl RankedMerger {
    /// A merger with default options: descending, unlimited, unverified.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: Options) -> Self {
        RankedMerger { options }
    }

    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Merge sources of items that are their own ranking key.
    ///
    /// Sorting is trusted, not checked, even with
    /// [`Options::verify_sorted`] set. An unsorted source yields a wrongly
    /// ordered (but complete) result; use
    /// [`merge_checked`](Self::merge_checked) to catch that.
    pub fn merge<S, T>(&self, sources: &[S]) -> Vec<T>
    where
        S: AsRef<[T]>,
        T: Ord + Clone,
    {
        self.merge_by(sources, T::cmp)
    }

    /// Merge sources ranked by a key extracted from each item.
    /// Unchecked; see [`merge_by_key_checked`](Self::merge_by_key_checked).
    pub fn merge_by_key<S, T, K, F>(&self, sources: &[S], mut key: F) -> Vec<T>
    where
        S: AsRef<[T]>,
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.merge_by(sources, |a, b| key(a).cmp(&key(b)))
    }

    /// Merge sources ranked by a comparator over items.
    ///
    /// `cmp(a, b)` compares keys the usual way; [`Order`] decides whether
    /// the greater or the lesser item comes out first.
    pub fn merge_by<S, T, F>(&self, sources: &[S], mut cmp: F) -> Vec<T>
    where
        S: AsRef<[T]>,
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        let Ok(merged) = self.try_merge_by(sources, |a, b| Ok::<_, Infallible>(cmp(a, b)));
        merged
    }

    /// Merge with a fallible comparator.
    ///
    /// The first comparator error aborts the merge and is returned as is.
    /// Nothing of the partially built output escapes.
    pub fn try_merge_by<S, T, F, E>(
        &self,
        sources: &[S],
        mut cmp: F,
    ) -> std::result::Result<Vec<T>, E>
    where
        S: AsRef<[T]>,
        T: Clone,
        F: FnMut(&T, &T) -> std::result::Result<Ordering, E>,
    {
        let order = self.options.order;
        let limit = self.options.limit.unwrap_or(usize::MAX);
        let lists: Vec<&[T]> = sources.iter().map(AsRef::as_ref).collect();
        let total: usize = lists.iter().map(|items| items.len()).sum();

        tracing::debug!(sources = lists.len(), items = total, ?order, "merge start");

        if limit == 0 {
            return Ok(Vec::new());
        }

        let mut merged = Vec::with_capacity(total.min(limit));
        let mut heap = BinaryHeap::with_capacity(
            lists.len(),
            candidate_order(order, |a: &&T, b: &&T| cmp(*a, *b)),
        );

        for (source, items) in lists.iter().enumerate() {
            if let Some(first) = items.first() {
                heap.try_push(Candidate::new(first, source, 0))?;
            }
        }

        while let Some(top) = heap.try_pop()? {
            merged.push(top.item.clone());
            if merged.len() == limit {
                break;
            }

            let next = top.position + 1;
            match lists[top.source].get(next) {
                Some(item) => heap.try_push(Candidate::new(item, top.source, next))?,
                None => tracing::trace!(source = top.source, "source exhausted"),
            }
        }

        tracing::debug!(merged = merged.len(), pending = heap.len(), "merge done");
        Ok(merged)
    }

    /// [`merge`](Self::merge), first verifying every source when
    /// [`Options::verify_sorted`] is set.
    pub fn merge_checked<S, T>(&self, sources: &[S]) -> Result<Vec<T>>
    where
        S: AsRef<[T]>,
        T: Ord + Clone,
    {
        self.merge_by_checked(sources, T::cmp)
    }

    /// [`merge_by_key`](Self::merge_by_key), verified like
    /// [`merge_checked`](Self::merge_checked).
    pub fn merge_by_key_checked<S, T, K, F>(&self, sources: &[S], mut key: F) -> Result<Vec<T>>
    where
        S: AsRef<[T]>,
        T: Clone,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.merge_by_checked(sources, |a, b| key(a).cmp(&key(b)))
    }

    /// [`merge_by`](Self::merge_by), verified with the same comparator.
    pub fn merge_by_checked<S, T, F>(&self, sources: &[S], mut cmp: F) -> Result<Vec<T>>
    where
        S: AsRef<[T]>,
        T: Clone,
        F: FnMut(&T, &T) -> Ordering,
    {
        self.verify_by(sources, &mut cmp)?;
        Ok(self.merge_by(sources, cmp))
    }

    /// Pull the sources from a provider and merge them.
    pub fn merge_from<P, T>(&self, provider: &P) -> Result<Vec<T>>
    where
        P: SourceProvider<T> + ?Sized,
        T: Ord,
    {
        self.merge_from_by(provider, T::cmp)
    }

    /// [`merge_from`](Self::merge_from) ranked by a key of each item.
    pub fn merge_from_by_key<P, T, K, F>(&self, provider: &P, mut key: F) -> Result<Vec<T>>
    where
        P: SourceProvider<T> + ?Sized,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.merge_from_by(provider, move |a, b| key(a).cmp(&key(b)))
    }

    /// [`merge_from`](Self::merge_from) ranked by a comparator.
    ///
    /// The provider hands over owned lists, so items are moved through a
    /// [`MergeIterator`](crate::MergeIterator) instead of cloned.
    pub fn merge_from_by<P, T, F>(&self, provider: &P, mut cmp: F) -> Result<Vec<T>>
    where
        P: SourceProvider<T> + ?Sized,
        F: FnMut(&T, &T) -> Ordering,
    {
        let sources = provider.sources()?;
        self.verify_by(&sources, &mut cmp)?;

        let limit = self.options.limit.unwrap_or(usize::MAX);
        let merged: Vec<T> = merge_iter_by(sources, self.options.order, cmp)
            .take(limit)
            .collect();
        tracing::debug!(merged = merged.len(), "merged provider sources");
        Ok(merged)
    }

    /// Merge and hand the result to a presenter.
    pub fn merge_into<S, T, P>(&self, sources: &[S], presenter: &mut P) -> Result<()>
    where
        S: AsRef<[T]>,
        T: Ord + Clone,
        P: Presenter<T> + ?Sized,
    {
        self.merge_into_by(sources, presenter, T::cmp)
    }

    /// [`merge_into`](Self::merge_into) ranked by a key of each item.
    pub fn merge_into_by_key<S, T, P, K, F>(
        &self,
        sources: &[S],
        presenter: &mut P,
        mut key: F,
    ) -> Result<()>
    where
        S: AsRef<[T]>,
        T: Clone,
        P: Presenter<T> + ?Sized,
        K: Ord,
        F: FnMut(&T) -> K,
    {
        self.merge_into_by(sources, presenter, |a, b| key(a).cmp(&key(b)))
    }

    /// [`merge_into`](Self::merge_into) ranked by a comparator.
    pub fn merge_into_by<S, T, P, F>(&self, sources: &[S], presenter: &mut P, cmp: F) -> Result<()>
    where
        S: AsRef<[T]>,
        T: Clone,
        P: Presenter<T> + ?Sized,
        F: FnMut(&T, &T) -> Ordering,
    {
        let merged = self.merge_by_checked(sources, cmp)?;
        presenter.present(&merged)
    }

    /// Run [`validate::check_sources_by`] when verification is enabled.
    fn verify_by<S, T, F>(&self, sources: &[S], cmp: F) -> Result<()>
    where
        S: AsRef<[T]>,
        F: FnMut(&T, &T) -> Ordering,
    {
        if self.options.verify_sorted {
            validate::check_sources_by(sources, self.options.order, cmp)?;
        }
        Ok(())
    }
}

/// Lift an item comparator to a candidate comparator for the heap:
/// `order` picks the direction, then ties fall back to (source, position).
pub(crate) fn candidate_order<I, E>(
    order: Order,
    mut cmp: impl FnMut(&I, &I) -> std::result::Result<Ordering, E>,
) -> impl FnMut(&Candidate<I>, &Candidate<I>) -> std::result::Result<Ordering, E> {
    move |a, b| Ok(a.rank(b, order.priority(cmp(&a.item, &b.item)?)))
}

/// Merge with a default [`RankedMerger`].
///
/// ```
/// let a = vec![100, 80, 50];
/// let b = vec![90, 85];
/// let c = vec![70];
/// assert_eq!(
///     ranked_merge::merge(&[a, b, c]),
///     vec![100, 90, 85, 80, 70, 50]
/// );
/// ```
pub fn merge<S, T>(sources: &[S]) -> Vec<T>
where
    S: AsRef<[T]>,
    T: Ord + Clone,
{
    RankedMerger::new().merge(sources)
}

/// [`RankedMerger::merge_by_key`] with default options.
pub fn merge_by_key<S, T, K, F>(sources: &[S], key: F) -> Vec<T>
where
    S: AsRef<[T]>,
    T: Clone,
    K: Ord,
    F: FnMut(&T) -> K,
{
    RankedMerger::new().merge_by_key(sources, key)
}

/// [`RankedMerger::merge_by`] with default options.
pub fn merge_by<S, T, F>(sources: &[S], cmp: F) -> Vec<T>
where
    S: AsRef<[T]>,
    T: Clone,
    F: FnMut(&T, &T) -> Ordering,
{
    RankedMerger::new().merge_by(sources, cmp)
}
