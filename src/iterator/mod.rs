//! Streaming merge.
//!
//! [`RankedMerger`](crate::RankedMerger) works on borrowed slices and
//! returns a `Vec`. The iterator here takes any sorted iterators (owned
//! vectors, file readers, channels drained into iterators) and yields the
//! merged stream one item at a time, so callers that only want the top few
//! results never pay for the rest.

pub mod merge;

pub use merge::{MergeIterator, merge_iter, merge_iter_by, merge_iter_by_key};
