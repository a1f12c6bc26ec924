//! # Ranked Merge
//!
//! Merges several independently sorted ranked lists (play counts, scores,
//! relevance) into one globally ranked list without concatenating and
//! re-sorting them.
//!
//! ## Core idea
//! Every list is already sorted, so the best remaining item overall is
//! always the head of one of the lists. Keep the heads in a max-heap, pop
//! the best one, and replace it with the next item of the list it came
//! from. With N items spread over n lists this is O(N log n) instead of
//! the O(N log N) of a full sort, and the heap never grows past n.

pub mod error;
pub mod heap;
pub mod iterator;
pub mod merger;
pub mod options;
pub mod source;
pub mod types;
pub mod validate;

// Public re-exports for the top-level API
pub use error::{Error, Result};
pub use iterator::{MergeIterator, merge_iter, merge_iter_by, merge_iter_by_key};
pub use merger::{RankedMerger, merge, merge_by, merge_by_key};
pub use options::{Options, Order};
pub use source::{Presenter, SourceProvider};
pub use types::Candidate;
