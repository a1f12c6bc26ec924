use std::fmt;

/// Unified error type for the merge engine.
///
/// The merge itself is total: none of these come out of a plain
/// [`merge`](crate::merge) call. They appear only when the caller opts into
/// verification or goes through a collaborator (provider / presenter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A source is not sorted in the configured direction.
    /// `position` is the index of the first item that breaks the order.
    Unsorted { source: usize, position: usize },
    /// The source provider failed to yield its sources.
    Source(String),
    /// The presenter rejected the merged sequence.
    Present(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Unsorted { source, position } => {
                write!(f, "Unsorted source {source}: order breaks at position {position}")
            }
            Error::Source(msg) => write!(f, "Source error: {msg}"),
            Error::Present(msg) => write!(f, "Present error: {msg}"),
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
