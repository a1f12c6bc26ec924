use crate::error::Result;

/// Yields the ranked lists to merge.
///
/// Where the lists come from (a file, the network, a generator) is the
/// provider's business. Each returned list must be sorted in the order the
/// merger is configured for.
pub trait SourceProvider<T> {
    fn sources(&self) -> Result<Vec<Vec<T>>>;
}

/// In-memory lists are their own provider.
impl<T: Clone> SourceProvider<T> for Vec<Vec<T>> {
    fn sources(&self) -> Result<Vec<Vec<T>>> {
        Ok(self.clone())
    }
}

/// Receives the merged sequence, e.g. to render it.
pub trait Presenter<T> {
    fn present(&mut self, merged: &[T]) -> Result<()>;
}

/// Collects the merged sequence.
impl<T: Clone> Presenter<T> for Vec<T> {
    fn present(&mut self, merged: &[T]) -> Result<()> {
        self.extend_from_slice(merged);
        Ok(())
    }
}
