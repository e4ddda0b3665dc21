use crate::index::IndexTracker;

/// Draining iterator over the unread elements of a `CappedSlice`, oldest
/// first.
///
/// Every yielded element is consumed. Elements not reached before the
/// iterator is dropped stay unread.
#[derive(Debug)]
pub struct Drain<'a, T> {
    buffer: &'a [T],
    indexer: &'a mut IndexTracker,
}

impl<'a, T> Drain<'a, T> {
    pub(crate) fn new(buffer: &'a [T], indexer: &'a mut IndexTracker) -> Self {
        Self { buffer, indexer }
    }
}

impl<'a, T> Iterator for Drain<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let index = self.indexer.allocate_read()?;
        self.buffer.get(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.indexer.len();
        (remaining, Some(remaining))
    }
}

impl<T> ExactSizeIterator for Drain<'_, T> {}
