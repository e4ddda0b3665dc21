use core::mem;

use crate::error::CappedError;
use crate::index::IndexTracker;
use crate::iter::Drain;

/// A capped FIFO collection over a client-provided buffer.
///
/// The capacity is the buffer length. Pushing into a full collection
/// overwrites the oldest unread element and hands it back to the caller.
#[derive(Debug)]
pub struct CappedSlice<'a, T> {
    buffer: &'a mut [T],
    indexer: IndexTracker,
}

impl<'a, T> CappedSlice<'a, T> {
    /// Creates a new `CappedSlice` using the whole buffer as storage.
    ///
    /// Existing buffer contents are treated as free slots.
    ///
    /// # Errors
    ///
    /// Returns `CappedError::InvalidCapacity` if the buffer holds fewer than
    /// two elements.
    pub fn new(buffer: &'a mut [T]) -> Result<Self, CappedError> {
        let indexer = IndexTracker::new(buffer.len())?;
        Ok(Self { buffer, indexer })
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.indexer.capacity()
    }

    /// Number of elements pushed but not popped yet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indexer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indexer.is_empty()
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.indexer.is_full()
    }

    /// Appends an element.
    ///
    /// Returns the element that was displaced if the collection was full,
    /// `None` otherwise.
    #[allow(clippy::indexing_slicing)] // slots are always below the buffer length
    pub fn push(&mut self, value: T) -> Option<T> {
        let slot = self.indexer.allocate_write();
        let previous = mem::replace(&mut self.buffer[slot.index], value);
        slot.displaced.then_some(previous)
    }

    /// Removes the oldest unread element and returns a reference to it.
    ///
    /// The element stays in the buffer until a later push reuses its slot.
    pub fn pop(&mut self) -> Option<&T> {
        let index = self.indexer.allocate_read()?;
        self.buffer.get(index)
    }

    /// Returns the oldest unread element without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&T> {
        self.buffer.get(self.indexer.peek_read()?)
    }

    /// Forgets all unread elements. The buffer is left untouched.
    pub fn clear(&mut self) {
        self.indexer.reset();
    }

    /// Raw storage in slot order, including elements already read.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.buffer[..]
    }

    /// Returns an iterator that pops every unread element, oldest first.
    pub fn drain(&mut self) -> Drain<'_, T> {
        Drain::new(&self.buffer[..], &mut self.indexer)
    }
}
