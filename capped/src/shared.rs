use core::mem;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::error::CappedError;
use crate::index::IndexTracker;

#[derive(Debug)]
struct Inner<T> {
    store: Vec<T>,
    indexer: IndexTracker,
}

/// A capped FIFO collection that can be shared between threads.
///
/// Storage and tracker live behind one mutex. Each operation allocates its
/// slot and accesses storage under the same lock, so a reader can never see
/// a slot that was allocated but not written yet.
#[derive(Debug)]
pub struct SharedCapped<T> {
    inner: Mutex<Inner<T>>,
}

impl<T: Default> SharedCapped<T> {
    /// Creates a collection of `capacity` slots filled with `T::default()`.
    ///
    /// # Errors
    ///
    /// Returns `CappedError::InvalidCapacity` if `capacity` is below two.
    pub fn new(capacity: usize) -> Result<Self, CappedError> {
        let indexer = IndexTracker::new(capacity)?;
        let mut store = Vec::with_capacity(capacity);
        store.resize_with(capacity, T::default);

        Ok(Self {
            inner: Mutex::new(Inner { store, indexer }),
        })
    }

    /// Removes and returns the oldest unread element.
    pub fn pop(&self) -> Option<T> {
        let mut inner = self.lock();
        let Inner { store, indexer } = &mut *inner;
        let index = indexer.allocate_read()?;
        store.get_mut(index).map(mem::take)
    }
}

impl<T> SharedCapped<T> {
    // Tracker state is updated in one step per call, so it is consistent
    // even if a previous holder panicked.
    fn lock(&self) -> MutexGuard<'_, Inner<T>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Appends an element, returning the displaced one if the collection was
    /// full.
    #[allow(clippy::indexing_slicing)] // slots are always below the store length
    pub fn push(&self, value: T) -> Option<T> {
        let mut inner = self.lock();
        let Inner { store, indexer } = &mut *inner;
        let slot = indexer.allocate_write();
        let previous = mem::replace(&mut store[slot.index], value);
        slot.displaced.then_some(previous)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().indexer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().indexer.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.lock().indexer.capacity()
    }
}
