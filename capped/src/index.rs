use tracing::{debug, trace};

use crate::error::CappedError;
use crate::occupancy::Occupancy;

/// Smallest capacity for which read and write positions can be told apart.
pub const MIN_CAPACITY: usize = 2;

/// A slot handed out by [`IndexTracker::allocate_write`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct WriteSlot {
    /// Storage index the caller must write into.
    pub index: usize,
    /// `true` if writing here destroys the oldest slot that was not read yet.
    pub displaced: bool,
}

/// Decides which storage slot to write next and which to read next for a
/// capped collection of fixed capacity.
///
/// The tracker never touches the storage itself. Callers keep an array of
/// `capacity` elements and index it with the values returned here. Once every
/// slot holds unread data, further writes overwrite the oldest unread slot and
/// reads continue from the oldest surviving one.
///
/// # Concurrency
///
/// The tracker has no internal synchronization. When it is shared, the
/// allocation call and the matching storage access must happen inside one
/// critical section: an index that is allocated but not yet written must
/// never be visible to a reader. See `SharedCapped` for the pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexTracker {
    capacity: usize,
    next_write: usize,
    occupancy: Occupancy,
}

impl IndexTracker {
    /// Creates a tracker for a collection of `capacity` slots.
    ///
    /// # Errors
    ///
    /// Returns `CappedError::InvalidCapacity` if `capacity` is below
    /// [`MIN_CAPACITY`].
    pub fn new(capacity: usize) -> Result<Self, CappedError> {
        if capacity < MIN_CAPACITY {
            return Err(CappedError::InvalidCapacity {
                capacity,
                min: MIN_CAPACITY,
            });
        }

        debug!(capacity, "index tracker created");
        Ok(Self {
            capacity,
            next_write: 0,
            occupancy: Occupancy::Empty,
        })
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Number of slots written but not read yet, in `0..=capacity`.
    #[must_use]
    pub fn len(&self) -> usize {
        self.occupancy.unread(self.capacity)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.occupancy == Occupancy::Empty
    }

    /// Returns `true` if the next write will displace an unread slot.
    #[must_use]
    pub fn is_full(&self) -> bool {
        self.occupancy == Occupancy::Full
    }

    // `unread <= capacity` and `next_write < capacity`, so neither arm overflows.
    fn oldest_slot(&self, unread: usize) -> usize {
        if unread <= self.next_write {
            self.next_write - unread
        } else {
            self.next_write + (self.capacity - unread)
        }
    }

    /// Allocates the slot for the next write.
    ///
    /// Slots are handed out as `0, 1, ..., capacity - 1, 0, ...`. When the
    /// collection is full the returned slot is the oldest unread one, which
    /// is reported through [`WriteSlot::displaced`]; the following read then
    /// starts at the slot after it.
    pub fn allocate_write(&mut self) -> WriteSlot {
        let index = self.next_write;
        let (occupancy, displaced) = self.occupancy.after_write(self.capacity);
        self.occupancy = occupancy;
        self.next_write = (index + 1) % self.capacity;

        if displaced {
            debug!(slot = index, "write displaced the oldest unread slot");
        }
        trace!(slot = index, unread = self.len(), "write slot allocated");
        WriteSlot { index, displaced }
    }

    /// Allocates the slot for the next read, oldest unread first.
    ///
    /// Returns `None` when every written slot has been read; it keeps
    /// returning `None` until another write happens.
    pub fn allocate_read(&mut self) -> Option<usize> {
        let unread = self.len();
        let occupancy = self.occupancy.after_read(self.capacity)?;
        let index = self.oldest_slot(unread);
        self.occupancy = occupancy;

        trace!(slot = index, unread = self.len(), "read slot allocated");
        Some(index)
    }

    /// The slot the next [`allocate_read`](Self::allocate_read) would return,
    /// without consuming it.
    #[must_use]
    pub fn peek_read(&self) -> Option<usize> {
        if self.is_empty() {
            None
        } else {
            Some(self.oldest_slot(self.len()))
        }
    }

    /// Forgets every write and read, keeping the capacity.
    pub fn reset(&mut self) {
        debug!(capacity = self.capacity, discarded = self.len(), "index tracker reset");
        self.next_write = 0;
        self.occupancy = Occupancy::Empty;
    }
}
