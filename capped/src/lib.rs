#![cfg_attr(not(feature = "std"), no_std)]

//! `capped`: index tracking for capped collections.
//!
//! A capped collection is a fixed-capacity FIFO where new entries overwrite the
//! oldest unread entry once every slot is taken. [`IndexTracker`] is the core of
//! such a collection: it decides which slot to write next and which slot to read
//! next, without ever touching the storage. The caller owns an array of
//! `capacity` elements and indexes it with the returned values, so the same
//! tracker works for any element type and any storage.
//!
//! The crate is `no_std` compatible and performs no allocations unless the
//! `std` feature is enabled.
//!
//! # Performance Characteristics
//!
//! - `allocate_write()`, `allocate_read()`, `len()`: O(1), no allocation
//! - Tracker state: three words, independent of capacity
//!
//! # Tracking Indices
//!
//! ```
//! # use capped::IndexTracker;
//! let mut store = [0u8; 3];
//! let mut idx = IndexTracker::new(store.len()).unwrap();
//!
//! for byte in [10, 20, 30, 40] {
//!     let slot = idx.allocate_write();
//!     store[slot.index] = byte;
//! }
//!
//! // The fourth write overwrote the oldest unread value.
//! assert_eq!(idx.len(), 3);
//!
//! let mut tail = Vec::new();
//! while let Some(i) = idx.allocate_read() {
//!     tail.push(store[i]);
//! }
//! assert_eq!(tail, [20, 30, 40]);
//! assert_eq!(idx.allocate_read(), None);
//! ```
//!
//! ## Displacement
//!
//! Once `capacity` slots are unread, each write reports `displaced == true`:
//! the slot it returns held data nobody read. Reads then resume from the
//! oldest surviving slot.
//!
//! ```
//! # use capped::IndexTracker;
//! let mut idx = IndexTracker::new(3).unwrap();
//!
//! let displaced: Vec<_> = (0..5).map(|_| idx.allocate_write().displaced).collect();
//! assert_eq!(displaced, [false, false, false, true, true]);
//!
//! assert_eq!(idx.allocate_read(), Some(2));
//! assert_eq!(idx.allocate_read(), Some(0));
//! assert_eq!(idx.allocate_read(), Some(1));
//! assert_eq!(idx.allocate_read(), None);
//! ```
//!
//! # Client-Provided Storage
//!
//! [`CappedSlice`] wires a tracker to a caller's buffer:
//!
//! ```
//! # use capped::CappedSlice;
//! let mut buffer = [""; 3];
//! let mut strings = CappedSlice::new(&mut buffer).unwrap();
//!
//! strings.push("one");
//! strings.push("two");
//! strings.push("three");
//! assert_eq!(strings.push("four"), Some("one"));
//!
//! assert_eq!(strings.as_slice(), ["four", "two", "three"]);
//! assert_eq!(strings.pop(), Some(&"two"));
//! assert_eq!(strings.drain().copied().collect::<Vec<_>>(), ["three", "four"]);
//! ```
//!
//! # Concurrency
//!
//! The tracker is not synchronized. A caller that shares one between threads
//! must hold a single lock across the allocation call *and* the storage access
//! that uses the index; otherwise a reader may be handed a slot whose write has
//! not landed yet. With the `std` feature, `SharedCapped` packages this
//! pattern behind a `Mutex`.

mod error;
mod index;
mod iter;
mod occupancy;
#[cfg(feature = "std")]
mod shared;
mod slice;

// Re-export public types
pub use error::CappedError;
pub use index::{IndexTracker, WriteSlot, MIN_CAPACITY};
pub use iter::Drain;
#[cfg(feature = "std")]
pub use shared::SharedCapped;
pub use slice::CappedSlice;
