/// How many written slots are still waiting to be read.
///
/// `Partial(n)` always holds `0 < n < capacity`; the two boundary counts have
/// their own variants so that the transitions below spell out every wrap case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Occupancy {
    Empty,
    Partial(usize),
    Full,
}

impl Occupancy {
    fn from_unread(unread: usize, capacity: usize) -> Self {
        debug_assert!(unread <= capacity);
        if unread == 0 {
            Occupancy::Empty
        } else if unread >= capacity {
            Occupancy::Full
        } else {
            Occupancy::Partial(unread)
        }
    }

    pub(crate) fn unread(self, capacity: usize) -> usize {
        match self {
            Occupancy::Empty => 0,
            Occupancy::Partial(unread) => unread,
            Occupancy::Full => capacity,
        }
    }

    /// State after one write, and whether that write destroyed the oldest
    /// unread slot.
    pub(crate) fn after_write(self, capacity: usize) -> (Self, bool) {
        match self {
            Occupancy::Empty => (Self::from_unread(1, capacity), false),
            Occupancy::Partial(unread) => (Self::from_unread(unread + 1, capacity), false),
            Occupancy::Full => (Occupancy::Full, true),
        }
    }

    /// State after one read, or `None` if there is nothing left to read.
    pub(crate) fn after_read(self, capacity: usize) -> Option<Self> {
        match self {
            Occupancy::Empty => None,
            Occupancy::Partial(unread) => Some(Self::from_unread(unread - 1, capacity)),
            Occupancy::Full => Some(Self::from_unread(capacity - 1, capacity)),
        }
    }
}
