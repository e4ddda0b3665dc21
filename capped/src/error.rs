use thiserror::Error;

/// Error types for capped collection operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum CappedError {
    /// Capacity is too small to tell the read and write positions apart
    #[error("Invalid capacity: {capacity} slots requested, but at least {min} are required")]
    InvalidCapacity {
        /// Capacity that was requested
        capacity: usize,
        /// Minimum capacity accepted
        min: usize,
    },
}
