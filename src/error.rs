use thiserror::Error;

/// Error types for `DynVec` operations
#[derive(Error, Debug, PartialEq, Eq, Clone)]
pub enum DynVecError {
    /// The global allocator could not provide storage for the requested
    /// number of element slots
    #[error("Allocation failed: could not reserve storage for {capacity} elements")]
    AllocationFailed {
        /// Number of element slots requested
        capacity: usize,
    },
    /// Zero-sized element types have no slot representation and are not
    /// supported
    #[error("Zero-sized element types are not supported")]
    ZeroSizedElement,
    /// Index is beyond the current vector length
    #[error("Index out of bounds: index {index} is beyond vector length {length}")]
    IndexOutOfBounds {
        /// Index that was accessed
        index: usize,
        /// Current length of the vector
        length: usize,
    },
    /// Operation attempted on an empty vector
    #[error("Operation on empty vector")]
    EmptyVector,
    /// Cursor movement would cross the bounds of its snapshot
    #[error("Cursor out of range: cannot move beyond position {position} of {length}")]
    CursorOutOfRange {
        /// Position the cursor was at when the movement failed
        position: usize,
        /// Length of the snapshot the cursor was created against
        length: usize,
    },
    /// Cursor does not address a live element
    #[error("Invalid dereference: position {position} is not a live element of {length}")]
    InvalidDereference {
        /// Position the cursor addresses
        position: usize,
        /// Length of the snapshot the cursor was created against
        length: usize,
    },
}
