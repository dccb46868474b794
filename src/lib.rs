#![no_std]

//! `DynVec`: a growable vector with explicit slot-level storage
//! management.
//!
//! `DynVec` owns one contiguous buffer of element slots and keeps the
//! live elements in its prefix. Raw allocation is separated from
//! element lifetime: slots are allocated uninitialized, constructed in
//! place on append, destroyed in place on removal, and never read
//! outside the live range. Every fallible operation reports a typed
//! [`DynVecError`] instead of failing silently.
//!
//! ```
//! use dynvec::DynVec;
//!
//! let mut values = DynVec::new();
//! values.push(1).unwrap();
//! values.push(2).unwrap();
//! values.push(3).unwrap();
//!
//! assert_eq!(values.len(), 3);
//! assert_eq!(values[0], 1);
//! assert_eq!(values.pop(), Some(3));
//! ```
//!
//! # Growth and shrink policy
//!
//! Capacity management is automatic and uses fixed compile-time
//! constants:
//!
//! - the first append to a never-allocated vector reserves 10 slots;
//! - appending to a full vector grows capacity to `capacity +
//!   capacity / 2` (1.5x, integer division);
//! - removing an element so that `len < capacity / 2` shrinks capacity
//!   to `capacity - capacity / 2`;
//! - [`DynVec::from_slice`] reserves `max(10, 1.5 x count)` up front;
//! - [`DynVec::extend_from_slice`] grows at most once for the whole
//!   batch.
//!
//! Each transition moves every live element to a fresh allocation, so
//! pointers into the vector are only stable between reallocations. The
//! shrink threshold exactly mirrors the growth threshold; workloads
//! that oscillate around `capacity / 2` reallocate on every operation.
//!
//! ```
//! use dynvec::DynVec;
//!
//! let mut values = DynVec::with_capacity(10).unwrap();
//! for i in 0..10 {
//!     values.push(i).unwrap();
//! }
//! assert_eq!(values.capacity(), 10);
//!
//! values.push(10).unwrap();
//! assert_eq!(values.capacity(), 15);
//! ```
//!
//! # Checked access and typed errors
//!
//! The indexing operators panic on misuse like the standard containers;
//! everything else is checked. `try_*` variants return the exact
//! contract violation, and indices are bounded by `len()` — slots that
//! are allocated but not yet live are not reachable:
//!
//! ```
//! use dynvec::{DynVec, DynVecError};
//!
//! let mut values = DynVec::from_slice(&[1, 2, 3]).unwrap();
//! assert_eq!(
//!     values.try_get(7),
//!     Err(DynVecError::IndexOutOfBounds { index: 7, length: 3 })
//! );
//! assert_eq!(DynVec::<i32>::new().try_pop(), Err(DynVecError::EmptyVector));
//! ```
//!
//! For hot paths where the bound is known to hold, the `unsafe`
//! `*_unchecked` accessors skip validation with identical behavior.
//!
//! # Cursors
//!
//! A [`Cursor`] is a bounds-aware random-access position over the
//! vector's live range: it moves forward and backward one element or
//! `n` elements at a time, dereferences only live elements, and
//! reports a typed error for any movement that would leave the range.
//! The borrow it holds prevents the vector from reallocating while the
//! cursor is alive.
//!
//! ```
//! use dynvec::DynVec;
//!
//! let values = DynVec::from_slice(&[10, 20, 30]).unwrap();
//! let end = values.cursor_end();
//! let mut cursor = values.cursor();
//!
//! let mut sum = 0;
//! while cursor != end {
//!     sum += *cursor.get().unwrap();
//!     cursor.advance().unwrap();
//! }
//! assert_eq!(sum, 60);
//! ```
//!
//! # Iterator support
//!
//! Plain Rust iteration is available alongside the cursor:
//!
//! ```
//! use dynvec::DynVec;
//!
//! let mut values = DynVec::from_slice(&[1, 2, 3]).unwrap();
//! for value in values.iter_mut() {
//!     *value *= 10;
//! }
//! let collected: Vec<i32> = values.iter().copied().collect();
//! assert_eq!(collected, vec![10, 20, 30]);
//! ```
//!
//! # `no_std` compatibility
//!
//! The crate is `no_std` and depends on `alloc` only (the vector owns
//! heap allocations but needs nothing else from `std`). Enable the
//! `std` feature to forward it to the error dependency:
//!
//! ```toml
//! [dependencies]
//! dynvec = { version = "0.1", features = ["std"] }
//! ```
//!
//! Thread safety is out of scope: a vector and its cursors belong to
//! one thread, and no internal synchronization is performed.

extern crate alloc;

mod buffer;
mod core;
mod error;
mod iter;

// Re-export public types
pub use crate::core::DynVec;
pub use crate::error::DynVecError;
pub use crate::iter::{Cursor, CursorMut};
