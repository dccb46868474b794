use core::fmt;
use core::ops::{Index, IndexMut};
use core::slice;

use crate::buffer::RawBuffer;
use crate::error::DynVecError;
use crate::iter::{Cursor, CursorMut};

/// Capacity allocated on the first append to a vector that has never
/// grown, and the capacity floor used by [`DynVec::from_slice`].
const DEFAULT_CAPACITY: usize = 10;

/// A growable vector backed by one owned slot buffer.
///
/// The vector tracks `len` live elements in slots `[0, len)` of its
/// buffer; slots `[len, capacity)` are allocated but uninitialized and
/// are never read or dropped. Appending to a full vector grows the
/// buffer by one and a half times; removing past the half-capacity mark
/// shrinks it by the same factor. Both transitions move every live
/// element to a fresh allocation and are atomic from the caller's
/// perspective: on allocation failure the vector is untouched and the
/// error is returned.
///
/// All fallible operations report [`DynVecError`]; the indexing
/// operators are the panicking convenience path and `get`/`try_get`
/// are the checked one. Indices are bounded by `len`, not capacity:
/// allocated-but-unused slots are not reachable through the public API.
///
/// Zero-sized element types are not supported; any operation that needs
/// storage for them reports [`DynVecError::ZeroSizedElement`].
pub struct DynVec<T> {
    buf: RawBuffer<T>,
    len: usize,
}

impl<T> DynVec<T> {
    /// Creates an empty vector without allocating.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            buf: RawBuffer::dangling(),
            len: 0,
        }
    }

    /// Creates an empty vector with storage reserved for `capacity`
    /// elements. A capacity of 0 allocates nothing.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailed` if the reservation cannot
    /// be satisfied, or `DynVecError::ZeroSizedElement` for zero-sized
    /// `T`.
    pub fn with_capacity(capacity: usize) -> Result<Self, DynVecError> {
        if capacity == 0 {
            return Ok(Self::new());
        }
        Ok(Self {
            buf: RawBuffer::allocate(capacity)?,
            len: 0,
        })
    }

    /// Creates a vector holding clones of `values` in order.
    ///
    /// The initial capacity is one and a half times the element count,
    /// with a floor of 10 for short sequences.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailed` if the reservation cannot
    /// be satisfied, or `DynVecError::ZeroSizedElement` for zero-sized
    /// `T`.
    pub fn from_slice(values: &[T]) -> Result<Self, DynVecError>
    where
        T: Clone,
    {
        let count = values.len();
        let capacity = if count < DEFAULT_CAPACITY {
            DEFAULT_CAPACITY
        } else {
            count + count / 2
        };
        let mut vec = Self {
            buf: RawBuffer::allocate(capacity)?,
            len: 0,
        };
        for value in values {
            // Safe: capacity covers every element and slot vec.len is
            // unconstructed. len tracks each construction so a panicking
            // clone cannot leak or double-drop.
            unsafe { vec.buf.write(vec.len, value.clone()) };
            vec.len += 1;
        }
        Ok(vec)
    }

    /// Deep copy preserving the source's capacity.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailed` if the reservation cannot
    /// be satisfied.
    pub fn try_clone(&self) -> Result<Self, DynVecError>
    where
        T: Clone,
    {
        let capacity = self.buf.capacity();
        let buf = if capacity == 0 {
            RawBuffer::dangling()
        } else {
            RawBuffer::allocate(capacity)?
        };
        let mut copy = Self { buf, len: 0 };
        for value in self.as_slice() {
            // Safe: the copy's capacity matches the source's, which
            // covers every live element.
            unsafe { copy.buf.write(copy.len, value.clone()) };
            copy.len += 1;
        }
        Ok(copy)
    }

    /// Number of live elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots, live or not.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buf.capacity()
    }

    /// Whether the vector currently owns an allocation.
    #[must_use]
    pub fn is_allocated(&self) -> bool {
        self.buf.capacity() != 0
    }

    /// Appends `value` to the end of the vector, growing the buffer
    /// first if it is full.
    ///
    /// Amortized O(1); O(n) when a growth reallocation runs.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailed` if growth cannot be
    /// satisfied, or `DynVecError::ZeroSizedElement` for zero-sized `T`.
    /// The vector is unchanged on error.
    pub fn push(&mut self, value: T) -> Result<(), DynVecError> {
        if self.len == self.buf.capacity() {
            self.grow()?;
        }
        // Safe: slot len is allocated and unconstructed after the
        // capacity check.
        unsafe { self.buf.write(self.len, value) };
        self.len += 1;
        Ok(())
    }

    /// Appends the result of `construct`, writing it directly into the
    /// new slot, and returns a mutable reference to it.
    ///
    /// # Errors
    ///
    /// Same as [`push`](DynVec::push).
    pub fn push_with<F>(&mut self, construct: F) -> Result<&mut T, DynVecError>
    where
        F: FnOnce() -> T,
    {
        if self.len == self.buf.capacity() {
            self.grow()?;
        }
        // Safe: slot len is allocated and unconstructed after the
        // capacity check; the closure result is written into it without
        // an intermediate slot copy.
        unsafe { self.buf.write(self.len, construct()) };
        self.len += 1;
        // Safe: the slot was just constructed.
        Ok(unsafe { self.buf.slot_mut(self.len - 1) })
    }

    /// Appends clones of `values` in order, growing at most once for the
    /// whole batch: if the combined length reaches the current capacity,
    /// the buffer is resized to one and a half times the combined
    /// length up front.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailed` if the single growth step
    /// cannot be satisfied, or `DynVecError::ZeroSizedElement` for
    /// zero-sized `T`. The vector is unchanged on error.
    pub fn extend_from_slice(&mut self, values: &[T]) -> Result<(), DynVecError>
    where
        T: Clone,
    {
        if values.is_empty() {
            return Ok(());
        }
        let combined = self.len + values.len();
        if combined >= self.buf.capacity() {
            self.reallocate(combined + combined / 2)?;
        }
        for value in values {
            // Safe: the reallocation above guarantees a free slot at
            // len for every element of the batch.
            unsafe { self.buf.write(self.len, value.clone()) };
            self.len += 1;
        }
        Ok(())
    }

    /// Removes and returns the last element, or `None` if the vector is
    /// empty. Shrinks the buffer when the remaining length falls below
    /// half of the capacity.
    ///
    /// Shrinking is capacity housekeeping, not part of the removal
    /// contract: if the smaller allocation cannot be obtained the
    /// vector keeps its current buffer and the removal still succeeds.
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        // Safe: slot len held the last live element; len is already
        // decremented so the slot is no longer treated as live.
        let value = unsafe { self.buf.read(self.len) };
        self.maybe_shrink();
        Some(value)
    }

    /// Removes and returns the last element.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::EmptyVector` if there is nothing to remove.
    pub fn try_pop(&mut self) -> Result<T, DynVecError> {
        self.pop().ok_or(DynVecError::EmptyVector)
    }

    /// Destroys all live elements. The allocation is retained: capacity
    /// is unchanged and later appends reuse it.
    pub fn clear(&mut self) {
        // Safe: slots [0, len) are exactly the live range.
        unsafe { self.buf.drop_range(0, self.len) };
        self.len = 0;
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        // Safe: index addresses a live slot.
        Some(unsafe { self.buf.slot(index) })
    }

    #[must_use]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        if index >= self.len {
            return None;
        }
        // Safe: index addresses a live slot.
        Some(unsafe { self.buf.slot_mut(index) })
    }

    /// Checked indexed access.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn try_get(&self, index: usize) -> Result<&T, DynVecError> {
        self.get(index).ok_or(DynVecError::IndexOutOfBounds {
            index,
            length: self.len,
        })
    }

    /// Checked mutable indexed access.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::IndexOutOfBounds` if `index >= len()`.
    pub fn try_get_mut(&mut self, index: usize) -> Result<&mut T, DynVecError> {
        let length = self.len;
        self.get_mut(index)
            .ok_or(DynVecError::IndexOutOfBounds { index, length })
    }

    /// Unchecked indexed access.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`. Behavior is identical to
    /// [`get`](DynVec::get) whenever that precondition holds.
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        unsafe { self.buf.slot(index) }
    }

    /// Unchecked mutable indexed access.
    ///
    /// # Safety
    ///
    /// `index` must be less than `len()`.
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        unsafe { self.buf.slot_mut(index) }
    }

    #[must_use]
    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn front_mut(&mut self) -> Option<&mut T> {
        self.get_mut(0)
    }

    #[must_use]
    pub fn back(&self) -> Option<&T> {
        match self.len.checked_sub(1) {
            Some(index) => self.get(index),
            None => None,
        }
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        match self.len.checked_sub(1) {
            Some(index) => self.get_mut(index),
            None => None,
        }
    }

    /// First element.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::EmptyVector` if the vector is empty.
    pub fn try_front(&self) -> Result<&T, DynVecError> {
        self.front().ok_or(DynVecError::EmptyVector)
    }

    /// Last element.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::EmptyVector` if the vector is empty.
    pub fn try_back(&self) -> Result<&T, DynVecError> {
        self.back().ok_or(DynVecError::EmptyVector)
    }

    /// The live elements as a slice, in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        // Safe: slots [0, len) are live and contiguous.
        unsafe { slice::from_raw_parts(self.buf.as_ptr(), self.len) }
    }

    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        // Safe: slots [0, len) are live and contiguous.
        unsafe { slice::from_raw_parts_mut(self.buf.as_mut_ptr(), self.len) }
    }

    /// Returns a new vector holding this vector's elements followed by
    /// `other`'s. Neither operand is mutated.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::AllocationFailed` if storage for the
    /// combined sequence cannot be obtained.
    pub fn concat(&self, other: &Self) -> Result<Self, DynVecError>
    where
        T: Clone,
    {
        let mut result = self.try_clone()?;
        result.extend_from_slice(other.as_slice())?;
        Ok(result)
    }

    /// Returns an iterator over the live elements.
    pub fn iter(&self) -> slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Returns a mutable iterator over the live elements.
    pub fn iter_mut(&mut self) -> slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns a cursor positioned at the first element.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), 0)
    }

    /// Returns the end-sentinel cursor, positioned one past the last
    /// element. Traversal runs a cursor from [`cursor`](DynVec::cursor)
    /// until it equals this sentinel.
    #[must_use]
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::new(self.as_slice(), self.len)
    }

    /// Returns a mutable cursor positioned at the first element.
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::new(self.as_mut_slice())
    }

    fn grow(&mut self) -> Result<(), DynVecError> {
        let capacity = self.buf.capacity();
        if capacity == 0 {
            self.buf = RawBuffer::allocate(DEFAULT_CAPACITY)?;
            return Ok(());
        }
        // A live buffer never exceeds isize::MAX bytes, so scaling its
        // capacity by 1.5 cannot overflow usize.
        self.reallocate(capacity + capacity / 2)
    }

    fn maybe_shrink(&mut self) {
        let capacity = self.buf.capacity();
        if capacity == 0 || self.len >= capacity / 2 {
            return;
        }
        // Best effort: a failed shrink leaves the current buffer in
        // place, which preserves every invariant.
        let _ = self.reallocate(capacity - capacity / 2);
    }

    /// Moves every live element into a fresh allocation of
    /// `new_capacity` slots and releases the old block. On allocation
    /// failure the vector is untouched.
    fn reallocate(&mut self, new_capacity: usize) -> Result<(), DynVecError> {
        debug_assert!(new_capacity >= self.len);
        let mut new_buf = RawBuffer::allocate(new_capacity)?;
        // Safe: the new buffer is freshly allocated and large enough
        // for every live element.
        unsafe { self.buf.move_range_to(&mut new_buf, self.len) };
        // Ownership of the values moved with the bits; the replaced
        // buffer releases its memory block only.
        self.buf = new_buf;
        Ok(())
    }
}

impl<T> Default for DynVec<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for DynVec<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T: Clone> Clone for DynVec<T> {
    /// # Panics
    ///
    /// Panics if storage for the copy cannot be allocated. Use
    /// [`try_clone`](DynVec::try_clone) to handle that case.
    #[allow(clippy::expect_used)]
    fn clone(&self) -> Self {
        self.try_clone()
            .expect("allocation failed while cloning vector")
    }
}

impl<T> Index<usize> for DynVec<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index` is out of bounds. Use
    /// [`try_get`](DynVec::try_get) for the checked variant.
    fn index(&self, index: usize) -> &T {
        assert!(
            index < self.len,
            "Index {} out of bounds for vector of length {}",
            index,
            self.len
        );
        // Safe: bounds asserted above.
        unsafe { self.buf.slot(index) }
    }
}

impl<T> IndexMut<usize> for DynVec<T> {
    /// # Panics
    ///
    /// Panics if `index` is out of bounds. Use
    /// [`try_get_mut`](DynVec::try_get_mut) for the checked variant.
    fn index_mut(&mut self, index: usize) -> &mut T {
        assert!(
            index < self.len,
            "Index {} out of bounds for vector of length {}",
            index,
            self.len
        );
        // Safe: bounds asserted above.
        unsafe { self.buf.slot_mut(index) }
    }
}

impl<T: PartialEq> PartialEq for DynVec<T> {
    /// Two vectors are equal iff their lengths match and their elements
    /// compare equal pairwise, in order. Capacity is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for DynVec<T> {}

impl<T: fmt::Debug> fmt::Debug for DynVec<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
