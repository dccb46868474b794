use core::mem;
use core::ptr;
use core::slice;

use crate::core::DynVec;
use crate::error::DynVecError;

/// A checked random-access cursor over a vector's live elements.
///
/// The cursor captures the vector's live range at creation time and
/// tracks a position in `[0, len]`; position `len` is the exhausted
/// end-sentinel state. Every movement and dereference is validated
/// against the snapshot bounds and reports a typed error instead of
/// walking out of range.
///
/// The borrow held by the cursor pins the vector for the cursor's
/// lifetime: operations that could reallocate or clear the buffer all
/// require `&mut` access, so a cursor can never observe a stale
/// snapshot.
///
/// This cursor implements `Copy`; two cursors are equal iff they
/// reference the same position in the same snapshot.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a, T> {
    data: &'a [T],
    position: usize,
}

impl<'a, T> Cursor<'a, T> {
    pub(crate) fn new(data: &'a [T], position: usize) -> Self {
        debug_assert!(position <= data.len());
        Self { data, position }
    }

    /// Current position within the snapshot, counted in elements from
    /// the start.
    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether the cursor sits at the end sentinel, one past the last
    /// element.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position == self.data.len()
    }

    #[must_use]
    pub fn at_start(&self) -> bool {
        self.position == 0
    }

    /// Moves the cursor one element forward.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::CursorOutOfRange` if the cursor is already
    /// at the end sentinel; the cursor does not move.
    pub fn advance(&mut self) -> Result<(), DynVecError> {
        if self.position < self.data.len() {
            self.position += 1;
            Ok(())
        } else {
            Err(DynVecError::CursorOutOfRange {
                position: self.position,
                length: self.data.len(),
            })
        }
    }

    /// Moves the cursor one element backward.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::CursorOutOfRange` if the cursor is at the
    /// first element; the cursor does not move.
    pub fn retreat(&mut self) -> Result<(), DynVecError> {
        if self.position > 0 {
            self.position -= 1;
            Ok(())
        } else {
            Err(DynVecError::CursorOutOfRange {
                position: self.position,
                length: self.data.len(),
            })
        }
    }

    /// Moves the cursor by `offset` elements, forward for positive
    /// values and backward for negative ones, one step at a time.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::CursorOutOfRange` as soon as a step would
    /// cross a boundary. The cursor stays where the failing step left
    /// it (at the boundary); it is not rolled back to where the walk
    /// started.
    pub fn advance_by(&mut self, offset: isize) -> Result<(), DynVecError> {
        if offset >= 0 {
            for _ in 0..offset {
                self.advance()?;
            }
        } else {
            for _ in 0..offset.unsigned_abs() {
                self.retreat()?;
            }
        }
        Ok(())
    }

    /// The element at the cursor position.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::InvalidDereference` if the cursor sits at
    /// the end sentinel.
    pub fn get(&self) -> Result<&'a T, DynVecError> {
        self.data
            .get(self.position)
            .ok_or(DynVecError::InvalidDereference {
                position: self.position,
                length: self.data.len(),
            })
    }
}

impl<T> PartialEq for Cursor<'_, T> {
    fn eq(&self, other: &Self) -> bool {
        ptr::eq(self.data.as_ptr(), other.data.as_ptr())
            && self.data.len() == other.data.len()
            && self.position == other.position
    }
}

impl<T> Eq for Cursor<'_, T> {}

/// The mutable counterpart of [`Cursor`]: same movement rules, with
/// write access to the element under the cursor.
pub struct CursorMut<'a, T> {
    data: &'a mut [T],
    position: usize,
}

impl<'a, T> CursorMut<'a, T> {
    pub(crate) fn new(data: &'a mut [T]) -> Self {
        Self { data, position: 0 }
    }

    #[must_use]
    pub fn position(&self) -> usize {
        self.position
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.position == self.data.len()
    }

    #[must_use]
    pub fn at_start(&self) -> bool {
        self.position == 0
    }

    /// Moves the cursor one element forward.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::CursorOutOfRange` if the cursor is already
    /// at the end sentinel; the cursor does not move.
    pub fn advance(&mut self) -> Result<(), DynVecError> {
        if self.position < self.data.len() {
            self.position += 1;
            Ok(())
        } else {
            Err(DynVecError::CursorOutOfRange {
                position: self.position,
                length: self.data.len(),
            })
        }
    }

    /// Moves the cursor one element backward.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::CursorOutOfRange` if the cursor is at the
    /// first element; the cursor does not move.
    pub fn retreat(&mut self) -> Result<(), DynVecError> {
        if self.position > 0 {
            self.position -= 1;
            Ok(())
        } else {
            Err(DynVecError::CursorOutOfRange {
                position: self.position,
                length: self.data.len(),
            })
        }
    }

    /// Moves the cursor by `offset` elements, one step at a time,
    /// stopping at the boundary on failure like
    /// [`Cursor::advance_by`].
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::CursorOutOfRange` as soon as a step would
    /// cross a boundary.
    pub fn advance_by(&mut self, offset: isize) -> Result<(), DynVecError> {
        if offset >= 0 {
            for _ in 0..offset {
                self.advance()?;
            }
        } else {
            for _ in 0..offset.unsigned_abs() {
                self.retreat()?;
            }
        }
        Ok(())
    }

    /// The element at the cursor position.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::InvalidDereference` if the cursor sits at
    /// the end sentinel.
    pub fn get(&self) -> Result<&T, DynVecError> {
        self.data
            .get(self.position)
            .ok_or(DynVecError::InvalidDereference {
                position: self.position,
                length: self.data.len(),
            })
    }

    /// Mutable access to the element at the cursor position.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::InvalidDereference` if the cursor sits at
    /// the end sentinel.
    pub fn get_mut(&mut self) -> Result<&mut T, DynVecError> {
        let length = self.data.len();
        self.data
            .get_mut(self.position)
            .ok_or(DynVecError::InvalidDereference {
                position: self.position,
                length,
            })
    }

    /// Replaces the element at the cursor position, returning the
    /// previous value.
    ///
    /// # Errors
    ///
    /// Returns `DynVecError::InvalidDereference` if the cursor sits at
    /// the end sentinel.
    pub fn set(&mut self, value: T) -> Result<T, DynVecError> {
        let slot = self.get_mut()?;
        Ok(mem::replace(slot, value))
    }
}

impl<'a, T> IntoIterator for &'a DynVec<T> {
    type Item = &'a T;
    type IntoIter = slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T> IntoIterator for &'a mut DynVec<T> {
    type Item = &'a mut T;
    type IntoIter = slice::IterMut<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}
