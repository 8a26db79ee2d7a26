// This file is part of statvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StatVec};

impl<T, const N: usize> StatVec<T, N> {
    /// Appends `value` to the end of the vector.
    ///
    /// - Returns [`Error::Full`] if at capacity; the vector is unchanged and
    ///   `value` is dropped.
    ///
    /// The value is moved into place; no clone occurs.
    #[inline]
    pub fn push(&mut self, value: T) -> Result<(), Error> {
        if self.len == N {
            return Err(Error::Full);
        }
        self.buf[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Appends the result of `make()` to the end of the vector.
    ///
    /// - Returns [`Error::Full`] if at capacity; `make` is **not** called, so
    ///   nothing is constructed on failure.
    ///
    /// This is the in-place construction counterpart of
    /// [`push`](StatVec::push): the element is built exactly once, after the
    /// capacity check.
    #[inline]
    pub fn push_with<F>(&mut self, make: F) -> Result<(), Error>
    where
        F: FnOnce() -> T,
    {
        if self.len == N {
            return Err(Error::Full);
        }
        self.buf[self.len] = make();
        self.len += 1;
        Ok(())
    }
}
