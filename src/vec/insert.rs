// This file is part of statvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{cursor::CursorMut, error::Error, vec::StatVec};

impl<T, const N: usize> StatVec<T, N> {
    /// Inserts `value` at `index`, shifting `[index..len)` one slot to the
    /// right.
    ///
    /// - Returns a [`CursorMut`] at the inserted element on success.
    /// - Returns [`Error::Full`] if at capacity; the vector is unchanged.
    ///
    /// # Panics
    /// Panics if `index > len`, like slice indexing.
    #[inline]
    pub fn insert(&mut self, index: usize, value: T) -> Result<CursorMut<'_, T>, Error> {
        assert!(index <= self.len, "insert position out of bounds");
        if self.len == N {
            return Err(Error::Full);
        }
        // Overlap-safe right shift; the displaced reserve slot rotates to
        // `index`, where it is immediately overwritten.
        self.buf[index..=self.len].rotate_right(1);
        self.buf[index] = value;
        self.len += 1;
        Ok(CursorMut::from_parts(self.as_mut_slice(), index))
    }

    /// Inserts the result of `make()` at `index`.
    ///
    /// - Returns a [`CursorMut`] at the inserted element on success.
    /// - Returns [`Error::Full`] if at capacity; `make` is **not** called.
    ///
    /// # Panics
    /// Panics if `index > len`.
    #[inline]
    pub fn insert_with<F>(&mut self, index: usize, make: F) -> Result<CursorMut<'_, T>, Error>
    where
        F: FnOnce() -> T,
    {
        assert!(index <= self.len, "insert position out of bounds");
        if self.len == N {
            return Err(Error::Full);
        }
        self.buf[index..=self.len].rotate_right(1);
        self.buf[index] = make();
        self.len += 1;
        Ok(CursorMut::from_parts(self.as_mut_slice(), index))
    }
}

impl<T: Clone, const N: usize> StatVec<T, N> {
    /// Inserts `count` clones of `value` at `index`, shifting the tail right
    /// by `count`.
    ///
    /// All-or-nothing: if `count` exceeds the spare capacity the vector is
    /// unchanged and [`Error::Full`] is returned. Contrast with
    /// [`assign`](StatVec::assign), which fills what fits. `count == 0` is a
    /// no-op that still returns a cursor at `index`.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert_n(
        &mut self,
        index: usize,
        count: usize,
        value: T,
    ) -> Result<CursorMut<'_, T>, Error> {
        assert!(index <= self.len, "insert position out of bounds");
        if count > N - self.len {
            return Err(Error::Full);
        }
        if count > 0 {
            self.buf[index..self.len + count].rotate_right(count);
            for slot in &mut self.buf[index..index + count] {
                *slot = value.clone();
            }
            self.len += count;
        }
        Ok(CursorMut::from_parts(self.as_mut_slice(), index))
    }
}

impl<T, const N: usize> StatVec<T, N> {
    /// Inserts all elements of `src` at `index`, in order, shifting the tail
    /// right by the source length.
    ///
    /// The source must have a known exact length (`ExactSizeIterator`), which
    /// makes the operation all-or-nothing: if it does not fit, the vector is
    /// unchanged and [`Error::Full`] is returned.
    ///
    /// # Panics
    /// Panics if `index > len`.
    pub fn insert_iter<I>(&mut self, index: usize, src: I) -> Result<CursorMut<'_, T>, Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        assert!(index <= self.len, "insert position out of bounds");
        let it = src.into_iter();
        let count = it.len();
        if count > N - self.len {
            return Err(Error::Full);
        }
        if count > 0 {
            self.buf[index..self.len + count].rotate_right(count);
            for (slot, value) in self.buf[index..index + count].iter_mut().zip(it) {
                *slot = value;
            }
            self.len += count;
        }
        Ok(CursorMut::from_parts(self.as_mut_slice(), index))
    }
}
