// This file is part of statvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{cursor::CursorMut, vec::StatVec};

// Core imports
use core::ops::{Bound, RangeBounds};

impl<T, const N: usize> StatVec<T, N> {
    /// Removes the element at `index`, shifting the tail one slot left.
    ///
    /// Returns a [`CursorMut`] at the element that followed the removed one
    /// (the end cursor when the last element was removed). The removed value
    /// rotates into the capacity reserve rather than being dropped here.
    ///
    /// # Panics
    /// Panics if `index >= len`.
    #[inline]
    pub fn erase(&mut self, index: usize) -> CursorMut<'_, T> {
        assert!(index < self.len, "erase position out of bounds");
        // Left rotation over [index..len) moves the erased value to the last
        // live slot, which then becomes reserve.
        self.buf[index..self.len].rotate_left(1);
        self.len -= 1;
        CursorMut::from_parts(self.as_mut_slice(), index)
    }

    /// Removes the elements in `range`, shifting the tail left to close the
    /// gap.
    ///
    /// Accepts any range form (`a..b`, `a..=b`, `..b`, `a..`, `..`). Returns
    /// a [`CursorMut`] at the first element after the removed block (the end
    /// cursor when the block reached the tail). An empty range is a no-op.
    /// Removed values rotate into the capacity reserve in rotated order.
    ///
    /// # Panics
    /// Panics if the range is inverted or its end exceeds `len`.
    pub fn erase_range<R>(&mut self, range: R) -> CursorMut<'_, T>
    where
        R: RangeBounds<usize>,
    {
        let start = match range.start_bound() {
            Bound::Included(&s) => s,
            Bound::Excluded(&s) => s + 1,
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&e) => e + 1,
            Bound::Excluded(&e) => e,
            Bound::Unbounded => self.len,
        };
        assert!(start <= end, "erase range is inverted");
        assert!(end <= self.len, "erase range out of bounds");

        let width = end - start;
        if width > 0 {
            self.buf[start..self.len].rotate_left(width);
            self.len -= width;
        }
        CursorMut::from_parts(self.as_mut_slice(), start)
    }
}
