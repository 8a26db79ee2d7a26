// This file is part of statvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StatVec;

impl<T, const N: usize> StatVec<T, N> {
    /// Swaps the entire contents (buffers and lengths) of two same-capacity
    /// vectors.
    ///
    /// This is a whole-container swap in the manner of [`core::mem::swap`];
    /// for swapping two *elements*, use `v.as_mut_slice().swap(i, j)`.
    #[inline]
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }
}
