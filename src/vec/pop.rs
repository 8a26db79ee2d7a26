// This file is part of statvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StatVec;

impl<T: Clone, const N: usize> StatVec<T, N> {
    /// Removes the last element and returns a clone of it, or `None` if
    /// empty.
    ///
    /// The slot itself is not overwritten; like all shrinking operations, the
    /// old value stays in the capacity reserve and would be re-exposed by
    /// [`resize`](StatVec::resize). That is why `pop` clones rather than
    /// moves out.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        if self.len == 0 {
            return None;
        }
        self.len -= 1;
        Some(self.buf[self.len].clone())
    }
}
