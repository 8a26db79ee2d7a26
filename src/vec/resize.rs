// This file is part of statvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StatVec};

impl<T, const N: usize> StatVec<T, N> {
    /// Sets the logical length to `0`.
    ///
    /// No elements are dropped or overwritten; see
    /// [`resize`](StatVec::resize) for what that implies.
    #[inline]
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Shrinks the logical length to `new_len` if it is currently greater;
    /// does nothing otherwise.
    #[inline]
    pub fn truncate(&mut self, new_len: usize) {
        if new_len < self.len {
            self.len = new_len;
        }
    }

    /// Sets the logical length to `new_len`, in either direction.
    ///
    /// Resizing only moves the length; no slot is constructed, dropped, or
    /// overwritten. Growing re-exposes whatever values the reserve slots
    /// hold, which is the stale data left by earlier shrinks (or the
    /// constructor fill for never-used slots).
    ///
    /// - Returns [`Error::Full`] if `new_len > N`; the length is clamped to
    ///   `N` rather than rolled back, consistent with the partial-fill
    ///   policy of [`assign`](StatVec::assign).
    #[inline]
    pub fn resize(&mut self, new_len: usize) -> Result<(), Error> {
        if new_len > N {
            self.len = N;
            return Err(Error::Full);
        }
        self.len = new_len;
        Ok(())
    }
}
