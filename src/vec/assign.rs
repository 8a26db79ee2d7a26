// This file is part of statvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StatVec};

impl<T: Clone, const N: usize> StatVec<T, N> {
    /// Replaces the contents with `count` clones of `value`.
    ///
    /// Partial-fill: if `count > N`, the vector is filled to capacity and
    /// [`Error::Full`] is returned. The vector is always left valid, holding
    /// `min(count, N)` clones. Contrast with
    /// [`insert_n`](StatVec::insert_n), which is all-or-nothing.
    pub fn assign(&mut self, count: usize, value: T) -> Result<(), Error> {
        let take = count.min(N);
        for slot in &mut self.buf[..take] {
            *slot = value.clone();
        }
        self.len = take;
        if count > N {
            Err(Error::Full)
        } else {
            Ok(())
        }
    }
}

impl<T, const N: usize> StatVec<T, N> {
    /// Replaces the contents with the elements of `src`, in order.
    ///
    /// The source must have a known exact length (`ExactSizeIterator`).
    /// Partial-fill like [`assign`](StatVec::assign): the first
    /// `min(src.len(), N)` elements are kept, and [`Error::Full`] is
    /// returned if any were dropped.
    pub fn assign_iter<I>(&mut self, src: I) -> Result<(), Error>
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator,
    {
        let it = src.into_iter();
        let total = it.len();
        let take = total.min(N);
        for (slot, value) in self.buf[..take].iter_mut().zip(it) {
            *slot = value;
        }
        self.len = take;
        if total > N {
            Err(Error::Full)
        } else {
            Ok(())
        }
    }
}
