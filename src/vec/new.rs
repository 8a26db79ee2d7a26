// This file is part of statvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StatVec;

impl<T: Default, const N: usize> StatVec<T, N> {
    /// Creates a new, empty `StatVec`.
    ///
    /// The backing buffer is filled with `T::default()`; those values sit in
    /// the capacity reserve until [`resize`](StatVec::resize) or a push makes
    /// them live. Use [`new_with`](StatVec::new_with) when `T` has no
    /// `Default`.
    ///
    /// # Example
    /// ```rust
    /// # use statvec::StatVec;
    /// let v: StatVec<u8, 8> = StatVec::new();
    /// assert!(v.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        const {
            assert!(N > 0, "StatVec capacity must be at least 1");
        }
        Self {
            buf: core::array::from_fn(|_| T::default()),
            len: 0,
        }
    }

    /// Creates a `StatVec` whose first `M` slots are moved in from `init`,
    /// with `len = M`. Requires `M <= N` (checked at compile time).
    ///
    /// Shorthand for building a partially-filled vector from a smaller array
    /// without cloning.
    ///
    /// # Example
    /// ```rust
    /// # use statvec::StatVec;
    /// let v = StatVec::<i32, 5>::from_array([1, 2, 3]);
    /// assert_eq!(v.as_slice(), &[1, 2, 3]);
    /// assert_eq!(v.spare_capacity(), 2);
    /// ```
    #[inline]
    pub fn from_array<const M: usize>(init: [T; M]) -> Self {
        const {
            assert!(M <= N, "source array larger than StatVec capacity");
        }
        let mut out = Self::new();
        for (slot, value) in out.buf.iter_mut().zip(init) {
            *slot = value;
        }
        out.len = M;
        out
    }
}

impl<T: Clone, const N: usize> StatVec<T, N> {
    /// Creates a new, empty `StatVec` whose reserve slots are clones of
    /// `fill`.
    ///
    /// This is the constructor for element types without a `Default`; the
    /// fill value is only observable through [`resize`](StatVec::resize)
    /// regrowth.
    #[inline]
    pub fn new_with(fill: T) -> Self {
        const {
            assert!(N > 0, "StatVec capacity must be at least 1");
        }
        Self {
            buf: core::array::from_fn(|_| fill.clone()),
            len: 0,
        }
    }
}

impl<T: Clone + Default, const N: usize> StatVec<T, N> {
    /// Like [`from_array`](StatVec::from_array), but clones out of a borrowed
    /// array.
    #[inline]
    pub fn from_array_ref<const M: usize>(init: &[T; M]) -> Self {
        const {
            assert!(M <= N, "source array larger than StatVec capacity");
        }
        let mut out = Self::new();
        for (slot, value) in out.buf.iter_mut().zip(init) {
            *slot = value.clone();
        }
        out.len = M;
        out
    }
}

impl<T: Default, const N: usize> Default for StatVec<T, N> {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}
