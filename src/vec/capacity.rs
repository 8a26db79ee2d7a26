// This file is part of statvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::vec::StatVec;

impl<T: Clone + Default, const N: usize> StatVec<T, N> {
    /// Clones the contents into a new `StatVec` of capacity `M`.
    ///
    /// The first `min(len, M)` elements are cloned; when `M < len`, the
    /// excess is **silently dropped**. The source is untouched, reserve
    /// values included. Destination reserve slots are `T::default()`.
    ///
    /// # Example
    /// ```rust
    /// # use statvec::StatVec;
    /// let v = StatVec::<i32, 3>::from_array([1, 2, 3]);
    /// let wide: StatVec<i32, 8> = v.to_capacity();
    /// assert_eq!(wide.as_slice(), &[1, 2, 3]);
    ///
    /// let narrow: StatVec<i32, 2> = v.to_capacity();
    /// assert_eq!(narrow.as_slice(), &[1, 2]); // third element dropped
    /// ```
    pub fn to_capacity<const M: usize>(&self) -> StatVec<T, M> {
        let take = self.len.min(M);
        let mut out = StatVec::<T, M>::new();
        for (slot, value) in out.buf.iter_mut().zip(&self.buf[..take]) {
            *slot = value.clone();
        }
        out.len = take;
        out
    }
}

impl<T: Default, const N: usize> StatVec<T, N> {
    /// Moves the contents into a new `StatVec` of capacity `M`, consuming
    /// `self`.
    ///
    /// Like [`to_capacity`](StatVec::to_capacity) but by move: the first
    /// `min(len, M)` elements transfer without cloning, and when `M < len`
    /// the excess is silently dropped.
    pub fn into_capacity<const M: usize>(self) -> StatVec<T, M> {
        let take = self.len.min(M);
        let mut out = StatVec::<T, M>::new();
        for (slot, value) in out.buf.iter_mut().zip(self.into_iter().take(take)) {
            *slot = value;
        }
        out.len = take;
        out
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{vec::tests::Probe, StatVec};

    #[test]
    fn test_to_capacity_widening() {
        let v = StatVec::<i32, 3>::from_array([1, 2, 3]);
        let wide: StatVec<i32, 6> = v.to_capacity();
        assert_eq!(wide.as_slice(), &[1, 2, 3]);
        assert_eq!(wide.capacity(), 6);
        // Source untouched.
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_to_capacity_narrowing_truncates() {
        let v = StatVec::<i32, 5>::from_array([1, 2, 3, 4]);
        let narrow: StatVec<i32, 2> = v.to_capacity();
        assert_eq!(narrow.as_slice(), &[1, 2]);
        assert!(narrow.is_full());
    }

    #[test]
    fn test_to_capacity_equal_roundtrip() {
        let v = StatVec::<i32, 3>::from_array([7, 8]);
        let same: StatVec<i32, 3> = v.to_capacity();
        assert_eq!(same, v);
    }

    #[test]
    fn test_to_capacity_clones_once_per_survivor() {
        let mut v: StatVec<Probe, 4> = StatVec::new();
        v.push(Probe::default()).unwrap();
        v.push(Probe::default()).unwrap();
        let copy: StatVec<Probe, 8> = v.to_capacity();
        for slot in copy.iter() {
            assert_eq!(slot.clones, 1);
        }
    }

    #[test]
    fn test_into_capacity_moves_without_cloning() {
        let mut v: StatVec<Probe, 4> = StatVec::new();
        v.push(Probe::default()).unwrap();
        v.push(Probe::default()).unwrap();
        let moved: StatVec<Probe, 8> = v.into_capacity();
        assert_eq!(moved.len(), 2);
        for slot in moved.iter() {
            assert_eq!(slot.clones, 0);
        }
    }

    #[test]
    fn test_into_capacity_narrowing_truncates() {
        let v = StatVec::<i32, 4>::from_array([1, 2, 3]);
        let narrow: StatVec<i32, 1> = v.into_capacity();
        assert_eq!(narrow.as_slice(), &[1]);
    }

    #[test]
    fn test_capacity_conversion_ignores_reserve() {
        let mut v = StatVec::<i32, 4>::from_array([1, 2, 3, 4]);
        v.truncate(2);
        let wide: StatVec<i32, 8> = v.to_capacity();
        assert_eq!(wide.as_slice(), &[1, 2]);
        // Destination reserve is default-filled, not the source's stale data.
        let mut wide = wide;
        wide.resize(4).unwrap();
        assert_eq!(wide.as_slice(), &[1, 2, 0, 0]);
    }
}
