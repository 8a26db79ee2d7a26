// This file is part of statvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Iterator support for [`StatVec`](crate::StatVec).
//!
//! - `IntoIter<T, N>` yields by value and supports `DoubleEndedIterator`,
//!   `ExactSizeIterator`, and `FusedIterator`.
//! - `&StatVec` and `&mut StatVec` iterate as slices.
//! - `FromIterator` and `Extend` are truncating: elements past capacity are
//!   silently dropped.

// Crate imports
use crate::vec::StatVec;

// Core imports
use core::iter::FusedIterator;

/// Owned iterator returned by `StatVec::into_iter()`.
///
/// Yields the live elements by value from front to back and supports
/// double-ended iteration via [`DoubleEndedIterator`]. Reserve values are
/// dropped when the vector is consumed, not yielded.
pub struct IntoIter<T, const N: usize> {
    inner: core::array::IntoIter<T, N>,
}

impl<T, const N: usize> Iterator for IntoIter<T, N> {
    type Item = T;
    fn next(&mut self) -> Option<T> {
        self.inner.next()
    }
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
    fn nth(&mut self, n: usize) -> Option<T> {
        self.inner.nth(n)
    }
}

impl<T, const N: usize> DoubleEndedIterator for IntoIter<T, N> {
    fn next_back(&mut self) -> Option<T> {
        self.inner.next_back()
    }
    fn nth_back(&mut self, n: usize) -> Option<T> {
        self.inner.nth_back(n)
    }
}
impl<T, const N: usize> FusedIterator for IntoIter<T, N> {}
impl<T, const N: usize> ExactSizeIterator for IntoIter<T, N> {}

impl<'a, T, const N: usize> IntoIterator for &'a StatVec<T, N> {
    type Item = &'a T;
    type IntoIter = core::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}
impl<'a, T, const N: usize> IntoIterator for &'a mut StatVec<T, N> {
    type Item = &'a mut T;
    type IntoIter = core::slice::IterMut<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_mut_slice().iter_mut()
    }
}
impl<T, const N: usize> IntoIterator for StatVec<T, N> {
    type Item = T;
    type IntoIter = IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        let len = self.len;
        let mut inner = self.buf.into_iter();
        // Drop the reserve tail up front so only live elements remain.
        for _ in len..N {
            inner.next_back();
        }
        IntoIter { inner }
    }
}

impl<T, const N: usize> Extend<T> for StatVec<T, N> {
    /// Appends elements until the source or the spare capacity runs out;
    /// whatever does not fit is silently dropped.
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for value in iter.into_iter().take(N - self.len) {
            self.buf[self.len] = value;
            self.len += 1;
        }
    }
}

impl<T: Default, const N: usize> FromIterator<T> for StatVec<T, N> {
    /// Collects at most `N` elements; the rest of the source is not
    /// consumed.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut out = Self::new();
        out.extend(iter);
        out
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use super::StatVec;

    #[test]
    fn test_double_ended_and_nth() {
        let v: StatVec<i32, 6> = StatVec::try_from(&[10, 20, 30, 40][..]).unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.nth(1), Some(30));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_into_iter_nth_back_sequence() {
        let v: StatVec<i32, 6> = StatVec::try_from(&[1, 2, 3, 4, 5][..]).unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.nth_back(0), Some(5));
        assert_eq!(it.nth_back(1), Some(3)); // skip 1 from back, take 3
        assert_eq!(it.next_back(), Some(2));
        assert_eq!(it.next(), Some(1));
        assert_eq!(it.next(), None);
    }

    #[test]
    #[allow(clippy::iter_nth_zero)]
    fn test_size_hint_tracks_consumption() {
        let v: StatVec<i32, 6> = StatVec::try_from(&[10, 20, 30, 40][..]).unwrap();
        let mut it = v.into_iter();
        assert_eq!(it.size_hint(), (4, Some(4)));
        assert_eq!(it.next(), Some(10));
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.next_back(), Some(40));
        assert_eq!(it.size_hint(), (2, Some(2)));
        assert_eq!(it.nth(0), Some(20));
        assert_eq!(it.size_hint(), (1, Some(1)));
        assert_eq!(it.next(), Some(30));
        assert_eq!(it.size_hint(), (0, Some(0)));
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_into_iter_skips_reserve_values() {
        let mut v: StatVec<i32, 4> = StatVec::try_from(&[1, 2, 3, 4][..]).unwrap();
        v.truncate(2);
        // Slots 2 and 3 still hold values, but they are reserve now.
        let collected: alloc::vec::Vec<i32> = v.into_iter().collect();
        assert_eq!(collected, alloc::vec![1, 2]);
    }

    #[test]
    fn test_into_iter_moves_without_cloning() {
        use crate::vec::tests::Probe;

        let mut v: StatVec<Probe, 3> = StatVec::new();
        v.push(Probe::default()).unwrap();
        v.push(Probe::default()).unwrap();
        for p in v {
            assert_eq!(p.clones, 0);
        }
    }

    #[test]
    fn test_into_iter_zero_sized_type() {
        let v: StatVec<(), 3> = StatVec::from([(); 3]);
        let it = v.into_iter();
        assert_eq!(it.size_hint(), (3, Some(3)));
        assert_eq!(it.count(), 3);
    }

    #[test]
    fn test_ref_iteration_forms() {
        let mut v: StatVec<i32, 4> = StatVec::try_from(&[1, 2, 3][..]).unwrap();
        let sum: i32 = (&v).into_iter().sum();
        assert_eq!(sum, 6);
        for x in &mut v {
            *x += 1;
        }
        assert_eq!(v.as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn test_from_iterator_truncates() {
        let v: StatVec<i32, 3> = (1..=5).collect();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert!(v.is_full());

        let short: StatVec<i32, 5> = (1..=2).collect();
        assert_eq!(short.as_slice(), &[1, 2]);
    }

    #[test]
    fn test_extend_truncates_silently() {
        let mut v: StatVec<i32, 4> = StatVec::try_from(&[1, 2][..]).unwrap();
        v.extend([3, 4, 5, 6]);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);

        // Full vector: extend is a no-op.
        v.extend([9]);
        assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
    }
}
