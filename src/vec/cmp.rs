// This file is part of statvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Comparisons between `StatVec`s, including across different capacities.
//!
//! Only the live prefixes take part; lengths, capacities, and reserve values
//! never influence equality or ordering beyond the usual lexicographic rules
//! for slices of different lengths.

// Crate imports
use crate::vec::StatVec;

// Core imports
use core::cmp::Ordering;

impl<T: PartialEq, const N: usize, const M: usize> PartialEq<StatVec<T, M>> for StatVec<T, N> {
    #[inline]
    fn eq(&self, other: &StatVec<T, M>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for StatVec<T, N> {}

impl<T: PartialOrd, const N: usize, const M: usize> PartialOrd<StatVec<T, M>> for StatVec<T, N> {
    #[inline]
    fn partial_cmp(&self, other: &StatVec<T, M>) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord, const N: usize> Ord for StatVec<T, N> {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

// Slice and array comparisons, for assertions and mixed-type code.
impl<T: PartialEq, const N: usize> PartialEq<[T]> for StatVec<T, N> {
    #[inline]
    fn eq(&self, other: &[T]) -> bool {
        self.as_slice() == other
    }
}

impl<T: PartialEq, const N: usize, const M: usize> PartialEq<[T; M]> for StatVec<T, N> {
    #[inline]
    fn eq(&self, other: &[T; M]) -> bool {
        self.as_slice() == other.as_slice()
    }
}
