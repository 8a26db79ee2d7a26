// This file is part of statvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

// Crate imports
use crate::{error::Error, vec::StatVec};

impl<T, const N: usize> From<[T; N]> for StatVec<T, N> {
    /// Converts a full array into a full `StatVec` by move.
    ///
    /// The vector starts at `len == N`; pop or truncate to make room.
    #[inline]
    fn from(buf: [T; N]) -> Self {
        const {
            assert!(N > 0, "StatVec capacity must be at least 1");
        }
        Self { buf, len: N }
    }
}

impl<T: Clone, const N: usize> From<&[T; N]> for StatVec<T, N> {
    #[inline]
    fn from(buf: &[T; N]) -> Self {
        const {
            assert!(N > 0, "StatVec capacity must be at least 1");
        }
        Self {
            buf: buf.clone(),
            len: N,
        }
    }
}

impl<T: Clone + Default, const N: usize> TryFrom<&[T]> for StatVec<T, N> {
    type Error = Error;

    /// Clones a slice into a new `StatVec`.
    ///
    /// - Returns [`Error::Full`] if `src.len() > N` (nothing is built).
    #[inline]
    fn try_from(src: &[T]) -> Result<Self, Self::Error> {
        if src.len() > N {
            return Err(Error::Full);
        }
        let mut out = Self::new();
        for (slot, value) in out.buf.iter_mut().zip(src) {
            *slot = value.clone();
        }
        out.len = src.len();
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    // Imports
    use crate::{Error, StatVec};

    #[test]
    fn test_from_owned_array_is_full() {
        let v = StatVec::from([1, 2, 3]);
        assert!(v.is_full());
        assert_eq!(v.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_from_array_ref_is_full() {
        let arr = [4, 5];
        let v: StatVec<i32, 2> = StatVec::from(&arr);
        assert!(v.is_full());
        assert_eq!(v.as_slice(), &[4, 5]);
        assert_eq!(arr, [4, 5]);
    }

    #[test]
    fn test_try_from_slice() {
        let v: StatVec<i32, 4> = StatVec::try_from(&[1, 2, 3][..]).unwrap();
        assert_eq!(v.as_slice(), &[1, 2, 3]);
        assert_eq!(v.len(), 3);

        let exact: StatVec<i32, 3> = StatVec::try_from(&[1, 2, 3][..]).unwrap();
        assert!(exact.is_full());

        let too_big = StatVec::<i32, 2>::try_from(&[1, 2, 3][..]);
        assert_eq!(too_big.unwrap_err(), Error::Full);
    }
}
