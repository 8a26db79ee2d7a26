// This file is part of statvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The `StatVec` type and its inherent API.
//!
//! `StatVec<T, N>` is a fixed-capacity vector backed by a fully-initialized
//! `[T; N]` buffer and a logical length. Methods generally mirror
//! slice/vector semantics, with explicit capacity checks and partial-failure
//! policies spelled out per method.
//!
//! No heap allocations are performed.

mod assign;
mod capacity;
mod cmp;
mod erase;
mod from;
mod insert;
mod new;
mod pop;
mod push;
mod resize;
mod swap;

// Crate imports
use crate::error::Error;

// Core imports
use core::{
    borrow::{Borrow, BorrowMut},
    fmt,
    hash::{Hash, Hasher},
    ops::{Deref, DerefMut},
};

/// A fixed-capacity, stack-allocated vector.
///
/// `StatVec<T, N>` stores its elements inline in a buffer of capacity `N`
/// and tracks a logical length `len ∈ 0..=N`. Conceptually, it is a
/// slice-like view into a fixed-capacity backing array:
///
/// - capacity is known at compile time (`N`, with `N >= 1`);
/// - the buffer is stored inline (typically on the stack);
/// - many methods mirror `Vec`/slice semantics where they make sense;
/// - no heap allocations are performed.
///
/// # Layout and invariants
///
/// Internally, `StatVec<T, N>` maintains:
///
/// - a backing buffer `[T; N]` whose slots are all initialized values; and
/// - a logical length `len` with `0 <= len <= N`.
///
/// Only the prefix `buf[..len]` is live and visible through safe APIs.
/// Methods such as [`as_slice`](StatVec::as_slice), indexing, iteration, and
/// cursors are all restricted to this prefix. The slots `buf[len..]` are
/// capacity reserve: shrinking operations leave their values in place, and
/// growing via [`resize`](StatVec::resize) re-exposes them unchanged.
///
/// # Failure policy
///
/// Capacity-sensitive operations come in three styles (see the crate docs
/// for the full table): all-or-nothing (`push`, the `insert` family),
/// partial-fill (`assign`, `assign_iter`, `resize`), and truncating
/// (`FromIterator`, `Extend`, the capacity conversions). Capacity overflow
/// is always reported by value, never by panic; position and range errors
/// panic exactly like slices.
///
/// # Element and trait bounds
///
/// The struct itself has no bounds on `T`. Individual operations require
/// what they use: constructors that fill a fresh buffer need `T: Default`
/// ([`new`](StatVec::new) offers [`new_with`](StatVec::new_with) as the
/// escape hatch), and operations that duplicate elements (`assign`,
/// `insert_n`, `pop`, `to_capacity`, `TryFrom<&[T]>`) need `T: Clone`.
/// Pushing, inserting, and erasing single owned values need neither.
///
/// # Examples
///
/// ```rust
/// use statvec::StatVec;
///
/// let mut v: StatVec<u8, 4> = StatVec::new();
/// v.push(1).unwrap();
/// v.push(2).unwrap();
/// assert_eq!(v.as_slice(), &[1, 2]);
/// assert_eq!(v.spare_capacity(), 2);
/// ```
pub struct StatVec<T, const N: usize> {
    pub(crate) buf: [T; N],
    pub(crate) len: usize,
}

impl<T, const N: usize> StatVec<T, N> {
    /// The fixed capacity of this vector.
    pub const CAPACITY: usize = N;

    /// Returns the capacity of this vector (always `N`).
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the current logical length (`0..=N`).
    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if `len == 0`.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns `true` if `len == N`.
    #[inline]
    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    /// Returns `N - len`, the number of additional elements that can be pushed.
    #[inline]
    pub const fn spare_capacity(&self) -> usize {
        N - self.len
    }

    /// Returns the live prefix as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.buf[..self.len]
    }

    /// Returns the live prefix as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.buf[..self.len]
    }

    /// Returns a raw pointer to the start of the live prefix.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.buf.as_ptr()
    }

    /// Returns a raw mutable pointer to the start of the live prefix.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.buf.as_mut_ptr()
    }

    /// Returns `Some(&T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.as_slice().get(i)
    }

    /// Returns `Some(&mut T)` if `i < len`, otherwise `None`.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.as_mut_slice().get_mut(i)
    }

    /// Checked access: returns [`Error::OutOfBounds`] when `i >= len`.
    ///
    /// This is the only checked index accessor; plain indexing panics like a
    /// slice.
    #[inline]
    pub fn at(&self, i: usize) -> Result<&T, Error> {
        self.get(i).ok_or(Error::OutOfBounds)
    }

    /// Checked mutable access: returns [`Error::OutOfBounds`] when `i >= len`.
    #[inline]
    pub fn at_mut(&mut self, i: usize) -> Result<&mut T, Error> {
        self.get_mut(i).ok_or(Error::OutOfBounds)
    }

    // iterators
    /// Shorthand for `self.as_slice().iter()`.
    #[inline]
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.as_slice().iter()
    }

    /// Shorthand for `self.as_mut_slice().iter_mut()`.
    ///
    /// The slice iterators are double-ended, so `iter_mut().rev()` is the
    /// mutable back-to-front traversal.
    #[inline]
    pub fn iter_mut(&mut self) -> core::slice::IterMut<'_, T> {
        self.as_mut_slice().iter_mut()
    }

    /// Returns the first element, if any.
    #[inline]
    pub fn first(&self) -> Option<&T> {
        self.as_slice().first()
    }

    /// Returns the last element, if any.
    #[inline]
    pub fn last(&self) -> Option<&T> {
        self.as_slice().last()
    }

    /// Returns the first element mutably, if any.
    #[inline]
    pub fn first_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().first_mut()
    }

    /// Returns the last element mutably, if any.
    #[inline]
    pub fn last_mut(&mut self) -> Option<&mut T> {
        self.as_mut_slice().last_mut()
    }

    /// Returns `true` if the vector contains `x` (linear search on the live prefix).
    #[inline]
    pub fn contains(&self, x: &T) -> bool
    where
        T: PartialEq,
    {
        self.as_slice().contains(x)
    }
}

impl<T: fmt::Debug, const N: usize> fmt::Debug for StatVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StatVec")
            .field("len", &self.len)
            .field("elements", &self.as_slice())
            .finish()
    }
}

impl<T: Hash, const N: usize> Hash for StatVec<T, N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T: Clone, const N: usize> Clone for StatVec<T, N> {
    fn clone(&self) -> Self {
        // The whole buffer is cloned, reserve slots included, so a clone is
        // indistinguishable from the original even across resize regrowth.
        Self {
            buf: self.buf.clone(),
            len: self.len,
        }
    }
}

impl<T, const N: usize> Deref for StatVec<T, N> {
    type Target = [T];
    fn deref(&self) -> &Self::Target {
        self.as_slice()
    }
}
impl<T, const N: usize> DerefMut for StatVec<T, N> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.as_mut_slice()
    }
}

impl<T, const N: usize> AsRef<[T]> for StatVec<T, N> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> AsMut<[T]> for StatVec<T, N> {
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

// Borrow ergonomics (treat as a slice)
impl<T, const N: usize> Borrow<[T]> for StatVec<T, N> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}
impl<T, const N: usize> BorrowMut<[T]> for StatVec<T, N> {
    fn borrow_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}
