// This file is part of statvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cursor-based positional access to a [`StatVec`].
//!
//! A cursor is a random-access position handle over the live prefix of a
//! vector: a position in `0..=len`, where `len` itself is the *end* position
//! (one past the last element, dereferencing to nothing). Cursors support
//! relative movement ([`move_next`](Cursor::move_next) /
//! [`move_prev`](Cursor::move_prev)), signed-offset arithmetic (`cur + 2`,
//! [`seek`](Cursor::seek)), mutual ordering, and distance
//! ([`distance_to`](Cursor::distance_to), `a - b`).
//!
//! Three variants share that surface:
//!
//! - [`Cursor`] borrows the vector shared; it is `Copy` and doubles as an
//!   `Iterator` over the remaining elements.
//! - [`CursorMut`] borrows the vector exclusively and adds mutable access.
//!   It converts one way into a `Cursor`; because it can also move
//!   *backward*, it hands out `&mut T` only through short reborrows
//!   ([`get_mut`](CursorMut::get_mut)), never for its whole lifetime.
//! - [`RevCursor`] walks the same elements back to front; its positions
//!   count from the back, so "next" means toward the front of the vector.
//!
//! The borrow checker pins the vector for as long as any cursor is alive, so
//! a cursor can never witness an element shift that would invalidate its
//! position.

// Crate imports
use crate::vec::StatVec;

// Core imports
use core::{
    fmt,
    iter::FusedIterator,
    marker::PhantomData,
    ops::{Add, AddAssign, Sub, SubAssign},
};

/// A shared random-access cursor over the live elements of a [`StatVec`].
///
/// Obtained from [`StatVec::cursor`], [`StatVec::cursor_end`], or
/// [`StatVec::cursor_at`]. `Cursor` is `Copy`, compares and orders by
/// position, and iterates over the elements from its position to the end.
///
/// # Example
/// ```rust
/// # use statvec::StatVec;
/// let v = StatVec::<i32, 5>::from_array([10, 20, 30]);
/// let mut cur = v.cursor();
/// assert_eq!(cur.get(), Some(&10));
/// cur.seek(2);
/// assert_eq!(cur.get(), Some(&30));
/// assert_eq!(cur - v.cursor(), 2);
/// ```
pub struct Cursor<'a, T> {
    base: *const T,
    pos: usize,
    len: usize,
    _marker: PhantomData<&'a [T]>,
}

/// An exclusive random-access cursor over the live elements of a
/// [`StatVec`].
///
/// Obtained from [`StatVec::cursor_mut`], [`StatVec::cursor_mut_at`], or as
/// the success value of the insert/erase family. Movement and comparison
/// match [`Cursor`]; element access goes through
/// [`get`](CursorMut::get)/[`get_mut`](CursorMut::get_mut), whose borrows
/// end before the cursor moves again.
///
/// `CursorMut` is not `Clone`: two exclusive handles into the same vector
/// could otherwise alias. Use [`as_cursor`](CursorMut::as_cursor) for a
/// temporary shared view, or [`into_cursor`](CursorMut::into_cursor) to
/// downgrade permanently. There is no conversion in the other direction.
pub struct CursorMut<'a, T> {
    base: *mut T,
    pos: usize,
    len: usize,
    _marker: PhantomData<&'a mut [T]>,
}

/// A shared cursor that walks a [`StatVec`] back to front.
///
/// Positions count from the back: position `0` is the *last* live element,
/// and the end position `len` falls just before the first element. Movement,
/// arithmetic, ordering, and iteration all operate in that reversed frame,
/// so `RevCursor` orders and iterates exactly like a forward cursor over the
/// reversed sequence. [`rev`](RevCursor::rev) maps back to the forward
/// frame.
pub struct RevCursor<'a, T> {
    base: *const T,
    /// Logical (reversed) position; physical index is `len - 1 - pos`.
    pos: usize,
    len: usize,
    _marker: PhantomData<&'a [T]>,
}

// A Cursor/RevCursor is semantically a `&'a [T]` plus an index, a CursorMut
// a `&'a mut [T]` plus an index; thread-safety mirrors those.
unsafe impl<T: Sync> Send for Cursor<'_, T> {}
unsafe impl<T: Sync> Sync for Cursor<'_, T> {}
unsafe impl<T: Sync> Send for RevCursor<'_, T> {}
unsafe impl<T: Sync> Sync for RevCursor<'_, T> {}
unsafe impl<T: Send> Send for CursorMut<'_, T> {}
unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

// `derive(Copy)` would demand `T: Copy`; the cursor only holds a pointer.
impl<T> Clone for Cursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for Cursor<'_, T> {}

impl<T> Clone for RevCursor<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}
impl<T> Copy for RevCursor<'_, T> {}

/// Emits the position surface shared by all three cursor types: queries,
/// relative movement, signed seeking, distance, ordering, and `+`/`-`
/// offset operators.
///
/// Invariants relied on by every emitted method: `pos <= len`, and `base`
/// points to at least `len` initialized elements valid for the cursor's
/// lifetime.
macro_rules! cursor_positional_impls {
    ($cursor:ident) => {
        impl<'a, T> $cursor<'a, T> {
            /// Returns the current position (`0..=len`).
            #[inline]
            pub fn position(&self) -> usize {
                self.pos
            }

            /// Returns `true` if at the end position (dereferences to
            /// nothing).
            #[inline]
            pub fn is_end(&self) -> bool {
                self.pos == self.len
            }

            /// Advances one position. Returns `false` (and stays put) when
            /// already at the end.
            #[inline]
            pub fn move_next(&mut self) -> bool {
                if self.pos == self.len {
                    return false;
                }
                self.pos += 1;
                true
            }

            /// Retreats one position. Returns `false` (and stays put) when
            /// already at position `0`.
            #[inline]
            pub fn move_prev(&mut self) -> bool {
                if self.pos == 0 {
                    return false;
                }
                self.pos -= 1;
                true
            }

            /// Moves by a signed `offset`.
            ///
            /// # Panics
            /// Panics if the target position falls outside `0..=len`, like
            /// indexing past a slice.
            #[inline]
            pub fn seek(&mut self, offset: isize) {
                let target = match self.pos.checked_add_signed(offset) {
                    Some(p) if p <= self.len => p,
                    _ => panic!("cursor seek out of bounds"),
                };
                self.pos = target;
            }

            /// Returns the signed number of positions from `self` to
            /// `other` (positive when `other` is further toward the end).
            #[inline]
            pub fn distance_to(&self, other: &Self) -> isize {
                other.pos as isize - self.pos as isize
            }
        }

        // Cursors compare and order by position only. Comparing cursors
        // from different vectors is meaningless but memory-safe, as with
        // slice iterator snapshots.
        impl<T> PartialEq for $cursor<'_, T> {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                self.pos == other.pos
            }
        }
        impl<T> Eq for $cursor<'_, T> {}
        impl<T> PartialOrd for $cursor<'_, T> {
            #[inline]
            fn partial_cmp(&self, other: &Self) -> Option<core::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }
        impl<T> Ord for $cursor<'_, T> {
            #[inline]
            fn cmp(&self, other: &Self) -> core::cmp::Ordering {
                self.pos.cmp(&other.pos)
            }
        }

        impl<'a, T> Add<isize> for $cursor<'a, T> {
            type Output = $cursor<'a, T>;

            /// Returns a cursor `offset` positions further; panics like
            /// `seek` when the target is out of bounds.
            #[inline]
            fn add(mut self, offset: isize) -> Self::Output {
                self.seek(offset);
                self
            }
        }

        // Offset-plus-cursor, mirroring `cursor + offset`.
        impl<'a, T> Add<$cursor<'a, T>> for isize {
            type Output = $cursor<'a, T>;

            #[inline]
            fn add(self, cursor: $cursor<'a, T>) -> Self::Output {
                cursor + self
            }
        }

        impl<'a, T> Sub<isize> for $cursor<'a, T> {
            type Output = $cursor<'a, T>;

            #[inline]
            fn sub(mut self, offset: isize) -> Self::Output {
                self.seek(-offset);
                self
            }
        }

        impl<T> AddAssign<isize> for $cursor<'_, T> {
            #[inline]
            fn add_assign(&mut self, offset: isize) {
                self.seek(offset);
            }
        }

        impl<T> SubAssign<isize> for $cursor<'_, T> {
            #[inline]
            fn sub_assign(&mut self, offset: isize) {
                self.seek(-offset);
            }
        }

        // `a - b` yields the distance, `b.distance_to(&a)`.
        impl<'a, T> Sub for $cursor<'a, T>
        where
            $cursor<'a, T>: Copy,
        {
            type Output = isize;

            #[inline]
            fn sub(self, other: Self) -> isize {
                other.distance_to(&self)
            }
        }

        impl<T> fmt::Debug for $cursor<'_, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.debug_struct(stringify!($cursor))
                    .field("pos", &self.pos)
                    .field("len", &self.len)
                    .finish()
            }
        }
    };
}

cursor_positional_impls!(Cursor);
cursor_positional_impls!(CursorMut);
cursor_positional_impls!(RevCursor);

impl<'a, T> Cursor<'a, T> {
    #[inline]
    pub(crate) fn from_parts(slice: &'a [T], pos: usize) -> Self {
        debug_assert!(pos <= slice.len());
        Self {
            base: slice.as_ptr(),
            pos,
            len: slice.len(),
            _marker: PhantomData,
        }
    }

    /// Returns the element at the cursor, or `None` at the end position.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        if self.pos < self.len {
            // SAFETY: base points to `len` live elements borrowed for 'a,
            // and pos < len.
            Some(unsafe { &*self.base.add(self.pos) })
        } else {
            None
        }
    }

    /// Returns the element a signed `offset` away without moving, or `None`
    /// if that position holds no element.
    #[inline]
    pub fn peek(&self, offset: isize) -> Option<&'a T> {
        match self.pos.checked_add_signed(offset) {
            // SAFETY: p < len, same invariant as `get`.
            Some(p) if p < self.len => Some(unsafe { &*self.base.add(p) }),
            _ => None,
        }
    }

    /// Maps this cursor into the reversed frame over the same elements.
    ///
    /// The mapping preserves the "elements remaining until the end" count:
    /// the begin cursor maps to the reverse *end*, the end cursor to the
    /// reverse *begin*, and `rev().rev()` is the identity.
    #[inline]
    pub fn rev(self) -> RevCursor<'a, T> {
        RevCursor {
            base: self.base,
            pos: self.len - self.pos,
            len: self.len,
            _marker: PhantomData,
        }
    }
}

// A shared cursor iterates over the remaining elements; being `Copy`, it
// can be re-iterated from any saved position.
impl<'a, T> Iterator for Cursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.get()?;
        self.pos += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.len - self.pos;
        (rest, Some(rest))
    }

    #[inline]
    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        self.pos = self.pos.saturating_add(n).min(self.len);
        self.next()
    }
}

impl<T> ExactSizeIterator for Cursor<'_, T> {}
impl<T> FusedIterator for Cursor<'_, T> {}

impl<'a, T> CursorMut<'a, T> {
    #[inline]
    pub(crate) fn from_parts(slice: &'a mut [T], pos: usize) -> Self {
        debug_assert!(pos <= slice.len());
        Self {
            base: slice.as_mut_ptr(),
            pos,
            len: slice.len(),
            _marker: PhantomData,
        }
    }

    /// Returns the element at the cursor, or `None` at the end position.
    #[inline]
    pub fn get(&self) -> Option<&T> {
        if self.pos < self.len {
            // SAFETY: base points to `len` live elements borrowed
            // exclusively for 'a, pos < len, and the returned shared borrow
            // is tied to `&self`.
            Some(unsafe { &*self.base.add(self.pos) })
        } else {
            None
        }
    }

    /// Returns the element at the cursor mutably, or `None` at the end
    /// position.
    ///
    /// The borrow is tied to `&mut self`, so it ends before the cursor can
    /// move. A cursor can revisit a position it already handed out, which
    /// is why the reference cannot outlive the call site.
    #[inline]
    pub fn get_mut(&mut self) -> Option<&mut T> {
        if self.pos < self.len {
            // SAFETY: exclusive borrow of the slice for 'a; `&mut self`
            // guarantees no other borrow from this cursor is live.
            Some(unsafe { &mut *self.base.add(self.pos) })
        } else {
            None
        }
    }

    /// Returns the element a signed `offset` away without moving, or `None`
    /// if that position holds no element.
    #[inline]
    pub fn peek(&self, offset: isize) -> Option<&T> {
        match self.pos.checked_add_signed(offset) {
            // SAFETY: p < len, same invariant as `get`.
            Some(p) if p < self.len => Some(unsafe { &*self.base.add(p) }),
            _ => None,
        }
    }

    /// Mutable counterpart of [`peek`](CursorMut::peek); the borrow is tied
    /// to `&mut self` like [`get_mut`](CursorMut::get_mut).
    #[inline]
    pub fn peek_mut(&mut self, offset: isize) -> Option<&mut T> {
        match self.pos.checked_add_signed(offset) {
            // SAFETY: p < len; `&mut self` rules out concurrent borrows.
            Some(p) if p < self.len => Some(unsafe { &mut *self.base.add(p) }),
            _ => None,
        }
    }

    /// Returns a shared cursor at the same position, borrowing from this
    /// one.
    #[inline]
    pub fn as_cursor(&self) -> Cursor<'_, T> {
        Cursor {
            base: self.base,
            pos: self.pos,
            len: self.len,
            _marker: PhantomData,
        }
    }

    /// Consumes this cursor, downgrading it to a shared cursor for the full
    /// borrow. The exclusive borrow cannot be recovered; there is no
    /// shared-to-exclusive conversion.
    #[inline]
    pub fn into_cursor(self) -> Cursor<'a, T> {
        Cursor {
            base: self.base,
            pos: self.pos,
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> From<CursorMut<'a, T>> for Cursor<'a, T> {
    #[inline]
    fn from(cur: CursorMut<'a, T>) -> Self {
        cur.into_cursor()
    }
}

impl<'a, T> RevCursor<'a, T> {
    #[inline]
    pub(crate) fn from_parts(slice: &'a [T], pos: usize) -> Self {
        debug_assert!(pos <= slice.len());
        Self {
            base: slice.as_ptr(),
            pos,
            len: slice.len(),
            _marker: PhantomData,
        }
    }

    /// Returns the element at the cursor, or `None` at the (reverse) end
    /// position.
    #[inline]
    pub fn get(&self) -> Option<&'a T> {
        if self.pos < self.len {
            // SAFETY: pos < len, so len - 1 - pos is a valid index into the
            // `len` live elements borrowed for 'a.
            Some(unsafe { &*self.base.add(self.len - 1 - self.pos) })
        } else {
            None
        }
    }

    /// Returns the element a signed `offset` away in the reversed frame, or
    /// `None` if that position holds no element.
    #[inline]
    pub fn peek(&self, offset: isize) -> Option<&'a T> {
        match self.pos.checked_add_signed(offset) {
            // SAFETY: p < len, same mapping as `get`.
            Some(p) if p < self.len => Some(unsafe { &*self.base.add(self.len - 1 - p) }),
            _ => None,
        }
    }

    /// Maps back into the forward frame; inverse of [`Cursor::rev`].
    #[inline]
    pub fn rev(self) -> Cursor<'a, T> {
        Cursor {
            base: self.base,
            pos: self.len - self.pos,
            len: self.len,
            _marker: PhantomData,
        }
    }
}

impl<'a, T> Iterator for RevCursor<'a, T> {
    type Item = &'a T;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let item = self.get()?;
        self.pos += 1;
        Some(item)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let rest = self.len - self.pos;
        (rest, Some(rest))
    }
}

impl<T> ExactSizeIterator for RevCursor<'_, T> {}
impl<T> FusedIterator for RevCursor<'_, T> {}

impl<T, const N: usize> StatVec<T, N> {
    /// Returns a shared cursor at position `0`.
    #[inline]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor::from_parts(self.as_slice(), 0)
    }

    /// Returns the shared end cursor (position `len`).
    #[inline]
    pub fn cursor_end(&self) -> Cursor<'_, T> {
        Cursor::from_parts(self.as_slice(), self.len)
    }

    /// Returns a shared cursor at `pos`, or `None` if `pos > len`.
    ///
    /// `pos == len` yields the end cursor.
    #[inline]
    pub fn cursor_at(&self, pos: usize) -> Option<Cursor<'_, T>> {
        (pos <= self.len).then(|| Cursor::from_parts(self.as_slice(), pos))
    }

    /// Returns an exclusive cursor at position `0`.
    #[inline]
    pub fn cursor_mut(&mut self) -> CursorMut<'_, T> {
        CursorMut::from_parts(self.as_mut_slice(), 0)
    }

    /// Returns an exclusive cursor at `pos`, or `None` if `pos > len`.
    #[inline]
    pub fn cursor_mut_at(&mut self, pos: usize) -> Option<CursorMut<'_, T>> {
        (pos <= self.len).then(|| CursorMut::from_parts(self.as_mut_slice(), pos))
    }

    /// Returns a reverse cursor at the last element (reverse position `0`).
    #[inline]
    pub fn rcursor(&self) -> RevCursor<'_, T> {
        RevCursor::from_parts(self.as_slice(), 0)
    }

    /// Returns the reverse end cursor (just before the first element).
    #[inline]
    pub fn rcursor_end(&self) -> RevCursor<'_, T> {
        RevCursor::from_parts(self.as_slice(), self.len)
    }
}
