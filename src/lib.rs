// This file is part of statvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # `statvec`
//!
//! A `no_std`, fixed-capacity, stack-based vector type with cursor-based
//! positional access.
//!
//! The core type, [`StatVec<T, N>`], stores `N` elements inline and tracks a
//! logical length `len ∈ 0..=N`. It behaves like a dynamically-sized sequence
//! for callers, except that no operation ever grows the storage: every
//! capacity-sensitive mutation signals overflow through its return value
//! instead of reallocating.
//!
//! ## When to use this crate
//!
//! - You know capacities at compile time and want allocation-free,
//!   predictable behavior.
//! - You are in a `no_std` or embedded environment.
//! - You need positional handles ([`Cursor`], [`CursorMut`]) with
//!   random-access arithmetic over the live elements.
//!
//! It may not be the best fit if you need dynamic growth (use `Vec`), very
//! large capacities, or thread-safe shared mutation (wrap it yourself; the
//! type has no internal synchronization).
//!
//! ## Storage model
//!
//! The backing buffer is a plain `[T; N]` that is fully initialized at all
//! times. Only the prefix `buf[..len]` is live and visible through slices,
//! indexing, iteration, and cursors; slots `buf[len..]` are capacity reserve.
//! Two consequences worth knowing:
//!
//! - Empty construction ([`StatVec::new`] / [`Default`]) fills the buffer
//!   with `T::default()` and therefore requires `T: Default`. Use
//!   [`StatVec::new_with`] for element types without a `Default`.
//! - Shrinking (`clear`, `truncate`, `pop`, `resize` down, `erase`) does not
//!   overwrite the now-dead slots. Growing again via [`StatVec::resize`]
//!   re-exposes whatever values they held, and never default-constructs.
//!
//! ## Failure policy
//!
//! Capacity overflow never panics; it is reported as [`Error::Full`]:
//!
//! - **All-or-nothing** (vector unchanged on error): [`StatVec::push`],
//!   [`StatVec::push_with`], [`StatVec::insert`], [`StatVec::insert_with`],
//!   [`StatVec::insert_n`], [`StatVec::insert_iter`], [`TryFrom<&[T]>`].
//! - **Partial** (vector left valid but truncated, error still reported):
//!   [`StatVec::assign`] and [`StatVec::assign_iter`] fill what fits;
//!   [`StatVec::resize`] clamps to capacity. This asymmetry with the insert
//!   family is deliberate and part of the contract.
//! - **Truncating** (extra elements silently dropped, no error):
//!   [`FromIterator`], [`Extend`], [`StatVec::to_capacity`],
//!   [`StatVec::into_capacity`].
//!
//! Position and range errors follow slice semantics and **panic**: indexing
//! (`v[i]`, `v[a..b]`), insert/erase positions, and cursor seeks outside the
//! container. The only checked index accessor is [`StatVec::at`], which
//! returns [`Error::OutOfBounds`] instead.
//!
//! ## Cursors
//!
//! [`Cursor`] (shared) and [`CursorMut`] (exclusive) are random-access
//! position handles over the live prefix: they compare, order, offset by
//! signed distances, and subtract to yield distances. A `CursorMut` converts
//! one way into a `Cursor`; the reverse conversion does not exist.
//! [`RevCursor`] walks the same elements back to front. Borrow checking pins
//! the vector while any cursor is live, so a cursor can never observe the
//! element shifts that would invalidate it.
//!
//! ## Features
//!
//! - `serde` — `Serialize`/`Deserialize` for `StatVec<T, N>` as a plain
//!   sequence of the live elements (deserialization requires
//!   `T: Deserialize + Default` and rejects input longer than `N`).
//!
//! ## Example
//!
//! ```rust
//! use statvec::StatVec;
//!
//! let mut v: StatVec<u8, 4> = StatVec::new();
//! v.push(1).unwrap();
//! v.push(3).unwrap();
//! v.insert(1, 2).unwrap();
//! assert_eq!(v.as_slice(), &[1, 2, 3]);
//!
//! v.resize(4).unwrap();        // exposes the reserve slot (still default)
//! assert_eq!(v.as_slice(), &[1, 2, 3, 0]);
//! assert!(v.push(9).is_err()); // full: unchanged, reported by value
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_op_in_unsafe_fn)]

#[cfg(test)]
extern crate alloc;

// Modules
mod cursor;
mod error;
mod index;
mod iter;
#[cfg(feature = "serde")]
mod serde;
mod vec;

// Public exports (crate API surface)
pub use cursor::{Cursor, CursorMut, RevCursor};
pub use error::Error;
pub use iter::IntoIter;
pub use vec::StatVec;
