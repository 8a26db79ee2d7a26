// This file is part of statvec.
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for `StatVec`.
//!
//! These errors represent capacity and bounds conditions.
//! They are `Copy` and implement `core::error::Error`.

// Core imports
use core::{error::Error as CoreError, fmt};

/// Errors returned by operations on [`StatVec`](crate::StatVec).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The operation would exceed the fixed capacity (`N`).
    ///
    /// All-or-nothing operations leave the vector unchanged when returning
    /// this; the partial-fill operations (`assign`, `assign_iter`, `resize`)
    /// leave it valid but truncated to capacity.
    Full,
    /// An index was outside the current logical length.
    ///
    /// Returned only by [`StatVec::at`](crate::StatVec::at) and
    /// [`StatVec::at_mut`](crate::StatVec::at_mut); all other indexed access
    /// panics like a slice.
    OutOfBounds,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Full => f.write_str("capacity exceeded"),
            Self::OutOfBounds => f.write_str("index out of bounds"),
        }
    }
}

impl CoreError for Error {}
