// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// PBKDF2 error
///
/// Every variant except [`Pbkdf2Error::Cancelled`] and
/// [`Pbkdf2Error::VerificationFailed`] is a caller contract violation,
/// detected before any output byte is written.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pbkdf2Error {
    /// Iteration count is zero
    #[error("iteration count must be at least 1")]
    ZeroRounds,

    /// Requested derived key length is zero
    #[error("requested derived key length must be at least 1")]
    EmptyOutput,

    /// Requested derived key length exceeds (2^32 - 1) * hLen
    #[error("requested derived key length {requested} exceeds maximum {max} ((2^32 - 1) * hLen)")]
    OutputTooLong {
        /// Requested length in bytes
        requested: u64,
        /// Largest permitted length for the PRF in bytes
        max: u64,
    },

    /// Output buffer does not match the configured derived key length
    #[error("output buffer length {actual} does not match configured length {expected}")]
    OutputLenMismatch {
        /// Configured length
        expected: usize,
        /// Length of the buffer supplied
        actual: usize,
    },

    /// Derivation was interrupted through its cancellation flag
    #[error("key derivation was cancelled")]
    Cancelled,

    /// Derived key does not match the expected key
    #[error("derived key does not match")]
    VerificationFailed,
}
