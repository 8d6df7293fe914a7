// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # rampart_prf
//!
//! Pseudorandom-function capability consumed by Rampart key derivation.
//!
//! A PRF is a keyed hash with a fixed output length (`hLen`). It is
//! constructed from a key into a [`PrfContext`], fed any number of message
//! chunks, and finalized into exactly [`Prf::OUTPUT_LEN`] bytes.
//!
//! ## Traits
//!
//! - [`Prf`]: the keyed primitive (output length, `init`, single-shot `compute`)
//! - [`PrfContext`]: an initialized, streaming computation
//!
//! Concrete HMAC instantiations live in `rampart-hmac`.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod traits;

pub use traits::{Prf, PrfContext};

/// Largest PRF output (in bytes) supported by stack-allocated scratch buffers.
///
/// Covers every SHA-2 HMAC up to HMAC-SHA512.
pub const MAX_OUTPUT_LEN: usize = 64;
