// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2 implementation with secure memory handling
//!
//! Implementation per RFC 8018 Section 5.2 (identical to RFC 2898 Section 5.2),
//! generic over any [`Prf`]. The derivation is a pure function: no global
//! state, no randomness, no heap allocation on the core path. Scratch
//! buffers are stack-allocated and zeroized after every block.
//!
//! ```rust
//! use rampart_hmac::HmacSha256;
//! use rampart_pbkdf2::pbkdf2;
//!
//! let mut key = [0u8; 32];
//! pbkdf2::<HmacSha256>(&mut key, b"password", b"salt", 4096).expect("Failed to pbkdf2(..)");
//! ```
//!
//! References:
//! - RFC 8018: PKCS #5: Password-Based Cryptography Specification Version 2.1
//!   <https://datatracker.ietf.org/doc/html/rfc8018>
//! - RFC 6070: PKCS #5: PBKDF2 Test Vectors
//!   <https://datatracker.ietf.org/doc/html/rfc6070>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod error;
mod hmac;
mod params;
mod pbkdf2;
mod support;

pub use error::Pbkdf2Error;
pub use hmac::{pbkdf2_hmac_sha1, pbkdf2_hmac_sha256, pbkdf2_hmac_sha512};
pub use params::Pbkdf2Params;
pub use pbkdf2::{
    max_output_len, pbkdf2, pbkdf2_array, pbkdf2_cancellable, pbkdf2_vec, pbkdf2_verify, validate,
};
pub use rampart_prf::{Prf, PrfContext};
