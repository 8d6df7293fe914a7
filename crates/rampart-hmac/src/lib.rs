// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC pseudorandom functions with secure memory handling
//!
//! Implementation per RFC 2104 (HMAC) over FIPS 180-4 hash functions.
//! No external hash dependencies. All intermediate values are zeroized.
//!
//! Every [`Hmac`] instantiation implements [`rampart_prf::Prf`], so it can
//! drive `rampart-pbkdf2` directly.
//!
//! References:
//! - RFC 2104: HMAC: Keyed-Hashing for Message Authentication
//!   <https://datatracker.ietf.org/doc/html/rfc2104>
//! - FIPS 180-4: Secure Hash Standard (SHS)
//!   <https://nvlpubs.nist.gov/nistpubs/FIPS/NIST.FIPS.180-4.pdf>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod block_buffer;
mod hash;
mod hmac;
mod sha1;
mod sha256;
mod sha512;

pub use hash::HashFunction;
pub use hmac::{Hmac, HmacContext, hmac};
pub use sha1::{Sha1, sha1};
pub use sha256::{Sha256, sha256};
pub use sha512::{Sha512, sha512};

/// HMAC-SHA1 (`hLen` = 20). Kept for RFC 6070 interoperability.
pub type HmacSha1 = Hmac<Sha1>;

/// HMAC-SHA256 (`hLen` = 32).
pub type HmacSha256 = Hmac<Sha256>;

/// HMAC-SHA512 (`hLen` = 64).
pub type HmacSha512 = Hmac<Sha512>;
