// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2 instantiated with the HMAC-SHA family.

use rampart_hmac::{HmacSha1, HmacSha256, HmacSha512};

use crate::error::Pbkdf2Error;
use crate::pbkdf2::pbkdf2;

/// PBKDF2-HMAC-SHA1 (`hLen` = 20).
///
/// Provided for RFC 6070 interoperability. Prefer SHA-256 or SHA-512 for new
/// deployments.
///
/// # Errors
///
/// Same as [`pbkdf2`].
pub fn pbkdf2_hmac_sha1(
    output: &mut [u8],
    password: &[u8],
    salt: &[u8],
    rounds: u32,
) -> Result<(), Pbkdf2Error> {
    pbkdf2::<HmacSha1>(output, password, salt, rounds)
}

/// PBKDF2-HMAC-SHA256 (`hLen` = 32).
///
/// # Errors
///
/// Same as [`pbkdf2`].
pub fn pbkdf2_hmac_sha256(
    output: &mut [u8],
    password: &[u8],
    salt: &[u8],
    rounds: u32,
) -> Result<(), Pbkdf2Error> {
    pbkdf2::<HmacSha256>(output, password, salt, rounds)
}

/// PBKDF2-HMAC-SHA512 (`hLen` = 64).
///
/// # Errors
///
/// Same as [`pbkdf2`].
pub fn pbkdf2_hmac_sha512(
    output: &mut [u8],
    password: &[u8],
    salt: &[u8],
    rounds: u32,
) -> Result<(), Pbkdf2Error> {
    pbkdf2::<HmacSha512>(output, password, salt, rounds)
}
