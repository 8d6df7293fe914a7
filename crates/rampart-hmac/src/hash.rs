// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use zeroize::Zeroize;

/// Iterated (Merkle–Damgård) hash function usable as the HMAC core.
pub trait HashFunction: Zeroize {
    /// Internal block size in bytes (HMAC `B`).
    const BLOCK_LEN: usize;

    /// Digest size in bytes (HMAC `L`).
    const OUTPUT_LEN: usize;

    /// Creates a state initialized with the standard initial hash value.
    fn new() -> Self;

    /// Absorbs message bytes.
    fn update(&mut self, data: &[u8]);

    /// Writes the digest into `out[..OUTPUT_LEN]` and resets the state.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() < OUTPUT_LEN`.
    fn finalize_into(&mut self, out: &mut [u8]);
}
