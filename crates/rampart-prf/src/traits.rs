// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Keyed pseudorandom function with a fixed output length.
///
/// Implementations must be deterministic and infallible for any key and
/// message length, including empty ones.
pub trait Prf {
    /// Output length in bytes (`hLen`).
    const OUTPUT_LEN: usize;

    /// Streaming context produced by [`Prf::init`].
    type Context: PrfContext;

    /// Begins a new keyed computation.
    fn init(key: &[u8]) -> Self::Context;

    /// Single-shot computation of `PRF(key, message)` into `out[..OUTPUT_LEN]`.
    ///
    /// Equivalent to `init(key)`, `update(message)`, `finalize(out)`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() < OUTPUT_LEN`.
    fn compute(out: &mut [u8], message: &[u8], key: &[u8]) {
        let mut ctx = Self::init(key);
        ctx.update(message);
        ctx.finalize(out);
    }
}

/// An initialized PRF computation.
pub trait PrfContext {
    /// Appends message bytes. May be called any number of times.
    fn update(&mut self, data: &[u8]);

    /// Writes the PRF output into `out[..OUTPUT_LEN]` and consumes the context.
    ///
    /// Bytes of `out` past `OUTPUT_LEN` are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than the PRF's output length.
    fn finalize(self, out: &mut [u8]);
}
