// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2 per RFC 8018 Section 5.2
//!
//! ```text
//! DK = T_1 || T_2 || ... || T_l<0..r-1>
//! T_i = U_1 ^ U_2 ^ ... ^ U_c
//! U_1 = PRF(P, S || INT(i))
//! U_j = PRF(P, U_{j-1})
//! ```

use alloc::vec;
use alloc::vec::Vec;
use core::sync::atomic::{AtomicBool, Ordering};

use rampart_prf::{MAX_OUTPUT_LEN, Prf, PrfContext};
use subtle::ConstantTimeEq;
use tracing::{debug, trace};
use zeroize::{Zeroize, Zeroizing};

use crate::error::Pbkdf2Error;

/// Iterations between cancellation-flag polls inside a block.
const CANCEL_POLL_INTERVAL: u32 = 1024;

/// Largest derived key length for `P`: `(2^32 - 1) * hLen` bytes.
pub fn max_output_len<P: Prf>() -> u64 {
    u64::from(u32::MAX) * P::OUTPUT_LEN as u64
}

/// Checks the PBKDF2 preconditions for `P` without deriving anything.
///
/// # Errors
///
/// - [`Pbkdf2Error::ZeroRounds`] if `rounds == 0`
/// - [`Pbkdf2Error::EmptyOutput`] if `output_len == 0`
/// - [`Pbkdf2Error::OutputTooLong`] if `output_len > (2^32 - 1) * hLen`
pub fn validate<P: Prf>(output_len: usize, rounds: u32) -> Result<(), Pbkdf2Error> {
    if rounds == 0 {
        debug!("pbkdf2 rejected: zero iteration count");
        return Err(Pbkdf2Error::ZeroRounds);
    }

    if output_len == 0 {
        debug!("pbkdf2 rejected: empty output");
        return Err(Pbkdf2Error::EmptyOutput);
    }

    let max = max_output_len::<P>();
    let requested = output_len as u64;
    if requested > max {
        debug!(requested, max, "pbkdf2 rejected: output too long");
        return Err(Pbkdf2Error::OutputTooLong { requested, max });
    }

    Ok(())
}

/// PBKDF2 key derivation
///
/// Fills all of `output` with the key derived from `password` and `salt`
/// using `rounds` iterations of the PRF `P`. The prior contents of `output`
/// are never read.
///
/// # Arguments
/// * `output` - Derived key buffer (`dkLen` = `output.len()`)
/// * `password` - Password, used as the PRF key (may be empty)
/// * `salt` - Salt (may be empty)
/// * `rounds` - Iteration count `c`, at least 1
///
/// # Errors
///
/// Returns the [`validate`] errors; `output` is left untouched in that case.
pub fn pbkdf2<P: Prf>(
    output: &mut [u8],
    password: &[u8],
    salt: &[u8],
    rounds: u32,
) -> Result<(), Pbkdf2Error> {
    derive::<P>(output, password, salt, rounds, || false)
}

/// [`pbkdf2`] that can be interrupted from another thread.
///
/// `cancel` is polled before every block and every 1024 iterations within a
/// block. When it is observed set, `output` is zeroized and
/// [`Pbkdf2Error::Cancelled`] is returned. An uncancelled run produces the
/// same bytes as [`pbkdf2`].
///
/// # Errors
///
/// Returns the [`validate`] errors, or [`Pbkdf2Error::Cancelled`].
pub fn pbkdf2_cancellable<P: Prf>(
    output: &mut [u8],
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    cancel: &AtomicBool,
) -> Result<(), Pbkdf2Error> {
    derive::<P>(output, password, salt, rounds, || cancel.load(Ordering::Relaxed))
}

/// Derives a fixed-size key.
///
/// # Errors
///
/// Same as [`pbkdf2`]; `N == 0` yields [`Pbkdf2Error::EmptyOutput`].
pub fn pbkdf2_array<P: Prf, const N: usize>(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
) -> Result<[u8; N], Pbkdf2Error> {
    let mut out = [0u8; N];
    pbkdf2::<P>(&mut out, password, salt, rounds)?;
    Ok(out)
}

/// Derives a heap-allocated key of `dk_len` bytes, zeroized on drop.
///
/// Parameters are validated before allocating.
///
/// # Errors
///
/// Same as [`pbkdf2`].
pub fn pbkdf2_vec<P: Prf>(
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    dk_len: usize,
) -> Result<Zeroizing<Vec<u8>>, Pbkdf2Error> {
    validate::<P>(dk_len, rounds)?;

    let mut out = Zeroizing::new(vec![0u8; dk_len]);
    pbkdf2::<P>(&mut out, password, salt, rounds)?;
    Ok(out)
}

/// Re-derives a key and compares it with `expected` in constant time.
///
/// The derived length is `expected.len()`.
///
/// # Errors
///
/// Same as [`pbkdf2`], or [`Pbkdf2Error::VerificationFailed`] on mismatch.
pub fn pbkdf2_verify<P: Prf>(
    expected: &[u8],
    password: &[u8],
    salt: &[u8],
    rounds: u32,
) -> Result<(), Pbkdf2Error> {
    let derived = pbkdf2_vec::<P>(password, salt, rounds, expected.len())?;

    if bool::from(derived.as_slice().ct_eq(expected)) {
        Ok(())
    } else {
        debug!("pbkdf2 verification failed");
        Err(Pbkdf2Error::VerificationFailed)
    }
}

fn derive<P: Prf>(
    output: &mut [u8],
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    is_cancelled: impl Fn() -> bool,
) -> Result<(), Pbkdf2Error> {
    const {
        assert!(P::OUTPUT_LEN > 0, "PRF output length must be non-zero");
        assert!(
            P::OUTPUT_LEN <= MAX_OUTPUT_LEN,
            "PRF output length exceeds MAX_OUTPUT_LEN"
        );
    }

    validate::<P>(output.len(), rounds)?;

    let h_len = P::OUTPUT_LEN;
    let blocks = output.len().div_ceil(h_len);
    trace!(rounds, dk_len = output.len(), h_len, blocks, "pbkdf2 derive");

    // U_j and the running XOR T_i
    let mut u = [0u8; MAX_OUTPUT_LEN];
    let mut t = [0u8; MAX_OUTPUT_LEN];
    let mut result = Ok(());

    // Every segment is hLen bytes except the last, which holds the remaining
    // r bytes. validate() bounds the segment count to u32::MAX, so the block
    // index cannot wrap.
    for (index, segment) in (1u32..).zip(output.chunks_mut(h_len)) {
        let completed = derive_block::<P>(
            &mut t[..h_len],
            &mut u[..h_len],
            password,
            salt,
            rounds,
            index,
            &is_cancelled,
        );

        if !completed {
            result = Err(Pbkdf2Error::Cancelled);
            break;
        }

        segment.copy_from_slice(&t[..segment.len()]);
    }

    u.zeroize();
    t.zeroize();

    if result.is_err() {
        debug!("pbkdf2 cancelled");
        output.zeroize();
    }

    result
}

/// Computes `T_i` into `t`. Returns `false` if cancelled midway.
fn derive_block<P: Prf>(
    t: &mut [u8],
    u: &mut [u8],
    password: &[u8],
    salt: &[u8],
    rounds: u32,
    index: u32,
    is_cancelled: &impl Fn() -> bool,
) -> bool {
    if is_cancelled() {
        return false;
    }

    // U_1 = PRF(P, S || INT(i)), INT(i) big-endian
    let mut ctx = P::init(password);
    ctx.update(salt);
    ctx.update(&index.to_be_bytes());
    ctx.finalize(u);

    t.copy_from_slice(u);

    for round in 2..=rounds {
        if round % CANCEL_POLL_INTERVAL == 0 && is_cancelled() {
            return false;
        }

        // U_j = PRF(P, U_{j-1})
        let mut ctx = P::init(password);
        ctx.update(u);
        ctx.finalize(u);

        for (acc, x) in t.iter_mut().zip(u.iter()) {
            *acc ^= x;
        }
    }

    true
}
