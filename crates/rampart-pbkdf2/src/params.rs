// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use rampart_prf::Prf;
use zeroize::Zeroizing;

use crate::error::Pbkdf2Error;
use crate::pbkdf2::{pbkdf2, pbkdf2_vec, validate};

/// Validated PBKDF2 parameters.
///
/// Holds an iteration count and a derived key length that were accepted by
/// [`validate`] for some PRF at construction time. The pair can then be
/// reused for many derivations.
///
/// ```rust
/// use rampart_hmac::HmacSha256;
/// use rampart_pbkdf2::Pbkdf2Params;
///
/// let params = Pbkdf2Params::new::<HmacSha256>(600_000, 32).expect("Failed to Pbkdf2Params::new(..)");
/// assert_eq!(params.rounds(), 600_000);
/// assert_eq!(params.output_len(), 32);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pbkdf2Params {
    rounds: u32,
    output_len: usize,
}

impl Pbkdf2Params {
    /// Creates parameters valid for `P`.
    ///
    /// # Errors
    ///
    /// Same as [`validate`].
    pub fn new<P: Prf>(rounds: u32, output_len: usize) -> Result<Self, Pbkdf2Error> {
        validate::<P>(output_len, rounds)?;

        Ok(Self { rounds, output_len })
    }

    /// Iteration count.
    pub fn rounds(&self) -> u32 {
        self.rounds
    }

    /// Derived key length in bytes.
    pub fn output_len(&self) -> usize {
        self.output_len
    }

    /// Derives into `output`, which must be exactly [`Self::output_len`] bytes.
    ///
    /// # Errors
    ///
    /// [`Pbkdf2Error::OutputLenMismatch`] if the buffer length differs, or
    /// any [`pbkdf2`] error when used with a PRF other than the one the
    /// parameters were validated for.
    pub fn derive<P: Prf>(
        &self,
        password: &[u8],
        salt: &[u8],
        output: &mut [u8],
    ) -> Result<(), Pbkdf2Error> {
        if output.len() != self.output_len {
            return Err(Pbkdf2Error::OutputLenMismatch {
                expected: self.output_len,
                actual: output.len(),
            });
        }

        pbkdf2::<P>(output, password, salt, self.rounds)
    }

    /// Derives a heap-allocated key, zeroized on drop.
    ///
    /// # Errors
    ///
    /// Same as [`pbkdf2`].
    pub fn derive_vec<P: Prf>(
        &self,
        password: &[u8],
        salt: &[u8],
    ) -> Result<Zeroizing<Vec<u8>>, Pbkdf2Error> {
        pbkdf2_vec::<P>(password, salt, self.rounds, self.output_len)
    }
}
