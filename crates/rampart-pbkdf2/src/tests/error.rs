// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::Pbkdf2Error;

#[test]
fn test_error_display() {
    assert_eq!(
        Pbkdf2Error::ZeroRounds.to_string(),
        "iteration count must be at least 1"
    );
    assert_eq!(
        Pbkdf2Error::EmptyOutput.to_string(),
        "requested derived key length must be at least 1"
    );
    assert_eq!(
        Pbkdf2Error::OutputTooLong {
            requested: 100,
            max: 60,
        }
        .to_string(),
        "requested derived key length 100 exceeds maximum 60 ((2^32 - 1) * hLen)"
    );
    assert_eq!(
        Pbkdf2Error::OutputLenMismatch {
            expected: 32,
            actual: 16,
        }
        .to_string(),
        "output buffer length 16 does not match configured length 32"
    );
    assert_eq!(
        Pbkdf2Error::Cancelled.to_string(),
        "key derivation was cancelled"
    );
    assert_eq!(
        Pbkdf2Error::VerificationFailed.to_string(),
        "derived key does not match"
    );
}

#[test]
fn test_error_is_std_error() {
    fn assert_error<E: std::error::Error + Send + Sync + 'static>() {}

    assert_error::<Pbkdf2Error>();
}
