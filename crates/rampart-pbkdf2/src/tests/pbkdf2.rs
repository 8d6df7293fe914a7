// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use rampart_hmac::{HmacSha1, HmacSha256, HmacSha512};

use crate::error::Pbkdf2Error;
use crate::pbkdf2::{max_output_len, pbkdf2, pbkdf2_array, pbkdf2_vec, validate};
use crate::support::test_utils::RecordingPrf;

#[test]
fn test_pbkdf2_deterministic() {
    let mut a = [0u8; 48];
    let mut b = [0u8; 48];

    pbkdf2::<HmacSha256>(&mut a, b"password", b"salt", 3).expect("Failed to pbkdf2(..)");
    pbkdf2::<HmacSha256>(&mut b, b"password", b"salt", 3).expect("Failed to pbkdf2(..)");

    assert_eq!(a, b);
}

#[test]
fn test_pbkdf2_does_not_read_prior_output() {
    let mut a = [0xaau8; 33];
    let mut b = [0x55u8; 33];

    pbkdf2::<HmacSha1>(&mut a, b"password", b"salt", 2).expect("Failed to pbkdf2(..)");
    pbkdf2::<HmacSha1>(&mut b, b"password", b"salt", 2).expect("Failed to pbkdf2(..)");

    assert_eq!(a, b);
}

#[test]
fn test_pbkdf2_writes_exactly_dk_len_bytes() {
    let mut buf = [0xeeu8; 40];

    pbkdf2::<HmacSha1>(&mut buf[..21], b"password", b"salt", 1).expect("Failed to pbkdf2(..)");

    assert_eq!(
        hex::encode(&buf[..21]),
        "0c60c80f961f0e71f3a9b524af6012062fe037a6e0"
    );
    assert!(buf[21..].iter().all(|&b| b == 0xee));
}

#[test]
fn test_pbkdf2_block_boundary_h_len() {
    // dkLen == hLen: one full block
    let mut out = [0u8; 20];
    pbkdf2::<HmacSha1>(&mut out, b"password", b"salt", 1).expect("Failed to pbkdf2(..)");
    assert_eq!(hex::encode(out), "0c60c80f961f0e71f3a9b524af6012062fe037a6");
}

#[test]
fn test_pbkdf2_block_boundary_h_len_plus_one() {
    // dkLen == hLen + 1: second block contributes exactly one byte
    let mut out = [0u8; 21];
    pbkdf2::<HmacSha1>(&mut out, b"password", b"salt", 1).expect("Failed to pbkdf2(..)");
    assert_eq!(
        hex::encode(out),
        "0c60c80f961f0e71f3a9b524af6012062fe037a6e0"
    );
}

#[test]
fn test_pbkdf2_two_full_blocks() {
    let mut out = [0u8; 40];
    pbkdf2::<HmacSha1>(&mut out, b"password", b"salt", 1).expect("Failed to pbkdf2(..)");
    assert_eq!(
        hex::encode(out),
        "0c60c80f961f0e71f3a9b524af6012062fe037a6e0f0eb94fe8fc46bdc637164ac2e7a8e3f9d2e83"
    );
}

#[test]
fn test_pbkdf2_monotonic_prefix() {
    let mut short = [0u8; 25];
    let mut long = [0u8; 40];

    pbkdf2::<HmacSha1>(&mut short, b"password", b"salt", 2).expect("Failed to pbkdf2(..)");
    pbkdf2::<HmacSha1>(&mut long, b"password", b"salt", 2).expect("Failed to pbkdf2(..)");

    assert_eq!(short[..], long[..25]);
}

#[test]
fn test_pbkdf2_iteration_sensitivity() {
    let mut previous = [0u8; 32];
    pbkdf2::<HmacSha256>(&mut previous, b"password", b"salt", 1).expect("Failed to pbkdf2(..)");

    for rounds in 2..=8 {
        let mut out = [0u8; 32];
        pbkdf2::<HmacSha256>(&mut out, b"password", b"salt", rounds)
            .expect("Failed to pbkdf2(..)");

        assert_ne!(out, previous, "rounds {} matched rounds {}", rounds, rounds - 1);
        previous = out;
    }
}

#[test]
fn test_pbkdf2_empty_password_and_salt() {
    let mut out = [0u8; 20];
    pbkdf2::<HmacSha1>(&mut out, b"", b"", 1).expect("Failed to pbkdf2(..)");
    assert_eq!(hex::encode(out), "1e437a1c79d75be61e91141dae20affc4892cc99");
}

#[test]
fn test_pbkdf2_empty_salt() {
    let mut out = [0u8; 20];
    pbkdf2::<HmacSha1>(&mut out, b"password", b"", 3).expect("Failed to pbkdf2(..)");
    assert_eq!(hex::encode(out), "d3a6687c6e28f28f589b073927d1b556f2fb2f7f");
}

#[test]
fn test_pbkdf2_empty_password() {
    let mut out = [0u8; 20];
    pbkdf2::<HmacSha1>(&mut out, b"", b"salt", 3).expect("Failed to pbkdf2(..)");
    assert_eq!(hex::encode(out), "0cebfb1825d38ce91db4a69a0b9e776b2a2323eb");
}

#[test]
fn test_pbkdf2_rejects_zero_rounds_without_writing() {
    let mut out = [0xaau8; 32];

    let result = pbkdf2::<HmacSha256>(&mut out, b"password", b"salt", 0);

    assert_eq!(result, Err(Pbkdf2Error::ZeroRounds));
    assert!(out.iter().all(|&b| b == 0xaa));
}

#[test]
fn test_pbkdf2_rejects_empty_output() {
    let mut out = [0u8; 0];

    let result = pbkdf2::<HmacSha256>(&mut out, b"password", b"salt", 1);

    assert_eq!(result, Err(Pbkdf2Error::EmptyOutput));
}

#[test]
fn test_validate_checks_rounds_first() {
    assert_eq!(validate::<HmacSha256>(0, 0), Err(Pbkdf2Error::ZeroRounds));
}

#[test]
fn test_validate_accepts_minimal_parameters() {
    assert_eq!(validate::<HmacSha1>(1, 1), Ok(()));
}

#[test]
fn test_max_output_len() {
    assert_eq!(max_output_len::<HmacSha1>(), 0xffff_ffff * 20);
    assert_eq!(max_output_len::<HmacSha256>(), 0xffff_ffff * 32);
    assert_eq!(max_output_len::<HmacSha512>(), 0xffff_ffff * 64);
    assert_eq!(max_output_len::<RecordingPrf>(), 0xffff_ffff * 8);
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_validate_accepts_exact_maximum() {
    let max = 0xffff_ffff_usize * 8;
    assert_eq!(validate::<RecordingPrf>(max, 1), Ok(()));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_validate_rejects_one_past_maximum() {
    let max = 0xffff_ffff_usize * 8;

    let result = validate::<RecordingPrf>(max + 1, 1);

    assert_eq!(
        result,
        Err(Pbkdf2Error::OutputTooLong {
            requested: max as u64 + 1,
            max: max as u64,
        })
    );
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_validate_rejects_usize_max() {
    let result = validate::<HmacSha512>(usize::MAX, 1);

    assert!(matches!(
        result,
        Err(Pbkdf2Error::OutputTooLong { requested, .. }) if requested == u64::MAX
    ));
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_pbkdf2_vec_rejects_before_allocating() {
    // Allocating usize::MAX bytes would abort, so the check must come first.
    let result = pbkdf2_vec::<HmacSha256>(b"password", b"salt", 1, usize::MAX);

    assert!(matches!(result, Err(Pbkdf2Error::OutputTooLong { .. })));
}

#[test]
fn test_pbkdf2_array_matches_slice_api() {
    let array = pbkdf2_array::<HmacSha256, 32>(b"password", b"salt", 2)
        .expect("Failed to pbkdf2_array(..)");

    assert_eq!(
        hex::encode(array),
        "ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43"
    );
}

#[test]
fn test_pbkdf2_array_zero_len() {
    let result = pbkdf2_array::<HmacSha256, 0>(b"password", b"salt", 1);
    assert_eq!(result, Err(Pbkdf2Error::EmptyOutput));
}

#[test]
fn test_pbkdf2_vec_matches_slice_api() {
    let key =
        pbkdf2_vec::<HmacSha512>(b"password", b"salt", 1, 64).expect("Failed to pbkdf2_vec(..)");

    assert_eq!(
        hex::encode(key.as_slice()),
        "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fce"
    );
}

#[test]
fn test_pbkdf2_vec_rejects_zero_rounds() {
    let result = pbkdf2_vec::<HmacSha512>(b"password", b"salt", 0, 64);
    assert_eq!(result.err(), Some(Pbkdf2Error::ZeroRounds));
}
