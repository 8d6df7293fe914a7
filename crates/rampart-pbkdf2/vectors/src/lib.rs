// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2 known-answer vectors
//!
//! Static vector tables for PBKDF2-HMAC-SHA1 (RFC 6070), PBKDF2-HMAC-SHA256
//! and PBKDF2-HMAC-SHA512, plus [`run_vectors`], which drives any
//! `derive(output, password, salt, rounds)` function over a table and
//! collects every mismatch instead of stopping at the first one.

#![warn(missing_docs)]

use core::fmt::Debug;

/// A single PBKDF2 known-answer test case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestVector {
    /// Identifier, unique within its table
    pub id: usize,
    /// Human-readable description
    pub comment: &'static str,
    /// Password (PRF key)
    pub password: &'static [u8],
    /// Salt
    pub salt: &'static [u8],
    /// Iteration count
    pub rounds: u32,
    /// Derived key length in bytes
    pub dk_len: usize,
    /// Expected derived key (hex)
    pub expected_hex: &'static str,
    /// Too slow for a default test run
    pub slow: bool,
}

/// RFC 6070 Section 2: PBKDF2-HMAC-SHA1.
///
/// The 16777216-iteration case is flagged `slow`.
pub fn rfc6070_hmac_sha1() -> &'static [TestVector] {
    &[
        TestVector {
            id: 1,
            comment: "c = 1",
            password: b"password",
            salt: b"salt",
            rounds: 1,
            dk_len: 20,
            expected_hex: "0c60c80f961f0e71f3a9b524af6012062fe037a6",
            slow: false,
        },
        TestVector {
            id: 2,
            comment: "c = 2",
            password: b"password",
            salt: b"salt",
            rounds: 2,
            dk_len: 20,
            expected_hex: "ea6c014dc72d6f8ccd1ed92ace1d41f0d8de8957",
            slow: false,
        },
        TestVector {
            id: 3,
            comment: "c = 4096",
            password: b"password",
            salt: b"salt",
            rounds: 4096,
            dk_len: 20,
            expected_hex: "4b007901b765489abead49d926f721d065a429c1",
            slow: false,
        },
        TestVector {
            id: 4,
            comment: "c = 16777216",
            password: b"password",
            salt: b"salt",
            rounds: 16_777_216,
            dk_len: 20,
            expected_hex: "eefe3d61cd4da4e4e9945b3d6ba2158c2634e984",
            slow: true,
        },
        TestVector {
            id: 5,
            comment: "long password and salt, two blocks",
            password: b"passwordPASSWORDpassword",
            salt: b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
            rounds: 4096,
            dk_len: 25,
            expected_hex: "3d2eec4fe41c849b80c8d83662c0e44a8b291a964cf2f07038",
            slow: false,
        },
        TestVector {
            id: 6,
            comment: "embedded NUL bytes",
            password: b"pass\0word",
            salt: b"sa\0lt",
            rounds: 4096,
            dk_len: 16,
            expected_hex: "56fa6aa75548099dcc37d7f03425e0c3",
            slow: false,
        },
    ]
}

/// PBKDF2-HMAC-SHA256 vectors.
///
/// Cases 1-5 reuse the RFC 6070 inputs; 6 and 7 are RFC 7914 Section 11.
pub fn hmac_sha256_vectors() -> &'static [TestVector] {
    &[
        TestVector {
            id: 1,
            comment: "c = 1",
            password: b"password",
            salt: b"salt",
            rounds: 1,
            dk_len: 32,
            expected_hex: "120fb6cffcf8b32c43e7225256c4f837a86548c92ccc35480805987cb70be17b",
            slow: false,
        },
        TestVector {
            id: 2,
            comment: "c = 2",
            password: b"password",
            salt: b"salt",
            rounds: 2,
            dk_len: 32,
            expected_hex: "ae4d0c95af6b46d32d0adff928f06dd02a303f8ef3c251dfd6e2d85a95474c43",
            slow: false,
        },
        TestVector {
            id: 3,
            comment: "c = 4096",
            password: b"password",
            salt: b"salt",
            rounds: 4096,
            dk_len: 32,
            expected_hex: "c5e478d59288c841aa530db6845c4c8d962893a001ce4e11a4963873aa98134a",
            slow: false,
        },
        TestVector {
            id: 4,
            comment: "long password and salt, two blocks",
            password: b"passwordPASSWORDpassword",
            salt: b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
            rounds: 4096,
            dk_len: 40,
            expected_hex: "348c89dbcbd32b2f32d814b8116e84cf2b17347ebc1800181c4e2a1fb8dd53e1c635518c7dac47e9",
            slow: false,
        },
        TestVector {
            id: 5,
            comment: "embedded NUL bytes",
            password: b"pass\0word",
            salt: b"sa\0lt",
            rounds: 4096,
            dk_len: 16,
            expected_hex: "89b69d0516f829893c696226650a8687",
            slow: false,
        },
        TestVector {
            id: 6,
            comment: "RFC 7914: passwd / salt, c = 1",
            password: b"passwd",
            salt: b"salt",
            rounds: 1,
            dk_len: 64,
            expected_hex: "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc49ca9cccf179b645991664b39d77ef317c71b845b1e30bd509112041d3a19783",
            slow: false,
        },
        TestVector {
            id: 7,
            comment: "RFC 7914: Password / NaCl, c = 80000",
            password: b"Password",
            salt: b"NaCl",
            rounds: 80_000,
            dk_len: 64,
            expected_hex: "4ddcd8f60b98be21830cee5ef22701f9641a4418d04c0414aeff08876b34ab56a1d425a1225833549adb841b51c9b3176a272bdebba1d078478f62b397f33c8d",
            slow: false,
        },
    ]
}

/// PBKDF2-HMAC-SHA512 vectors over the RFC 6070 inputs.
pub fn hmac_sha512_vectors() -> &'static [TestVector] {
    &[
        TestVector {
            id: 1,
            comment: "c = 1",
            password: b"password",
            salt: b"salt",
            rounds: 1,
            dk_len: 64,
            expected_hex: "867f70cf1ade02cff3752599a3a53dc4af34c7a669815ae5d513554e1c8cf252c02d470a285a0501bad999bfe943c08f050235d7d68b1da55e63f73b60a57fce",
            slow: false,
        },
        TestVector {
            id: 2,
            comment: "c = 2",
            password: b"password",
            salt: b"salt",
            rounds: 2,
            dk_len: 64,
            expected_hex: "e1d9c16aa681708a45f5c7c4e215ceb66e011a2e9f0040713f18aefdb866d53cf76cab2868a39b9f7840edce4fef5a82be67335c77a6068e04112754f27ccf4e",
            slow: false,
        },
        TestVector {
            id: 3,
            comment: "c = 4096",
            password: b"password",
            salt: b"salt",
            rounds: 4096,
            dk_len: 64,
            expected_hex: "d197b1b33db0143e018b12f3d1d1479e6cdebdcc97c5c0f87f6902e072f457b5143f30602641b3d55cd335988cb36b84376060ecd532e039b742a239434af2d5",
            slow: false,
        },
        TestVector {
            id: 4,
            comment: "long password and salt",
            password: b"passwordPASSWORDpassword",
            salt: b"saltSALTsaltSALTsaltSALTsaltSALTsalt",
            rounds: 4096,
            dk_len: 64,
            expected_hex: "8c0511f4c6e597c6ac6315d8f0362e225f3c501495ba23b868c005174dc4ee71115b59f9e60cd9532fa33e0f75aefe30225c583a186cd82bd4daea9724a3d3b8",
            slow: false,
        },
    ]
}

/// Runs `derive` over `vectors` and returns every failure as a message.
///
/// Vectors flagged `slow` are skipped unless `include_slow` is set.
pub fn run_vectors<E, F>(
    vectors: &[TestVector],
    include_slow: bool,
    derive: F,
) -> Result<(), Vec<String>>
where
    E: Debug,
    F: Fn(&mut [u8], &[u8], &[u8], u32) -> Result<(), E>,
{
    let mut failures = Vec::new();

    for tv in vectors.iter().filter(|tv| include_slow || !tv.slow) {
        let mut out = vec![0u8; tv.dk_len];

        match derive(&mut out, tv.password, tv.salt, tv.rounds) {
            Ok(()) => {
                let got = hex::encode(&out);
                if got != tv.expected_hex {
                    failures.push(format!(
                        "id {} ({}): output mismatch\n  expected: {}\n  got:      {}",
                        tv.id, tv.comment, tv.expected_hex, got
                    ));
                }
            }
            Err(e) => failures.push(format!(
                "id {} ({}): expected valid but got error: {:?}",
                tv.id, tv.comment, e
            )),
        }
    }

    if failures.is_empty() {
        Ok(())
    } else {
        Err(failures)
    }
}
