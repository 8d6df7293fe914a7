// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! <p align="center"><em>Password-based key derivation with zeroized state.</em></p>
//!
//! ---
//!
//! Rampart derives keys from passwords with PBKDF2 (RFC 8018 Section 5.2),
//! generic over any pseudorandom function. HMAC-SHA1, HMAC-SHA256 and
//! HMAC-SHA512 are provided; anything implementing [`prf::Prf`] plugs in.
//!
//! # Features
//!
//! - **Generic PRF**: the engine is monomorphized per PRF, no dynamic dispatch
//! - **Typed errors**: invalid parameters are rejected before any output byte is written
//! - **Automatic zeroization**: HMAC pads, hash state and the U-chain are wiped after use
//! - **Cancellable**: long derivations can be aborted from another thread
//! - **`no_std` compatible**: only `alloc` is needed, and only for the `*_vec` helpers
//!
//! # Quick Start
//!
//! ```rust
//! use rampart::hmac::HmacSha256;
//! use rampart::pbkdf2::{pbkdf2, pbkdf2_verify};
//!
//! let mut key = [0u8; 32];
//! pbkdf2::<HmacSha256>(&mut key, b"password", b"salt", 4096)?;
//!
//! pbkdf2_verify::<HmacSha256>(&key, b"password", b"salt", 4096)?;
//! # Ok::<(), rampart::pbkdf2::Pbkdf2Error>(())
//! ```
//!
//! # Validated parameters
//!
//! ```rust
//! use rampart::hmac::HmacSha512;
//! use rampart::pbkdf2::Pbkdf2Params;
//!
//! let params = Pbkdf2Params::new::<HmacSha512>(210_000, 64)?;
//! let key = params.derive_vec::<HmacSha512>(b"password", b"salt")?;
//! assert_eq!(key.len(), 64);
//! // key is zeroized when dropped
//! # Ok::<(), rampart::pbkdf2::Pbkdf2Error>(())
//! ```
//!
//! # Custom PRFs
//!
//! ```rust
//! use rampart::prf::{Prf, PrfContext};
//!
//! struct Xor8;
//!
//! struct Xor8Context {
//!     acc: [u8; 8],
//!     pos: usize,
//! }
//!
//! impl Prf for Xor8 {
//!     const OUTPUT_LEN: usize = 8;
//!     type Context = Xor8Context;
//!
//!     fn init(key: &[u8]) -> Xor8Context {
//!         let mut ctx = Xor8Context { acc: [0; 8], pos: 0 };
//!         ctx.update(key);
//!         ctx
//!     }
//! }
//!
//! impl PrfContext for Xor8Context {
//!     fn update(&mut self, data: &[u8]) {
//!         for &b in data {
//!             self.acc[self.pos % 8] ^= b.wrapping_add(self.pos as u8);
//!             self.pos += 1;
//!         }
//!     }
//!
//!     fn finalize(self, out: &mut [u8]) {
//!         out[..8].copy_from_slice(&self.acc);
//!     }
//! }
//!
//! let mut key = [0u8; 12];
//! rampart::pbkdf2::pbkdf2::<Xor8>(&mut key, b"pw", b"salt", 2)?;
//! # Ok::<(), rampart::pbkdf2::Pbkdf2Error>(())
//! ```

#![cfg_attr(not(test), no_std)]

pub use rampart_hmac as hmac;
pub use rampart_pbkdf2 as pbkdf2;
pub use rampart_prf as prf;
