// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC per RFC 2104

use core::marker::PhantomData;

use rampart_prf::{MAX_OUTPUT_LEN, Prf, PrfContext};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::hash::HashFunction;

/// Largest supported hash block (SHA-512).
const MAX_BLOCK_LEN: usize = 128;

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// HMAC over the hash function `H`, usable as a [`Prf`].
///
/// Zero-sized marker; keyed state lives in [`HmacContext`].
pub struct Hmac<H>(PhantomData<H>);

/// Keyed HMAC computation.
///
/// The inner hash is primed with `K ⊕ ipad` at construction; `K ⊕ opad` is
/// held until finalization. Both are zeroized on drop.
pub struct HmacContext<H: HashFunction> {
    /// Inner hash: H(K ⊕ ipad || message)
    inner: H,
    /// K ⊕ opad (0x5c repeated), first `H::BLOCK_LEN` bytes used
    k_opad: [u8; MAX_BLOCK_LEN],
}

impl<H: HashFunction> HmacContext<H> {
    /// Creates a context keyed with `key` (any length).
    pub fn new(key: &[u8]) -> Self {
        const {
            assert!(H::BLOCK_LEN <= MAX_BLOCK_LEN);
            assert!(H::OUTPUT_LEN <= MAX_OUTPUT_LEN);
            assert!(H::OUTPUT_LEN <= H::BLOCK_LEN);
        }

        let mut key_block = [0u8; MAX_BLOCK_LEN];

        if key.len() > H::BLOCK_LEN {
            // K = H(key), zero-padded to the block size
            let mut hasher = H::new();
            hasher.update(key);
            hasher.finalize_into(&mut key_block[..H::OUTPUT_LEN]);
        } else {
            key_block[..key.len()].copy_from_slice(key);
        }

        let mut k_ipad = [0u8; MAX_BLOCK_LEN];
        let mut k_opad = [0u8; MAX_BLOCK_LEN];
        for ((ipad, opad), k) in k_ipad
            .iter_mut()
            .zip(k_opad.iter_mut())
            .zip(key_block.iter())
            .take(H::BLOCK_LEN)
        {
            *ipad = k ^ IPAD;
            *opad = k ^ OPAD;
        }

        let mut inner = H::new();
        inner.update(&k_ipad[..H::BLOCK_LEN]);

        key_block.zeroize();
        k_ipad.zeroize();

        Self { inner, k_opad }
    }

    /// Appends message bytes.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Writes the tag into `out[..H::OUTPUT_LEN]`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() < H::OUTPUT_LEN`.
    pub fn finalize_into(mut self, out: &mut [u8]) {
        let mut inner_hash = [0u8; MAX_OUTPUT_LEN];
        self.inner.finalize_into(&mut inner_hash[..H::OUTPUT_LEN]);

        // Outer hash: H(K ⊕ opad || inner_hash)
        let mut outer = H::new();
        outer.update(&self.k_opad[..H::BLOCK_LEN]);
        outer.update(&inner_hash[..H::OUTPUT_LEN]);
        outer.finalize_into(out);

        inner_hash.zeroize();
    }
}

impl<H: HashFunction> Drop for HmacContext<H> {
    fn drop(&mut self) {
        self.k_opad.zeroize();
        self.inner.zeroize();
    }
}

impl<H: HashFunction> ZeroizeOnDrop for HmacContext<H> {}

impl<H: HashFunction> PrfContext for HmacContext<H> {
    fn update(&mut self, data: &[u8]) {
        HmacContext::update(self, data);
    }

    fn finalize(self, out: &mut [u8]) {
        self.finalize_into(out);
    }
}

impl<H: HashFunction> Prf for Hmac<H> {
    const OUTPUT_LEN: usize = H::OUTPUT_LEN;

    type Context = HmacContext<H>;

    fn init(key: &[u8]) -> HmacContext<H> {
        HmacContext::new(key)
    }
}

/// One-shot HMAC: writes `HMAC-H(key, data)` into `out[..H::OUTPUT_LEN]`.
///
/// # Panics
///
/// Panics if `out.len() < H::OUTPUT_LEN`.
pub fn hmac<H: HashFunction>(key: &[u8], data: &[u8], out: &mut [u8]) {
    let mut ctx = HmacContext::<H>::new(key);
    ctx.update(data);
    ctx.finalize_into(out);
}
