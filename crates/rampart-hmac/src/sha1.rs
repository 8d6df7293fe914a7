// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! SHA-1 implementation per FIPS 180-4 Section 6.1
//!
//! Only suitable as an HMAC core for legacy interoperability (RFC 6070).
//! Do not use for collision resistance.

use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::block_buffer::BlockBuffer;
use crate::hash::HashFunction;

/// Initial hash value H(0) per FIPS 180-4 Section 5.3.1
const H0: [u32; 5] = [0x67452301, 0xefcdab89, 0x98badcfe, 0x10325476, 0xc3d2e1f0];

const BLOCK_LEN: usize = 64;
const HASH_LEN: usize = 20;

/// SHA-1 streaming state.
pub struct Sha1 {
    h: [u32; 5],
    buffer: BlockBuffer<BLOCK_LEN>,
    total_len: u64,
}

impl Sha1 {
    fn reset(&mut self) {
        self.zeroize();
        self.h = H0;
    }
}

fn compress(h: &mut [u32; 5], block: &[u8]) {
    let mut w = [0u32; 80];

    for (t, word) in block.chunks_exact(4).enumerate() {
        w[t] = u32::from_be_bytes([word[0], word[1], word[2], word[3]]);
    }

    for t in 16..80 {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *h;

    for (t, wt) in w.iter().enumerate() {
        // f_t and K_t per FIPS 180-4 Sections 4.1.1 and 4.2.1
        let (f, k) = match t {
            0..=19 => ((b & c) | (!b & d), 0x5a827999),
            20..=39 => (b ^ c ^ d, 0x6ed9eba1),
            40..=59 => ((b & c) | (b & d) | (c & d), 0x8f1bbcdc),
            _ => (b ^ c ^ d, 0xca62c1d6),
        };

        let temp = a
            .rotate_left(5)
            .wrapping_add(f)
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(*wt);

        e = d;
        d = c;
        c = b.rotate_left(30);
        b = a;
        a = temp;
    }

    for (word, v) in h.iter_mut().zip([a, b, c, d, e]) {
        *word = word.wrapping_add(v);
    }

    w.zeroize();
}

impl HashFunction for Sha1 {
    const BLOCK_LEN: usize = BLOCK_LEN;
    const OUTPUT_LEN: usize = HASH_LEN;

    fn new() -> Self {
        Self {
            h: H0,
            buffer: BlockBuffer::new(),
            total_len: 0,
        }
    }

    fn update(&mut self, data: &[u8]) {
        self.total_len = self.total_len.wrapping_add(data.len() as u64);
        self.buffer.update(data, |block| compress(&mut self.h, block));
    }

    fn finalize_into(&mut self, out: &mut [u8]) {
        let bit_len = self.total_len.wrapping_mul(8).to_be_bytes();
        self.buffer
            .finish(&bit_len, |block| compress(&mut self.h, block));

        for (chunk, word) in out[..HASH_LEN].chunks_exact_mut(4).zip(self.h.iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        self.reset();
    }
}

impl Zeroize for Sha1 {
    fn zeroize(&mut self) {
        self.h.zeroize();
        self.buffer.zeroize();
        self.total_len.zeroize();
    }
}

impl Drop for Sha1 {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl ZeroizeOnDrop for Sha1 {}

/// One-shot SHA-1.
pub fn sha1(data: &[u8]) -> [u8; HASH_LEN] {
    let mut state = Sha1::new();
    state.update(data);

    let mut out = [0u8; HASH_LEN];
    state.finalize_into(&mut out);
    out
}
