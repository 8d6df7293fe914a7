// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Input buffering and MD-strengthening padding shared by the SHA family

use zeroize::Zeroize;

/// Holds a partial message block between `update` calls.
pub(crate) struct BlockBuffer<const N: usize> {
    bytes: [u8; N],
    len: usize,
}

impl<const N: usize> BlockBuffer<N> {
    pub(crate) const fn new() -> Self {
        Self {
            bytes: [0u8; N],
            len: 0,
        }
    }

    /// Buffers `data`, handing every completed block to `compress`.
    pub(crate) fn update(&mut self, mut data: &[u8], mut compress: impl FnMut(&[u8])) {
        if self.len > 0 {
            let take = core::cmp::min(N - self.len, data.len());
            self.bytes[self.len..self.len + take].copy_from_slice(&data[..take]);
            self.len += take;
            data = &data[take..];

            if self.len < N {
                return;
            }

            compress(&self.bytes);
            self.len = 0;
        }

        let mut blocks = data.chunks_exact(N);
        for block in &mut blocks {
            compress(block);
        }

        let rem = blocks.remainder();
        self.bytes[..rem.len()].copy_from_slice(rem);
        self.len = rem.len();
    }

    /// Appends `0x80`, zero fill and the big-endian `length_field`, then
    /// compresses the final one or two blocks.
    ///
    /// Leaves the buffer empty and zeroized.
    pub(crate) fn finish(&mut self, length_field: &[u8], mut compress: impl FnMut(&[u8])) {
        let tail = N - length_field.len();

        self.bytes[self.len] = 0x80;
        self.len += 1;

        // No room for the length field: pad out this block and start another
        if self.len > tail {
            self.bytes[self.len..].fill(0);
            compress(&self.bytes);
            self.len = 0;
        }

        self.bytes[self.len..tail].fill(0);
        self.bytes[tail..].copy_from_slice(length_field);
        compress(&self.bytes);

        self.zeroize();
    }
}

impl<const N: usize> Zeroize for BlockBuffer<N> {
    fn zeroize(&mut self) {
        self.bytes.zeroize();
        self.len = 0;
    }
}
