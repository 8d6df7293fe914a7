// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::cell::RefCell;
use std::vec::Vec;

use rampart_prf::{Prf, PrfContext};

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// A single finalized invocation observed by [`RecordingPrf`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedCall {
    /// Key passed to `init`.
    pub key: Vec<u8>,
    /// Concatenation of every `update` chunk.
    pub message: Vec<u8>,
}

thread_local! {
    static CALLS: RefCell<Vec<RecordedCall>> = const { RefCell::new(Vec::new()) };
}

/// Clears the calls recorded on the current thread.
pub fn reset_recorder() {
    CALLS.with(|calls| calls.borrow_mut().clear());
}

/// Returns the calls recorded on the current thread, oldest first.
pub fn recorded_calls() -> Vec<RecordedCall> {
    CALLS.with(|calls| calls.borrow().clone())
}

/// Test PRF that records every finalized call on the current thread.
///
/// Output is keyed FNV-1a over `key || 0xff || message` (8 bytes), which is
/// enough to exercise block chaining and truncation without a real hash.
pub struct RecordingPrf;

/// Context for [`RecordingPrf`].
pub struct RecordingContext {
    key: Vec<u8>,
    message: Vec<u8>,
}

impl Prf for RecordingPrf {
    const OUTPUT_LEN: usize = 8;

    type Context = RecordingContext;

    fn init(key: &[u8]) -> RecordingContext {
        RecordingContext {
            key: key.to_vec(),
            message: Vec::new(),
        }
    }
}

impl PrfContext for RecordingContext {
    fn update(&mut self, data: &[u8]) {
        self.message.extend_from_slice(data);
    }

    fn finalize(self, out: &mut [u8]) {
        let mut state = FNV_OFFSET;
        for &b in self.key.iter().chain([0xffu8].iter()).chain(self.message.iter()) {
            state ^= u64::from(b);
            state = state.wrapping_mul(FNV_PRIME);
        }

        out[..RecordingPrf::OUTPUT_LEN].copy_from_slice(&state.to_be_bytes());

        CALLS.with(|calls| {
            calls.borrow_mut().push(RecordedCall {
                key: self.key,
                message: self.message,
            })
        });
    }
}
