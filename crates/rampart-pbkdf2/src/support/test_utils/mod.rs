// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

mod recording_prf;

pub use recording_prf::{RecordedCall, RecordingPrf, recorded_calls, reset_recorder};
