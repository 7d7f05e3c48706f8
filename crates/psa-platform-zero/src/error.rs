// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors returned by the bounded zeroization helpers.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum ZeroizeError {
    /// Requested length is larger than the buffer.
    #[error("zeroize length {len} exceeds buffer length {buf_len}")]
    OutOfBounds {
        /// Requested length.
        len: usize,
        /// Actual buffer length.
        buf_len: usize,
    },
}
