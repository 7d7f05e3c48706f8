// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur when allocating memory.
#[derive(Debug, Error, Clone, Copy, Eq, PartialEq)]
pub enum AllocError {
    /// `nmemb * size` does not fit in `usize`.
    #[error("allocation size overflow: {nmemb} * {size}")]
    Overflow {
        /// Number of members requested.
        nmemb: usize,
        /// Size of each member.
        size: usize,
    },

    /// The heap refused the request.
    #[error("out of memory: {requested} bytes")]
    OutOfMemory {
        /// Total number of bytes requested.
        requested: usize,
    },
}
