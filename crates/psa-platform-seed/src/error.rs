// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when reading or writing the NV seed.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be opened.
    #[error("failed to open seed file {path}: {source}")]
    Open {
        /// Seed file path.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// Fewer bytes than requested were available.
    #[error("short seed read: expected {expected} bytes, got {actual}")]
    ShortRead {
        /// Bytes requested.
        expected: usize,
        /// Bytes available.
        actual: usize,
    },

    /// Fewer bytes than requested could be written.
    #[error("short seed write: expected {expected} bytes, wrote {actual}")]
    ShortWrite {
        /// Bytes requested.
        expected: usize,
        /// Bytes written before the failure.
        actual: usize,
    },
}
