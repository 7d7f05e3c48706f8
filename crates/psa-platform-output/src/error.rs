// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Errors that can occur while producing formatted output.
#[derive(Debug, Error)]
pub enum OutputError {
    /// The underlying stream rejected the write.
    #[error("stream error: {0}")]
    Io(#[from] std::io::Error),

    /// A formatting trait implementation returned an error.
    #[error("formatter error")]
    Format,
}
