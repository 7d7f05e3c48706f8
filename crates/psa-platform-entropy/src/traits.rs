// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::EntropyError;

/// Trait for entropy poll backends.
pub trait EntropySource {
    /// Fills `output` and returns how many bytes were produced.
    ///
    /// # Errors
    ///
    /// Returns [`EntropyError::EntropyNotAvailable`] if the source cannot
    /// produce data. `output` is zeroized in that case.
    fn collect(&self, output: &mut [u8]) -> Result<usize, EntropyError>;
}
