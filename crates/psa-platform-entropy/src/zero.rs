// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use psa_platform_zero::zeroize;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// Deterministic placeholder entropy: every poll yields zero bytes.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroEntropySource;

impl EntropySource for ZeroEntropySource {
    fn collect(&self, output: &mut [u8]) -> Result<usize, EntropyError> {
        zeroize(output);

        Ok(output.len())
    }
}
