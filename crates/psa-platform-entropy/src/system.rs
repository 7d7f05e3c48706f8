// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;
use psa_platform_zero::zeroize;

use crate::error::EntropyError;
use crate::traits::EntropySource;

/// System-provided cryptographically secure random number generator.
///
/// Uses the OS-level CSPRNG via `getrandom`:
/// - Linux/Android: `getrandom()` syscall
/// - macOS/iOS: `getentropy()`
/// - Windows: `BCryptGenRandom`
/// - WASI: `random_get`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEntropySource;

impl SystemEntropySource {
    pub(crate) fn collect_with(
        fill_fn: &dyn Fn(&mut [u8]) -> Result<(), GetRandomError>,
        output: &mut [u8],
    ) -> Result<usize, EntropyError> {
        if fill_fn(output).is_err() {
            zeroize(output);
            return Err(EntropyError::EntropyNotAvailable);
        }

        Ok(output.len())
    }
}

impl EntropySource for SystemEntropySource {
    fn collect(&self, output: &mut [u8]) -> Result<usize, EntropyError> {
        Self::collect_with(&getrandom::fill, output)
    }
}
