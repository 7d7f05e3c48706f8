// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::SeedError;

/// Trait for NV seed persistence backends.
pub trait SeedStore {
    /// Reads exactly `buf.len()` seed bytes into `buf`.
    ///
    /// Returns `buf.len()` on success.
    ///
    /// # Errors
    ///
    /// - [`SeedError::Open`] if the backing storage cannot be opened.
    /// - [`SeedError::ShortRead`] if fewer bytes are available. `buf` is
    ///   zeroized in that case.
    fn read(&self, buf: &mut [u8]) -> Result<usize, SeedError>;

    /// Persists `buf` as the new seed, replacing any previous one.
    ///
    /// Returns `buf.len()` on success.
    ///
    /// # Errors
    ///
    /// - [`SeedError::Open`] if the backing storage cannot be opened.
    /// - [`SeedError::ShortWrite`] if not every byte could be stored.
    fn write(&self, buf: &[u8]) -> Result<usize, SeedError>;
}

impl<T: SeedStore + ?Sized> SeedStore for &T {
    fn read(&self, buf: &mut [u8]) -> Result<usize, SeedError> {
        (**self).read(buf)
    }

    fn write(&self, buf: &[u8]) -> Result<usize, SeedError> {
        (**self).write(buf)
    }
}
