// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::sync::atomic::{AtomicUsize, Ordering};

use psa_platform_zero::zeroize;

use crate::ENTROPY_BLOCK_SIZE;
use crate::error::SeedError;
use crate::traits::SeedStore;

static GLOBAL: MemorySeedStore = MemorySeedStore::new();

/// Filesystem-less NV seed.
///
/// Only the length of the last write is kept; reads return zeros. The length
/// starts at [`ENTROPY_BLOCK_SIZE`].
#[derive(Debug)]
pub struct MemorySeedStore {
    len: AtomicUsize,
}

impl MemorySeedStore {
    /// Creates a store with its own length, independent of [`Self::global`].
    pub const fn new() -> Self {
        Self {
            len: AtomicUsize::new(ENTROPY_BLOCK_SIZE),
        }
    }

    /// Returns the process-wide store.
    pub fn global() -> &'static MemorySeedStore {
        &GLOBAL
    }

    /// Returns the length recorded by the last write.
    pub fn len(&self) -> usize {
        self.len.load(Ordering::Acquire)
    }

    /// Returns `true` if the last write was empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Restores the initial length.
    pub fn reset(&self) {
        self.len.store(ENTROPY_BLOCK_SIZE, Ordering::Release);
    }
}

impl Default for MemorySeedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedStore for MemorySeedStore {
    fn read(&self, buf: &mut [u8]) -> Result<usize, SeedError> {
        let available = self.len();

        zeroize(buf);

        if buf.len() > available {
            return Err(SeedError::ShortRead {
                expected: buf.len(),
                actual: available,
            });
        }

        Ok(buf.len())
    }

    fn write(&self, buf: &[u8]) -> Result<usize, SeedError> {
        self.len.store(buf.len(), Ordering::Release);

        Ok(buf.len())
    }
}
