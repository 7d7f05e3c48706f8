// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HeapBuffer - owned allocation that never outlives its contents.

use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

use psa_platform_zero::{is_zeroized, zeroize_vec};

/// Owned, zero-initialised heap allocation.
///
/// The whole allocation is zeroized on drop. `Debug` only reports the length.
pub struct HeapBuffer {
    inner: Vec<u8>,
}

impl HeapBuffer {
    /// Wraps an already zeroed vector.
    pub(crate) fn from_zeroed(inner: Vec<u8>) -> Self {
        debug_assert!(inner.iter().all(|&b| b == 0));

        Self { inner }
    }

    /// Creates an empty buffer that owns no memory.
    pub fn empty() -> Self {
        Self { inner: Vec::new() }
    }

    /// Zeroizes the contents in place.
    pub fn zeroize(&mut self) {
        zeroize_vec(&mut self.inner);
    }

    /// Returns `true` if every byte of the buffer is zero.
    pub fn is_zeroized(&self) -> bool {
        is_zeroized(&self.inner)
    }
}

impl Deref for HeapBuffer {
    type Target = [u8];

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for HeapBuffer {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

impl AsRef<[u8]> for HeapBuffer {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl AsMut<[u8]> for HeapBuffer {
    fn as_mut(&mut self) -> &mut [u8] {
        &mut self.inner
    }
}

impl core::fmt::Debug for HeapBuffer {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("HeapBuffer")
            .field("len", &self.inner.len())
            .finish_non_exhaustive()
    }
}

impl Drop for HeapBuffer {
    fn drop(&mut self) {
        self.zeroize();
    }
}
