// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use crate::buffer::HeapBuffer;
use crate::error::AllocError;
use crate::traits::Allocator;

/// Allocator backed by the process heap.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemAllocator;

impl SystemAllocator {
    pub(crate) fn allocate_with(
        reserve_fn: &dyn Fn(&mut Vec<u8>, usize) -> Result<(), alloc::collections::TryReserveError>,
        nmemb: usize,
        size: usize,
    ) -> Result<HeapBuffer, AllocError> {
        let requested = nmemb
            .checked_mul(size)
            .ok_or(AllocError::Overflow { nmemb, size })?;

        if requested == 0 {
            return Ok(HeapBuffer::empty());
        }

        let mut inner = Vec::new();
        reserve_fn(&mut inner, requested).map_err(|_| AllocError::OutOfMemory { requested })?;
        inner.resize(requested, 0);

        Ok(HeapBuffer::from_zeroed(inner))
    }
}

impl Allocator for SystemAllocator {
    fn allocate(&self, nmemb: usize, size: usize) -> Result<HeapBuffer, AllocError> {
        Self::allocate_with(&|vec, n| vec.try_reserve_exact(n), nmemb, size)
    }

    fn deallocate(&self, mut buffer: HeapBuffer) {
        buffer.zeroize();
        drop(buffer);
    }
}
