// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::buffer::HeapBuffer;
use crate::error::AllocError;

/// Trait for heap allocation backends.
///
/// Implementations must hand out zero-initialised memory and must zeroize
/// it again before releasing it.
pub trait Allocator {
    /// Allocates `nmemb * size` zero bytes.
    ///
    /// A zero-byte request succeeds with an empty buffer.
    ///
    /// # Errors
    ///
    /// - [`AllocError::Overflow`] if `nmemb * size` overflows `usize`.
    /// - [`AllocError::OutOfMemory`] if the backend cannot satisfy the request.
    fn allocate(&self, nmemb: usize, size: usize) -> Result<HeapBuffer, AllocError>;

    /// Releases a buffer previously returned by [`Allocator::allocate`].
    fn deallocate(&self, buffer: HeapBuffer);
}
