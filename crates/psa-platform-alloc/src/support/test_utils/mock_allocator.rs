// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use crate::buffer::HeapBuffer;
use crate::error::AllocError;
use crate::system::SystemAllocator;
use crate::traits::Allocator;

/// Configurable behavior for [`MockAllocator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockAllocatorBehaviour {
    /// Normal operation (delegates to [`SystemAllocator`]).
    None,
    /// Always fail allocate.
    FailAlways,
    /// Fail allocate on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthAllocation(usize),
}

/// Mock allocator for testing.
///
/// Wraps [`SystemAllocator`], simulates failures via [`MockAllocatorBehaviour`]
/// and tracks how many buffers are still live.
pub struct MockAllocator {
    inner: SystemAllocator,
    behaviour: MockAllocatorBehaviour,
    allocate_count: Cell<usize>,
    live: Cell<usize>,
}

impl MockAllocator {
    /// Creates a new mock allocator with the specified behavior.
    pub fn new(behaviour: MockAllocatorBehaviour) -> Self {
        Self {
            inner: SystemAllocator,
            behaviour,
            allocate_count: Cell::new(0),
            live: Cell::new(0),
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockAllocatorBehaviour) {
        self.behaviour = behaviour;
    }

    /// Returns how many times `allocate` was called.
    pub fn call_count(&self) -> usize {
        self.allocate_count.get()
    }

    /// Returns allocations not yet passed back to `deallocate`.
    pub fn live_allocations(&self) -> usize {
        self.live.get()
    }
}

impl Allocator for MockAllocator {
    fn allocate(&self, nmemb: usize, size: usize) -> Result<HeapBuffer, AllocError> {
        let current = self.allocate_count.get();
        self.allocate_count.set(current + 1);

        let fail = match self.behaviour {
            MockAllocatorBehaviour::None => false,
            MockAllocatorBehaviour::FailAlways => true,
            MockAllocatorBehaviour::FailAtNthAllocation(n) => current + 1 == n,
        };

        if fail {
            return Err(AllocError::OutOfMemory {
                requested: nmemb.saturating_mul(size),
            });
        }

        let buffer = self.inner.allocate(nmemb, size)?;
        self.live.set(self.live.get() + 1);

        Ok(buffer)
    }

    fn deallocate(&self, buffer: HeapBuffer) {
        self.live.set(self.live.get().saturating_sub(1));
        self.inner.deallocate(buffer);
    }
}
