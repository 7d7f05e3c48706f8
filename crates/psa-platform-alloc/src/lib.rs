// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # psa_platform_alloc
//!
//! Heap allocation backend for the PSA crypto platform layer.
//!
//! Allocations follow `calloc` semantics: `nmemb * size` bytes, all zero.
//! Released buffers are zeroized before the memory goes back to the heap.
//!
//! ## Core Types
//!
//! - [`Allocator`]: Interface for allocation backends
//! - [`SystemAllocator`]: Process heap
//! - [`HeapBuffer`]: Owned allocation, zeroized on drop
//!
//! ## Example
//!
//! ```rust
//! use psa_platform_alloc::{Allocator, SystemAllocator};
//!
//! let allocator = SystemAllocator;
//! let mut buffer = allocator.allocate(4, 8).expect("Failed to allocate(..)");
//! assert_eq!(buffer.len(), 32);
//! assert!(buffer.iter().all(|&b| b == 0));
//!
//! buffer[0] = 0xAA;
//! allocator.deallocate(buffer);
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod buffer;
mod error;
mod support;
mod system;
mod traits;

pub use buffer::HeapBuffer;
pub use error::AllocError;
pub use system::SystemAllocator;
pub use traits::Allocator;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
