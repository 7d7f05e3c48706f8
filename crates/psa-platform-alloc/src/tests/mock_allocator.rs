// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::AllocError;
use crate::support::test_utils::{MockAllocator, MockAllocatorBehaviour};
use crate::traits::Allocator;

#[test]
fn test_mock_allocator_none_delegates() {
    let allocator = MockAllocator::new(MockAllocatorBehaviour::None);
    let buffer = allocator.allocate(2, 2).expect("Failed to allocate(..)");

    assert_eq!(buffer.len(), 4);
    assert_eq!(allocator.live_allocations(), 1);

    allocator.deallocate(buffer);
    assert_eq!(allocator.live_allocations(), 0);
}

#[test]
fn test_mock_allocator_fail_always() {
    let allocator = MockAllocator::new(MockAllocatorBehaviour::FailAlways);
    let result = allocator.allocate(2, 3);

    assert!(matches!(
        result,
        Err(AllocError::OutOfMemory { requested: 6 })
    ));
    assert_eq!(allocator.live_allocations(), 0);
}

#[test]
fn test_mock_allocator_fail_at_nth() {
    let mut allocator = MockAllocator::new(MockAllocatorBehaviour::FailAtNthAllocation(2));

    let first = allocator.allocate(1, 1);
    let second = allocator.allocate(1, 1);
    let third = allocator.allocate(1, 1);

    assert!(first.is_ok());
    assert!(second.is_err());
    assert!(third.is_ok());
    assert_eq!(allocator.call_count(), 3);

    allocator.change_behaviour(MockAllocatorBehaviour::FailAlways);
    assert!(allocator.allocate(1, 1).is_err());
}
