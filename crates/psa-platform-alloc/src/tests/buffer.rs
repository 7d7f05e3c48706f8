// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::buffer::HeapBuffer;
use crate::system::SystemAllocator;
use crate::traits::Allocator;

#[test]
fn test_heap_buffer_zeroize_clears_contents() {
    let mut buffer = SystemAllocator
        .allocate(1, 16)
        .expect("Failed to allocate(..)");
    buffer.copy_from_slice(&[0x5Au8; 16]);
    assert!(!buffer.is_zeroized());

    buffer.zeroize();

    assert!(buffer.is_zeroized());
    assert_eq!(buffer.len(), 16);
}

#[test]
fn test_heap_buffer_debug_does_not_leak_contents() {
    let mut buffer = SystemAllocator
        .allocate(1, 4)
        .expect("Failed to allocate(..)");
    buffer.copy_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);

    let debug = format!("{:?}", buffer);

    assert!(debug.contains("len: 4"));
    assert!(!debug.contains("222"));
    assert!(!debug.contains("0xDE"));
}

#[test]
fn test_heap_buffer_empty() {
    let buffer = HeapBuffer::empty();
    assert!(buffer.is_empty());
    assert!(buffer.is_zeroized());
}
