// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use getrandom::Error as GetRandomError;

use crate::error::EntropyError;
use crate::system::SystemEntropySource;
use crate::traits::EntropySource;

#[test]
fn test_collect_with_failure_zeroizes_output() {
    let mut bytes = [0x77u8; 32];
    let result = SystemEntropySource::collect_with(
        &|dest| {
            dest[0] = 0xFF;
            Err(GetRandomError::UNSUPPORTED)
        },
        &mut bytes,
    );

    assert!(matches!(result, Err(EntropyError::EntropyNotAvailable)));
    assert_eq!(bytes, [0u8; 32]);
}

#[test]
fn test_collect_ok() {
    let mut bytes = [0u8; 32];
    let len = SystemEntropySource
        .collect(&mut bytes)
        .expect("Failed to collect(..)");

    assert_eq!(len, 32);
}

#[test]
fn test_collect_produces_distinct_outputs() {
    let mut a = [0u8; 32];
    let mut b = [0u8; 32];

    SystemEntropySource
        .collect(&mut a)
        .expect("Failed to collect(..)");
    SystemEntropySource
        .collect(&mut b)
        .expect("Failed to collect(..)");

    assert_ne!(a, b);
}
