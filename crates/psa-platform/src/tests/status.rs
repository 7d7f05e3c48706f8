// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::status::{PLATFORM_FAILURE, to_status};

#[test]
fn test_to_status_success_is_count() {
    assert_eq!(to_status::<()>(Ok(0)), 0);
    assert_eq!(to_status::<()>(Ok(64)), 64);
}

#[test]
fn test_to_status_any_error_is_failure() {
    assert_eq!(to_status(Err::<usize, _>("open failed")), PLATFORM_FAILURE);
    assert_eq!(to_status(Err::<usize, _>(42u8)), -1);
}

#[test]
fn test_to_status_oversized_count_is_failure() {
    assert_eq!(to_status::<()>(Ok(usize::MAX)), PLATFORM_FAILURE);
}
