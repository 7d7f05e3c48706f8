// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Legacy integer status codes.
//!
//! Harness code ported from C expects a byte count on success and a negative
//! sentinel on any failure. [`to_status`] collapses a `Result` into that form.

/// Status reported for every failure.
pub const PLATFORM_FAILURE: i32 = -1;

/// Converts a byte-count result into a C-style status.
///
/// Counts that do not fit in a non-negative `i32` are reported as
/// [`PLATFORM_FAILURE`].
pub fn to_status<E>(result: Result<usize, E>) -> i32 {
    match result {
        Ok(n) => i32::try_from(n).unwrap_or(PLATFORM_FAILURE),
        Err(_) => PLATFORM_FAILURE,
    }
}
