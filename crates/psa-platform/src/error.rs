// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use psa_platform_alloc::AllocError;
use psa_platform_entropy::EntropyError;
use psa_platform_output::OutputError;
use psa_platform_seed::SeedError;
use psa_platform_zero::ZeroizeError;

/// Errors returned by [`Platform`](crate::Platform) operations.
#[derive(Debug, Error)]
pub enum PlatformError {
    /// Allocation failed.
    #[error("AllocError: {0}")]
    Alloc(#[from] AllocError),

    /// Entropy poll failed.
    #[error("EntropyError: {0}")]
    Entropy(#[from] EntropyError),

    /// NV seed read or write failed.
    #[error("SeedError: {0}")]
    Seed(#[from] SeedError),

    /// Formatted output failed.
    #[error("OutputError: {0}")]
    Output(#[from] OutputError),

    /// Zeroization length was out of bounds.
    #[error("ZeroizeError: {0}")]
    Zeroize(#[from] ZeroizeError),
}
