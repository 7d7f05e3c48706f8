// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # psa_platform_entropy
//!
//! Hardware entropy poll backends for the PSA crypto platform layer.
//!
//! ## Core Types
//!
//! - [`ZeroEntropySource`]: Deterministic stub, produces all-zero output
//! - [`SystemEntropySource`]: OS-level CSPRNG (via `getrandom`)
//!
//! ## Traits
//!
//! - [`EntropySource`]: Interface for entropy polls
//!
//! ## Example
//!
//! ```rust
//! use psa_platform_entropy::{EntropySource, ZeroEntropySource};
//!
//! let mut output = [0xFFu8; 32];
//! let len = ZeroEntropySource.collect(&mut output).expect("Failed to collect(..)");
//!
//! assert_eq!(len, 32);
//! assert_eq!(output, [0u8; 32]);
//! ```
//!
//! The zero source exists so test runs are reproducible. It provides no
//! security whatsoever and must never back a production entropy pool.

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod support;
mod system;
mod traits;
mod zero;

pub use error::EntropyError;
pub use system::SystemEntropySource;
pub use traits::EntropySource;
pub use zero::ZeroEntropySource;

#[cfg(any(test, feature = "test-utils"))]
pub use support::test_utils;
