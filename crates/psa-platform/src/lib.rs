// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # psa_platform
//!
//! Platform capability layer for PSA crypto test harnesses.
//!
//! Bundles one backend per capability behind a single [`Platform`] value:
//!
//! | Capability          | Trait             | Default backend                  |
//! |---------------------|-------------------|----------------------------------|
//! | Heap                | [`Allocator`]     | [`SystemAllocator`]              |
//! | Entropy poll        | [`EntropySource`] | [`ZeroEntropySource`]            |
//! | NV seed             | [`SeedStore`]     | [`FileSeedStore`] (`fs-io`)      |
//! | Zeroization         | -                 | [`zeroize`]                      |
//! | Formatted output    | -                 | [`fprint`]                       |
//!
//! Each backend can be replaced independently, either through
//! [`PlatformConfig`] or by passing a custom implementation to
//! [`Platform::builder`].
//!
//! ## Example
//!
//! ```rust
//! use psa_platform::{MemorySeedStore, Platform, PlatformConfig, NvSeedBackend};
//!
//! let config = PlatformConfig {
//!     nv_seed: NvSeedBackend::Memory,
//!     ..PlatformConfig::default()
//! };
//! let platform = Platform::from_config(&config);
//!
//! let mut entropy = [0xFFu8; 32];
//! let len = platform.collect_entropy(&mut entropy).expect("Failed to collect_entropy(..)");
//! assert_eq!(len, 32);
//! assert_eq!(entropy, [0u8; 32]);
//!
//! let mut out = Vec::new();
//! platform
//!     .format_output(&mut out, format_args!("collected {} bytes", len))
//!     .expect("Failed to format_output(..)");
//! assert_eq!(out, b"collected 32 bytes");
//! # MemorySeedStore::global().reset();
//! ```
//!
//! ## Features
//!
//! - `fs-io` (default): the default NV seed backend is the seed file.
//!   Without it the default is the in-memory store.
//! - `test-utils`: re-exports the mock allocator and mock entropy source.

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod config;
mod error;
mod platform;

pub mod status;

pub use config::{
    ConfigError, ENTROPY_VAR, EntropyBackend, NV_SEED_VAR, NvSeedBackend, PlatformConfig,
};
pub use error::PlatformError;
pub use platform::{Platform, PlatformBuilder};

pub use psa_platform_alloc::{AllocError, Allocator, HeapBuffer, SystemAllocator};
pub use psa_platform_entropy::{
    EntropyError, EntropySource, SystemEntropySource, ZeroEntropySource,
};
pub use psa_platform_output::{
    OutputError, PlatformStream, fprint, platform_fprintf, platform_printf, platform_snprintf,
    print, snprint,
};
pub use psa_platform_seed::{
    DEFAULT_SEED_FILE, ENTROPY_BLOCK_SIZE, FileSeedStore, MemorySeedStore, SeedError, SeedStore,
};
pub use psa_platform_zero::{ZeroizeError, is_zeroized, zeroize, zeroize_prefix};

/// Mocks for exercising failure paths.
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils {
    pub use psa_platform_alloc::test_utils::{MockAllocator, MockAllocatorBehaviour};
    pub use psa_platform_entropy::test_utils::{MockEntropySource, MockEntropySourceBehaviour};
}
