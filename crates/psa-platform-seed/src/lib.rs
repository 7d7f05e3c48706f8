// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # psa_platform_seed
//!
//! Non-volatile (NV) seed persistence for the PSA crypto platform layer.
//!
//! The entropy subsystem stores a seed between process runs and reads it
//! back at startup. Two backends are provided:
//!
//! - [`FileSeedStore`]: a seed file on the local filesystem
//! - [`MemorySeedStore`]: filesystem-less stand-in that only remembers the
//!   length of the last write and reads back zeros
//!
//! Both report the number of bytes transferred on success. A short read
//! zeroizes the destination before the error is returned, so a partially
//! read seed never reaches the caller.
//!
//! ## Example
//!
//! ```rust
//! use psa_platform_seed::{ENTROPY_BLOCK_SIZE, MemorySeedStore, SeedStore};
//!
//! let store = MemorySeedStore::new();
//! let mut seed = [0xFFu8; ENTROPY_BLOCK_SIZE];
//!
//! assert_eq!(store.read(&mut seed).expect("Failed to read(..)"), ENTROPY_BLOCK_SIZE);
//! assert_eq!(seed, [0u8; ENTROPY_BLOCK_SIZE]);
//!
//! store.write(&[0u8; 16]).expect("Failed to write(..)");
//! assert!(store.read(&mut seed).is_err());
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod file;
mod memory;
mod traits;

pub use error::SeedError;
pub use file::FileSeedStore;
pub use memory::MemorySeedStore;
pub use traits::SeedStore;

/// Entropy accumulator block size (SHA-512 output), the default NV seed size.
pub const ENTROPY_BLOCK_SIZE: usize = 64;

/// Default seed file name, relative to the working directory.
pub const DEFAULT_SEED_FILE: &str = "seedfile";
