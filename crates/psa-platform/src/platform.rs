// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use std::io::Write;

use psa_platform_alloc::{Allocator, HeapBuffer, SystemAllocator};
use psa_platform_entropy::{EntropySource, SystemEntropySource, ZeroEntropySource};
use psa_platform_seed::{FileSeedStore, MemorySeedStore, SeedStore};

use crate::config::{EntropyBackend, NvSeedBackend, PlatformConfig};
use crate::error::PlatformError;

fn seed_store_for(backend: &NvSeedBackend) -> Box<dyn SeedStore> {
    match backend {
        NvSeedBackend::File(path) => Box::new(FileSeedStore::new(path.clone())),
        NvSeedBackend::Memory => Box::new(MemorySeedStore::global()),
    }
}

fn entropy_source_for(backend: EntropyBackend) -> Box<dyn EntropySource> {
    match backend {
        EntropyBackend::Zero => Box::new(ZeroEntropySource),
        EntropyBackend::System => Box::new(SystemEntropySource),
    }
}

/// One backend per platform capability.
///
/// Built from a [`PlatformConfig`] or assembled piece by piece with
/// [`Platform::builder`].
pub struct Platform {
    allocator: Box<dyn Allocator>,
    entropy: Box<dyn EntropySource>,
    seed: Box<dyn SeedStore>,
}

impl Platform {
    /// Builds a platform with the backends named by `config`.
    pub fn from_config(config: &PlatformConfig) -> Self {
        log::debug!(
            "Building platform: entropy={:?} nv_seed={:?}",
            config.entropy,
            config.nv_seed
        );

        Self {
            allocator: Box::new(SystemAllocator),
            entropy: entropy_source_for(config.entropy),
            seed: seed_store_for(&config.nv_seed),
        }
    }

    /// Starts a builder with every backend at its default.
    pub fn builder() -> PlatformBuilder {
        PlatformBuilder::default()
    }

    /// Allocates `nmemb * size` zero bytes.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Alloc`] on overflow or allocator refusal.
    pub fn allocate(&self, nmemb: usize, size: usize) -> Result<HeapBuffer, PlatformError> {
        Ok(self.allocator.allocate(nmemb, size)?)
    }

    /// Zeroizes and releases `buffer`.
    pub fn deallocate(&self, buffer: HeapBuffer) {
        self.allocator.deallocate(buffer);
    }

    /// Overwrites every byte of `buf` with zero.
    pub fn zeroize(&self, buf: &mut [u8]) {
        psa_platform_zero::zeroize(buf);
    }

    /// Overwrites the first `len` bytes of `buf`. `None` or `len == 0` is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Zeroize`] if `len` exceeds the buffer.
    pub fn zeroize_prefix(&self, buf: Option<&mut [u8]>, len: usize) -> Result<(), PlatformError> {
        Ok(psa_platform_zero::zeroize_prefix(buf, len)?)
    }

    /// Polls the entropy backend into `output`. Returns the bytes produced.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Entropy`] if the backend fails.
    pub fn collect_entropy(&self, output: &mut [u8]) -> Result<usize, PlatformError> {
        Ok(self.entropy.collect(output)?)
    }

    /// Reads the persisted NV seed into `buf`.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Seed`] on open failure or short read; `buf`
    /// is zeroized on short read.
    pub fn read_persisted_seed(&self, buf: &mut [u8]) -> Result<usize, PlatformError> {
        Ok(self.seed.read(buf)?)
    }

    /// Persists `buf` as the NV seed.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Seed`] on open failure or short write.
    pub fn write_persisted_seed(&self, buf: &[u8]) -> Result<usize, PlatformError> {
        Ok(self.seed.write(buf)?)
    }

    /// Formats `args` to `stream`. Returns the bytes written.
    ///
    /// # Errors
    ///
    /// Returns [`PlatformError::Output`] if the stream rejects the write.
    pub fn format_output(
        &self,
        stream: &mut dyn Write,
        args: fmt::Arguments<'_>,
    ) -> Result<usize, PlatformError> {
        Ok(psa_platform_output::fprint(stream, args)?)
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::from_config(&PlatformConfig::default())
    }
}

impl fmt::Debug for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Platform").finish_non_exhaustive()
    }
}

/// Assembles a [`Platform`] from custom backends.
#[derive(Default)]
pub struct PlatformBuilder {
    config: PlatformConfig,
    allocator: Option<Box<dyn Allocator>>,
    entropy: Option<Box<dyn EntropySource>>,
    seed: Option<Box<dyn SeedStore>>,
}

impl PlatformBuilder {
    /// Uses `config` for any backend not set explicitly.
    pub fn config(mut self, config: PlatformConfig) -> Self {
        self.config = config;
        self
    }

    /// Replaces the allocator.
    pub fn allocator(mut self, allocator: impl Allocator + 'static) -> Self {
        self.allocator = Some(Box::new(allocator));
        self
    }

    /// Replaces the entropy source.
    pub fn entropy(mut self, entropy: impl EntropySource + 'static) -> Self {
        self.entropy = Some(Box::new(entropy));
        self
    }

    /// Replaces the NV seed store.
    pub fn seed_store(mut self, seed: impl SeedStore + 'static) -> Self {
        self.seed = Some(Box::new(seed));
        self
    }

    /// Builds the platform.
    pub fn build(self) -> Platform {
        let Self {
            config,
            allocator,
            entropy,
            seed,
        } = self;

        Platform {
            allocator: allocator.unwrap_or_else(|| Box::new(SystemAllocator)),
            entropy: entropy.unwrap_or_else(|| entropy_source_for(config.entropy)),
            seed: seed.unwrap_or_else(|| seed_store_for(&config.nv_seed)),
        }
    }
}
