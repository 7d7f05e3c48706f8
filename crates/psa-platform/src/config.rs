// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Backend selection.
//!
//! Defaults match the test configuration: zero entropy, and the seed file
//! when the `fs-io` feature is enabled (in-memory seed otherwise).
//!
//! Environment overrides:
//!
//! - `PSA_PLATFORM_ENTROPY`: `zero` | `system`
//! - `PSA_PLATFORM_NV_SEED`: `memory` | any other value is a seed file path

use std::path::PathBuf;
use std::str::FromStr;

use thiserror::Error;

use psa_platform_seed::DEFAULT_SEED_FILE;

/// Environment variable selecting the entropy backend.
pub const ENTROPY_VAR: &str = "PSA_PLATFORM_ENTROPY";

/// Environment variable selecting the NV seed backend.
pub const NV_SEED_VAR: &str = "PSA_PLATFORM_NV_SEED";

/// Errors produced while building a [`PlatformConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Unknown entropy backend name.
    #[error("unknown entropy backend: {0:?} (expected \"zero\" or \"system\")")]
    UnknownEntropyBackend(String),

    /// NV seed variable was set but empty.
    #[error("empty NV seed path")]
    EmptySeedPath,
}

/// Entropy poll backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntropyBackend {
    /// Deterministic all-zero output.
    #[default]
    Zero,
    /// OS CSPRNG.
    System,
}

impl FromStr for EntropyBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zero" => Ok(Self::Zero),
            "system" => Ok(Self::System),
            _ => Err(ConfigError::UnknownEntropyBackend(s.to_owned())),
        }
    }
}

/// NV seed backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NvSeedBackend {
    /// Seed file at the given path.
    File(PathBuf),
    /// Filesystem-less, process-wide in-memory seed.
    Memory,
}

impl Default for NvSeedBackend {
    fn default() -> Self {
        if cfg!(feature = "fs-io") {
            Self::File(PathBuf::from(DEFAULT_SEED_FILE))
        } else {
            Self::Memory
        }
    }
}

impl FromStr for NvSeedBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.is_empty() {
            return Err(ConfigError::EmptySeedPath);
        }

        if s.eq_ignore_ascii_case("memory") {
            return Ok(Self::Memory);
        }

        Ok(Self::File(PathBuf::from(s)))
    }
}

/// Backend selection for a [`Platform`](crate::Platform).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlatformConfig {
    /// Entropy poll backend.
    pub entropy: EntropyBackend,
    /// NV seed backend.
    pub nv_seed: NvSeedBackend,
}

impl PlatformConfig {
    /// Reads overrides from the process environment.
    ///
    /// # Errors
    ///
    /// See [`PlatformConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from defaults plus whatever `lookup` returns for
    /// [`ENTROPY_VAR`] and [`NV_SEED_VAR`].
    ///
    /// # Errors
    ///
    /// - [`ConfigError::UnknownEntropyBackend`] for an unrecognised entropy name.
    /// - [`ConfigError::EmptySeedPath`] if the NV seed value is blank.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENTROPY_VAR) {
            config.entropy = value.parse()?;
        }

        if let Some(value) = lookup(NV_SEED_VAR) {
            config.nv_seed = value.parse()?;
        }

        log::debug!(
            "Platform config: entropy={:?} nv_seed={:?}",
            config.entropy,
            config.nv_seed
        );

        Ok(config)
    }
}
