// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::collections::HashMap;
use std::path::PathBuf;

use crate::config::{
    ConfigError, ENTROPY_VAR, EntropyBackend, NV_SEED_VAR, NvSeedBackend, PlatformConfig,
};

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();

    move |key| map.get(key).cloned()
}

#[test]
fn test_defaults() {
    let config = PlatformConfig::default();

    assert_eq!(config.entropy, EntropyBackend::Zero);

    #[cfg(feature = "fs-io")]
    assert_eq!(config.nv_seed, NvSeedBackend::File(PathBuf::from("seedfile")));

    #[cfg(not(feature = "fs-io"))]
    assert_eq!(config.nv_seed, NvSeedBackend::Memory);
}

#[test]
fn test_from_lookup_without_overrides_is_default() {
    let config = PlatformConfig::from_lookup(lookup_from(&[])).expect("Failed to from_lookup(..)");
    assert_eq!(config, PlatformConfig::default());
}

#[test]
fn test_from_lookup_overrides() {
    let config = PlatformConfig::from_lookup(lookup_from(&[
        (ENTROPY_VAR, "System"),
        (NV_SEED_VAR, "/var/lib/psa/seed"),
    ]))
    .expect("Failed to from_lookup(..)");

    assert_eq!(config.entropy, EntropyBackend::System);
    assert_eq!(
        config.nv_seed,
        NvSeedBackend::File(PathBuf::from("/var/lib/psa/seed"))
    );
}

#[test]
fn test_from_lookup_memory_seed() {
    let config = PlatformConfig::from_lookup(lookup_from(&[(NV_SEED_VAR, " memory ")]))
        .expect("Failed to from_lookup(..)");

    assert_eq!(config.nv_seed, NvSeedBackend::Memory);
}

#[test]
fn test_from_lookup_rejects_unknown_entropy() {
    let result = PlatformConfig::from_lookup(lookup_from(&[(ENTROPY_VAR, "rdrand")]));

    assert_eq!(
        result,
        Err(ConfigError::UnknownEntropyBackend("rdrand".to_owned()))
    );
}

#[test]
fn test_from_lookup_rejects_empty_seed_path() {
    let result = PlatformConfig::from_lookup(lookup_from(&[(NV_SEED_VAR, "  ")]));

    assert_eq!(result, Err(ConfigError::EmptySeedPath));
}
