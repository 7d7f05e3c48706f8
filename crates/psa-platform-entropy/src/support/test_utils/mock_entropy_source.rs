// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::cell::Cell;

use psa_platform_zero::zeroize;

use crate::error::EntropyError;
use crate::traits::EntropySource;
use crate::zero::ZeroEntropySource;

/// Configurable behavior for [`MockEntropySource`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MockEntropySourceBehaviour {
    /// Normal operation (delegates to [`ZeroEntropySource`]).
    None,
    /// Always fail collect.
    FailAlways,
    /// Fail collect on the Nth call (1-indexed: 1 = first call fails).
    FailAtNthCollect(usize),
    /// Succeed but report fewer bytes than requested.
    ShortCollect(usize),
}

/// Mock entropy source for testing.
///
/// Wraps [`ZeroEntropySource`] but allows simulating failures via
/// [`MockEntropySourceBehaviour`].
pub struct MockEntropySource {
    inner: ZeroEntropySource,
    behaviour: MockEntropySourceBehaviour,
    collect_count: Cell<usize>,
}

impl MockEntropySource {
    /// Creates a new mock entropy source with the specified behavior.
    pub fn new(behaviour: MockEntropySourceBehaviour) -> Self {
        Self {
            inner: ZeroEntropySource,
            behaviour,
            collect_count: Cell::new(0),
        }
    }

    /// Changes the mock behavior at runtime.
    pub fn change_behaviour(&mut self, behaviour: MockEntropySourceBehaviour) {
        self.behaviour = behaviour;
    }

    /// Resets the call counter.
    pub fn reset_count(&self) {
        self.collect_count.set(0);
    }

    /// Returns the current call count.
    pub fn call_count(&self) -> usize {
        self.collect_count.get()
    }
}

impl EntropySource for MockEntropySource {
    fn collect(&self, output: &mut [u8]) -> Result<usize, EntropyError> {
        let current = self.collect_count.get();
        self.collect_count.set(current + 1);

        match self.behaviour {
            MockEntropySourceBehaviour::None => self.inner.collect(output),
            MockEntropySourceBehaviour::FailAlways => {
                zeroize(output);
                Err(EntropyError::EntropyNotAvailable)
            }
            MockEntropySourceBehaviour::FailAtNthCollect(n) if current + 1 == n => {
                zeroize(output);
                Err(EntropyError::EntropyNotAvailable)
            }
            MockEntropySourceBehaviour::FailAtNthCollect(_) => self.inner.collect(output),
            MockEntropySourceBehaviour::ShortCollect(n) => {
                let produced = self.inner.collect(output)?;
                Ok(produced.min(n))
            }
        }
    }
}
