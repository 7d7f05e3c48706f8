// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Seed file backend.
//!
//! The file is streamed through an unbuffered [`PlatformStream`] so no copy
//! of the seed is left in an intermediate buffer that cannot be wiped.

use std::fs::File;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use psa_platform_output::PlatformStream;
use psa_platform_zero::zeroize;

use crate::DEFAULT_SEED_FILE;
use crate::error::SeedError;
use crate::traits::SeedStore;

/// NV seed stored in a file on the local filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSeedStore {
    path: PathBuf,
}

impl FileSeedStore {
    /// Creates a store backed by the file at `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Returns the seed file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn open_error(&self, source: io::Error) -> SeedError {
        log::debug!("Cannot open seed file {}: {}", self.path.display(), source);

        SeedError::Open {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for FileSeedStore {
    fn default() -> Self {
        Self::new(DEFAULT_SEED_FILE)
    }
}

/// Reads until `buf` is full, EOF, or an error. Returns the bytes read.
pub(crate) fn read_full<R: Read>(reader: &mut R, buf: &mut [u8]) -> usize {
    let mut filled = 0;

    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                log::debug!("Seed read stopped after {} bytes: {:?}", filled, e.kind());
                break;
            }
        }
    }

    filled
}

/// Writes until `buf` is drained, the writer stalls, or an error. Returns the
/// bytes written.
pub(crate) fn write_full<W: Write>(writer: &mut W, buf: &[u8]) -> usize {
    let mut written = 0;

    while written < buf.len() {
        match writer.write(&buf[written..]) {
            Ok(0) => break,
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => {
                log::debug!("Seed write stopped after {} bytes: {:?}", written, e.kind());
                break;
            }
        }
    }

    written
}

impl SeedStore for FileSeedStore {
    fn read(&self, buf: &mut [u8]) -> Result<usize, SeedError> {
        let file = File::open(&self.path).map_err(|e| self.open_error(e))?;
        let mut stream = PlatformStream::unbuffered(file);

        let actual = read_full(&mut stream, buf);
        drop(stream);

        if actual != buf.len() {
            log::warn!(
                "Short read from seed file {}: expected {} bytes, got {}",
                self.path.display(),
                buf.len(),
                actual
            );
            zeroize(buf);

            return Err(SeedError::ShortRead {
                expected: buf.len(),
                actual,
            });
        }

        Ok(actual)
    }

    fn write(&self, buf: &[u8]) -> Result<usize, SeedError> {
        let file = File::create(&self.path).map_err(|e| self.open_error(e))?;
        let mut stream = PlatformStream::unbuffered(file);

        let actual = write_full(&mut stream, buf);
        drop(stream);

        if actual != buf.len() {
            log::warn!(
                "Short write to seed file {}: expected {} bytes, wrote {}",
                self.path.display(),
                buf.len(),
                actual
            );

            return Err(SeedError::ShortWrite {
                expected: buf.len(),
                actual,
            });
        }

        Ok(actual)
    }
}
