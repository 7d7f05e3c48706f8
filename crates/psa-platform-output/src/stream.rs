// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PlatformStream - writer with a controllable, self-wiping buffer.
//!
//! The buffer is zeroized every time it is drained and when it is released,
//! so nothing written through the stream lingers in memory after a flush.
//! Pending bytes are written out on drop. Reads are never buffered.

use std::io::{self, Read, Write};

use psa_platform_zero::{zeroize, zeroize_vec};

use crate::error::OutputError;

/// Stream wrapper with `setbuf`-style buffering control.
pub struct PlatformStream<W: Write> {
    inner: W,
    buffer: Option<Vec<u8>>,
    capacity: usize,
}

impl<W: Write> PlatformStream<W> {
    /// Wraps `inner` with no buffering.
    pub fn unbuffered(inner: W) -> Self {
        Self {
            inner,
            buffer: None,
            capacity: 0,
        }
    }

    /// Returns the buffer capacity, or `None` when unbuffered.
    pub fn buffer_capacity(&self) -> Option<usize> {
        self.buffer.as_ref().map(|_| self.capacity)
    }

    /// Returns a reference to the wrapped stream.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Returns a mutable reference to the wrapped stream.
    ///
    /// Writing to it directly bypasses any pending buffered bytes.
    pub fn get_mut(&mut self) -> &mut W {
        &mut self.inner
    }

    /// Wraps `inner` with an internal buffer of `capacity` bytes.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Io`] with [`io::ErrorKind::OutOfMemory`] if the
    /// buffer cannot be reserved.
    pub fn buffered(inner: W, capacity: usize) -> Result<Self, OutputError> {
        let mut stream = Self::unbuffered(inner);
        stream.buffer = Some(reserve_buffer(capacity)?);
        stream.capacity = capacity;
        Ok(stream)
    }

    /// Configures the stream buffer.
    ///
    /// `None` disables buffering; `Some(capacity)` installs a fresh buffer.
    /// Pending bytes are written out first and the old buffer is zeroized
    /// before it is released.
    ///
    /// # Errors
    ///
    /// Returns [`OutputError::Io`] if the new buffer cannot be reserved or
    /// pending bytes cannot be written. The buffer configuration is left
    /// unchanged in that case; bytes the stream already accepted are not
    /// written again.
    pub fn setbuf(&mut self, capacity: Option<usize>) -> Result<(), OutputError> {
        let new_buffer = capacity.map(reserve_buffer).transpose()?;

        self.drain_buffer()?;

        if let Some(mut old) = self.buffer.take() {
            zeroize_vec(&mut old);
        }

        self.buffer = new_buffer;
        self.capacity = capacity.unwrap_or(0);

        Ok(())
    }

    fn drain_buffer(&mut self) -> io::Result<()> {
        let Some(buffer) = self.buffer.as_mut() else {
            return Ok(());
        };

        let mut written = 0;
        let mut result = Ok(());

        while written < buffer.len() {
            match self.inner.write(&buffer[written..]) {
                Ok(0) => {
                    result = Err(io::Error::from(io::ErrorKind::WriteZero));
                    break;
                }
                Ok(n) => written += n,
                Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
                Err(e) => {
                    result = Err(e);
                    break;
                }
            }
        }

        consume_prefix(buffer, written);

        result
    }
}

fn reserve_buffer(capacity: usize) -> Result<Vec<u8>, OutputError> {
    let mut buffer = Vec::new();
    buffer
        .try_reserve_exact(capacity)
        .map_err(|_| io::Error::from(io::ErrorKind::OutOfMemory))?;

    Ok(buffer)
}

/// Drops the first `n` bytes of `buffer`, wiping every slot they vacate.
fn consume_prefix(buffer: &mut Vec<u8>, n: usize) {
    if n == 0 {
        return;
    }

    let remaining = buffer.len() - n;
    buffer.copy_within(n.., 0);
    zeroize(&mut buffer[remaining..]);
    buffer.truncate(remaining);
}

impl<W: Write> Write for PlatformStream<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let pending = match self.buffer.as_ref() {
            None => return self.inner.write(buf),
            Some(buffer) => buffer.len(),
        };
        let capacity = self.capacity;

        if pending + buf.len() > capacity {
            self.drain_buffer()?;
        }

        if buf.len() >= capacity {
            return self.inner.write(buf);
        }

        if let Some(buffer) = self.buffer.as_mut() {
            buffer.extend_from_slice(buf);
        }

        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.drain_buffer()?;
        self.inner.flush()
    }
}

impl<W: Read + Write> Read for PlatformStream<W> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl<W: Write> core::fmt::Debug for PlatformStream<W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("PlatformStream")
            .field("buffer_capacity", &self.buffer_capacity())
            .finish_non_exhaustive()
    }
}

impl<W: Write> Drop for PlatformStream<W> {
    fn drop(&mut self) {
        if let Err(e) = self.drain_buffer() {
            log::warn!("PlatformStream dropped with unflushed bytes: {}", e);
        }

        if let Some(buffer) = self.buffer.as_mut() {
            zeroize_vec(buffer);
        }
    }
}
