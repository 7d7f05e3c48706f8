// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use core::fmt;
use std::io::{self, Write};

use crate::error::OutputError;

/// Forwards to an inner writer and counts accepted bytes.
struct CountingWriter<'a, W: Write + ?Sized> {
    inner: &'a mut W,
    written: usize,
}

impl<W: Write + ?Sized> Write for CountingWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let n = self.inner.write(buf)?;
        self.written += n;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// Writes into a fixed slice, keeping one byte for the NUL terminator.
struct TruncatingWriter<'a> {
    buf: &'a mut [u8],
    pos: usize,
    total: usize,
}

impl TruncatingWriter<'_> {
    fn terminate(&mut self) {
        if let Some(slot) = self.buf.get_mut(self.pos) {
            *slot = 0;
        }
    }
}

impl fmt::Write for TruncatingWriter<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let bytes = s.as_bytes();
        let room = self.buf.len().saturating_sub(1).saturating_sub(self.pos);
        let take = room.min(bytes.len());

        self.buf[self.pos..self.pos + take].copy_from_slice(&bytes[..take]);
        self.pos += take;
        self.total = self.total.saturating_add(bytes.len());

        Ok(())
    }
}

/// Formats `args` to stdout. Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`OutputError::Io`] if stdout rejects the write.
pub fn print(args: fmt::Arguments<'_>) -> Result<usize, OutputError> {
    let stdout = io::stdout();
    let mut lock = stdout.lock();

    fprint(&mut lock, args)
}

/// Formats `args` to `stream`. Returns the number of bytes written.
///
/// # Errors
///
/// Returns [`OutputError::Io`] if the stream rejects the write.
pub fn fprint<W: Write + ?Sized>(
    stream: &mut W,
    args: fmt::Arguments<'_>,
) -> Result<usize, OutputError> {
    let mut counting = CountingWriter {
        inner: stream,
        written: 0,
    };

    counting.write_fmt(args)?;

    Ok(counting.written)
}

/// Formats `args` into `buf` with `snprintf` semantics.
///
/// At most `buf.len() - 1` bytes of output are stored, followed by a NUL
/// byte. An empty `buf` is left untouched. The return value is the length
/// the complete output would have had, so `ret >= buf.len()` signals
/// truncation. Truncation happens at a byte boundary.
///
/// # Errors
///
/// Returns [`OutputError::Format`] if a formatting implementation fails.
pub fn snprint(buf: &mut [u8], args: fmt::Arguments<'_>) -> Result<usize, OutputError> {
    let mut writer = TruncatingWriter {
        buf,
        pos: 0,
        total: 0,
    };

    fmt::write(&mut writer, args).map_err(|_| OutputError::Format)?;
    writer.terminate();

    Ok(writer.total)
}
