// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # psa_platform_output
//!
//! Formatted output for the PSA crypto platform layer.
//!
//! - [`print`] / [`platform_printf!`]: format to stdout
//! - [`fprint`] / [`platform_fprintf!`]: format to any [`std::io::Write`]
//! - [`snprint`] / [`platform_snprintf!`]: format into a bounded byte buffer,
//!   NUL-terminated, returning the untruncated length
//! - [`PlatformStream`]: writer wrapper whose internal buffer can be resized
//!   or disabled with [`PlatformStream::setbuf`]
//!
//! All functions return the number of bytes the formatted text occupies, which
//! is exactly what [`core::fmt`] produces for the same template and arguments.
//!
//! ## Example
//!
//! ```rust
//! use psa_platform_output::{platform_fprintf, platform_snprintf};
//!
//! let mut out = Vec::new();
//! let n = platform_fprintf!(&mut out, "key_id={} len={}", 7, 32).expect("Failed to fprintf");
//! assert_eq!(out, b"key_id=7 len=32");
//! assert_eq!(n, 15);
//!
//! let mut buf = [0u8; 8];
//! let n = platform_snprintf!(&mut buf, "{}", "truncated").expect("Failed to snprintf");
//! assert_eq!(n, 9);
//! assert_eq!(&buf, b"truncat\0");
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod error;
mod format;
mod macros;
mod stream;

pub use error::OutputError;
pub use format::{fprint, print, snprint};
pub use stream::PlatformStream;
