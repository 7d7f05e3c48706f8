// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! # psa_platform_zero
//!
//! Zeroization primitives for the PSA crypto platform layer.
//!
//! Every write goes through `write_bytes` followed by a volatile read so the
//! optimizer cannot drop it, even when the buffer is never read again.
//!
//! ## Example
//!
//! ```rust
//! use psa_platform_zero::{is_zeroized, zeroize, zeroize_prefix};
//!
//! let mut secret = [0xAAu8; 16];
//! zeroize(&mut secret);
//! assert!(is_zeroized(&secret));
//!
//! let mut partial = [0xBBu8; 8];
//! zeroize_prefix(Some(&mut partial), 4).expect("Failed to zeroize_prefix(..)");
//! assert!(is_zeroized(&partial[..4]));
//! assert_eq!(partial[4..], [0xBB; 4]);
//!
//! // Absent buffer is a no-op.
//! zeroize_prefix(None, 32).expect("Failed to zeroize_prefix(..)");
//! ```

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]
#![warn(unsafe_op_in_unsafe_fn)]

extern crate alloc;

use alloc::vec::Vec;

#[cfg(test)]
mod tests;

mod error;

pub use error::ZeroizeError;

/// Overwrites every byte of `buf` with zero.
///
/// An empty slice is a no-op.
#[inline(always)]
pub fn zeroize(buf: &mut [u8]) {
    if buf.is_empty() {
        return;
    }

    unsafe {
        core::ptr::write_bytes(buf.as_mut_ptr(), 0, buf.len());
        // Volatile read prevents the optimizer from removing the write_bytes
        core::ptr::read_volatile(buf.as_ptr());
    }
}

/// Overwrites the first `len` bytes of `buf` with zero.
///
/// `None` or `len == 0` is a no-op. Bytes past `len` are left untouched.
///
/// # Errors
///
/// Returns [`ZeroizeError::OutOfBounds`] if `len > buf.len()`. Nothing is
/// written in that case.
pub fn zeroize_prefix(buf: Option<&mut [u8]>, len: usize) -> Result<(), ZeroizeError> {
    let Some(buf) = buf else {
        return Ok(());
    };

    if len == 0 {
        return Ok(());
    }

    let buf_len = buf.len();
    let prefix = buf
        .get_mut(..len)
        .ok_or(ZeroizeError::OutOfBounds { len, buf_len })?;

    zeroize(prefix);

    Ok(())
}

/// Zeroizes the whole allocation of `vec`, spare capacity included.
///
/// The length is left unchanged.
#[inline(always)]
pub fn zeroize_vec(vec: &mut Vec<u8>) {
    let cap = vec.capacity();
    if cap == 0 {
        return;
    }

    unsafe {
        core::ptr::write_bytes(vec.as_mut_ptr(), 0, cap);
        core::ptr::read_volatile(vec.as_ptr());
    }
}

/// Returns `true` if every byte of `buf` is zero.
#[inline(always)]
pub fn is_zeroized(buf: &[u8]) -> bool {
    buf.iter().all(|&b| b == 0)
}

/// Returns `true` if the whole allocation of `vec` is zero, spare capacity
/// included.
#[inline(never)]
pub fn is_vec_fully_zeroized(vec: &Vec<u8>) -> bool {
    let cap = vec.capacity();
    let base = vec.as_ptr();

    for i in 0..cap {
        // Spare capacity is only ever written by `zeroize_vec` or by `Vec`
        // itself, so reading it as bytes is fine for a probe.
        unsafe {
            if core::ptr::read_volatile(base.add(i)) != 0 {
                return false;
            }
        }
    }

    true
}
