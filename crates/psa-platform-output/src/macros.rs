// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// `printf`: formats to stdout, evaluates to `Result<usize, OutputError>`.
#[macro_export]
macro_rules! platform_printf {
    ($($arg:tt)*) => {
        $crate::print(::core::format_args!($($arg)*))
    };
}

/// `fprintf`: formats to a `&mut impl Write`, evaluates to
/// `Result<usize, OutputError>`.
#[macro_export]
macro_rules! platform_fprintf {
    ($stream:expr, $($arg:tt)*) => {
        $crate::fprint($stream, ::core::format_args!($($arg)*))
    };
}

/// `snprintf`: formats into a `&mut [u8]`, evaluates to
/// `Result<usize, OutputError>` holding the untruncated length.
#[macro_export]
macro_rules! platform_snprintf {
    ($buf:expr, $($arg:tt)*) => {
        $crate::snprint($buf, ::core::format_args!($($arg)*))
    };
}
