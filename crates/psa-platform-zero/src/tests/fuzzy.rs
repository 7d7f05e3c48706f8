// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use proptest::prelude::*;

use crate::{is_zeroized, zeroize_prefix};

proptest! {
    #[test]
    fn zeroize_prefix_clears_exactly_len_bytes(
        data in proptest::collection::vec(any::<u8>(), 0..256),
        cut in any::<proptest::sample::Index>(),
    ) {
        let len = cut.index(data.len() + 1);
        let mut buf = data.clone();

        zeroize_prefix(Some(&mut buf), len).expect("Failed to zeroize_prefix(..)");

        prop_assert!(is_zeroized(&buf[..len]));
        prop_assert_eq!(&buf[len..], &data[len..]);
    }
}
