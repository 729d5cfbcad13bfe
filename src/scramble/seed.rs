// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab

//! Key-to-seed hashing.
//!
//! Collapses an arbitrary key string into a 32-bit seed with the classic
//! shift-and-subtract rolling hash (`h * 31 + unit` evaluated as
//! `(h << 5) - h + unit`). The scrambling and restoring sides each hash the
//! key independently and must land on the same seed, so the arithmetic is
//! pinned down to the bit.

/// Collapse a key string into a permutation seed.
///
/// For each UTF-16 code unit of the key, `h = (h << 5) - h + unit` under
/// wrapping 32-bit signed arithmetic; the result is the absolute value of
/// the final accumulator. Hashing code units rather than scalar values
/// keeps the seed identical to what a JavaScript front-end computes from
/// the same key string.
///
/// The wraparound is load-bearing: the same fold evaluated with wider
/// integers yields different seeds and breaks round-trip restoration.
/// An empty key hashes to 0; the pipeline rejects empty keys before the
/// seed is ever used.
pub fn key_to_seed(key: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in key.encode_utf16() {
        hash = hash
            .wrapping_shl(5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit));
    }
    hash.unsigned_abs()
}
