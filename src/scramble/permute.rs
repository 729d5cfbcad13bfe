// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab

//! Seeded record-order permutation.
//!
//! Builds a Fisher-Yates permutation from a [`Mulberry32`] stream and
//! applies it forward (scramble) or inverted (restore). Both sides derive
//! the identical permutation from the key seed alone, so no ordering data
//! ever travels with the scrambled image.

use crate::scramble::error::ScrambleError;
use crate::scramble::mulberry::Mulberry32;

/// A bijective reordering of the index set `{0 .. len-1}`.
///
/// `slots[k]` holds the source index that lands in destination `k` under
/// the forward mapping. Built once per call, never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Permutation {
    slots: Vec<usize>,
}

impl Permutation {
    /// Build the permutation for `len` records from a seed.
    ///
    /// Fisher-Yates from the last index down to 1: each step draws one
    /// value and swaps slot `i` with slot `floor(draw * (i + 1))`. The
    /// number and order of draws is fixed by `len`, so a given
    /// `(len, seed)` always yields the same permutation.
    pub fn from_seed(len: usize, seed: u32) -> Self {
        let mut rng = Mulberry32::new(seed);
        let mut slots: Vec<usize> = (0..len).collect();
        for i in (1..len).rev() {
            // f64 represents every index below 2^53 exactly, so the
            // product and the floor come out identical on every target.
            let j = (rng.next_f64() * (i as f64 + 1.0)) as usize;
            slots.swap(i, j);
        }
        Permutation { slots }
    }

    /// Number of records this permutation reorders.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether the permutation is over the empty index set.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Source slot for each destination index, in destination order.
    pub fn slots(&self) -> &[usize] {
        &self.slots
    }

    /// Forward mapping: `out[k] = records[slots[k]]`.
    ///
    /// # Errors
    /// [`ScrambleError::LengthMismatch`] unless `records.len()` equals
    /// [`len`](Self::len). A mismatch is rejected outright since a silent
    /// truncation would corrupt every record behind it.
    pub fn apply<T: Clone>(&self, records: &[T]) -> Result<Vec<T>, ScrambleError> {
        self.check_len(records.len())?;
        Ok(self.slots.iter().map(|&src| records[src].clone()).collect())
    }

    /// Inverse mapping: `out[slots[k]] = records[k]`.
    ///
    /// Restores the order that [`apply`](Self::apply) scrambled:
    /// `invert(apply(x)) == x` for every `x` of matching length.
    ///
    /// # Errors
    /// [`ScrambleError::LengthMismatch`] unless `records.len()` equals
    /// [`len`](Self::len).
    pub fn invert<T: Clone>(&self, records: &[T]) -> Result<Vec<T>, ScrambleError> {
        self.check_len(records.len())?;
        // Seed the output with clones, then overwrite every slot; the
        // bijection guarantees full coverage.
        let mut out = records.to_vec();
        for (k, record) in records.iter().enumerate() {
            out[self.slots[k]] = record.clone();
        }
        Ok(out)
    }

    fn check_len(&self, actual: usize) -> Result<(), ScrambleError> {
        if actual != self.slots.len() {
            return Err(ScrambleError::LengthMismatch {
                expected: self.slots.len(),
                actual,
            });
        }
        Ok(())
    }
}
