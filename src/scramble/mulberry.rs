// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab

//! mulberry32 pseudo-random number generator.
//!
//! A tiny PRNG with a single `u32` of state, used to drive the pixel
//! permutation. Scrambling and restoring each build their own generator
//! from the key seed and must draw bit-identical sequences, so the mixing
//! steps below are a strict numeric contract: wrapping 32-bit adds and
//! multiplies, logical right shifts, and a final division by 2^32.
//! Swapping in a different generator, or evaluating any step with wider
//! integers, silently changes every permutation.

/// Per-draw state increment (a fixed odd constant).
const INCREMENT: u32 = 0x6D2B_79F5;

/// mulberry32 generator state.
///
/// Construction is free of allocation; every scramble or restore call owns
/// a private instance, so state is never shared between invocations.
#[derive(Debug, Clone)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator from a seed.
    pub fn new(seed: u32) -> Self {
        Mulberry32 { state: seed }
    }

    /// Draw the next value, uniform in `[0, 1)`.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(INCREMENT);
        let s = self.state;
        let mut t = (s ^ (s >> 15)).wrapping_mul(1 | s);
        t = t.wrapping_add((t ^ (t >> 7)).wrapping_mul(61 | t)) ^ t;
        f64::from(t ^ (t >> 14)) / 4_294_967_296.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn output_stays_in_unit_interval() {
        let mut rng = Mulberry32::new(42);
        for _ in 0..10_000 {
            let v = rng.next_f64();
            assert!((0.0..1.0).contains(&v), "draw out of range: {v}");
        }
    }

    #[test]
    fn same_seed_same_sequence() {
        let mut a = Mulberry32::new(7);
        let mut b = Mulberry32::new(7);
        for _ in 0..1000 {
            assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = Mulberry32::new(1);
        let mut b = Mulberry32::new(2);
        assert_ne!(a.next_f64(), b.next_f64());
    }

    #[test]
    fn pinned_first_draws_seed_0() {
        // Golden values for the exact mixing sequence. If this test fails,
        // the arithmetic changed and previously scrambled images are lost.
        let mut rng = Mulberry32::new(0);
        let draws: Vec<f64> = (0..5).map(|_| rng.next_f64()).collect();
        assert_eq!(
            draws,
            [
                0.26642920868471265,
                0.0003297457005828619,
                0.2232720274478197,
                0.1462021479383111,
                0.46732782293111086,
            ]
        );
    }

    #[test]
    fn pinned_first_draws_seed_12345() {
        let mut rng = Mulberry32::new(12345);
        let draws: Vec<f64> = (0..5).map(|_| rng.next_f64()).collect();
        assert_eq!(
            draws,
            [
                0.9797282677609473,
                0.3067522644996643,
                0.484205421525985,
                0.817934412509203,
                0.5094283693470061,
            ]
        );
    }

    #[test]
    fn clone_forks_the_stream() {
        let mut a = Mulberry32::new(99);
        a.next_f64();
        let mut b = a.clone();
        assert_eq!(a.next_f64().to_bits(), b.next_f64().to_bits());
    }
}
