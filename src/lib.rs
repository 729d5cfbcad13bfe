// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab

//! # cipherlab-core
//!
//! Pure-Rust engine behind the cipherlab teaching tool. Two classic,
//! fully deterministic transformations:
//!
//! - **Playfair** (`playfair` module): digraph substitution over a 5×5
//!   key-derived letter square, returning the square, the ciphertext and
//!   a per-digraph trace for step-by-step display.
//! - **Pixel scramble** (`scramble` module): reversible Fisher-Yates
//!   permutation of whole RGBA pixels, keyed by a string. The same key
//!   rebuilds the same permutation, so restoration needs no side channel.
//!
//! All processing is in-memory and synchronous. Image decoding, canvas
//! rendering and input collection are front-end responsibilities; this
//! crate only ever sees letter sequences and pixel buffers.
//!
//! Neither transformation offers cryptographic security. Both are
//! educational obfuscation ciphers whose point is that every step can be
//! shown to the user.
//!
//! # Quick start
//!
//! ```
//! use cipherlab_core::{encrypt_text, scramble_pixels, unscramble_pixels, Pixel};
//!
//! let enc = encrypt_text("MONARCHY", "INSTRUMENTS");
//! assert_eq!(enc.ciphertext, "GATLMZCLRQXA");
//!
//! let pixels: Vec<Pixel> = (0..6).map(|i| Pixel::new(i, i, i, 255)).collect();
//! let scrambled = scramble_pixels(&pixels, 3, 2, "my key").unwrap();
//! let restored = unscramble_pixels(&scrambled, 3, 2, "my key").unwrap();
//! assert_eq!(restored, pixels);
//! ```

pub mod playfair;
pub mod scramble;

pub use playfair::{encrypt_text, Digraph, DigraphStep, KeySquare, PairRule, TextEncryption};
pub use scramble::error::ScrambleError;
pub use scramble::mulberry::Mulberry32;
pub use scramble::permute::Permutation;
pub use scramble::pixels::{pixels_from_rgba, rgba_from_pixels, Pixel};
pub use scramble::seed::key_to_seed;
pub use scramble::{
    scramble_pixels, scramble_rgba, unscramble_pixels, unscramble_rgba, verify_restored,
};
