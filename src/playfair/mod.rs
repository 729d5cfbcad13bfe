// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab

//! Playfair digraph substitution cipher.
//!
//! The classic manual cipher: a key string derives a 5×5 letter square
//! (I and J share a cell), the plaintext is split into two-letter digraphs
//! with 'X' fillers, and each digraph is substituted by square geometry.
//! Alongside the ciphertext, every request produces the derived square and
//! a per-digraph trace so a front-end can walk the user through each step.
//!
//! Encrypt-only: the rectangle rule happens to be its own inverse, but the
//! row and column rules shift in one direction and no reverse path exists.

pub mod digraph;
pub mod matrix;
pub mod transform;

pub use digraph::{normalize, pair_digraphs, Digraph, FILLER};
pub use matrix::KeySquare;
pub use transform::{encrypt, encrypt_digraph, DigraphStep, PairRule};

/// Everything one text encryption request produces: the derived square,
/// the ciphertext and the per-digraph trace.
#[derive(Debug, Clone)]
pub struct TextEncryption {
    /// The key square derived for this request.
    pub square: KeySquare,
    /// Substituted digraphs concatenated into one string.
    pub ciphertext: String,
    /// One entry per digraph, in order.
    pub steps: Vec<DigraphStep>,
}

/// Encrypt plaintext with a Playfair square derived from `key`.
///
/// Total over all inputs: an empty key still yields a full square (the
/// plain alphabet), and an empty or letter-free plaintext yields an empty
/// ciphertext and trace.
///
/// ```
/// let enc = cipherlab_core::encrypt_text("MONARCHY", "INSTRUMENTS");
/// assert_eq!(enc.ciphertext, "GATLMZCLRQXA");
/// assert_eq!(enc.steps[0].to_string(), "IN → Rectangle → GA");
/// ```
pub fn encrypt_text(key: &str, plaintext: &str) -> TextEncryption {
    let square = KeySquare::from_key(key);
    let digraphs = pair_digraphs(plaintext);
    let (ciphertext, steps) = encrypt(&square, &digraphs);
    TextEncryption {
        square,
        ciphertext,
        steps,
    }
}
