// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab

//! Scramble and restore pipelines.
//!
//! The forward pipeline hashes the key to a seed, builds the permutation
//! for the pixel count and applies it; the restore pipeline rebuilds the
//! identical permutation from the same key and applies its inverse.
//! Nothing flows between the two calls beyond the key string and the pixel
//! buffer itself, so scrambling and restoring can happen in different
//! processes, sessions or machines.

use crate::scramble::error::ScrambleError;
use crate::scramble::permute::Permutation;
use crate::scramble::pixels::{self, Pixel};
use crate::scramble::seed;

/// Precondition checks shared by scramble and restore.
///
/// The image buffer, its dimensions and the key arrive as explicit
/// parameters; there is no ambient canvas or module state to fall back on,
/// so a missing prerequisite is always visible right here.
fn validate(pixels: &[Pixel], width: u32, height: u32, key: &str) -> Result<(), ScrambleError> {
    if key.is_empty() {
        return Err(ScrambleError::MissingKey);
    }
    if pixels.is_empty() {
        return Err(ScrambleError::EmptyImage);
    }
    let expected = u64::from(width) * u64::from(height);
    if expected != pixels.len() as u64 {
        return Err(ScrambleError::DimensionMismatch {
            width,
            height,
            pixels: pixels.len(),
        });
    }
    Ok(())
}

/// Scramble pixel order with a key-derived permutation.
///
/// The output holds exactly the input pixels, whole and unmodified, in
/// pseudo-random order. Same length, same channel layout.
///
/// # Errors
/// - [`ScrambleError::MissingKey`] for an empty key.
/// - [`ScrambleError::EmptyImage`] for an empty pixel buffer.
/// - [`ScrambleError::DimensionMismatch`] when `width * height` disagrees
///   with the buffer length.
pub fn scramble_pixels(
    pixels: &[Pixel],
    width: u32,
    height: u32,
    key: &str,
) -> Result<Vec<Pixel>, ScrambleError> {
    validate(pixels, width, height, key)?;
    let perm = Permutation::from_seed(pixels.len(), seed::key_to_seed(key));
    perm.apply(pixels)
}

/// Restore pixel order previously scrambled with the same key.
///
/// Rebuilds the permutation from the key and applies the inverse mapping.
/// With the correct key this reproduces the original buffer exactly; with
/// a wrong key it merely reshuffles. Use [`verify_restored`] against a
/// captured original when that distinction matters to the caller.
///
/// # Errors
/// Same preconditions as [`scramble_pixels`].
pub fn unscramble_pixels(
    pixels: &[Pixel],
    width: u32,
    height: u32,
    key: &str,
) -> Result<Vec<Pixel>, ScrambleError> {
    validate(pixels, width, height, key)?;
    let perm = Permutation::from_seed(pixels.len(), seed::key_to_seed(key));
    perm.invert(pixels)
}

/// Byte-buffer variant of [`scramble_pixels`] for callers holding flat
/// RGBA data.
///
/// # Errors
/// [`ScrambleError::TruncatedBuffer`] if `data.len()` is not a multiple of
/// 4, plus the [`scramble_pixels`] preconditions.
pub fn scramble_rgba(
    data: &[u8],
    width: u32,
    height: u32,
    key: &str,
) -> Result<Vec<u8>, ScrambleError> {
    let records = pixels::pixels_from_rgba(data)?;
    let scrambled = scramble_pixels(&records, width, height, key)?;
    Ok(pixels::rgba_from_pixels(&scrambled))
}

/// Byte-buffer variant of [`unscramble_pixels`].
///
/// # Errors
/// Same as [`scramble_rgba`].
pub fn unscramble_rgba(
    data: &[u8],
    width: u32,
    height: u32,
    key: &str,
) -> Result<Vec<u8>, ScrambleError> {
    let records = pixels::pixels_from_rgba(data)?;
    let restored = unscramble_pixels(&records, width, height, key)?;
    Ok(pixels::rgba_from_pixels(&restored))
}

/// Compare a restored buffer against a captured original.
///
/// Purely informational, for operator feedback: `false` means the key was
/// wrong or the data was altered, but the restored pixels have already been
/// returned to the caller either way.
pub fn verify_restored(restored: &[Pixel], original: &[Pixel]) -> bool {
    restored == original
}
