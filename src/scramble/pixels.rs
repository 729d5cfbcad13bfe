// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab

//! RGBA pixel records.
//!
//! A pixel is four 8-bit channels treated as one atomic unit: permutation
//! moves whole pixels, never individual channels. Conversions to and from
//! flat byte buffers (the layout a canvas `ImageData` hands over) preserve
//! channel order exactly.

use crate::scramble::error::ScrambleError;

/// Number of channels (bytes) per pixel record.
pub const CHANNELS: usize = 4;

/// One RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pixel {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel.
    pub a: u8,
}

impl Pixel {
    /// Build a pixel from its four channel values.
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Pixel { r, g, b, a }
    }
}

/// Group a flat RGBA byte buffer into pixel records.
///
/// # Errors
/// [`ScrambleError::TruncatedBuffer`] if the length is not a multiple of 4.
pub fn pixels_from_rgba(data: &[u8]) -> Result<Vec<Pixel>, ScrambleError> {
    if data.len() % CHANNELS != 0 {
        return Err(ScrambleError::TruncatedBuffer { len: data.len() });
    }
    Ok(data
        .chunks_exact(CHANNELS)
        .map(|c| Pixel::new(c[0], c[1], c[2], c[3]))
        .collect())
}

/// Flatten pixel records back into an RGBA byte buffer.
pub fn rgba_from_pixels(pixels: &[Pixel]) -> Vec<u8> {
    let mut data = Vec::with_capacity(pixels.len() * CHANNELS);
    for p in pixels {
        data.extend_from_slice(&[p.r, p.g, p.b, p.a]);
    }
    data
}
