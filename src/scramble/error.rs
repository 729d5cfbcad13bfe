// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab

//! Error types for the pixel scrambling pipeline.
//!
//! [`ScrambleError`] covers precondition failures and length mismatches.
//! All of them are recoverable by the caller (fix the input and retry);
//! none leave any state behind.

use core::fmt;

/// Errors that can occur while scrambling or restoring pixel data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrambleError {
    /// Scramble or restore was requested with an empty key.
    MissingKey,
    /// Scramble or restore was requested without any pixel data.
    EmptyImage,
    /// `width * height` does not match the number of pixel records.
    DimensionMismatch {
        /// Declared image width in pixels.
        width: u32,
        /// Declared image height in pixels.
        height: u32,
        /// Number of pixel records actually supplied.
        pixels: usize,
    },
    /// A permutation was applied to a sequence of the wrong length.
    ///
    /// Rejected outright: silently truncating or padding would misalign
    /// every record behind the mismatch.
    LengthMismatch {
        /// Length the permutation was built for.
        expected: usize,
        /// Length of the sequence that was passed in.
        actual: usize,
    },
    /// A raw RGBA buffer does not divide evenly into 4-byte pixels.
    TruncatedBuffer {
        /// Offending buffer length in bytes.
        len: usize,
    },
}

impl fmt::Display for ScrambleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingKey => write!(f, "a non-empty key is required"),
            Self::EmptyImage => write!(f, "no pixel data to process"),
            Self::DimensionMismatch {
                width,
                height,
                pixels,
            } => write!(
                f,
                "dimensions {width}x{height} do not match {pixels} pixel records"
            ),
            Self::LengthMismatch { expected, actual } => write!(
                f,
                "sequence length {actual} does not match permutation length {expected}"
            ),
            Self::TruncatedBuffer { len } => {
                write!(f, "RGBA buffer length {len} is not a multiple of 4")
            }
        }
    }
}

impl std::error::Error for ScrambleError {}
