// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab

//! Example: scramble a synthetic gradient image, restore it and verify.
use cipherlab_core::{scramble_pixels, unscramble_pixels, verify_restored, Pixel};

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        eprintln!("Usage: scramble_demo <key> [width] [height]");
        std::process::exit(1);
    }
    let key = &args[1];
    let width: u32 = args.get(2).and_then(|s| s.parse().ok()).unwrap_or(64);
    let height: u32 = args.get(3).and_then(|s| s.parse().ok()).unwrap_or(64);

    let original: Vec<Pixel> = (0..width * height)
        .map(|i| {
            let x = (i % width) as u8;
            let y = (i / width) as u8;
            Pixel::new(x.wrapping_mul(4), y.wrapping_mul(4), 128, 255)
        })
        .collect();

    let scrambled = match scramble_pixels(&original, width, height, key) {
        Ok(p) => p,
        Err(e) => {
            eprintln!("Scramble failed: {e}");
            std::process::exit(1);
        }
    };
    let moved = scrambled
        .iter()
        .zip(&original)
        .filter(|(a, b)| a != b)
        .count();
    println!(
        "Scrambled {}x{} ({} pixels, {moved} moved)",
        width,
        height,
        original.len()
    );

    let restored = unscramble_pixels(&scrambled, width, height, key).expect("restore failed");
    if verify_restored(&restored, &original) {
        println!("Restored image matches the original.");
    } else {
        println!("Restored image does NOT match the original.");
    }
}
