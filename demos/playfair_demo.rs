// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab

//! Example: encrypt a line of text and print the square and the trace.
use cipherlab_core::encrypt_text;

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() < 3 {
        eprintln!("Usage: playfair_demo <key> <plaintext>");
        std::process::exit(1);
    }

    let enc = encrypt_text(&args[1], &args[2]);

    println!("Key square:");
    println!("{}", enc.square);
    println!();
    for step in &enc.steps {
        println!("  {step}");
    }
    println!();
    println!("Ciphertext: {}", enc.ciphertext);
}
