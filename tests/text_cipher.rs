// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab

//! End-to-end tests for the Playfair text cipher.

use cipherlab_core::{encrypt_text, playfair};

#[test]
fn monarchy_instruments_classic_example() {
    let enc = encrypt_text("MONARCHY", "INSTRUMENTS");

    assert_eq!(enc.square.to_letter_string(), "MONARCHYBDEFGIKLPQSTUVWXZ");

    let digraphs: Vec<String> = enc.steps.iter().map(|s| s.input.to_string()).collect();
    assert_eq!(digraphs, ["IN", "ST", "RU", "ME", "NT", "SX"]);

    assert_eq!(enc.ciphertext, "GATLMZCLRQXA");

    let trace: Vec<String> = enc.steps.iter().map(|s| s.to_string()).collect();
    assert_eq!(
        trace,
        [
            "IN → Rectangle → GA",
            "ST → Same Row → TL",
            "RU → Rectangle → MZ",
            "ME → Same Col → CL",
            "NT → Rectangle → RQ",
            "SX → Same Col → XA",
        ]
    );
}

#[test]
fn playfair_example_key() {
    let enc = encrypt_text("playfair example", "Hide the gold!");
    assert_eq!(enc.square.to_letter_string(), "PLAYFIREXMBCDGHKNOQSTUVWZ");
    assert_eq!(enc.ciphertext, "BMODZBXDNAGE");
}

#[test]
fn key_and_plaintext_share_normalization() {
    // Case, 'J' and punctuation are folded away on both sides.
    let a = encrypt_text("Monarchy!", "instruments");
    let b = encrypt_text("MONARCHY", "INSTRUMENTS");
    assert_eq!(a.ciphertext, b.ciphertext);

    let c = encrypt_text("monarchy", "jar");
    let d = encrypt_text("MONARCHY", "IAR");
    assert_eq!(c.ciphertext, d.ciphertext);
}

#[test]
fn empty_inputs_yield_defined_empty_results() {
    let enc = encrypt_text("", "");
    assert_eq!(enc.square.to_letter_string(), "ABCDEFGHIKLMNOPQRSTUVWXYZ");
    assert!(enc.ciphertext.is_empty());
    assert!(enc.steps.is_empty());

    let enc = encrypt_text("key", "12 34 56");
    assert!(enc.ciphertext.is_empty());
}

#[test]
fn ciphertext_never_repeats_an_input_digraph_unchanged() {
    // Playfair always substitutes: no digraph maps to itself, since the
    // substituted letters come from different cells by construction.
    let enc = encrypt_text("MONARCHY", "the quick brown fox leaps");
    for step in &enc.steps {
        assert_ne!(step.input, step.output, "{step} left its input unchanged");
    }
}

#[test]
fn trace_covers_every_ciphertext_digraph() {
    let enc = encrypt_text("secret", "attack at dawn");
    assert_eq!(enc.ciphertext.len(), 2 * enc.steps.len());
    let rebuilt: String = enc.steps.iter().map(|s| s.output.to_string()).collect();
    assert_eq!(rebuilt, enc.ciphertext);
}

#[test]
fn module_level_pieces_compose_like_encrypt_text() {
    let square = playfair::KeySquare::from_key("MONARCHY");
    let digraphs = playfair::pair_digraphs("INSTRUMENTS");
    let (ciphertext, _) = playfair::encrypt(&square, &digraphs);
    assert_eq!(ciphertext, encrypt_text("MONARCHY", "INSTRUMENTS").ciphertext);
}
