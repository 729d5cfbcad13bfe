// Copyright (c) 2026 Christoph Gaffga
// SPDX-License-Identifier: GPL-3.0-only
// https://github.com/cgaffga/cipherlab

//! Digraph substitution against the key square.
//!
//! Three geometric rules, chosen per digraph:
//!
//! - same row: each letter is replaced by its right neighbor, column 4
//!   wrapping to 0
//! - same column: each letter is replaced by the letter below, row 4
//!   wrapping to 0
//! - rectangle: the letters swap columns and keep their own rows
//!
//! The rectangle rule is its own inverse; the row and column rules shift in
//! the encrypt direction only. No decrypt path is provided for text.
//!
//! Every substitution is recorded as a [`DigraphStep`] so a front-end can
//! show the user exactly which rule fired for each pair.

use core::fmt;

use crate::playfair::digraph::Digraph;
use crate::playfair::matrix::{KeySquare, SQUARE_SIDE};

/// Which geometric rule applied to a digraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairRule {
    /// Both letters share a row.
    Row,
    /// Both letters share a column.
    Column,
    /// The letters sit on opposite corners of a rectangle.
    Rectangle,
}

impl fmt::Display for PairRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PairRule::Row => "Same Row",
            PairRule::Column => "Same Col",
            PairRule::Rectangle => "Rectangle",
        };
        f.write_str(name)
    }
}

/// One entry of the per-digraph trace shown to the operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigraphStep {
    /// The digraph before substitution.
    pub input: Digraph,
    /// The rule that fired.
    pub rule: PairRule,
    /// The digraph after substitution.
    pub output: Digraph,
}

/// Renders as `IN → Rectangle → GA`.
impl fmt::Display for DigraphStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} → {} → {}", self.input, self.rule, self.output)
    }
}

/// Substitute a single digraph against the square.
pub fn encrypt_digraph(square: &KeySquare, input: Digraph) -> DigraphStep {
    // Digraph letters are folded into the square alphabet on construction,
    // so both lookups always hit a cell.
    let (r1, c1) = square
        .position(input.first())
        .expect("digraph letters always resolve to a square cell");
    let (r2, c2) = square
        .position(input.second())
        .expect("digraph letters always resolve to a square cell");

    let (a, b, rule) = if r1 == r2 {
        (
            square.at(r1, (c1 + 1) % SQUARE_SIDE),
            square.at(r2, (c2 + 1) % SQUARE_SIDE),
            PairRule::Row,
        )
    } else if c1 == c2 {
        (
            square.at((r1 + 1) % SQUARE_SIDE, c1),
            square.at((r2 + 1) % SQUARE_SIDE, c2),
            PairRule::Column,
        )
    } else {
        (square.at(r1, c2), square.at(r2, c1), PairRule::Rectangle)
    };

    DigraphStep {
        input,
        rule,
        output: Digraph::from_folded(a, b),
    }
}

/// Encrypt a digraph sequence, collecting the ciphertext and the trace.
pub fn encrypt(square: &KeySquare, digraphs: &[Digraph]) -> (String, Vec<DigraphStep>) {
    let mut ciphertext = String::with_capacity(digraphs.len() * 2);
    let mut steps = Vec::with_capacity(digraphs.len());
    for &digraph in digraphs {
        let step = encrypt_digraph(square, digraph);
        ciphertext.push(step.output.first());
        ciphertext.push(step.output.second());
        steps.push(step);
    }
    (ciphertext, steps)
}
