// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokercomb hand combinations classifier.
//!
//! Classifies a 5 cards hand into one of the standard poker combinations,
//! from a pair to a straight flush. Hands that do not make any combination
//! classify as `None`:
//!
//! ```
//! # use pokercomb_eval::*;
//! let parse = |s: &str| s.split(',').map(|c| c.parse::<Card>().unwrap()).collect::<Vec<_>>();
//!
//! let royal = parse("♦10,♦J,♦Q,♦K,♦A");
//! let comb = classify(&royal).unwrap().unwrap();
//! assert_eq!(comb.kind(), CombinationKind::StraightFlush);
//! assert_eq!(comb.to_string(), "♦10,♦J,♦Q,♦K,♦A | Straight Flush");
//!
//! let nothing = parse("♦A,♠10,♦9,♣8,♣2");
//! assert!(classify(&nothing).unwrap().is_none());
//!
//! // Only 5 cards hands can be classified.
//! assert!(classify(&royal[..4]).is_err());
//! ```
//!
//! To find all the combinations in a larger hand use [find_combinations]
//! that classifies every 5 cards subset of the hand unique cards.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod classify;
pub use classify::{COMBINATION_SIZE, ClassifyError, classify, find_combinations};

pub mod combination;
pub use combination::{Combination, CombinationKind};

pub mod evidence;

// Reexport cards types.
pub use pokercomb_cards::{Card, Deck, Face, Suit};
