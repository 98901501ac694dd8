// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Pokercomb cards types.
//!
//! This crate define types to create and parse cards:
//!
//! ```
//! # use pokercomb_cards::{Card, Face, Suit};
//! let ad = Card::new(Suit::Diamonds, Face::Ace);
//! assert_eq!(ad.to_string(), "♦A");
//!
//! let ts: Card = "♠10".parse().unwrap();
//! assert_eq!(ts, Card::new(Suit::Spades, Face::Ten));
//! assert_eq!(ts.numeric_value(), 10);
//! ```
//!
//! a [Deck] type for shuffling and dealing the 52 cards, and helpers to
//! deduplicate a hand and to iterate through its k-subsets.
//!
//! For example to iterate through all 5 cards subsets of a 7 cards hand:
//!
//! ```
//! # use pokercomb_cards::{for_each_ksubset, Deck};
//! let hand = Deck::default().into_iter().take(7).collect::<Vec<_>>();
//!
//! let mut counter = 0;
//! for_each_ksubset(&hand, 5, |cards| {
//!     assert_eq!(cards.len(), 5);
//!     counter += 1;
//! });
//! assert_eq!(counter, 21);
//! ```
//!
//! Random hands, with possibly repeated cards as found in the generated
//! datasets, are created with [random_hand]:
//!
//! ```
//! # use pokercomb_cards::{dedup, random_hand};
//! # use rand::{SeedableRng, rngs::StdRng};
//! let mut rng = StdRng::seed_from_u64(42);
//! let hand = random_hand(&mut rng, 12);
//! assert_eq!(hand.len(), 12);
//! assert!(dedup(&hand).len() <= 12);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, Face, Suit, random_hand};

mod error;
pub use error::CardError;

mod ksubset;
pub use ksubset::{dedup, for_each_ksubset, ksubsets, nck};
