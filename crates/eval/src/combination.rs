// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker combinations types.
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{COMBINATION_SIZE, Card};

/// A poker combination kind.
///
/// Kinds are ordered from the weakest to the strongest combination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CombinationKind {
    /// Two cards of the same face.
    Pair,
    /// Two different pairs.
    TwoPairs,
    /// Three cards of the same face.
    ThreeOfAKind,
    /// Five cards in sequence, an ace can start or end the sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three cards of one face and two of another.
    FullHouse,
    /// Four cards of the same face.
    FourOfAKind,
    /// Five cards in sequence of the same suit.
    StraightFlush,
}

impl CombinationKind {
    /// All kinds from the weakest to the strongest.
    pub const ALL: [CombinationKind; 8] = [
        CombinationKind::Pair,
        CombinationKind::TwoPairs,
        CombinationKind::ThreeOfAKind,
        CombinationKind::Straight,
        CombinationKind::Flush,
        CombinationKind::FullHouse,
        CombinationKind::FourOfAKind,
        CombinationKind::StraightFlush,
    ];

    /// The combination name.
    pub fn name(self) -> &'static str {
        match self {
            CombinationKind::Pair => "Pair",
            CombinationKind::TwoPairs => "Two Pairs",
            CombinationKind::ThreeOfAKind => "Three Of A Kind",
            CombinationKind::Straight => "Straight",
            CombinationKind::Flush => "Flush",
            CombinationKind::FullHouse => "Full House",
            CombinationKind::FourOfAKind => "Four Of A Kind",
            CombinationKind::StraightFlush => "Straight Flush",
        }
    }
}

impl fmt::Display for CombinationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A 5 cards hand that makes a combination.
///
/// Cards are kept in the order they were classified.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Combination {
    kind: CombinationKind,
    cards: [Card; COMBINATION_SIZE],
}

impl Combination {
    pub(crate) fn new(kind: CombinationKind, cards: [Card; COMBINATION_SIZE]) -> Self {
        Self { kind, cards }
    }

    /// The combination kind.
    pub fn kind(&self) -> CombinationKind {
        self.kind
    }

    /// The combination name.
    pub fn name(&self) -> &'static str {
        self.kind.name()
    }

    /// The combination cards.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, card) in self.cards.iter().enumerate() {
            if idx > 0 {
                f.write_str(",")?;
            }
            write!(f, "{card}")?;
        }

        write!(f, " | {}", self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Face, Suit};

    #[test]
    fn kind_names() {
        let names = CombinationKind::ALL.map(CombinationKind::name);
        assert_eq!(
            names,
            [
                "Pair",
                "Two Pairs",
                "Three Of A Kind",
                "Straight",
                "Flush",
                "Full House",
                "Four Of A Kind",
                "Straight Flush",
            ]
        );

        assert!(CombinationKind::ALL.windows(2).all(|w| w[0] < w[1]));
        assert_eq!(CombinationKind::FullHouse.to_string(), "Full House");
    }

    #[test]
    fn combination_to_string() {
        let cards = [
            Card::new(Suit::Diamonds, Face::Eight),
            Card::new(Suit::Spades, Face::Ten),
            Card::new(Suit::Diamonds, Face::Ten),
            Card::new(Suit::Clubs, Face::Eight),
            Card::new(Suit::Hearts, Face::Eight),
        ];

        let comb = Combination::new(CombinationKind::FullHouse, cards);
        assert_eq!(comb.name(), "Full House");
        assert_eq!(comb.cards(), &cards);
        assert_eq!(comb.to_string(), "♦8,♠10,♦10,♣8,♥8 | Full House");
    }
}
