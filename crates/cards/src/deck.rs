// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::CardError;

/// A Poker card.
///
/// A card is a suit and face pair, two cards are equal if they have the same
/// suit and face. The short representation used for display and parsing is
/// the suit symbol followed by the face label:
///
/// ```text
///   ♣2  ♦10  ♥Q  ♠A
/// ```
#[derive(Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub struct Card {
    suit: Suit,
    face: Face,
}

impl Card {
    /// Create a card given a suit and face.
    pub fn new(suit: Suit, face: Face) -> Card {
        Card { suit, face }
    }

    /// Create a card from a suit name (`clubs`, `diamonds`, `hearts`, `spades`)
    /// and a face label (`2`..`10`, `J`, `Q`, `K`, `A`).
    pub fn try_new(suit: &str, face: &str) -> Result<Card, CardError> {
        Ok(Card {
            suit: Suit::from_name(suit)?,
            face: face.parse()?,
        })
    }

    /// Create a random card, suit and face are drawn independently.
    pub fn random<R: Rng>(rng: &mut R) -> Card {
        let suit = Suit::ALL[rng.random_range(0..Suit::ALL.len())];
        let face = Face::ALL[rng.random_range(0..Face::ALL.len())];
        Card { suit, face }
    }

    /// Returns the card suit.
    pub fn suit(&self) -> Suit {
        self.suit
    }

    /// Returns the card face.
    pub fn face(&self) -> Face {
        self.face
    }

    /// Returns the numeric value of the card face, 2..=14 with aces high.
    #[inline]
    pub fn numeric_value(&self) -> u8 {
        self.face.value()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.suit, self.face)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.suit, self.face)
    }
}

impl FromStr for Card {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let mut chars = s.chars();
        let symbol = chars.next().ok_or(CardError::EmptyCard)?;
        let suit = Suit::from_symbol(symbol)?;
        let face = chars.as_str().parse()?;
        Ok(Card { suit, face })
    }
}

/// Card face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Face {
    /// Deuce
    Deuce = 2,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Face {
    /// All faces from deuce to ace.
    pub const ALL: [Face; 13] = {
        use Face::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
    };

    /// Returns all faces.
    pub fn faces() -> impl DoubleEndedIterator<Item = Face> {
        Self::ALL.into_iter()
    }

    /// The face numeric value: 2..=10 for numeric faces, 11 jack, 12 queen,
    /// 13 king and 14 ace.
    #[inline]
    pub fn value(self) -> u8 {
        self as u8
    }

    /// Checks if this is one of the 2..=10 faces.
    pub fn is_numeric(self) -> bool {
        self <= Face::Ten
    }

    /// The face label used in the short representation.
    pub fn label(self) -> &'static str {
        match self {
            Face::Deuce => "2",
            Face::Trey => "3",
            Face::Four => "4",
            Face::Five => "5",
            Face::Six => "6",
            Face::Seven => "7",
            Face::Eight => "8",
            Face::Nine => "9",
            Face::Ten => "10",
            Face::Jack => "J",
            Face::Queen => "Q",
            Face::King => "K",
            Face::Ace => "A",
        }
    }
}

impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Face {
    type Err = CardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Face::faces()
            .find(|face| face.label() == s)
            .ok_or_else(|| CardError::InvalidFace(s.to_string()))
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// All suits.
    pub const ALL: [Suit; 4] = [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades];

    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        Self::ALL.into_iter()
    }

    /// The suit lowercase name.
    pub fn name(self) -> &'static str {
        match self {
            Suit::Clubs => "clubs",
            Suit::Diamonds => "diamonds",
            Suit::Hearts => "hearts",
            Suit::Spades => "spades",
        }
    }

    /// The suit unicode symbol.
    pub fn symbol(self) -> char {
        match self {
            Suit::Clubs => '\u{2663}',
            Suit::Diamonds => '\u{2666}',
            Suit::Hearts => '\u{2665}',
            Suit::Spades => '\u{2660}',
        }
    }

    /// Gets a suit from its lowercase name.
    pub fn from_name(name: &str) -> Result<Suit, CardError> {
        Suit::suits()
            .find(|suit| suit.name() == name)
            .ok_or_else(|| CardError::InvalidSuit(name.to_string()))
    }

    /// Gets a suit from its unicode symbol.
    pub fn from_symbol(symbol: char) -> Result<Suit, CardError> {
        Suit::suits()
            .find(|suit| suit.symbol() == symbol)
            .ok_or_else(|| CardError::InvalidSuit(symbol.to_string()))
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// Creates a hand of `len` random cards, the same card may appear more than once.
pub fn random_hand<R: Rng>(rng: &mut R, len: usize) -> Vec<Card> {
    (0..len).map(|_| Card::random(rng)).collect()
}

/// A cards Deck
#[derive(Debug)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in the deck.
    pub const SIZE: usize = 52;

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.cards.shuffle(rng);
        deck
    }

    /// Deals a card from the deck, returns `None` if the deck is empty.
    pub fn deal(&mut self) -> Option<Card> {
        self.cards.pop()
    }

    /// Checks if the deck is empty.
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of cards in the deck.
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// The cards left in the deck.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Face::faces().map(move |f| Card::new(s, f)))
            .collect::<Vec<_>>();
        Self { cards }
    }
}

impl IntoIterator for Deck {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.cards.into_iter()
    }
}
