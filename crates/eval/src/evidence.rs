// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Face and suit occurrences in a hand.
use ahash::AHashMap;

use crate::{Card, Face, Suit};

/// Counts how many times each face appears in the cards.
pub fn face_counts(cards: &[Card]) -> AHashMap<Face, usize> {
    let mut counts = AHashMap::with_capacity(cards.len());
    for card in cards {
        *counts.entry(card.face()).or_insert(0) += 1;
    }
    counts
}

/// Counts how many times each suit appears in the cards.
pub fn suit_counts(cards: &[Card]) -> AHashMap<Suit, usize> {
    let mut counts = AHashMap::with_capacity(Suit::ALL.len());
    for card in cards {
        *counts.entry(card.suit()).or_insert(0) += 1;
    }
    counts
}

/// Returns the face counts sorted in descending order, e.g. `[3, 2]` for a
/// full house or `[2, 1, 1, 1]` for a pair.
pub fn face_pattern(cards: &[Card]) -> Vec<usize> {
    let mut pattern = face_counts(cards).into_values().collect::<Vec<_>>();
    pattern.sort_unstable_by(|a, b| b.cmp(a));
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cards(s: &str) -> Vec<Card> {
        s.split(',').map(|c| c.parse().unwrap()).collect()
    }

    #[test]
    fn count_faces() {
        let counts = face_counts(&cards("♦8,♠10,♦10,♣8,♥8"));
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&Face::Eight], 3);
        assert_eq!(counts[&Face::Ten], 2);
        assert_eq!(counts.values().sum::<usize>(), 5);

        let counts = face_counts(&cards("♦A,♠10,♦9,♣8,♣2"));
        assert_eq!(counts.len(), 5);
        assert!(counts.values().all(|&c| c == 1));

        assert!(face_counts(&[]).is_empty());
    }

    #[test]
    fn count_suits() {
        let counts = suit_counts(&cards("♠2,♠5,♠A,♠K,♦10"));
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&Suit::Spades], 4);
        assert_eq!(counts[&Suit::Diamonds], 1);
        assert_eq!(counts.values().sum::<usize>(), 5);

        let counts = suit_counts(&cards("♥2,♥5,♥A,♥K,♥10"));
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&Suit::Hearts], 5);
    }

    #[test]
    fn face_patterns() {
        assert_eq!(face_pattern(&cards("♦8,♠10,♦10,♣8,♥8")), vec![3, 2]);
        assert_eq!(face_pattern(&cards("♦A,♠10,♦10,♣10,♥10")), vec![4, 1]);
        assert_eq!(face_pattern(&cards("♦A,♠2,♦2,♣K,♥A")), vec![2, 2, 1]);
        assert_eq!(face_pattern(&cards("♦A,♠2,♦3,♣K,♥A")), vec![2, 1, 1, 1]);
        assert_eq!(face_pattern(&cards("♦A,♠2,♦3,♣K,♥Q")), vec![1; 5]);
    }
}
