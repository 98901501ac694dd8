// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker combinations classifier.
//!
//! A 5 cards hand is checked against each combination from the strongest to
//! the weakest and it is classified as the first combination that matches, so
//! that a straight that is also a flush is a straight flush and a full house
//! is never reported as three of a kind or a pair.
//!
//! The combination predicates return `false` for hands that don't have
//! exactly [COMBINATION_SIZE] cards, only [classify] reports the wrong size
//! as an error.
use pokercomb_cards::{dedup, for_each_ksubset};
use thiserror::Error;

use crate::{
    Card, Combination, CombinationKind, Face,
    evidence::{face_pattern, suit_counts},
};

/// The number of cards in a combination.
pub const COMBINATION_SIZE: usize = 5;

/// Classification errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The hand doesn't have [COMBINATION_SIZE] cards.
    #[error("cards is not of valid size: got {0} cards, expected {COMBINATION_SIZE}")]
    InvalidSize(usize),
}

/// Combination predicates in precedence order.
const RULES: [(CombinationKind, fn(&[Card]) -> bool); 8] = [
    (CombinationKind::StraightFlush, is_straight_flush),
    (CombinationKind::FourOfAKind, is_four_of_a_kind),
    (CombinationKind::FullHouse, is_full_house),
    (CombinationKind::Flush, is_flush),
    (CombinationKind::Straight, is_straight),
    (CombinationKind::ThreeOfAKind, is_three_of_a_kind),
    (CombinationKind::TwoPairs, is_two_pairs),
    (CombinationKind::Pair, is_pair),
];

impl CombinationKind {
    /// Returns the strongest combination kind made by the cards or `None` if
    /// the cards make no combination or are not a 5 cards hand.
    pub fn of(cards: &[Card]) -> Option<CombinationKind> {
        RULES
            .iter()
            .find(|(_, matches)| matches(cards))
            .map(|(kind, _)| *kind)
    }
}

/// Classifies a 5 cards hand.
///
/// Returns `Ok(None)` if the hand makes no combination and an error if the
/// hand doesn't have exactly 5 cards.
pub fn classify(cards: &[Card]) -> Result<Option<Combination>, ClassifyError> {
    let hand = <[Card; COMBINATION_SIZE]>::try_from(cards)
        .map_err(|_| ClassifyError::InvalidSize(cards.len()))?;
    Ok(CombinationKind::of(&hand).map(|kind| Combination::new(kind, hand)))
}

/// Finds the combinations made by every 5 cards subset of the hand unique
/// cards.
///
/// A hand with less than 5 unique cards has no combinations.
pub fn find_combinations(cards: &[Card]) -> Result<Vec<Combination>, ClassifyError> {
    let unique = dedup(cards);

    let mut found = Vec::new();
    let mut error = None;
    for_each_ksubset(&unique, COMBINATION_SIZE, |hand| {
        if error.is_some() {
            return;
        }

        match classify(hand) {
            Ok(Some(comb)) => found.push(comb),
            Ok(None) => {}
            Err(e) => error = Some(e),
        }
    });

    match error {
        Some(e) => Err(e),
        None => Ok(found),
    }
}

/// Checks the sorted face counts of a 5 cards hand.
fn is_face_pattern<F>(cards: &[Card], matches: F) -> bool
where
    F: FnOnce(&[usize]) -> bool,
{
    if cards.len() != COMBINATION_SIZE {
        return false;
    }

    matches(&face_pattern(cards))
}

/// Checks if the largest group of cards with the same face is a pair.
pub fn is_pair(cards: &[Card]) -> bool {
    is_face_pattern(cards, |counts| counts.starts_with(&[2]))
}

/// Checks if the hand has two pairs.
pub fn is_two_pairs(cards: &[Card]) -> bool {
    is_face_pattern(cards, |counts| counts.starts_with(&[2, 2]))
}

/// Checks if the hand has three cards of the same face.
pub fn is_three_of_a_kind(cards: &[Card]) -> bool {
    is_face_pattern(cards, |counts| counts.starts_with(&[3]))
}

/// Checks if the hand has four cards of the same face.
pub fn is_four_of_a_kind(cards: &[Card]) -> bool {
    is_face_pattern(cards, |counts| counts.starts_with(&[4]))
}

/// Checks if the hand has three cards of a face and two of another.
pub fn is_full_house(cards: &[Card]) -> bool {
    is_face_pattern(cards, |counts| counts.starts_with(&[3, 2]))
}

/// Checks if the hand cards are in sequence.
///
/// An ace is high unless the hand also has a deuce, then the only straight is
/// the wheel A-2-3-4-5.
pub fn is_straight(cards: &[Card]) -> bool {
    if cards.len() != COMBINATION_SIZE {
        return false;
    }

    let mut values = cards.iter().map(Card::numeric_value).collect::<Vec<_>>();
    values.sort_unstable_by(|a, b| b.cmp(a));

    let ace = Face::Ace.value();
    let deuce = Face::Deuce.value();
    if values.contains(&ace) && values.contains(&deuce) {
        const WHEEL: [u8; COMBINATION_SIZE] = [14, 5, 4, 3, 2];
        values == WHEEL
    } else {
        values.windows(2).all(|w| w[0] == w[1] + 1)
    }
}

/// Checks if all the hand cards have the same suit.
pub fn is_flush(cards: &[Card]) -> bool {
    if cards.len() != COMBINATION_SIZE {
        return false;
    }

    let counts = suit_counts(cards);
    counts.len() == 1 && counts.values().all(|&count| count == COMBINATION_SIZE)
}

/// Checks if the hand is both a straight and a flush.
pub fn is_straight_flush(cards: &[Card]) -> bool {
    is_flush(cards) && is_straight(cards)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Deck;
    use ahash::AHashMap;

    fn cards(s: &str) -> Vec<Card> {
        s.split(',').map(|c| c.parse().unwrap()).collect()
    }

    fn kind(s: &str) -> Option<CombinationKind> {
        classify(&cards(s)).unwrap().map(|c| c.kind())
    }

    #[test]
    fn pair() {
        assert!(is_pair(&cards("♦A,♠A,♦9,♣8,♣2")));
        assert!(is_pair(&cards("♦A,♠10,♦9,♣8,♣8")));
        assert!(is_pair(&cards("♦A,♠2,♦A,♣K,♥2")));
        assert!(!is_pair(&cards("♦A,♠10,♦9,♣8,♣2")));
        assert!(!is_pair(&cards("♦A,♠10,♦10,♣10,♣2")));

        assert_eq!(kind("♦A,♠A,♦9,♣8,♣2"), Some(CombinationKind::Pair));
        assert_eq!(kind("♥3,♠10,♦9,♣8,♣3"), Some(CombinationKind::Pair));
    }

    #[test]
    fn two_pairs() {
        assert!(is_two_pairs(&cards("♦A,♠A,♦9,♣9,♣2")));
        assert!(!is_two_pairs(&cards("♦A,♠A,♦9,♣8,♣2")));
        assert!(!is_two_pairs(&cards("♦8,♠10,♦10,♣8,♥8")));

        assert_eq!(kind("♦A,♠A,♦9,♣9,♣2"), Some(CombinationKind::TwoPairs));
        assert_eq!(kind("♦J,♠2,♦Q,♣J,♣2"), Some(CombinationKind::TwoPairs));
    }

    #[test]
    fn three_of_a_kind() {
        assert!(is_three_of_a_kind(&cards("♦A,♠A,♥A,♣9,♣2")));
        assert!(is_three_of_a_kind(&cards("♦8,♠10,♦10,♣8,♥8")));
        assert!(!is_three_of_a_kind(&cards("♦A,♠A,♥A,♣A,♣2")));

        assert_eq!(kind("♦A,♠A,♥A,♣9,♣2"), Some(CombinationKind::ThreeOfAKind));
    }

    #[test]
    fn four_of_a_kind() {
        assert!(is_four_of_a_kind(&cards("♦A,♠10,♦10,♣10,♥10")));
        assert!(!is_four_of_a_kind(&cards("♦A,♠10,♦10,♣10,♥9")));

        assert_eq!(kind("♦A,♠10,♦10,♣10,♥10"), Some(CombinationKind::FourOfAKind));
    }

    #[test]
    fn full_house() {
        assert!(is_full_house(&cards("♦8,♠10,♦10,♣8,♥8")));
        assert!(!is_full_house(&cards("♦8,♠10,♦J,♣8,♥8")));

        // The largest group of a full house is three of a kind.
        assert!(is_three_of_a_kind(&cards("♦8,♠10,♦10,♣8,♥8")));
        assert!(!is_pair(&cards("♦8,♠10,♦10,♣8,♥8")));
        assert_eq!(kind("♦8,♠10,♦10,♣8,♥8"), Some(CombinationKind::FullHouse));
    }

    #[test]
    fn straight() {
        assert!(is_straight(&cards("♦6,♠7,♦8,♣9,♥10")));
        assert!(is_straight(&cards("♥10,♣9,♦8,♠7,♦6")));
        assert!(is_straight(&cards("♦10,♠J,♦Q,♣K,♥A")));
        assert!(!is_straight(&cards("♦6,♠7,♦8,♣9,♥J")));
        assert!(!is_straight(&cards("♦6,♠7,♦8,♣8,♥9")));

        assert_eq!(kind("♦6,♠7,♦8,♣9,♥10"), Some(CombinationKind::Straight));
        assert_eq!(kind("♦10,♠J,♦Q,♣K,♥A"), Some(CombinationKind::Straight));
    }

    #[test]
    fn straight_wheel() {
        assert!(is_straight(&cards("♦A,♠2,♦3,♣4,♥5")));
        assert!(is_straight(&cards("♥5,♣4,♦A,♠3,♦2")));
        assert_eq!(kind("♦A,♠2,♦3,♣4,♥5"), Some(CombinationKind::Straight));

        // No wrapping around the ace.
        assert!(!is_straight(&cards("♦Q,♠K,♦A,♣2,♥3")));
        assert!(!is_straight(&cards("♦J,♠Q,♦K,♣A,♥2")));
        assert!(!is_straight(&cards("♦A,♠2,♦3,♣4,♥6")));
    }

    #[test]
    fn flush() {
        assert!(is_flush(&cards("♠2,♠5,♠A,♠K,♠10")));
        assert!(!is_flush(&cards("♠2,♠5,♠A,♠K,♦10")));

        assert_eq!(kind("♠2,♠5,♠A,♠K,♠10"), Some(CombinationKind::Flush));
        assert_eq!(kind("♠2,♠5,♠A,♠K,♦10"), None);
    }

    #[test]
    fn straight_flush() {
        assert!(is_straight_flush(&cards("♦10,♦J,♦Q,♦K,♦A")));
        assert!(is_straight_flush(&cards("♣A,♣2,♣3,♣4,♣5")));
        assert!(!is_straight_flush(&cards("♦10,♦J,♦Q,♦K,♥A")));

        assert_eq!(kind("♦10,♦J,♦Q,♦K,♦A"), Some(CombinationKind::StraightFlush));
        assert_eq!(kind("♣A,♣2,♣3,♣4,♣5"), Some(CombinationKind::StraightFlush));
        assert_eq!(kind("♥9,♥K,♥10,♥Q,♥J"), Some(CombinationKind::StraightFlush));
    }

    #[test]
    fn no_combination() {
        assert_eq!(kind("♦A,♠10,♦9,♣8,♣2"), None);
        assert_eq!(kind("♦2,♠4,♦6,♣8,♣10"), None);
        assert_eq!(CombinationKind::of(&cards("♦A,♠10,♦9,♣8,♣2")), None);
    }

    #[test]
    fn invalid_size() {
        let four = cards("♦A,♠A,♦9,♣9");
        let six = cards("♦A,♠A,♦9,♣9,♥9,♠9");

        assert_eq!(classify(&four), Err(ClassifyError::InvalidSize(4)));
        assert_eq!(classify(&six), Err(ClassifyError::InvalidSize(6)));
        assert_eq!(classify(&[]), Err(ClassifyError::InvalidSize(0)));

        // Predicates don't match instead of failing.
        for hand in [&four, &six] {
            assert!(!is_pair(hand));
            assert!(!is_two_pairs(hand));
            assert!(!is_three_of_a_kind(hand));
            assert!(!is_four_of_a_kind(hand));
            assert!(!is_full_house(hand));
            assert!(!is_straight(hand));
            assert!(!is_flush(hand));
            assert!(!is_straight_flush(hand));
            assert_eq!(CombinationKind::of(hand), None);
        }

        assert!(!is_flush(&cards("♠2,♠5,♠A,♠K")));
        assert!(!is_straight(&cards("♦A,♠2,♦3,♣4")));
    }

    #[test]
    fn keeps_cards_order() {
        let hand = cards("♥8,♠10,♦10,♣8,♦8");
        let comb = classify(&hand).unwrap().unwrap();
        assert_eq!(comb.cards(), hand.as_slice());
        assert_eq!(comb.to_string(), "♥8,♠10,♦10,♣8,♦8 | Full House");
    }

    #[test]
    fn classify_is_idempotent() {
        for s in ["♦10,♦J,♦Q,♦K,♦A", "♦A,♠10,♦9,♣8,♣2", "♦8,♠10,♦10,♣8,♥8"] {
            let hand = cards(s);
            assert_eq!(classify(&hand), classify(&hand));
        }
    }

    #[test]
    fn find_hand_combinations() {
        // Repeated cards are counted once.
        let hand = cards("♦8,♠10,♦10,♣8,♥8,♥8,♠10");
        let found = find_combinations(&hand).unwrap();
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].kind(), CombinationKind::FullHouse);

        // 6 cards make 6 hands, the hands without the pair of aces have no
        // combination.
        let hand = cards("♦A,♠A,♦9,♣8,♣2,♥5");
        let found = find_combinations(&hand).unwrap();
        assert_eq!(found.len(), 4);
        assert!(found.iter().all(|c| c.kind() == CombinationKind::Pair));

        assert!(find_combinations(&cards("♦A,♠A,♦9,♣8")).unwrap().is_empty());
        assert!(find_combinations(&[]).unwrap().is_empty());
    }

    #[test]
    fn all_five_cards_hands() {
        let mut counts = AHashMap::new();
        let mut nothing = 0;

        for_each_ksubset(Deck::default().cards(), COMBINATION_SIZE, |hand| {
            match classify(hand).unwrap() {
                Some(comb) => *counts.entry(comb.kind()).or_insert(0) += 1,
                None => nothing += 1,
            }
        });

        assert_eq!(counts[&CombinationKind::StraightFlush], 40);
        assert_eq!(counts[&CombinationKind::FourOfAKind], 624);
        assert_eq!(counts[&CombinationKind::FullHouse], 3_744);
        assert_eq!(counts[&CombinationKind::Flush], 5_108);
        assert_eq!(counts[&CombinationKind::Straight], 10_200);
        assert_eq!(counts[&CombinationKind::ThreeOfAKind], 54_912);
        assert_eq!(counts[&CombinationKind::TwoPairs], 123_552);
        assert_eq!(counts[&CombinationKind::Pair], 1_098_240);
        assert_eq!(nothing, 1_302_540);
    }

    #[test]
    fn random_hands_match_one_kind() {
        use rand::prelude::*;

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let deck = Deck::new_and_shuffled(&mut rng);
            let hand = &deck.cards()[..COMBINATION_SIZE];

            // The strongest matching kind is reported.
            let strongest = RULES
                .iter()
                .filter(|(_, matches)| matches(hand))
                .map(|(kind, _)| *kind)
                .max();
            assert_eq!(CombinationKind::of(hand), strongest);

            let flush = hand.iter().all(|c| c.suit() == hand[0].suit());
            assert_eq!(is_flush(hand), flush);
        }
    }
}
