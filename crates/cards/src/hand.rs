// Copyright (C) 2026 Showdown Contributors
// SPDX-License-Identifier: Apache-2.0

//! An ordered sequence of cards.
//!
//! [Hand] is the container the evaluator builds hands from. All its
//! operations are pure: they leave the receiver untouched and return a new
//! hand, so a caller's cards are never mutated behind its back.
use serde::{Deserialize, Serialize};
use std::{fmt, ops, str::FromStr};

use crate::{Card, ParseCardError};

/// An ordered sequence of cards.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hand(Vec<Card>);

impl Hand {
    /// Creates an empty hand.
    pub fn new() -> Hand {
        Hand(Vec::new())
    }

    /// Number of cards in the hand.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Checks if the hand has no cards.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Checks if the hand contains the given card.
    pub fn contains(&self, card: Card) -> bool {
        self.0.contains(&card)
    }

    /// Iterates the cards in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Card> {
        self.0.iter()
    }

    /// The cards as a slice.
    pub fn as_slice(&self) -> &[Card] {
        &self.0
    }

    /// Returns the first n cards.
    ///
    /// Returns the whole hand when n exceeds the hand length, and an empty
    /// hand when n is zero.
    pub fn take(&self, n: usize) -> Hand {
        Hand(self.0[..n.min(self.0.len())].to_vec())
    }

    /// Returns the first n cards that match the predicate, scanning in hand
    /// order.
    ///
    /// When the hand holds fewer than n matches, returns as many as it can.
    pub fn take_when(&self, n: usize, predicate: impl Fn(Card) -> bool) -> Hand {
        Hand(
            self.0
                .iter()
                .copied()
                .filter(|&card| predicate(card))
                .take(n)
                .collect(),
        )
    }

    /// Returns this hand with the first n cards of other appended.
    ///
    /// When other holds fewer than n cards, the two hands are joined.
    pub fn append(&self, other: &Hand, n: usize) -> Hand {
        let mut cards = self.0.clone();
        cards.extend_from_slice(&other.0[..n.min(other.0.len())]);
        Hand(cards)
    }

    /// Returns this hand with the first n cards of other that match the
    /// predicate appended, scanning other in order.
    ///
    /// When other holds fewer than n matches, appends as many as it can.
    pub fn append_when(&self, other: &Hand, n: usize, predicate: impl Fn(Card) -> bool) -> Hand {
        let mut cards = self.0.clone();
        cards.extend(
            other
                .0
                .iter()
                .copied()
                .filter(|&card| predicate(card))
                .take(n),
        );
        Hand(cards)
    }

    /// Returns a copy of the hand sorted by rank value, ascending.
    ///
    /// Aces sort high and suits are not considered. The sort is stable:
    /// cards of equal rank keep their relative order, which downstream suit
    /// selection relies on.
    pub fn sorted(&self) -> Hand {
        if self.0.len() <= 1 {
            return self.clone();
        }

        // Merge sort, splitting at the midpoint with the left side taking
        // the first half.
        let mid = self.0.len() / 2;
        let left = Hand(self.0[..mid].to_vec()).sorted();
        let right = Hand(self.0[mid..].to_vec()).sorted();

        merge(left, right)
    }
}

/// Merges two sorted hands, taking from whichever side has the lower head
/// rank, the left side winning ties.
fn merge(left: Hand, right: Hand) -> Hand {
    let (left, right) = (left.0, right.0);
    let mut result = Vec::with_capacity(left.len() + right.len());

    let (mut l, mut r) = (0, 0);
    while l < left.len() && r < right.len() {
        if left[l].rank().value() <= right[r].rank().value() {
            result.push(left[l]);
            l += 1;
        } else {
            result.push(right[r]);
            r += 1;
        }
    }

    // At most one of these has elements left.
    result.extend_from_slice(&left[l..]);
    result.extend_from_slice(&right[r..]);

    Hand(result)
}

impl ops::Index<usize> for Hand {
    type Output = Card;

    fn index(&self, index: usize) -> &Card {
        &self.0[index]
    }
}

impl From<Vec<Card>> for Hand {
    fn from(cards: Vec<Card>) -> Hand {
        Hand(cards)
    }
}

impl FromIterator<Card> for Hand {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Hand {
        Hand(iter.into_iter().collect())
    }
}

impl IntoIterator for Hand {
    type Item = Card;
    type IntoIter = std::vec::IntoIter<Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Hand {
    type Item = &'a Card;
    type IntoIter = std::slice::Iter<'a, Card>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Hand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let codes = self
            .0
            .iter()
            .map(|card| card.code())
            .collect::<Vec<_>>()
            .join(" ");
        write!(f, "{codes}")
    }
}

impl FromStr for Hand {
    type Err = ParseCardError;

    /// Parses a hand from whitespace separated card codes, `"3h Ts Qc"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split_whitespace().map(str::parse).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Rank, Suit};

    fn hand(codes: &str) -> Hand {
        codes.parse().unwrap()
    }

    #[test]
    fn take_first_cards() {
        assert_eq!(hand("5c Ts Ad 7s 7d Kc").take(4), hand("5c Ts Ad 7s"));
        assert_eq!(hand("Ks Qc 2h 3h").take(0), Hand::new());
        assert_eq!(hand("3s 7d Ad").take(100_000), hand("3s 7d Ad"));
        assert_eq!(Hand::new().take(3), Hand::new());
    }

    #[test]
    fn take_when_matching() {
        // Take anything.
        assert_eq!(
            hand("3h Ts 2c Ks").take_when(100, |_| true),
            hand("3h Ts 2c Ks")
        );

        // Take nothing.
        assert_eq!(hand("Ac 6c 3s").take_when(200, |_| false), Hand::new());

        // Take the first n matches.
        assert_eq!(
            hand("Th 4h Ah 3h").take_when(2, |c| c.suit() == Suit::Hearts),
            hand("Th 4h")
        );

        assert_eq!(hand("3c 7c Ts 4c 4d Ah").take_when(0, |_| true), Hand::new());
    }

    #[test]
    fn append_joins_hands() {
        assert_eq!(hand("Ah 2c").append(&hand("3d 4s"), 2), hand("Ah 2c 3d 4s"));
        assert_eq!(hand("Ah 2c").append(&hand("3d 4s"), 1), hand("Ah 2c 3d"));

        // n larger than other takes all of it.
        assert_eq!(hand("Ah").append(&hand("3d 4s"), 10), hand("Ah 3d 4s"));

        // n of zero leaves the receiver unchanged.
        assert_eq!(hand("Ah 2c").append(&hand("3d 4s"), 0), hand("Ah 2c"));
        assert_eq!(hand("Ah 2c").append(&Hand::new(), 5), hand("Ah 2c"));
    }

    #[test]
    fn append_when_matching() {
        assert_eq!(
            hand("Ah 2c").append_when(&hand("3d 4s"), 2, |_| true),
            hand("Ah 2c 3d 4s")
        );
        assert_eq!(
            hand("Th 7s").append_when(&hand("9c 6d"), 2, |_| false),
            hand("Th 7s")
        );
        assert_eq!(
            hand("Ah 2c").append_when(&hand("3d 4s"), 0, |_| true),
            hand("Ah 2c")
        );
        assert_eq!(
            hand("Ac Ad").append_when(&hand("Ah As"), 2, |c| c.rank() == Rank::Ace
                && c.suit() == Suit::Hearts),
            hand("Ac Ad Ah")
        );
    }

    #[test]
    fn sort_orders_by_rank() {
        assert_eq!(hand("6h 2c 9s 7s").sorted(), hand("2c 6h 7s 9s"));

        // No cards and one card.
        assert_eq!(Hand::new().sorted(), Hand::new());
        assert_eq!(hand("6h").sorted(), hand("6h"));

        // Lots of cards.
        assert_eq!(
            hand("5c Qd Kh 3c Ah 4d 9d 6s Jd Th 2c 7s 8h").sorted(),
            hand("2c 3c 4d 5c 6s 7s 8h 9d Th Jd Qd Kh Ah")
        );
    }

    #[test]
    fn sort_aces_high() {
        assert_eq!(hand("Ah 3s Qd").sorted(), hand("3s Qd Ah"));
    }

    #[test]
    fn sort_is_stable() {
        // Cards of equal rank keep their relative order.
        assert_eq!(
            hand("Tc 7c Th 2d Td Ts").sorted(),
            hand("2d 7c Tc Th Td Ts")
        );
    }

    #[test]
    fn sort_is_idempotent() {
        let h = hand("Tc 7c Th 2d Td Ts Ah 3s Qd");
        assert_eq!(h.sorted().sorted(), h.sorted());
    }

    #[test]
    fn hand_to_string() {
        assert_eq!(hand("Th 4h Ah 3s").to_string(), "Th 4h Ah 3s");
        assert_eq!(Hand::new().to_string(), "");
    }

    #[test]
    fn hand_parse_errors() {
        assert!("Th 4x".parse::<Hand>().is_err());
        assert!("Th 14h".parse::<Hand>().is_err());
        assert_eq!("".parse::<Hand>().unwrap(), Hand::new());
    }
}
