// Copyright (C) 2026 Showdown Contributors
// SPDX-License-Identifier: Apache-2.0

//! A deck of 52 playing cards, in the classic [french-suited style].
//!
//! A [Deck] is a caller owned value, so independent games and tests can run
//! concurrently without sharing state.
//!
//! [french-suited style]: https://en.wikipedia.org/wiki/French-suited_playing_cards
use rand::prelude::*;

use crate::{Card, Hand, Rank, Suit};

/// Error dealing cards from a [Deck].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DeckError {
    /// The deck holds fewer cards than requested.
    #[error("cannot take {requested} cards, only {remaining} remain in the deck")]
    NotEnoughCards {
        /// Number of cards requested.
        requested: usize,
        /// Number of cards left in the deck.
        remaining: usize,
    },
}

/// A deck of playing cards.
#[derive(Debug, Clone)]
pub struct Deck {
    cards: Vec<Card>,
}

impl Deck {
    /// The number of cards in a full deck.
    pub const SIZE: usize = 52;

    /// Creates a full deck in a fixed suit major order.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new shuffled deck.
    pub fn new_and_shuffled<R: Rng>(rng: &mut R) -> Self {
        let mut deck = Self::default();
        deck.shuffle(rng);
        deck
    }

    /// Shuffles the remaining cards.
    pub fn shuffle<R: Rng>(&mut self, rng: &mut R) {
        self.cards.shuffle(rng);
    }

    /// Takes the top n cards from the deck.
    ///
    /// Fails with [DeckError::NotEnoughCards] when fewer than n cards remain.
    pub fn take(&mut self, n: usize) -> Result<Hand, DeckError> {
        if n > self.cards.len() {
            return Err(DeckError::NotEnoughCards {
                requested: n,
                remaining: self.cards.len(),
            });
        }

        Ok(self.cards.drain(..n).collect())
    }

    /// Number of cards left in the deck.
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }
}

impl Default for Deck {
    fn default() -> Self {
        let cards = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
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
