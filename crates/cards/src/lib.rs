// Copyright (C) 2026 Showdown Contributors
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker cards types.
//!
//! This crate defines the card primitives the evaluator is built on: an
//! immutable [Card] with its [Rank] and [Suit], the [Hand] container with
//! pure sort/take/append operations, and a caller owned [Deck] for shuffling
//! and dealing.
//!
//! Cards can be created directly or parsed from short codes:
//!
//! ```
//! # use showdown_cards::{Card, Hand, Rank, Suit};
//! let qh = Card::new(Rank::Queen, Suit::Hearts);
//! assert_eq!(qh.to_string(), "Queen of Hearts");
//! assert_eq!("Qh".parse::<Card>(), Ok(qh));
//!
//! let hand: Hand = "3h Ts Qh".parse().unwrap();
//! assert_eq!(hand.len(), 3);
//! assert_eq!(hand[2], qh);
//! ```
//!
//! A [Deck] deals hands and reports exhaustion with a typed error:
//!
//! ```
//! # use showdown_cards::{Deck, DeckError};
//! let mut deck = Deck::new_and_shuffled(&mut rand::rng());
//! let pool = deck.take(7).unwrap();
//! assert_eq!(pool.len(), 7);
//! assert_eq!(deck.remaining(), Deck::SIZE - 7);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod card;
mod deck;
mod hand;

pub use card::{Card, Rank, Suit};
pub use deck::{Deck, DeckError};
pub use hand::Hand;

/// Error parsing a card from a short code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseCardError {
    /// The code is not two characters long.
    #[error("invalid card code {0:?}, expected rank and suit characters")]
    InvalidCode(String),
    /// The rank character is not one of `2..9TJQKA`.
    #[error("invalid rank character {0:?}")]
    InvalidRank(char),
    /// The suit character is not one of `cdhs`.
    #[error("invalid suit character {0:?}")]
    InvalidSuit(char),
}
