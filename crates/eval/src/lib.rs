// Copyright (C) 2026 Showdown Contributors
// SPDX-License-Identifier: Apache-2.0

//! Showdown Poker hand evaluator.
//!
//! Given a pool of board and hole cards this crate finds the best five card
//! hand in it, classifies the hand into one of the ten standard categories,
//! and scores it so any two hands rank with a single integer comparison.
//!
//! Use [evaluate] to classify a pool:
//!
//! ```
//! # use showdown_eval::{Category, Hand, evaluate};
//! let pool: Hand = "5s 4h 2h 3h Ad".parse().unwrap();
//! let (category, best) = evaluate(&pool).unwrap();
//! assert_eq!(category, Category::Straight);
//! assert_eq!(best.to_string(), "Ad 2h 3h 4h 5s");
//! ```
//!
//! or [HandValue] to evaluate and compare hands in one step:
//!
//! ```
//! # use showdown_eval::{Category, Hand, HandValue};
//! let pair = HandValue::eval(&"3h 3s 7d Qc Kc".parse().unwrap()).unwrap();
//! let royal = HandValue::eval(&"Th Jh Qh Kh Ah".parse().unwrap()).unwrap();
//! assert_eq!(royal.category, Category::RoyalFlush);
//! assert!(royal > pair);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod eval;
mod score;

pub use eval::{Category, EvalError, evaluate};
pub use score::{HandValue, score};

// Reexport cards types.
pub use showdown_cards::{Card, Deck, DeckError, Hand, Rank, Suit};
