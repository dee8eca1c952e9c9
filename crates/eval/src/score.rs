// Copyright (C) 2026 Showdown Contributors
// SPDX-License-Identifier: Apache-2.0

//! Hand scoring.
//!
//! Turns an evaluated hand into a single integer so two hands compare with
//! one numeric comparison.
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::{Category, EvalError, evaluate};
use showdown_cards::Hand;

/// Scores a five card hand, bigger is better.
///
/// The score is a base 100 positional number. The category is the most
/// significant component, followed by the rank value of every card from
/// the first down to the last:
///
/// ```text
/// category * 100^5 + value(hand[0]) * 100^4 + .. + value(hand[4])
/// ```
///
/// where a rank value is Two=2 through King=13 and Ace=14. Any hand of a
/// higher category therefore outranks every hand of a lower one, and
/// within a category earlier cards dominate later ones, so hands must be
/// assembled best cards first, as [evaluate] does.
///
/// # Panics
///
/// Panics when the hand does not hold exactly five cards. The evaluator
/// always produces five, so anything else is an evaluator defect.
pub fn score(category: Category, hand: &Hand) -> i64 {
    assert_eq!(
        hand.len(),
        5,
        "cannot score hand {hand}, expected 5 cards but found {}",
        hand.len()
    );

    let mut score = 0i64;
    let mut multiplier = 1i64;
    for i in (0..hand.len()).rev() {
        score += i64::from(hand[i].rank().value()) * multiplier;
        multiplier *= 100;
    }

    score + (category as i64) * multiplier
}

/// The evaluated value of a pool of cards.
///
/// Holds the category, the best five card hand, and the score. Values
/// compare by score alone, the way a showdown does, so two values built
/// from different cards can compare equal.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HandValue {
    /// The hand category.
    pub category: Category,
    /// The best five card hand found in the pool.
    pub hand: Hand,
    /// The score, directly comparable between any two values.
    pub score: i64,
}

impl HandValue {
    /// Evaluates and scores the best hand available from a pool of cards.
    pub fn eval(pool: &Hand) -> Result<HandValue, EvalError> {
        let (category, hand) = evaluate(pool)?;
        let score = score(category, &hand);

        Ok(HandValue {
            category,
            hand,
            score,
        })
    }
}

impl PartialEq for HandValue {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score
    }
}

impl Eq for HandValue {}

impl PartialOrd for HandValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HandValue {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score.cmp(&other.score)
    }
}
