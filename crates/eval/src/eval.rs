// Copyright (C) 2026 Showdown Contributors
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! [evaluate] finds the best five card hand in a pool of board and hole
//! cards. See the [hand values] table for the categories it classifies.
//!
//! [hand values]: https://en.wikipedia.org/wiki/Texas_hold_%27em#Hand_values
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Card, Hand, Rank, Suit};

/// The ten hand categories, weakest first.
///
/// The discriminants double as the scorer's category weights, so the
/// derived ordering matches the scoring order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    /// No better category, the highest card plays.
    HighCard = 0,
    /// Two cards of one rank.
    Pair,
    /// Two cards each of two ranks.
    TwoPairs,
    /// Three cards of one rank.
    ThreeOfAKind,
    /// Five consecutive ranks.
    Straight,
    /// Five cards of one suit.
    Flush,
    /// A three of a kind and a pair.
    FullHouse,
    /// Four cards of one rank.
    FourOfAKind,
    /// A straight in one suit.
    StraightFlush,
    /// A ten to ace straight in one suit.
    RoyalFlush,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::HighCard => "High Card",
            Category::Pair => "Pair",
            Category::TwoPairs => "Two Pairs",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        };

        write!(f, "{name}")
    }
}

/// Error evaluating a pool of cards.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    /// The pool holds fewer than five cards.
    #[error("cannot evaluate a pool of {found} cards, at least 5 are required")]
    PoolTooSmall {
        /// Number of cards in the pool.
        found: usize,
    },
}

/// Returns the best five card hand that can be built from the pool.
///
/// The pool is the player's hole cards combined with the board, at least
/// five cards; larger pools are fine. The caller must not pass duplicate
/// cards, dealing from a single [Deck](showdown_cards::Deck) guarantees
/// that.
///
/// Straights are returned in ascending run order; every other category
/// leads with its defining cards followed by kickers in descending order.
/// The scorer relies on this ordering.
pub fn evaluate(pool: &Hand) -> Result<(Category, Hand), EvalError> {
    if pool.len() < 5 {
        return Err(EvalError::PoolTooSmall { found: pool.len() });
    }

    // Analysis phase. Group the sorted pool by rank and by suit; the
    // groups drive the run detection and the multiple scans below. Every
    // tie-break scan walks the sorted hand or the first-seen rank list,
    // never a map, to keep the outcome deterministic.
    let sorted = pool.sorted();

    let mut cards_by_rank: AHashMap<Rank, Vec<Card>> = AHashMap::new();
    let mut cards_by_suit: AHashMap<Suit, Vec<Card>> = AHashMap::new();
    let mut sorted_ranks: Vec<Rank> = Vec::new();

    for &card in sorted.iter() {
        cards_by_suit.entry(card.suit()).or_default().push(card);

        let by_rank = cards_by_rank.entry(card.rank()).or_default();
        if by_rank.is_empty() {
            sorted_ranks.push(card.rank());
        }
        by_rank.push(card);
    }

    let favoured = favoured_suit(&sorted);

    // Pairs, triples and quadruples, highest rank first. The first-seen
    // ranks are ascending, so prepending keeps the highest at the front.
    let mut pairs: Vec<Rank> = Vec::new();
    let mut triples: Vec<Rank> = Vec::new();
    let mut quadruples: Vec<Rank> = Vec::new();
    for &rank in &sorted_ranks {
        match cards_by_rank[&rank].len() {
            4 => quadruples.insert(0, rank),
            3 => triples.insert(0, rank),
            2 => pairs.insert(0, rank),
            _ => {}
        }
    }

    // Find consecutive ranks, five is a straight. Aces are both low and
    // high: when present the ace is re-injected before the two, and a run
    // ending at the king may extend into it. Each position prefers the
    // favoured suit so a straight flush is not missed.
    let mut scan = sorted_ranks.clone();
    if scan.last() == Some(&Rank::Ace) {
        scan.insert(0, Rank::Ace);
    }

    let mut run: Vec<Card> = Vec::new();
    let mut last_rank: Option<Rank> = None;
    for (i, &rank) in scan.iter().enumerate() {
        let candidates = &cards_by_rank[&rank];

        if last_rank.is_none_or(|prev| follows(prev, rank)) {
            run.push(first_favouring(candidates, favoured));
            last_rank = Some(rank);
            continue;
        }

        // Check if a better straight, or one at all, is still possible.
        if scan.len() - i < 5 {
            break;
        }

        // Not consecutive, restart the run.
        run = vec![first_favouring(candidates, favoured)];
        last_rank = Some(rank);
    }

    // The final five are the highest.
    if run.len() > 5 {
        run.drain(..run.len() - 5);
    }

    let straight = run.len() == 5;
    let suited = straight && run.iter().all(|c| c.suit() == run[0].suit());

    // The kickers, highest card first.
    let kickers = sorted.iter().rev().copied().collect::<Hand>();

    // Selection phase, strongest category first.
    if suited && run[4].rank() == Rank::Ace {
        return Ok((Category::RoyalFlush, Hand::from(run)));
    }

    if suited {
        return Ok((Category::StraightFlush, Hand::from(run)));
    }

    if let Some(rank) = quadruples.first() {
        let cards = cards_by_rank[rank].clone();
        return Ok((Category::FourOfAKind, add_kickers(cards, &kickers)));
    }

    if let (Some(triple), Some(pair)) = (triples.first(), pairs.first()) {
        let mut cards = cards_by_rank[triple].clone();
        cards.extend_from_slice(&cards_by_rank[pair]);
        return Ok((Category::FullHouse, Hand::from(cards)));
    }

    // The best five cards of the favoured suit, best first.
    let suit_cards = &cards_by_suit[&favoured];
    if suit_cards.len() >= 5 {
        let cards = suit_cards.iter().rev().take(5).copied().collect();
        return Ok((Category::Flush, cards));
    }

    if straight {
        return Ok((Category::Straight, Hand::from(run)));
    }

    if let Some(rank) = triples.first() {
        let cards = cards_by_rank[rank].clone();
        return Ok((Category::ThreeOfAKind, add_kickers(cards, &kickers)));
    }

    // With three pair ranks in a six or seven card pool the two highest
    // play.
    if let [first, second, ..] = pairs[..] {
        let mut cards = cards_by_rank[&first].clone();
        cards.extend_from_slice(&cards_by_rank[&second]);
        return Ok((Category::TwoPairs, add_kickers(cards, &kickers)));
    }

    if let Some(rank) = pairs.first() {
        let cards = cards_by_rank[rank].clone();
        return Ok((Category::Pair, add_kickers(cards, &kickers)));
    }

    Ok((Category::HighCard, kickers.take(5)))
}

/// Returns the most common suit in the hand.
///
/// In the event of a draw the last suit seen wins. The draw is immaterial:
/// five of a suit are needed for a flush, so two suits can never both
/// reach five in a seven card pool.
fn favoured_suit(sorted: &Hand) -> Suit {
    let mut counts: AHashMap<Suit, usize> = AHashMap::new();
    let mut favoured = sorted[0].suit();
    let mut max_count = 0;

    for &card in sorted.iter() {
        let count = counts.entry(card.suit()).or_insert(0);
        *count += 1;

        // No other suit can reach this count.
        if *count > sorted.len() / 2 + 1 {
            return card.suit();
        }

        if *count >= max_count {
            max_count = *count;
            favoured = card.suit();
        }
    }

    favoured
}

/// True when rank directly follows prev, with the ace following the king.
fn follows(prev: Rank, rank: Rank) -> bool {
    rank as u8 == prev as u8 + 1 || (prev == Rank::King && rank == Rank::Ace)
}

/// The first card matching the favoured suit, or the first card when none
/// match.
fn first_favouring(cards: &[Card], suit: Suit) -> Card {
    cards
        .iter()
        .copied()
        .find(|c| c.suit() == suit)
        .unwrap_or(cards[0])
}

/// Pads the hand with the highest kickers not already in it.
fn add_kickers(cards: Vec<Card>, kickers: &Hand) -> Hand {
    let hand = Hand::from(cards);
    let required = 5 - hand.len();
    hand.append_when(kickers, required, |c| !hand.contains(c))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    fn hand(codes: &str) -> Hand {
        codes.parse().unwrap()
    }

    fn check(pool: &str, category: Category, best: &str) {
        let (actual_category, actual_best) = evaluate(&hand(pool)).unwrap();
        assert_eq!(actual_category, category, "pool {pool}");
        assert_eq!(actual_best, hand(best), "pool {pool}");
    }

    #[test]
    fn high_card() {
        check("3s 5d 7c 9s Th", Category::HighCard, "Th 9s 7c 5d 3s");
        check("3s 5d 7c 9s Th 2d Jc", Category::HighCard, "Jc Th 9s 7c 5d");
    }

    #[test]
    fn pair() {
        check("3h 3s 7d Qc Kc", Category::Pair, "3h 3s Kc Qc 7d");
        check("As 4c 7s 9d Qc 9h", Category::Pair, "9d 9h As Qc 7s");
    }

    #[test]
    fn two_pairs() {
        check("2h 2d 7c 3c 3s", Category::TwoPairs, "3c 3s 2h 2d 7c");
    }

    #[test]
    fn two_pairs_with_three_pair_ranks() {
        // The two highest pairs play.
        check("2h 2d 7c 7s Kc Ks 4d", Category::TwoPairs, "Kc Ks 7c 7s 4d");
    }

    #[test]
    fn three_of_a_kind() {
        check("2d 2h 2s Qs 9c", Category::ThreeOfAKind, "2d 2h 2s Qs 9c");
    }

    #[test]
    fn straight() {
        check("6h 7s 8h 9c Tc", Category::Straight, "6h 7s 8h 9c Tc");
    }

    #[test]
    fn straight_aces_low() {
        check("5s 4h 2h 3h Ad", Category::Straight, "Ad 2h 3h 4h 5s");
    }

    #[test]
    fn straight_aces_high() {
        check("Ac Tc Qs Jc Kd", Category::Straight, "Tc Jc Qs Kd Ac");
    }

    #[test]
    fn straight_at_start_of_pool() {
        check("5h 3h 2s Ac 4s 8c 9d", Category::Straight, "Ac 2s 3h 4s 5h");
    }

    #[test]
    fn straight_takes_highest_run() {
        // Several overlapping straights, the highest five play.
        check("2s 3s 4d 5c 6s 7d 8d 9h", Category::Straight, "5c 6s 7d 8d 9h");
    }

    #[test]
    fn flush() {
        check("3c 7c 9c Tc Kc", Category::Flush, "Kc Tc 9c 7c 3c");
    }

    #[test]
    fn flush_trims_to_best_five() {
        check("3c 7c 9c Tc Kc 2c Qd", Category::Flush, "Kc Tc 9c 7c 3c");
    }

    #[test]
    fn flush_beats_straight() {
        check("2h 5h 9h Jh Kh 3s 4s", Category::Flush, "Kh Jh 9h 5h 2h");
    }

    #[test]
    fn full_house() {
        check("Ad Ah As Ts Td", Category::FullHouse, "Ad Ah As Ts Td");
        check("Ts Td Ad Ah As 2c 2d", Category::FullHouse, "Ad Ah As Ts Td");
    }

    #[test]
    fn four_of_a_kind() {
        check("4c 4d 4s 4h 5c", Category::FourOfAKind, "4c 4d 4s 4h 5c");
        check("2d 4c 4d 4s 4h Jc", Category::FourOfAKind, "4c 4d 4s 4h Jc");
    }

    #[test]
    fn straight_flush() {
        check("6s 7s 8s 9s Ts", Category::StraightFlush, "6s 7s 8s 9s Ts");

        // The favoured suit keeps the straight flush visible next to an
        // offsuit card of the same rank.
        check(
            "6s 7s 8s 9s Ts 9d 2d",
            Category::StraightFlush,
            "6s 7s 8s 9s Ts",
        );
    }

    #[test]
    fn straight_flush_aces_low() {
        // The steel wheel is a straight flush, not a royal flush.
        check("Ah 2h 3h 4h 5h Kh", Category::StraightFlush, "Ah 2h 3h 4h 5h");
    }

    #[test]
    fn royal_flush() {
        check("Th Jh Qh Kh Ah", Category::RoyalFlush, "Th Jh Qh Kh Ah");
        check("Th Jh Qh Kh Ah 2c 3d", Category::RoyalFlush, "Th Jh Qh Kh Ah");
    }

    #[test]
    fn pool_too_small() {
        let err = evaluate(&hand("3s 5d 7c 9s")).unwrap_err();
        assert_eq!(err, EvalError::PoolTooSmall { found: 4 });
        assert_eq!(
            err.to_string(),
            "cannot evaluate a pool of 4 cards, at least 5 are required"
        );

        assert!(evaluate(&Hand::new()).is_err());
    }

    #[test]
    fn best_hand_is_five_cards_from_the_pool() {
        let pools = [
            "3s 5d 7c 9s Th",
            "3h 3s 7d Qc Kc",
            "2h 2d 7c 7s Kc Ks 4d",
            "5h 3h 2s Ac 4s 8c 9d",
            "2s 3s 4d 5c 6s 7d 8d 9h",
            "3c 7c 9c Tc Kc 2c Qd",
            "Ts Td Ad Ah As 2c 2d",
            "Th Jh Qh Kh Ah 2c 3d",
        ];

        for pool in pools {
            let pool = hand(pool);
            let (_, best) = evaluate(&pool).unwrap();

            assert_eq!(best.len(), 5, "pool {pool}");
            assert!(best.iter().all(|c| pool.contains(*c)), "pool {pool}");

            let unique = best.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 5, "pool {pool}");
        }
    }

    #[test]
    fn evaluates_random_deals() {
        let mut rng = rand::rng();

        for _ in 0..500 {
            let mut deck = showdown_cards::Deck::new_and_shuffled(&mut rng);
            let pool = deck.take(7).unwrap();
            let (_, best) = evaluate(&pool).unwrap();

            assert_eq!(best.len(), 5, "pool {pool}");
            assert!(best.iter().all(|c| pool.contains(*c)), "pool {pool}");

            let unique = best.iter().collect::<HashSet<_>>();
            assert_eq!(unique.len(), 5, "pool {pool}");
        }
    }

    #[test]
    fn pool_order_does_not_change_the_outcome() {
        let pools = [
            "3h 3s 7d Qc Kc",
            "2s 3s 4d 5c 6s 7d 8d 9h",
            "3c 7c 9c Tc Kc 2c Qd",
            "Th Jh Qh Kh Ah 2c 3d",
        ];

        for pool in pools {
            let pool = hand(pool);
            let reversed = pool.iter().rev().copied().collect::<Hand>();

            let (category, best) = evaluate(&pool).unwrap();
            let (rev_category, rev_best) = evaluate(&reversed).unwrap();

            assert_eq!(category, rev_category, "pool {pool}");
            assert_eq!(
                crate::score(category, &best),
                crate::score(rev_category, &rev_best),
                "pool {pool}"
            );
        }
    }
}
