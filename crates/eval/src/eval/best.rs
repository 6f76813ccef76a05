// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards hand selection.
use showdown_cards::{Card, CardSet, Rank, combinations};

use super::value::{HandCategory, HandValue};
use crate::EvalError;

/// Minimum number of cards to evaluate.
pub const MIN_CARDS: usize = 5;

/// Maximum number of cards to evaluate, two hole cards and five on the board.
pub const MAX_CARDS: usize = 7;

/// Evaluates a 5, 6, or 7 cards hand.
///
/// Every 5 cards subset of `cards` is ranked and the best value is returned.
pub fn evaluate(cards: &[Card]) -> Result<HandValue, EvalError> {
    evaluate_with_best_hand(cards).map(|(value, _)| value)
}

/// Evaluates a 5, 6, or 7 cards hand and returns the five cards that make the
/// best hand, ordered by significance like the value kickers.
pub fn evaluate_with_best_hand(cards: &[Card]) -> Result<(HandValue, [Card; 5]), EvalError> {
    validate(cards)?;
    Ok(best_hand(cards))
}

/// Checks a hand size is 5..=7 and that it has no duplicate cards.
fn validate(cards: &[Card]) -> Result<(), EvalError> {
    if cards.len() < MIN_CARDS {
        return Err(EvalError::InsufficientCards(cards.len()));
    }

    if cards.len() > MAX_CARDS {
        return Err(EvalError::TooManyCards(cards.len()));
    }

    let mut seen = CardSet::EMPTY;
    match cards.iter().find(|&&c| !seen.insert(c)) {
        Some(&card) => Err(EvalError::InvalidHand(card)),
        None => Ok(()),
    }
}

/// Finds the best five cards of a validated hand.
///
/// Panics if there are fewer than 5 cards.
pub(crate) fn best_hand(cards: &[Card]) -> (HandValue, [Card; 5]) {
    let mut best = rank_five([cards[0], cards[1], cards[2], cards[3], cards[4]]);

    let n = cards.len();
    combinations::for_each_combination(n, 5, 1, combinations::binomial(n, 5), |p| {
        let hand = [cards[p[0]], cards[p[1]], cards[p[2]], cards[p[3]], cards[p[4]]];
        let candidate = rank_five(hand);
        if candidate.0 > best.0 {
            best = candidate;
        }
    });

    best
}

/// Ranks exactly five cards.
///
/// Returns the hand value and the cards sorted so that their ranks match the
/// value kickers.
fn rank_five(cards: [Card; 5]) -> (HandValue, [Card; 5]) {
    let mut counts = [0u8; 13];
    for c in &cards {
        counts[c.rank() as usize] += 1;
    }

    // Largest groups first, higher ranks first within groups of equal size.
    let count = |c: &Card| counts[c.rank() as usize];
    let mut sorted = cards;
    sorted.sort_unstable_by(|a, b| {
        count(b)
            .cmp(&count(a))
            .then(b.rank().cmp(&a.rank()))
            .then(b.suit().cmp(&a.suit()))
    });

    let is_flush = cards.iter().all(|c| c.suit() == cards[0].suit());
    let is_distinct = counts.iter().all(|&c| c <= 1);
    let is_wheel = is_distinct
        && sorted.map(|c| c.rank()) == [Rank::Ace, Rank::Five, Rank::Four, Rank::Trey, Rank::Deuce];

    if is_wheel {
        // The ace plays low.
        sorted.rotate_left(1);
    }

    let is_straight =
        is_wheel || (is_distinct && sorted[0].rank() as u8 - sorted[4].rank() as u8 == 4);

    let kickers = sorted.map(|c| c.rank());
    let category = match (is_straight, is_flush) {
        (true, true) if kickers[0] == Rank::Ace => HandCategory::RoyalFlush,
        (true, true) => HandCategory::StraightFlush,
        (false, true) => HandCategory::Flush,
        (true, false) => HandCategory::Straight,
        (false, false) => match (count(&sorted[0]), count(&sorted[3])) {
            (4, _) => HandCategory::FourOfAKind,
            (3, 2) => HandCategory::FullHouse,
            (3, _) => HandCategory::ThreeOfAKind,
            (2, 2) => HandCategory::TwoPair,
            (2, _) => HandCategory::Pair,
            _ => HandCategory::HighCard,
        },
    };

    (HandValue::new(category, kickers), sorted)
}
