// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand categories and comparable hand values.
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};

use showdown_cards::Rank;

/// The category of a five cards hand.
///
/// Variants are declared from the weakest to the strongest so that the derived
/// ordering ranks categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HandCategory {
    /// No pair.
    HighCard = 0,
    /// One pair.
    Pair,
    /// Two pairs.
    TwoPair,
    /// Three cards of the same rank.
    ThreeOfAKind,
    /// Five cards in sequence.
    Straight,
    /// Five cards of the same suit.
    Flush,
    /// Three of a kind and a pair.
    FullHouse,
    /// Four cards of the same rank.
    FourOfAKind,
    /// A straight with all cards of the same suit.
    StraightFlush,
    /// An ace high straight flush.
    RoyalFlush,
}

impl HandCategory {
    /// Number of categories.
    pub const COUNT: usize = 10;

    /// Returns all categories from the weakest to the strongest.
    pub fn categories() -> impl DoubleEndedIterator<Item = HandCategory> {
        use HandCategory::*;
        [
            HighCard,
            Pair,
            TwoPair,
            ThreeOfAKind,
            Straight,
            Flush,
            FullHouse,
            FourOfAKind,
            StraightFlush,
            RoyalFlush,
        ]
        .into_iter()
    }

    /// A human readable label.
    pub const fn label(&self) -> &'static str {
        match self {
            HandCategory::HighCard => "High Card",
            HandCategory::Pair => "Pair",
            HandCategory::TwoPair => "Two Pair",
            HandCategory::ThreeOfAKind => "Three of a Kind",
            HandCategory::Straight => "Straight",
            HandCategory::Flush => "Flush",
            HandCategory::FullHouse => "Full House",
            HandCategory::FourOfAKind => "Four of a Kind",
            HandCategory::StraightFlush => "Straight Flush",
            HandCategory::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for HandCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The value of a five cards hand.
///
/// A value is a hand category and the ranks of the five cards ordered by
/// significance, values are compared by category first and then by the ranks.
/// Two hands with equal values split the pot.
///
/// The kickers layout is:
///
/// ```text
///   FourOfAKind     [quad, quad, quad, quad, kicker]
///   FullHouse       [trip, trip, trip, pair, pair]
///   ThreeOfAKind    [trip, trip, trip, kicker, kicker]
///   TwoPair         [high, high, low, low, kicker]
///   Pair            [pair, pair, kicker, kicker, kicker]
///   Others          five ranks in descending order
/// ```
///
/// The wheel straight A-2-3-4-5 is the only exception to the descending order
/// as the ace plays low: its kickers are `[5, 4, 3, 2, A]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct HandValue {
    category: HandCategory,
    kickers: [Rank; 5],
}

impl HandValue {
    /// Creates a hand value from a category and its kickers.
    pub const fn new(category: HandCategory, kickers: [Rank; 5]) -> Self {
        Self { category, kickers }
    }

    /// The hand category.
    #[inline]
    pub const fn category(&self) -> HandCategory {
        self.category
    }

    /// The hand ranks ordered by significance.
    #[inline]
    pub const fn kickers(&self) -> &[Rank; 5] {
        &self.kickers
    }

    /// The rank that defines the hand, the top of a straight or the rank of
    /// the largest group.
    pub const fn high_rank(&self) -> Rank {
        self.kickers[0]
    }
}

impl fmt::Display for HandValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [k0, k1, k2, k3, k4] = self.kickers;
        write!(f, "{} ({k0} {k1} {k2} {k3} {k4})", self.category)
    }
}

/// Compares two hand values, category first then kickers.
#[inline]
pub fn compare(a: &HandValue, b: &HandValue) -> Ordering {
    a.cmp(b)
}

#[cfg(test)]
mod tests {
    use super::*;
    use showdown_cards::Rank::*;

    #[test]
    fn category_order() {
        let categories = HandCategory::categories().collect::<Vec<_>>();
        assert_eq!(categories.len(), HandCategory::COUNT);
        assert!(categories.windows(2).all(|w| w[0] < w[1]));

        assert!(HandCategory::RoyalFlush > HandCategory::StraightFlush);
        assert!(HandCategory::FullHouse > HandCategory::Flush);
        assert!(HandCategory::Pair > HandCategory::HighCard);
    }

    #[test]
    fn category_labels() {
        assert_eq!(HandCategory::FullHouse.to_string(), "Full House");
        assert_eq!(HandCategory::RoyalFlush.label(), "Royal Flush");
        assert_eq!(HandCategory::ThreeOfAKind.label(), "Three of a Kind");
    }

    #[test]
    fn category_beats_kickers() {
        let pair = HandValue::new(HandCategory::Pair, [Ace, Ace, King, Queen, Jack]);
        let two_pair = HandValue::new(HandCategory::TwoPair, [Trey, Trey, Deuce, Deuce, Four]);
        assert_eq!(compare(&two_pair, &pair), Ordering::Greater);
        assert_eq!(compare(&pair, &two_pair), Ordering::Less);
    }

    #[test]
    fn kickers_break_ties() {
        let a = HandValue::new(HandCategory::Pair, [Nine, Nine, Ace, Seven, Deuce]);
        let b = HandValue::new(HandCategory::Pair, [Nine, Nine, Ace, Six, Five]);
        assert_eq!(compare(&a, &b), Ordering::Greater);
        assert_eq!(compare(&a, &a), Ordering::Equal);
        assert_eq!(compare(&b, &b), Ordering::Equal);
    }

    #[test]
    fn value_display() {
        let v = HandValue::new(HandCategory::FullHouse, [King, King, King, Nine, Nine]);
        assert_eq!(v.to_string(), "Full House (K K K 9 9)");
        assert_eq!(v.high_rank(), King);
    }
}
