// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker cards definitions.
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// A Poker card.
///
/// Cards are ordered by rank first, the suit only breaks ties between cards
/// of the same rank so that the ordering agrees with equality.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Card {
    rank: Rank,
    suit: Suit,
}

impl Card {
    /// Create a card given a rank and suit.
    pub const fn new(rank: Rank, suit: Suit) -> Card {
        Card { rank, suit }
    }

    /// Returns the card rank.
    #[inline]
    pub const fn rank(&self) -> Rank {
        self.rank
    }

    /// Returns the card suit.
    #[inline]
    pub const fn suit(&self) -> Suit {
        self.suit
    }

    /// This card unique index in 0..52.
    #[inline]
    pub const fn index(&self) -> usize {
        self.suit as usize * 13 + self.rank as usize
    }

    /// Renders the card with the suit glyph, for example `A♠`.
    pub fn glyph(&self) -> String {
        format!("{}{}", self.rank, self.suit.glyph())
    }

    /// Parses a whitespace separated list of cards like `"As Kd 7h"`.
    pub fn parse_many(s: &str) -> Result<Vec<Card>, ParseCardError> {
        s.split_whitespace().map(str::parse).collect()
    }
}

impl fmt::Display for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.rank, self.suit)
    }
}

impl fmt::Debug for Card {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Card({}{})", self.rank, self.suit)
    }
}

impl FromStr for Card {
    type Err = ParseCardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.trim().chars();
        let (Some(r), Some(u), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(ParseCardError::Format(s.to_string()));
        };

        let rank = Rank::from_char(r).ok_or(ParseCardError::Rank(r))?;
        let suit = Suit::from_char(u).ok_or(ParseCardError::Suit(u))?;
        Ok(Card::new(rank, suit))
    }
}

/// Error returned when parsing a card from text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseCardError {
    /// The text is not a rank followed by a suit.
    #[error("invalid card '{0}', expected a rank and a suit like 'As'")]
    Format(String),
    /// Unknown rank character.
    #[error("invalid rank '{0}'")]
    Rank(char),
    /// Unknown suit character.
    #[error("invalid suit '{0}'")]
    Suit(char),
}

/// Card rank.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rank {
    /// Deuce
    Deuce = 0,
    /// Trey
    Trey,
    /// Four
    Four,
    /// Five
    Five,
    /// Six
    Six,
    /// Seven
    Seven,
    /// Eight
    Eight,
    /// Nine
    Nine,
    /// Ten
    Ten,
    /// Jack
    Jack,
    /// Queen
    Queen,
    /// King
    King,
    /// Ace
    Ace,
}

impl Rank {
    /// Returns all ranks.
    pub fn ranks() -> impl DoubleEndedIterator<Item = Rank> {
        use Rank::*;
        [
            Deuce, Trey, Four, Five, Six, Seven, Eight, Nine, Ten, Jack, Queen, King, Ace,
        ]
        .into_iter()
    }

    /// The rank numeric value, 2 for a deuce up to 14 for an ace.
    #[inline]
    pub const fn value(&self) -> u8 {
        *self as u8 + 2
    }

    /// Returns the rank for a value in 2..=14.
    pub fn from_value(value: u8) -> Option<Rank> {
        Rank::ranks().nth(value.checked_sub(2)? as usize)
    }

    /// Parses a rank character, `T`, `J`, `Q`, `K`, `A` in any case.
    pub fn from_char(c: char) -> Option<Rank> {
        let rank = match c.to_ascii_uppercase() {
            '2' => Rank::Deuce,
            '3' => Rank::Trey,
            '4' => Rank::Four,
            '5' => Rank::Five,
            '6' => Rank::Six,
            '7' => Rank::Seven,
            '8' => Rank::Eight,
            '9' => Rank::Nine,
            'T' => Rank::Ten,
            'J' => Rank::Jack,
            'Q' => Rank::Queen,
            'K' => Rank::King,
            'A' => Rank::Ace,
            _ => return None,
        };

        Some(rank)
    }
}

impl fmt::Display for Rank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rank = match self {
            Rank::Deuce => '2',
            Rank::Trey => '3',
            Rank::Four => '4',
            Rank::Five => '5',
            Rank::Six => '6',
            Rank::Seven => '7',
            Rank::Eight => '8',
            Rank::Nine => '9',
            Rank::Ten => 'T',
            Rank::Jack => 'J',
            Rank::Queen => 'Q',
            Rank::King => 'K',
            Rank::Ace => 'A',
        };

        write!(f, "{rank}")
    }
}

/// Card suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Suit {
    /// Clubs suit.
    Clubs = 0,
    /// Diamonds suit.
    Diamonds,
    /// Hearts suit.
    Hearts,
    /// Spades suit.
    Spades,
}

impl Suit {
    /// Returns all suits.
    pub fn suits() -> impl DoubleEndedIterator<Item = Suit> {
        [Suit::Clubs, Suit::Diamonds, Suit::Hearts, Suit::Spades].into_iter()
    }

    /// The suit symbol used for display.
    pub const fn glyph(&self) -> char {
        match self {
            Suit::Clubs => '♣',
            Suit::Diamonds => '♦',
            Suit::Hearts => '♥',
            Suit::Spades => '♠',
        }
    }

    /// The color the suit is painted with.
    pub const fn color(&self) -> SuitColor {
        match self {
            Suit::Diamonds | Suit::Hearts => SuitColor::Red,
            Suit::Clubs | Suit::Spades => SuitColor::Black,
        }
    }

    /// Parses a suit letter in any case or a suit glyph.
    pub fn from_char(c: char) -> Option<Suit> {
        let suit = match c.to_ascii_uppercase() {
            'C' | '♣' => Suit::Clubs,
            'D' | '♦' => Suit::Diamonds,
            'H' | '♥' => Suit::Hearts,
            'S' | '♠' => Suit::Spades,
            _ => return None,
        };

        Some(suit)
    }
}

impl fmt::Display for Suit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suit = match self {
            Suit::Clubs => 'C',
            Suit::Diamonds => 'D',
            Suit::Hearts => 'H',
            Suit::Spades => 'S',
        };

        write!(f, "{suit}")
    }
}

/// The color of a suit.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SuitColor {
    /// Hearts and diamonds.
    Red,
    /// Clubs and spades.
    Black,
}

/// A set of cards backed by a 52 bits mask.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CardSet(u64);

impl CardSet {
    /// The empty set.
    pub const EMPTY: CardSet = CardSet(0);

    /// Adds a card to the set, returns false if the card was already present.
    #[inline]
    pub fn insert(&mut self, card: Card) -> bool {
        let bit = 1u64 << card.index();
        let is_new = self.0 & bit == 0;
        self.0 |= bit;
        is_new
    }

    /// Checks if the set contains a card.
    #[inline]
    pub fn contains(&self, card: Card) -> bool {
        self.0 & (1u64 << card.index()) != 0
    }

    /// Number of cards in the set.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = CardSet::EMPTY;
        for card in iter {
            set.insert(card);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn card_index() {
        let indexes = Suit::suits()
            .flat_map(|s| Rank::ranks().map(move |r| Card::new(r, s)))
            .map(|c| c.index())
            .collect::<HashSet<_>>();

        assert_eq!(indexes.len(), 52);
        assert!(indexes.iter().all(|&idx| idx < 52));
    }

    #[test]
    fn card_to_string() {
        let c = Card::new(Rank::King, Suit::Diamonds);
        assert_eq!(c.to_string(), "KD");
        assert_eq!(c.glyph(), "K♦");

        let c = Card::new(Rank::Five, Suit::Spades);
        assert_eq!(c.to_string(), "5S");
        assert_eq!(c.glyph(), "5♠");

        let c = Card::new(Rank::Ten, Suit::Hearts);
        assert_eq!(c.to_string(), "TH");

        let c = Card::new(Rank::Ace, Suit::Clubs);
        assert_eq!(c.glyph(), "A♣");
    }

    #[test]
    fn card_from_str() {
        assert_eq!("As".parse::<Card>(), Ok(Card::new(Rank::Ace, Suit::Spades)));
        assert_eq!("TD".parse::<Card>(), Ok(Card::new(Rank::Ten, Suit::Diamonds)));
        assert_eq!("9♥".parse::<Card>(), Ok(Card::new(Rank::Nine, Suit::Hearts)));
        assert_eq!(" 2c ".parse::<Card>(), Ok(Card::new(Rank::Deuce, Suit::Clubs)));

        assert_eq!("1s".parse::<Card>(), Err(ParseCardError::Rank('1')));
        assert_eq!("Ax".parse::<Card>(), Err(ParseCardError::Suit('x')));
        assert!(matches!(
            "10h".parse::<Card>(),
            Err(ParseCardError::Format(_))
        ));
        assert!(matches!("".parse::<Card>(), Err(ParseCardError::Format(_))));

        // Display output parses back.
        for s in Suit::suits() {
            for r in Rank::ranks() {
                let c = Card::new(r, s);
                assert_eq!(c.to_string().parse::<Card>(), Ok(c));
                assert_eq!(c.glyph().parse::<Card>(), Ok(c));
            }
        }
    }

    #[test]
    fn parse_many() {
        let cards = Card::parse_many("As  Kd\t7h").unwrap();
        assert_eq!(
            cards,
            vec![
                Card::new(Rank::Ace, Suit::Spades),
                Card::new(Rank::King, Suit::Diamonds),
                Card::new(Rank::Seven, Suit::Hearts),
            ]
        );

        assert!(Card::parse_many("As Kx").is_err());
        assert!(Card::parse_many("").unwrap().is_empty());
    }

    #[test]
    fn rank_values() {
        assert_eq!(Rank::Deuce.value(), 2);
        assert_eq!(Rank::Ten.value(), 10);
        assert_eq!(Rank::Ace.value(), 14);

        for r in Rank::ranks() {
            assert_eq!(Rank::from_value(r.value()), Some(r));
        }

        assert_eq!(Rank::from_value(1), None);
        assert_eq!(Rank::from_value(15), None);
    }

    #[test]
    fn card_ordering() {
        let kd = Card::new(Rank::King, Suit::Diamonds);
        let ac = Card::new(Rank::Ace, Suit::Clubs);
        let ks = Card::new(Rank::King, Suit::Spades);

        assert!(ac > kd);
        assert!(ks > kd);
        assert_ne!(ks, kd);
    }

    #[test]
    fn suit_colors() {
        assert_eq!(Suit::Hearts.color(), SuitColor::Red);
        assert_eq!(Suit::Diamonds.color(), SuitColor::Red);
        assert_eq!(Suit::Clubs.color(), SuitColor::Black);
        assert_eq!(Suit::Spades.color(), SuitColor::Black);
    }

    #[test]
    fn card_set() {
        let mut set = CardSet::default();
        assert!(set.is_empty());

        let ah = Card::new(Rank::Ace, Suit::Hearts);
        let ad = Card::new(Rank::Ace, Suit::Diamonds);
        assert!(set.insert(ah));
        assert!(set.insert(ad));
        assert!(!set.insert(ah));

        assert_eq!(set.len(), 2);
        assert!(set.contains(ad));
        assert!(!set.contains(Card::new(Rank::Ace, Suit::Spades)));

        let set = Card::parse_many("2c 2c 3c").unwrap().into_iter().collect::<CardSet>();
        assert_eq!(set.len(), 2);
    }
}
