// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hold'em Showdown hand evaluator.
//!
//! Poker hand evaluator for 5, 6 and 7 cards hands. The evaluator looks at
//! every 5 cards subset of a hand and keeps the best [HandValue], a value is a
//! [HandCategory] and the kickers needed to break ties so that two hands
//! compare equal only when they split the pot.
//!
//! To use the evaluator create a hand and use [evaluate] to get its value:
//!
//! ```
//! # use showdown_eval::*;
//! let v1 = evaluate(&Card::parse_many("Ah Ad Kc 7s 2d").unwrap()).unwrap();
//! let v2 = evaluate(&Card::parse_many("Ah Ad Qc 7s 2d 3h").unwrap()).unwrap();
//! assert_eq!(v1.category(), HandCategory::Pair);
//! assert!(v1 > v2);
//! ```
//!
//! At showdown [resolve_winners] evaluates the hands of the active players and
//! returns all the players with the best hand:
//!
//! ```
//! # use showdown_eval::*;
//! let board = Card::parse_many("Ts Js Qs Ks 2c").unwrap();
//! let players = [
//!     PlayerHand::new("alice", ["As".parse().unwrap(), "9d".parse().unwrap()]),
//!     PlayerHand::new("bob", ["9s".parse().unwrap(), "8s".parse().unwrap()]),
//! ];
//!
//! let showdown = resolve_winners(&players, &board).unwrap();
//! assert_eq!(showdown.winners, vec!["alice"]);
//! assert_eq!(showdown.value.category(), HandCategory::RoyalFlush);
//! ```
//!
//! The [equity] module computes the players share of the pot before the river,
//! the **`parallel`** feature runs the Monte Carlo estimation on multiple
//! threads.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod equity;
pub use equity::{Equity, EquityConfig, estimate_equity, exact_equity};

mod error;
pub use error::EvalError;

pub mod eval;
pub use eval::{HandCategory, HandValue, compare, evaluate, evaluate_with_best_hand};

pub mod showdown;
pub use showdown::{PlayerHand, Showdown, ShowdownHand, resolve_winners};

// Reexport cards types.
pub use showdown_cards::{Card, CardSet, Deck, ParseCardError, Rank, Suit, SuitColor};
