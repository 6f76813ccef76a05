// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! The evaluator ranks every 5 cards subset of a 5, 6, or 7 cards hand and
//! keeps the best one. A [HandValue] pairs the [HandCategory] with the ranks
//! of the five cards ordered by significance so that values compare exactly,
//! two hands are a tie only if they have the same category and kickers.
//!
//! It provides an [evaluate] function that computes a hand value, and an
//! [evaluate_with_best_hand] that also returns the five best cards, useful for
//! UIs to show a winning hand.

mod best;
pub use best::{MAX_CARDS, MIN_CARDS, evaluate, evaluate_with_best_hand};
pub(crate) use best::best_hand;

mod value;
pub use value::{HandCategory, HandValue, compare};
