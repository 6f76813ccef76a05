// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Evaluation errors.
use thiserror::Error;

use showdown_cards::Card;

/// Errors returned by the evaluator, the winner resolver, and the equity
/// estimator when called with invalid cards or players.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// A card appears more than once.
    #[error("invalid hand, card {0} appears more than once")]
    InvalidHand(Card),
    /// Fewer than 5 cards to evaluate.
    #[error("insufficient cards, need at least 5 cards got {0}")]
    InsufficientCards(usize),
    /// More cards than a hand or a board can have.
    #[error("too many cards, got {0}")]
    TooManyCards(usize),
    /// The showdown board doesn't have 5 cards.
    #[error("incomplete board, need 5 community cards got {0}")]
    IncompleteBoard(usize),
    /// More players than a table can seat.
    #[error("too many players, got {0}")]
    TooManyPlayers(usize),
    /// No player is in the hand.
    #[error("no active players")]
    NoActivePlayers,
}
