// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Showdown winners resolution.
use log::debug;
use serde::{Deserialize, Serialize};
use std::fmt;

use showdown_cards::{Card, CardSet};

use crate::{
    EvalError,
    eval::{self, HandValue},
};

/// Number of community cards at showdown.
pub const BOARD_SIZE: usize = 5;

/// A player hole cards in a hand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerHand<Id> {
    /// The player identifier.
    pub player_id: Id,
    /// The player private cards.
    pub hole_cards: [Card; 2],
    /// False if the player has folded.
    pub is_active: bool,
}

impl<Id> PlayerHand<Id> {
    /// Creates an active player hand.
    pub fn new(player_id: Id, hole_cards: [Card; 2]) -> Self {
        Self {
            player_id,
            hole_cards,
            is_active: true,
        }
    }

    /// Marks this hand as folded.
    pub fn fold(&mut self) {
        self.is_active = false;
    }

    /// Evaluates the player hole cards with a 3, 4, or 5 cards board.
    ///
    /// This can be used before the river to show a player the current hand.
    pub fn evaluate_on(&self, board: &[Card]) -> Result<HandValue, EvalError> {
        self.best_hand_on(board).map(|(value, _)| value)
    }

    fn best_hand_on(&self, board: &[Card]) -> Result<(HandValue, [Card; 5]), EvalError> {
        let mut cards = Vec::with_capacity(self.hole_cards.len() + board.len());
        cards.extend_from_slice(&self.hole_cards);
        cards.extend_from_slice(board);
        eval::evaluate_with_best_hand(&cards)
    }
}

/// A player hand at showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShowdownHand<Id> {
    /// The player identifier.
    pub player_id: Id,
    /// The player hand value.
    pub value: HandValue,
    /// The five cards that make the hand ordered by significance.
    pub cards: [Card; 5],
}

/// The result of a showdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Showdown<Id> {
    /// The players with the best hand in the order they were given.
    pub winners: Vec<Id>,
    /// The winning hand value.
    pub value: HandValue,
    /// The hands of all active players.
    pub hands: Vec<ShowdownHand<Id>>,
}

impl<Id> Showdown<Id> {
    /// Checks if more than one player won the pot.
    pub fn is_split_pot(&self) -> bool {
        self.winners.len() > 1
    }
}

/// Finds the winners amongst the active players.
///
/// All active players whose hand value equals the best value win, more than
/// one winner means a split pot.
pub fn resolve_winners<Id>(
    players: &[PlayerHand<Id>],
    community: &[Card],
) -> Result<Showdown<Id>, EvalError>
where
    Id: Clone + fmt::Display,
{
    if community.len() != BOARD_SIZE {
        return Err(EvalError::IncompleteBoard(community.len()));
    }

    let active = players.iter().filter(|p| p.is_active);

    // A card can only be dealt once.
    let mut dealt = CardSet::EMPTY;
    let all_cards = community.iter().chain(active.clone().flat_map(|p| &p.hole_cards));
    for &card in all_cards {
        if !dealt.insert(card) {
            return Err(EvalError::InvalidHand(card));
        }
    }

    let hands = active
        .map(|p| {
            let (value, cards) = p.best_hand_on(community)?;
            debug!("Player {} shows {value}", p.player_id);

            Ok(ShowdownHand {
                player_id: p.player_id.clone(),
                value,
                cards,
            })
        })
        .collect::<Result<Vec<_>, EvalError>>()?;

    let value = hands
        .iter()
        .map(|h| h.value)
        .max()
        .ok_or(EvalError::NoActivePlayers)?;

    let winners = hands
        .iter()
        .filter(|h| h.value == value)
        .map(|h| h.player_id.clone())
        .collect::<Vec<_>>();

    debug!(
        "Showdown won by {} with {value}",
        winners
            .iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    );

    Ok(Showdown {
        winners,
        value,
        hands,
    })
}
