// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands equity.
//!
//! Computes each player share of the pot over the possible completions of a
//! partial board, either by enumerating every completion with [exact_equity]
//! or by sampling random completions with [estimate_equity].
//!
//! ```
//! # use showdown_eval::*;
//! let holes = [
//!     [Card::new(Rank::Ace, Suit::Hearts), Card::new(Rank::Ace, Suit::Spades)],
//!     [Card::new(Rank::King, Suit::Clubs), Card::new(Rank::King, Suit::Diamonds)],
//! ];
//! let board = Card::parse_many("2c 7d 9s").unwrap();
//!
//! let equities = exact_equity(&holes, &board).unwrap();
//! assert!(equities[0].equity() > 0.85);
//! ```
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use showdown_cards::{Card, CardSet, Deck, Rank, Suit};

use crate::{EvalError, eval, showdown::BOARD_SIZE};

/// Maximum number of players at a table.
pub const MAX_PLAYERS: usize = 10;

// Split pots are counted in units that divide evenly for up to MAX_PLAYERS
// winners (least common multiple of 1..=10).
const SHARE_UNITS: u64 = 2520;

/// Monte Carlo estimation parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EquityConfig {
    /// Number of parallel tasks, used with the `parallel` feature.
    pub num_tasks: usize,
    /// Number of boards sampled by each task.
    pub samples_per_task: usize,
}

impl Default for EquityConfig {
    fn default() -> Self {
        Self {
            num_tasks: 4,
            samples_per_task: 25_000,
        }
    }
}

/// A player equity.
#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Equity {
    /// Number of boards evaluated.
    pub games: u64,
    /// Number of boards won outright.
    pub wins: u64,
    /// Number of boards with a split pot.
    pub ties: u64,
    /// Pot share summed over all boards, a k-ways split counts as 1/k.
    pub share: f64,
}

impl Equity {
    /// The expected share of the pot in 0..=1.
    pub fn equity(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.share / self.games as f64
        }
    }

    /// The fraction of boards won outright.
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Computes the players equity by enumerating all the board completions.
///
/// With fewer than 3 cards on the board this goes through millions of boards.
pub fn exact_equity(holes: &[[Card; 2]], board: &[Card]) -> Result<Vec<Equity>, EvalError> {
    let deck = remaining_deck(holes, board)?;
    let now = Instant::now();

    let tally = Tally::new(holes.len());
    let missing = BOARD_SIZE - board.len();
    if missing == 0 {
        tally.record(holes, board, &[]);
    } else {
        deck.for_each(missing, |cards| tally.record(holes, board, cards));
    }

    let equities = tally.equities();
    log_equities(&equities, now);
    Ok(equities)
}

/// Estimates the players equity by sampling random board completions.
///
/// Samples `config.num_tasks * config.samples_per_task` boards, with the
/// `parallel` feature each task runs on its own thread.
pub fn estimate_equity(
    holes: &[[Card; 2]],
    board: &[Card],
    config: &EquityConfig,
) -> Result<Vec<Equity>, EvalError> {
    let deck = remaining_deck(holes, board)?;

    let missing = BOARD_SIZE - board.len();
    if missing == 0 {
        return exact_equity(holes, board);
    }

    let now = Instant::now();

    let num_tasks = config.num_tasks.max(1);

    // Per task counters to avoid contention.
    let tallies = (0..num_tasks)
        .map(|_| Tally::new(holes.len()))
        .collect::<Vec<_>>();

    sample_boards(&deck, num_tasks, config.samples_per_task, missing, |task_id, cards| {
        tallies[task_id].record(holes, board, cards);
    });

    let mut equities = vec![Equity::default(); holes.len()];
    for tally in &tallies {
        for (total, equity) in equities.iter_mut().zip(tally.equities()) {
            total.games += equity.games;
            total.wins += equity.wins;
            total.ties += equity.ties;
            total.share += equity.share;
        }
    }

    log_equities(&equities, now);
    Ok(equities)
}

#[cfg(feature = "parallel")]
fn sample_boards<F>(deck: &Deck, num_tasks: usize, samples_per_task: usize, k: usize, f: F)
where
    F: Fn(usize, &[Card]) + Send + Sync,
{
    deck.par_sample(num_tasks, samples_per_task, k, f);
}

#[cfg(not(feature = "parallel"))]
fn sample_boards<F>(deck: &Deck, num_tasks: usize, samples_per_task: usize, k: usize, f: F)
where
    F: Fn(usize, &[Card]),
{
    for task_id in 0..num_tasks {
        deck.sample(samples_per_task, k, |cards| f(task_id, cards));
    }
}

/// Validates the players and board and returns the deck without their cards.
fn remaining_deck(holes: &[[Card; 2]], board: &[Card]) -> Result<Deck, EvalError> {
    if holes.is_empty() {
        return Err(EvalError::NoActivePlayers);
    }

    if holes.len() > MAX_PLAYERS {
        return Err(EvalError::TooManyPlayers(holes.len()));
    }

    if board.len() > BOARD_SIZE {
        return Err(EvalError::TooManyCards(board.len()));
    }

    let mut dealt = CardSet::EMPTY;
    let mut deck = Deck::default();
    for &card in board.iter().chain(holes.iter().flatten()) {
        if !dealt.insert(card) {
            return Err(EvalError::InvalidHand(card));
        }

        deck.remove(card);
    }

    Ok(deck)
}

fn log_equities(equities: &[Equity], started: Instant) {
    let games = equities.first().map(|e| e.games).unwrap_or_default();
    debug!(
        "Equity for {} players over {games} boards in {:.3}s",
        equities.len(),
        started.elapsed().as_secs_f64()
    );
}

#[derive(Default)]
struct Counter {
    wins: AtomicU64,
    ties: AtomicU64,
    share: AtomicU64,
}

/// Showdown results for a set of players.
struct Tally {
    games: AtomicU64,
    counters: Vec<Counter>,
}

impl Tally {
    fn new(num_players: usize) -> Self {
        Self {
            games: AtomicU64::new(0),
            counters: (0..num_players).map(|_| Counter::default()).collect(),
        }
    }

    /// Runs a showdown on the board completed with `rest`.
    fn record(&self, holes: &[[Card; 2]], board: &[Card], rest: &[Card]) {
        let mut hand = [Card::new(Rank::Ace, Suit::Hearts); eval::MAX_CARDS];
        let board_end = 2 + board.len();
        hand[2..board_end].copy_from_slice(board);
        hand[board_end..].copy_from_slice(rest);

        let mut values = [None; MAX_PLAYERS];
        for (value, hole) in values.iter_mut().zip(holes) {
            hand[..2].copy_from_slice(hole);
            *value = Some(eval::best_hand(&hand).0);
        }

        let best = values.iter().flatten().max().copied();
        let num_winners = values.iter().filter(|v| v.is_some() && **v == best).count() as u64;

        for (counter, value) in self.counters.iter().zip(values) {
            if value.is_none() || value != best {
                continue;
            }

            if num_winners == 1 {
                counter.wins.fetch_add(1, Ordering::Relaxed);
            } else {
                counter.ties.fetch_add(1, Ordering::Relaxed);
            }

            counter
                .share
                .fetch_add(SHARE_UNITS / num_winners, Ordering::Relaxed);
        }

        self.games.fetch_add(1, Ordering::Relaxed);
    }

    fn equities(&self) -> Vec<Equity> {
        let games = self.games.load(Ordering::Relaxed);
        self.counters
            .iter()
            .map(|c| Equity {
                games,
                wins: c.wins.load(Ordering::Relaxed),
                ties: c.ties.load(Ordering::Relaxed),
                share: c.share.load(Ordering::Relaxed) as f64 / SHARE_UNITS as f64,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holes(s: &str) -> Vec<[Card; 2]> {
        Card::parse_many(s)
            .unwrap()
            .chunks(2)
            .map(|c| [c[0], c[1]])
            .collect()
    }

    fn board(s: &str) -> Vec<Card> {
        Card::parse_many(s).unwrap()
    }

    fn assert_sums_to_one(equities: &[Equity]) {
        let total = equities.iter().map(|e| e.equity()).sum::<f64>();
        assert!((total - 1.0).abs() < 1e-9, "total equity {total}");
    }

    #[test]
    fn exact_on_the_turn() {
        // Three aces and three kings beat the queens.
        let holes = holes("Qs Qh Ad Kd");
        let equities = exact_equity(&holes, &board("2c 7d 9s 3h")).unwrap();

        assert_eq!(equities[0].games, 44);
        assert_eq!(equities[0].wins, 38);
        assert_eq!(equities[1].wins, 6);
        assert_eq!(equities[0].ties + equities[1].ties, 0);
        assert_sums_to_one(&equities);
    }

    #[test]
    fn exact_on_the_flop() {
        let holes = holes("Ah As Kc Kd 7h 8h");
        let equities = exact_equity(&holes, &board("2c 7d 9s")).unwrap();

        assert_eq!(equities[0].games, 903);
        assert!(equities[0].equity() > equities[1].equity());
        assert_sums_to_one(&equities);
    }

    #[test]
    fn drawing_dead() {
        // The royal flush on the turn can't be beaten.
        let holes = holes("Ah Kh 2c 2d");
        let equities = exact_equity(&holes, &board("Qh Jh Th 2s")).unwrap();

        assert_eq!(equities[0].equity(), 1.0);
        assert_eq!(equities[0].win_rate(), 1.0);
        assert_eq!(equities[1].equity(), 0.0);
    }

    #[test]
    fn split_pot_shares() {
        // Board royal flush, every completion is a split.
        let holes = holes("2c 3d 4c 5d 6c 7d");
        let equities = exact_equity(&holes, &board("Ah Kh Qh Jh Th")).unwrap();

        for equity in &equities {
            assert_eq!(equity.games, 1);
            assert_eq!(equity.ties, 1);
            assert!((equity.equity() - 1.0 / 3.0).abs() < 1e-9);
        }
        assert_sums_to_one(&equities);
    }

    #[test]
    fn estimate_close_to_exact() {
        let holes = holes("Qs Qh Ad Kd");
        let board = board("2c 7d 9s");

        let exact = exact_equity(&holes, &board).unwrap();
        let config = EquityConfig {
            num_tasks: 2,
            samples_per_task: 5_000,
        };
        let estimate = estimate_equity(&holes, &board, &config).unwrap();

        assert_eq!(estimate[0].games, 10_000);
        assert_sums_to_one(&estimate);
        assert!((exact[0].equity() - estimate[0].equity()).abs() < 0.03);
    }

    #[test]
    fn estimate_preflop() {
        let holes = holes("Ah As 7c 2d");
        let config = EquityConfig {
            num_tasks: 4,
            samples_per_task: 2_000,
        };
        let estimate = estimate_equity(&holes, &[], &config).unwrap();

        assert_eq!(estimate[1].games, 8_000);
        assert!(estimate[0].equity() > 0.8);
        assert_sums_to_one(&estimate);
    }

    #[test]
    fn invalid_inputs() {
        assert_eq!(
            exact_equity(&[], &board("2c 7d 9s")),
            Err(EvalError::NoActivePlayers)
        );

        let many = holes("2c 2d 3c 3d 4c 4d 5c 5d 6c 6d 7c 7d 8c 8d 9c 9d Tc Td Jc Jd Qc Qd");
        assert_eq!(
            exact_equity(&many, &board("2h 7h 9s")),
            Err(EvalError::TooManyPlayers(11))
        );

        assert_eq!(
            exact_equity(&holes("Ah As Kc Kd"), &board("2c 7d 9s 3h 4h 5h")),
            Err(EvalError::TooManyCards(6))
        );

        assert_eq!(
            estimate_equity(
                &holes("Ah As Kc Ah"),
                &board("2c 7d 9s"),
                &EquityConfig::default()
            ),
            Err(EvalError::InvalidHand("Ah".parse().unwrap()))
        );
    }
}
