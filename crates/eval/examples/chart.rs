// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Prints the starting hands equity against random opponents hands.
//
// ```bash
// $ cargo r --release --features=parallel --example chart -- --num-players 2
// ```
use clap::{Parser, value_parser};
use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Instant,
};

use showdown_eval::*;

// Split pots are counted in units that divide evenly for up to 7 winners.
const SHARE_UNITS: u64 = 420;

#[derive(Default)]
struct Counter {
    share: AtomicU64,
    games: AtomicU64,
}

impl Counter {
    fn add_share(&self, winners: u64) {
        self.share.fetch_add(SHARE_UNITS / winners, Ordering::Relaxed);
    }

    fn inc_game(&self) {
        self.games.fetch_add(1, Ordering::Relaxed);
    }

    fn share(&self) -> u64 {
        self.share.load(Ordering::Relaxed)
    }

    fn games(&self) -> u64 {
        self.games.load(Ordering::Relaxed)
    }
}

fn run_sim(c1: Card, c2: Card, n_against: usize, config: &EquityConfig) -> f64 {
    const HAND_SIZE: usize = 7;
    const BOARD_SIZE: usize = 5;

    assert_ne!(c1, c2);
    assert!(n_against > 0 && n_against < 7);

    // Create per task counters to avoid contention and boost performance.
    let task_counters = (0..config.num_tasks)
        .map(|_| Counter::default())
        .collect::<Vec<_>>();

    // Remove cards from the deck so that we don't sample them.
    let mut deck = Deck::default();
    deck.remove(c1);
    deck.remove(c2);

    // Two cards for each opponent player plus the board.
    let sample_size = n_against * 2 + BOARD_SIZE;

    deck.par_sample(
        config.num_tasks,
        config.samples_per_task,
        sample_size,
        |task_id, sample| {
            // The sample contains the two cards for each player and the board cards,
            // copy the board cards to the end of the evaluation array.
            let mut hand = [c1; HAND_SIZE];
            let board_start = n_against * 2;
            hand[2..].copy_from_slice(&sample[board_start..]);

            // Evaluate hero hand.
            hand[1] = c2;
            let hvalue = evaluate(&hand).expect("sampled hands are valid");

            // Compare against other players hand.
            let mut winners = 1;
            for player in 0..n_against {
                hand[0] = sample[player * 2];
                hand[1] = sample[player * 2 + 1];
                let ovalue = evaluate(&hand).expect("sampled hands are valid");
                match compare(&ovalue, &hvalue) {
                    std::cmp::Ordering::Greater => {
                        winners = 0;
                        break;
                    }
                    std::cmp::Ordering::Equal => winners += 1,
                    std::cmp::Ordering::Less => {}
                }
            }

            let counter = &task_counters[task_id];
            if winners > 0 {
                counter.add_share(winners);
            }

            counter.inc_game();
        },
    );

    // Aggregate counters.
    let share = task_counters.iter().map(|c| c.share()).sum::<u64>();
    let total = task_counters.iter().map(|c| c.games()).sum::<u64>();
    (share as f64 / SHARE_UNITS as f64 / total as f64) * 100.0
}

fn separator() {
    print!("|");
    for _ in 0..13 {
        print!("-----|");
    }
    println!();
}

#[derive(Debug, Parser)]
struct Cli {
    /// The number of opposing players.
    #[clap(long, short, default_value_t = 1, value_parser = value_parser!(u8).range(1..=6))]
    num_players: u8,
    /// Number of parallel tasks.
    #[clap(long, default_value_t = 4, value_parser = value_parser!(u16).range(1..=64))]
    tasks: u16,
    /// Number of boards sampled by each task.
    #[clap(long, default_value_t = 25_000)]
    samples: usize,
}

fn main() {
    let cli = Cli::parse();
    let num_players = cli.num_players as usize;
    let config = EquityConfig {
        num_tasks: cli.tasks as usize,
        samples_per_task: cli.samples,
    };

    separator();

    let now = Instant::now();

    for r1 in Rank::ranks().rev() {
        let mut labels = Vec::with_capacity(13);
        let mut probs = Vec::with_capacity(13);

        for r2 in Rank::ranks().rev() {
            let (c1, c2) = if r1 <= r2 {
                // Offsuit or pair
                (Card::new(r2, Suit::Hearts), Card::new(r1, Suit::Spades))
            } else {
                // Suited cards
                (Card::new(r1, Suit::Hearts), Card::new(r2, Suit::Hearts))
            };

            if c1.rank() == c2.rank() {
                labels.push(format!("{}{} ", c1.rank(), c2.rank()));
            } else if c1.suit() == c2.suit() {
                labels.push(format!("{}{}s", c1.rank(), c2.rank()));
            } else {
                labels.push(format!("{}{}o", c1.rank(), c2.rank()));
            }

            probs.push(run_sim(c1, c2, num_players, &config));
        }

        print!("|");
        for label in labels {
            print!(" {label} |");
        }

        println!();

        print!("|");
        for prob in &probs {
            print!(" {:2.0}% |", prob.round());
        }
        println!();

        separator();
    }

    println!("Elapsed: {:.3}s", now.elapsed().as_secs_f64());
}
