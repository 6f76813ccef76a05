// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Plays a hand street by street showing the players equity and the winners at
// showdown.
//
// ```bash
// $ RUST_LOG=debug cargo r --release --example showdown -- \
//     --hands "As 9d" --hands "9s 8s" --board "Ts Js Qs Ks 2c"
// ```
//
// Without a board or hands the cards are dealt from a shuffled deck.
use anyhow::{Result, bail};
use clap::Parser;
use log::info;

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// A player hole cards, like "As Kd", repeat for each player.
    #[clap(long)]
    hands: Vec<String>,
    /// The five community cards, like "Ts Js Qs Ks 2c".
    #[clap(long)]
    board: Option<String>,
    /// Number of players when dealing from a shuffled deck.
    #[clap(long, short, default_value_t = 3, value_parser = clap::value_parser!(u8).range(2..=10))]
    players: u8,
    /// Number of boards sampled for preflop equity.
    #[clap(long, default_value_t = 25_000)]
    samples: usize,
}

fn parse_hole(s: &str) -> Result<[Card; 2]> {
    match Card::parse_many(s)?.as_slice() {
        &[c1, c2] => Ok([c1, c2]),
        cards => bail!("a hand needs 2 cards got {}", cards.len()),
    }
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();

    let given_board = cli.board.as_deref().map(Card::parse_many).transpose()?;
    let given_holes = cli
        .hands
        .iter()
        .map(|s| parse_hole(s))
        .collect::<Result<Vec<_>>>()?;

    // Deal the missing cards from a deck without the given cards.
    let mut deck = Deck::new_and_shuffled(&mut rand::rng());
    for card in given_board.iter().flatten().chain(given_holes.iter().flatten()) {
        deck.remove(*card);
    }

    let holes = if given_holes.is_empty() {
        (0..cli.players)
            .map(|_| match deck.deal_many(2).as_slice() {
                &[c1, c2] => Ok([c1, c2]),
                _ => bail!("Deck is empty"),
            })
            .collect::<Result<Vec<_>>>()?
    } else {
        given_holes
    };

    let board = given_board.unwrap_or_else(|| deck.deal_many(5));
    if board.len() != 5 {
        bail!("The board needs 5 cards got {}", board.len());
    }

    for (idx, hole) in holes.iter().enumerate() {
        info!("Player {idx} {} {}", hole[0].glyph(), hole[1].glyph());
    }

    // Preflop is sampled, flop and turn are enumerated.
    let config = EquityConfig {
        num_tasks: 4,
        samples_per_task: cli.samples.div_ceil(4),
    };

    for (street, len) in [("Preflop", 0), ("Flop", 3), ("Turn", 4)] {
        let cards = &board[..len];
        let equities = if len == 0 {
            estimate_equity(&holes, cards, &config)?
        } else {
            exact_equity(&holes, cards)?
        };

        let shown = cards.iter().map(|c| c.glyph()).collect::<Vec<_>>().join(" ");
        info!("{street} [{shown}]");
        for (idx, equity) in equities.iter().enumerate() {
            info!("  Player {idx} {:5.1}%", equity.equity() * 100.0);
        }
    }

    let players = holes
        .iter()
        .enumerate()
        .map(|(idx, hole)| PlayerHand::new(idx, *hole))
        .collect::<Vec<_>>();

    let showdown = resolve_winners(&players, &board)?;

    let shown = board.iter().map(|c| c.glyph()).collect::<Vec<_>>().join(" ");
    info!("River [{shown}]");
    for hand in &showdown.hands {
        let cards = hand.cards.iter().map(|c| c.glyph()).collect::<Vec<_>>();
        info!(
            "  Player {} {} [{}]",
            hand.player_id,
            hand.value.category(),
            cards.join(" ")
        );
    }

    if showdown.is_split_pot() {
        info!("Split pot between players {:?}", showdown.winners);
    } else {
        info!("Player {} wins with {}", showdown.winners[0], showdown.value);
    }

    Ok(())
}
