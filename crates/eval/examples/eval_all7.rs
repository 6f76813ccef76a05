// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --release --example eval_all7
// ...
// Total hands      133784560
//
// High Card:       23294460
// Pair:            58627800
// Two Pair:        31433400
// Three of a Kind: 6461620
// Straight:        6180020
// Flush:           4047644
// Full House:      3473184
// Four of a Kind:  224848
// Straight Flush:  37260
// Royal Flush:     4324
// ```

use std::time::Instant;

use showdown_eval::*;

fn main() -> anyhow::Result<()> {
    // Evaluate all 133M hands.
    let now = Instant::now();
    let mut counts = [0usize; HandCategory::COUNT];
    let mut error = None;

    Deck::default().for_each(7, |hand| match evaluate(hand) {
        Ok(value) => counts[value.category() as usize] += 1,
        Err(e) => error = Some(e),
    });

    if let Some(e) = error {
        return Err(e.into());
    }

    let elapsed = now.elapsed().as_secs_f64();
    let total = counts.iter().sum::<usize>();
    println!("Total hands      {total}");
    println!("Elapsed:         {:.3}s", elapsed);
    println!("Hands/sec:       {:.0}\n", total as f64 / elapsed);

    for category in HandCategory::categories() {
        let label = format!("{}:", category.label());
        println!("{label:<17}{}", counts[category as usize]);
    }

    Ok(())
}
