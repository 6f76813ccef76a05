// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Parallel hand iteration.
use rand::prelude::*;
use std::thread;

use super::{Card, Deck, MAX_K, Rank, Suit};
use crate::combinations;

impl Deck {
    /// Parallel for each, calls the `f` closure for each k-cards hand.
    ///
    /// The closure takes an usize that is the task identifier (0..num_task)
    /// and a slice of cards of length k.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn par_for_each<F>(&self, num_tasks: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((1..=MAX_K).contains(&k), "1 <= k <= 7");
        assert!(num_tasks > 0);

        let n = self.cards.len();
        let num_hands = combinations::binomial(n, k);
        if num_hands == 0 {
            return;
        }

        let hands_per_task = num_hands.div_ceil(num_tasks);

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let start = task_id * hands_per_task;
                if start >= num_hands {
                    break;
                }

                let f = &f;
                s.spawn(move || {
                    let mut h = [Card::new(Rank::Ace, Suit::Diamonds); MAX_K];
                    combinations::for_each_combination(n, k, start, hands_per_task, |p| {
                        for (idx, &pos) in p.iter().enumerate() {
                            h[idx] = self.cards[pos];
                        }

                        f(task_id, &h[..k]);
                    });
                });
            }
        });
    }

    /// Calls the given closure from `num_tasks` parallel tasks generating
    /// `samples_per_task` samples of size k.
    ///
    /// Panics if k is not 1 <= k <= 7.
    pub fn par_sample<F>(&self, num_tasks: usize, samples_per_task: usize, k: usize, f: F)
    where
        F: Fn(usize, &[Card]) + Send + Sync,
    {
        assert!((1..=MAX_K).contains(&k), "1 <= k <= 7");
        assert!(num_tasks > 0);

        if k > self.cards.len() {
            return;
        }

        thread::scope(|s| {
            for task_id in 0..num_tasks {
                let f = &f;
                s.spawn(move || {
                    let mut h = [Card::new(Rank::Ace, Suit::Diamonds); MAX_K];
                    let mut rng = SmallRng::from_os_rng();

                    for _ in 0..samples_per_task {
                        for (pos, c) in self.cards.choose_multiple(&mut rng, k).enumerate() {
                            h[pos] = *c;
                        }

                        f(task_id, &h[..k]);
                    }
                });
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU64, Ordering};

    #[test]
    fn par_for_each_visits_all() {
        let deck = Deck::default();

        for num_tasks in [1, 3, 4, 7] {
            let counters = (0..num_tasks)
                .map(|_| AtomicU64::new(0))
                .collect::<Vec<_>>();

            deck.par_for_each(num_tasks, 3, |task_id, hand| {
                assert_eq!(hand.len(), 3);
                counters[task_id].fetch_add(1, Ordering::Relaxed);
            });

            let total = counters
                .iter()
                .map(|c| c.load(Ordering::Relaxed))
                .sum::<u64>();
            assert_eq!(total, 22_100);
        }
    }

    #[test]
    fn par_for_each_more_tasks_than_hands() {
        let mut deck = Deck::default();
        for card in deck.clone().into_iter().skip(3) {
            deck.remove(card);
        }

        let counter = AtomicU64::new(0);
        deck.par_for_each(8, 2, |_, _| {
            counter.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(counter.load(Ordering::Relaxed), 3);
    }

    #[test]
    fn par_sample_count() {
        let counter = AtomicU64::new(0);
        Deck::default().par_sample(4, 10, 7, |task_id, hand| {
            assert!(task_id < 4);
            assert_eq!(hand.len(), 7);
            counter.fetch_add(1, Ordering::Relaxed);
        });
        assert_eq!(counter.load(Ordering::Relaxed), 40);
    }
}
