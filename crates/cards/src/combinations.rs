// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Enumeration of k-combinations of indexes.
//!
//! Combinations are visited in colexicographic order using Algorithm L from
//! TAOCP 4a, and can be resumed from any position in that order which is what
//! the parallel deck iteration uses to split the work between tasks.

/// Largest `n` supported by [binomial].
pub const MAX_N: usize = 52;

/// Largest `k` supported by [binomial] and [for_each_combination].
pub const MAX_K: usize = 7;

/// Creates table for binomial(n, k) for n <= 52 and k <= 7.
const fn make_binomials() -> [[u32; MAX_K + 1]; MAX_N] {
    let mut t = [[0u32; MAX_K + 1]; MAX_N];
    let mut n = 0;

    while n < MAX_N {
        // base case binomial(n, 0) = 1
        t[n][0] = 1;

        let mut k = 1;
        while k <= MAX_K && k <= n + 1 {
            // binomial(n, k) = binomial(n-1, k-1) + binomial(n-1, k)
            let n_1 = n.saturating_sub(1);
            let k_1 = k.saturating_sub(1);
            t[n][k] = t[n_1][k_1] + t[n_1][k];
            k += 1;
        }

        n += 1;
    }

    t
}

// Row i holds the coefficients for n = i + 1.
const BINOMIALS: [[u32; MAX_K + 1]; MAX_N] = make_binomials();

/// Returns the binomial coefficient for n choose k, 0 when n < k.
///
/// Panics if n > 52 or k > 7.
#[inline]
pub fn binomial(n: usize, k: usize) -> usize {
    assert!(n <= MAX_N, "n={n} must be 0 <= n <= {MAX_N}");
    assert!(k <= MAX_K, "k={k} must be 0 <= k <= {MAX_K}");

    if n < k || n == 0 {
        0
    } else {
        BINOMIALS[n - 1][k] as usize
    }
}

/// Uses the combinatorial number system to convert n to a
/// k-combination (see Theorem L pg. 260 Knuth 4a).
///
/// The first k entries of the returned array hold the combination indexes in
/// increasing order.
pub fn nth_combination(mut n: usize, k: usize) -> [usize; MAX_K] {
    assert!(k <= MAX_K);

    let mut out = [0; MAX_K];
    for k in (0..k).rev() {
        let mut c = k;
        while binomial(c, k + 1) <= n {
            c += 1;
        }

        c = c.saturating_sub(1);
        out[k] = c;

        n = n.saturating_sub(binomial(c, k + 1));
    }

    out
}

/// Calls `f` with `count` k-combinations of `0..n` starting from the `nth`
/// combination in colex order.
///
/// Stops early when the last combination has been visited.
///
/// Panics if k is not 1 <= k <= 7.
pub fn for_each_combination<F>(n: usize, k: usize, nth: usize, count: usize, mut f: F)
where
    F: FnMut(&[usize]),
{
    assert!((1..=MAX_K).contains(&k), "k={k} must be 1 <= k <= {MAX_K}");

    if count == 0 || k > n || nth >= binomial(n, k) {
        return;
    }

    // Algorithm L from TAOCP 4a
    let mut c = [0usize; MAX_K + 3];

    let ks = nth_combination(nth, k);
    c[1..=k].copy_from_slice(&ks[..k]);
    c[k + 1] = n;

    let mut counter = 1;
    loop {
        f(&c[1..=k]);

        counter += 1;
        if counter > count {
            break;
        }

        let mut j = 1;
        while c[j] + 1 == c[j + 1] {
            c[j] = j - 1;
            j += 1;
        }

        if j > k {
            break;
        }

        c[j] += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn test_binomial() {
        // For n < k = 0
        assert_eq!(binomial(2, 3), 0);

        [1, 52, 1326, 22100, 270725, 2598960, 20358520, 133784560]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(binomial(52, k), v));

        [1, 7, 21, 35, 35, 21, 7, 1]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(binomial(7, k), v));

        [1, 5, 10, 10, 5, 1, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(binomial(5, k), v));

        [1, 1, 0, 0, 0, 0, 0, 0]
            .into_iter()
            .enumerate()
            .for_each(|(k, v)| assert_eq!(binomial(1, k), v));
    }

    #[test]
    fn five_of_seven() {
        let mut subsets = HashSet::default();
        for_each_combination(7, 5, 0, usize::MAX, |s| {
            assert_eq!(s.len(), 5);
            assert!(s.windows(2).all(|w| w[0] < w[1]));
            assert!(s.iter().all(|&i| i < 7));
            subsets.insert(s.to_vec());
        });

        assert_eq!(subsets.len(), 21);
    }

    #[test]
    fn single_and_full_subsets() {
        let mut visited = Vec::new();
        for_each_combination(4, 1, 0, usize::MAX, |s| visited.push(s[0]));
        assert_eq!(visited, vec![0, 1, 2, 3]);

        let mut visited = Vec::new();
        for_each_combination(5, 5, 0, usize::MAX, |s| visited.push(s.to_vec()));
        assert_eq!(visited, vec![vec![0, 1, 2, 3, 4]]);

        let mut count = 0;
        for_each_combination(4, 5, 0, usize::MAX, |_| count += 1);
        assert_eq!(count, 0);
    }

    #[test]
    fn resume_from_nth() {
        let total = binomial(20, 4);

        let mut all = Vec::new();
        for_each_combination(20, 4, 0, total, |s| all.push(s.to_vec()));
        assert_eq!(all.len(), total);

        for (nth, expected) in all.iter().enumerate() {
            let ks = nth_combination(nth, 4);
            assert_eq!(&ks[..4], expected.as_slice());
        }

        // Split in uneven chunks like the parallel iteration does.
        let mut chunks = Vec::new();
        let mut start = 0;
        while start < total {
            for_each_combination(20, 4, start, 1000, |s| chunks.push(s.to_vec()));
            start += 1000;
        }
        assert_eq!(chunks, all);
    }

    // This takes a while to run in debug mode as it goes through 200M subsets.
    #[test]
    #[ignore]
    fn nth_combination_52_7() {
        let mut counter = 0;
        let count = binomial(52, 7);
        for_each_combination(52, 7, 0, count, |s| {
            let ks = nth_combination(counter, 7);
            s.iter().zip(ks).for_each(|(&l, r)| assert_eq!(l, r));
            counter += 1;
        });

        assert_eq!(count, counter);
    }
}
