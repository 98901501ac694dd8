// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hand deduplication and k-subsets iteration.
use ahash::AHashSet;
use std::hash::Hash;

use crate::CardError;

/// Returns the binomial coefficient for n choose k.
///
/// Saturates at `usize::MAX` when the computation overflows.
pub fn nck(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }

    // Use the smaller k, each partial product is itself a binomial coefficient
    // so the division is exact.
    let k = k.min(n - k);
    (0..k)
        .try_fold(1usize, |acc, i| acc.checked_mul(n - i).map(|p| p / (i + 1)))
        .unwrap_or(usize::MAX)
}

/// Removes repeated items keeping the first occurrence of each item in order.
pub fn dedup<T>(items: &[T]) -> Vec<T>
where
    T: Copy + Eq + Hash,
{
    let mut seen = AHashSet::with_capacity(items.len());
    items.iter().copied().filter(|item| seen.insert(*item)).collect()
}

/// Calls the `f` closure for each k-subset of `items`.
///
/// The closure is called C(n, k) times, items in each subset keep their
/// relative order in `items`. Nothing is called if k is zero or larger than
/// the number of items.
pub fn for_each_ksubset<T, F>(items: &[T], k: usize, mut f: F)
where
    T: Copy,
    F: FnMut(&[T]),
{
    let n = items.len();
    if k == 0 || k > n {
        return;
    }

    // Algorithm L from TAOCP 4a, c[1..=k] holds the subset positions with the
    // two sentinels c[k + 1] = n and c[k + 2] = 0.
    let mut c = vec![0usize; k + 3];
    for j in 1..=k {
        c[j] = j - 1;
    }

    c[k + 1] = n;

    let mut h = items[..k].to_vec();
    loop {
        for (idx, &pos) in c[1..=k].iter().enumerate() {
            h[idx] = items[pos];
        }

        f(&h);

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

/// Collects all the k-subsets of `items`.
///
/// Returns an error if k is zero or larger than the number of items.
pub fn ksubsets<T: Copy>(items: &[T], k: usize) -> Result<Vec<Vec<T>>, CardError> {
    let n = items.len();
    if k == 0 || k > n {
        return Err(CardError::SubsetSize { k, n });
    }

    let mut subsets = Vec::new();
    for_each_ksubset(items, k, |s| subsets.push(s.to_vec()));
    Ok(subsets)
}
