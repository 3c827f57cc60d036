//! Top-down memoized search: the polynomial oracle and work baseline.
//!
//! The classic edit-distance recurrence over suffix pairs, cached so every
//! pair is solved once. Its entry count is the canonical
//! `O(len(a) * len(b))` state bound that the bounded search's pruned work
//! count is measured against.
//!
//! Every state this recursion visits is a pair of suffixes of the two
//! original inputs, and a suffix is identified exactly by its remaining
//! length, so the memo key is the `(len(a_rest), len(b_rest))` pair. That
//! makes state identity follow the same case-sensitive character equality
//! the recurrence itself uses.

use std::collections::HashMap;

use crate::one_char::one_char;
use crate::types::{decode_pair, DistanceError, Outcome};

/// Levenshtein distance by memoized recursion.
///
/// `work` is the number of distinct subproblems solved (memo entries), the
/// standard dynamic-programming state count.
///
/// # Examples
///
/// ```
/// let out = levbound::memoized_distance("kitten", "sitting").unwrap();
/// assert_eq!(out.distance, 3);
/// ```
pub fn memoized_distance(a: &str, b: &str) -> Result<Outcome, DistanceError> {
    let (a, b) = decode_pair(a, b)?;
    let mut memo = HashMap::new();
    let distance = solve(&a, &b, &mut memo);
    Ok(Outcome {
        distance,
        work: memo.len(),
    })
}

fn solve(a: &[char], b: &[char], memo: &mut HashMap<(usize, usize), usize>) -> usize {
    let key = (a.len(), b.len());
    if let Some(&dist) = memo.get(&key) {
        return dist;
    }

    if a.len() == 1 {
        let dist = one_char(a, b);
        memo.insert(key, dist);
        return dist;
    }
    if b.len() == 1 {
        let dist = one_char(b, a);
        memo.insert(key, dist);
        return dist;
    }

    let mut best = usize::MAX;
    if a[0] == b[0] {
        // Matching heads continue for free.
        best = best.min(solve(&a[1..], &b[1..], memo));
    }
    best = best.min(solve(&a[1..], &b[1..], memo) + 1); // substitute
    best = best.min(solve(a, &b[1..], memo) + 1); // insert
    best = best.min(solve(&a[1..], b, memo) + 1); // delete

    memo.insert(key, best);
    best
}
