//! Exhaustive recursive search: the ground-truth oracle.
//!
//! No history gate, no shift heuristic, no lower-bound skips. Every call
//! explores substitute, insert, and delete unconditionally, which makes the
//! result unambiguous and easy to audit but exponential in the worst case.
//! It exists so the pruned search in [`bounded`](crate::bounded) has
//! something obviously correct to agree with; keep inputs short.
//!
//! The budget is threaded as `isize` on purpose: the unconditional
//! `threshold - 1` recursion drives it below zero deep in the tree, where it
//! acts as an already-exceeded cap rather than a realizable distance. The
//! top-level budget of `max(len(a), len(b))` always covers the optimal edit
//! sequence, so the final result is a true distance.

use crate::one_char::one_char;
use crate::types::{decode_pair, DistanceError, Outcome};

/// Levenshtein distance by exhaustive recursion.
///
/// `work` counts recursive invocations. Exponential: meant as a test oracle
/// for the bounded search, not for production inputs.
///
/// # Examples
///
/// ```
/// let out = levbound::brute_force_distance("abcd", "abc").unwrap();
/// assert_eq!(out.distance, 1);
/// ```
pub fn brute_force_distance(a: &str, b: &str) -> Result<Outcome, DistanceError> {
    let (a, b) = decode_pair(a, b)?;
    let (mut a, mut b) = (a.as_slice(), b.as_slice());

    while a[0] == b[0] && a.len() > 1 && b.len() > 1 {
        a = &a[1..];
        b = &b[1..];
    }

    let bound = a.len().max(b.len()) as isize;
    let (distance, work) = explore(a, b, bound);
    debug_assert!(distance >= 0, "top-level budget must cover the distance");
    Ok(Outcome {
        distance: distance as usize,
        work,
    })
}

/// One node of the exhaustive search.
///
/// Branch order matters for the early exits: substitute first (it is the
/// only branch that shortens both sides), then insert, then delete. After
/// each branch the running threshold is lowered if the branch beat it, and
/// once it reaches 1 no remaining branch can improve on a single edit.
fn explore(mut a: &[char], mut b: &[char], mut threshold: isize) -> (isize, usize) {
    while a[0] == b[0] && a.len() > 1 && b.len() > 1 {
        a = &a[1..];
        b = &b[1..];
    }

    if a.len() == 1 {
        return (one_char(a, b) as isize, 1);
    }
    if b.len() == 1 {
        return (one_char(b, a) as isize, 1);
    }

    let mut work = 0;

    // Substitute both heads.
    let (dist, child_work) = explore(&a[1..], &b[1..], threshold - 1);
    work += child_work + 1;
    if dist + 1 < threshold {
        threshold = dist + 1;
    }
    if threshold <= 1 {
        return (threshold, work);
    }

    // Insert: consume one character of `b`.
    let (dist, child_work) = explore(a, &b[1..], threshold - 1);
    work += child_work + 1;
    if dist + 1 < threshold {
        threshold = dist + 1;
    }
    if threshold <= 1 {
        return (threshold, work);
    }

    // Delete: consume one character of `a`.
    let (dist, child_work) = explore(&a[1..], b, threshold - 1);
    work += child_work + 1;
    if dist + 1 < threshold {
        threshold = dist + 1;
    }

    (threshold, work)
}
