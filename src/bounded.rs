//! Branch-and-bound Levenshtein search: the core algorithm.
//!
//! Three ideas keep the exponential edit-sequence space tractable:
//!
//! 1. **Shrinking threshold.** Every call carries an upper bound on the
//!    distance still worth finding, starting at `max(len(a), len(b))` (the
//!    all-insert/all-delete bound). Each branch result can only lower it,
//!    and a branch whose cheap lower bound cannot beat it is never entered.
//! 2. **Operation history.** An insert directly followed by a delete (or
//!    vice versa) revisits a state that one substitution reaches cheaper,
//!    so the `op` module's gate suppresses those orderings outright.
//! 3. **Shift heuristic.** Before branching, a greedy scan substitutes
//!    leading mismatched pairs until an aligned match appears. That produces
//!    a fast, often-tight upper bound which lets the expensive Add/Remove
//!    exploration short-circuit.
//!
//! The pruning is correctness-preserving: it removes duplicate and dominated
//! edit orderings, never the optimal one. The brute-force and memoized
//! siblings exist to keep this file honest.

use crate::one_char::one_char;
use crate::op::{Op, OpHistory};
use crate::types::{decode_pair, DistanceError, Outcome};

/// Levenshtein distance via branch-and-bound with redundancy pruning.
///
/// `work` counts recursive search invocations. Same distance as
/// [`brute_force_distance`](crate::brute_force_distance) and
/// [`memoized_distance`](crate::memoized_distance), usually for a fraction
/// of their work.
///
/// # Examples
///
/// ```
/// let out = levbound::bounded_distance("kitten", "sitting").unwrap();
/// assert_eq!(out.distance, 3);
/// ```
pub fn bounded_distance(a: &str, b: &str) -> Result<Outcome, DistanceError> {
    let (a, b) = decode_pair(a, b)?;
    let (mut a, mut b) = (a.as_slice(), b.as_slice());

    // Shared leading characters cost nothing; strip them before sizing the
    // initial threshold so the trivial bound is as tight as possible.
    while a[0] == b[0] && a.len() > 1 && b.len() > 1 {
        a = &a[1..];
        b = &b[1..];
    }

    let (distance, work) = search(a, b, a.len().max(b.len()), OpHistory::start());
    Ok(Outcome { distance, work })
}

/// One node of the bounded search over suffix views.
///
/// `threshold` is the best distance achievable so far on this path; the
/// return value is the final threshold together with the work done in this
/// subtree (each child contributes its own work plus one for the edge).
fn search(
    mut a: &[char],
    mut b: &[char],
    mut threshold: usize,
    mut history: OpHistory,
) -> (usize, usize) {
    debug_assert!(
        !history.alternates(),
        "redundant add/remove alternation reached the search: {:?}",
        history
    );
    // Substitutions enter through `shift`, which resets the history rather
    // than tagging the path; a Shift tag here means a gate is broken.
    debug_assert!(history.cur != Op::Shift, "untagged path invariant");

    // Free alignment progress. Each stripped character is recorded as a
    // zero-cost op so the history gate knows the path was interrupted.
    while a[0] == b[0] && a.len() > 1 && b.len() > 1 {
        a = &a[1..];
        b = &b[1..];
        history = history.advance(Op::Zero);
    }

    if a.len() == 1 {
        return (one_char(a, b), 1);
    }
    if b.len() == 1 {
        return (one_char(b, a), 1);
    }

    // A zero-cost move constrains nothing that follows; restart this node
    // with a cleared history so both branches reopen.
    if history.cur == Op::Zero {
        return search(a, b, threshold, OpHistory::start());
    }

    let mut work = 0;

    // Shift candidate: substitute the two heads, then align greedily. Its
    // result is an upper bound that often closes the search immediately.
    let (shift_dist, shift_work) = shift(&a[1..], &b[1..]);
    let candidate = shift_dist + 1;
    work += shift_work + 1;
    if candidate < threshold {
        threshold = candidate;
    }
    if threshold <= 1 {
        // Nothing can beat an exact match or a single edit.
        return (threshold, work);
    }

    // Add branch: consume one character of `b` only.
    if history.may_add() {
        let add_floor = if a.len() >= b.len() {
            a.len() - b.len() + 2
        } else {
            b.len() - a.len()
        };
        if add_floor < threshold {
            let (dist, child_work) =
                search(a, &b[1..], threshold - 1, history.advance(Op::Add));
            let candidate = dist + 1;
            work += child_work + 1;
            if candidate < threshold {
                threshold = candidate;
            }
            if threshold <= 1 {
                return (threshold, work);
            }
        }
    }

    // Remove branch: consume one character of `a` only, mirrored bound.
    if history.may_remove() {
        let remove_floor = if a.len() > b.len() {
            a.len() - b.len()
        } else {
            b.len() - a.len() + 2
        };
        if remove_floor < threshold {
            let (dist, child_work) =
                search(&a[1..], b, threshold - 1, history.advance(Op::Remove));
            let candidate = dist + 1;
            work += child_work + 1;
            if candidate < threshold {
                threshold = candidate;
            }
        }
    }

    (threshold, work)
}

/// Greedy alignment: substitute leading mismatched pairs until the sequences
/// line up, then let the bounded search finish the remainder.
///
/// The scan is position-aligned, not a substring search: `short[i]` is only
/// ever compared with `long[i]`. On the first aligned match the views are
/// trimmed past it; `i` leading substitutions have been charged. If the
/// short side is exhausted by the trim, everything left on the long side is
/// a pure insertion. If no aligned match exists at all, every position of
/// the long side is one substitution or insertion.
fn shift(x: &[char], y: &[char]) -> (usize, usize) {
    let (mut short, mut long) = if x.len() > y.len() { (y, x) } else { (x, y) };
    let threshold = long.len();

    for i in 0..short.len() {
        if short[i] == long[i] {
            short = &short[i + 1..];
            long = &long[i + 1..];
            if short.is_empty() {
                return (i + long.len(), 0);
            }
            let (dist, work) = search(short, long, threshold, OpHistory::start());
            return (dist + i, work);
        }
    }

    (long.len(), 0)
}
