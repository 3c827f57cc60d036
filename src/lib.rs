//! Levenshtein edit distance, three ways, with the answers forced to agree.
//!
//! The interesting algorithm is the branch-and-bound search: a shrinking
//! best-known threshold, an operation-history gate that refuses redundant
//! insert/delete orderings, and a greedy shift heuristic that tightens the
//! bound before any branching happens. The other two algorithms are oracles:
//! an exhaustive recursion that is trivially correct and a memoized
//! recursion that is trivially polynomial. All three return the same
//! distance for every input, and each also reports a diagnostic work count
//! so the pruning payoff is measurable.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐   ┌─────────────┐   ┌──────────────┐
//! │  bounded.rs  │   │  brute.rs   │   │   memo.rs    │
//! │ (threshold + │   │ (exhaustive │   │ (suffix-pair │
//! │  op gate +   │   │   oracle)   │   │    memo)     │
//! │  shift)      │   │             │   │              │
//! └──────┬───────┘   └──────┬──────┘   └──────┬───────┘
//!        │    ┌─────────────┴─────────────┐   │
//!        ▼    ▼                           ▼   ▼
//! ┌──────────────┐                   ┌──────────────┐
//! │    op.rs     │                   │ one_char.rs  │
//! │ (history     │                   │ (shared      │
//! │  gate)       │                   │  base case)  │
//! └──────────────┘                   └──────────────┘
//! ```
//!
//! The three entry points share validation and the singleton base case but
//! no search logic; they are deliberately independent implementations so
//! they can check each other.
//!
//! # Usage
//!
//! ```
//! let fast = levbound::bounded_distance("lwinvl", "dwidddnvl").unwrap();
//! let slow = levbound::memoized_distance("lwinvl", "dwidddnvl").unwrap();
//!
//! assert_eq!(fast.distance, 4);
//! assert_eq!(fast.distance, slow.distance);
//! // The pruned search solved it with less work than the full DP grid.
//! assert!(fast.work < slow.work);
//! ```
//!
//! Inputs must be non-empty and at most [`MAX_INPUT_LEN`] characters per
//! side; violations return [`DistanceError`] before any search runs. The
//! functions are pure and own all their state per call, so concurrent
//! callers never interfere.

mod bounded;
mod brute;
mod memo;
mod one_char;
mod op;
mod types;

pub use bounded::bounded_distance;
pub use brute::brute_force_distance;
pub use memo::memoized_distance;
pub use types::{DistanceError, Outcome, MAX_INPUT_LEN};
