//! Operation history for the bounded search's redundancy pruning.
//!
//! The branch-and-bound search threads a tag recording the last edit applied
//! on the current path, and uses it to refuse edit sequences that are
//! permutations of sequences it has already considered. An insertion
//! immediately followed by a deletion (or vice versa) lands in a state that a
//! single substitution reaches one edit cheaper, so such pairs are never
//! explored. Runs of the same operation are fine, and a zero-cost match or a
//! substitution resets the history entirely.
//!
//! # Transition table
//!
//! | last op  | Add branch | Remove branch |
//! |----------|------------|---------------|
//! | `None`   | yes        | yes           |
//! | `Zero`   | no (reset first) | no (reset first) |
//! | `Shift`  | no         | no            |
//! | `Add`    | yes        | no            |
//! | `Remove` | no         | yes           |
//!
//! A `Zero` tag never reaches a branch decision: the search restarts with a
//! cleared history as soon as it sees one, because free alignment progress
//! does not constrain which edits may follow.

/// The last edit operation applied on the current recursion path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Op {
    /// No operation yet (fresh search or reset history).
    None,
    /// Zero-cost progress: a shared leading character was stripped.
    Zero,
    /// A substitution consumed one character from each side.
    Shift,
    /// An insertion consumed one character from the second sequence.
    Add,
    /// A deletion consumed one character from the first sequence.
    Remove,
}

/// The `(previous, current)` operation pair threaded down the call stack.
///
/// Only `cur` gates branching; `prev` exists so the alternation invariant
/// (Add never directly follows Remove and vice versa) can be checked at
/// every entry into the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct OpHistory {
    pub prev: Op,
    pub cur: Op,
}

impl OpHistory {
    /// Cleared history: nothing constrains the next branch.
    pub fn start() -> Self {
        OpHistory {
            prev: Op::None,
            cur: Op::None,
        }
    }

    /// Record `next` as the latest operation, demoting the current one.
    pub fn advance(self, next: Op) -> Self {
        OpHistory {
            prev: self.cur,
            cur: next,
        }
    }

    /// May the search take the Add branch after this history?
    pub fn may_add(self) -> bool {
        !matches!(self.cur, Op::Zero | Op::Shift | Op::Remove)
    }

    /// May the search take the Remove branch after this history?
    pub fn may_remove(self) -> bool {
        !matches!(self.cur, Op::Zero | Op::Shift | Op::Add)
    }

    /// True if the pair violates the no-alternation rule. Used in debug
    /// contracts; a violation means the branch gates above are broken.
    pub fn alternates(self) -> bool {
        matches!(
            (self.prev, self.cur),
            (Op::Add, Op::Remove) | (Op::Remove, Op::Add)
        )
    }
}
