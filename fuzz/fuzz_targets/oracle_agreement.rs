//! Fuzz target for cross-oracle agreement.
//!
//! The bounded search prunes aggressively; the memoized search does not
//! prune at all. If any input pair makes them disagree, the pruning ate an
//! optimal path and that is a real bug. Arbitrary Unicode goes straight in,
//! since the algorithms promise character semantics for any input.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

/// A pair of candidate inputs, capped to keep the pruned search fast even
/// on adversarial all-distinct strings.
#[derive(Debug, Arbitrary)]
struct Pair {
    a: String,
    b: String,
}

fuzz_target!(|input: Pair| {
    let a: String = input.a.chars().take(16).collect();
    let b: String = input.b.chars().take(16).collect();
    if a.is_empty() || b.is_empty() {
        return;
    }

    let fast = levbound::bounded_distance(&a, &b).expect("non-empty inputs must succeed");
    let dp = levbound::memoized_distance(&a, &b).expect("non-empty inputs must succeed");

    assert_eq!(
        fast.distance, dp.distance,
        "bounded {} != memoized {} on ({:?}, {:?})",
        fast.distance, dp.distance, a, b
    );

    // Metric sanity on whatever the fuzzer dreamed up.
    let gap = a.chars().count().abs_diff(b.chars().count());
    assert!(fast.distance >= gap);
    assert!(fast.distance <= a.chars().count().max(b.chars().count()));
});
