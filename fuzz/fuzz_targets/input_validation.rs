//! Fuzz target for input validation.
//!
//! String pairs must either produce a distance or a
//! [`levbound::DistanceError`]; nothing may panic, and the error cases must
//! be exactly the documented ones (empty side or over-long side). Mid-sized
//! valid pairs are skipped: the search itself is the other target's job and
//! random near-cap pairs are just slow.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (&str, &str)| {
    let (a, b) = input;

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let searchable = len_a <= 32 && len_b <= 32;
    let rejectable = a.is_empty() || b.is_empty() || len_a > levbound::MAX_INPUT_LEN;
    if !searchable && !rejectable {
        return;
    }

    match levbound::bounded_distance(a, b) {
        Ok(out) => {
            assert!(!a.is_empty() && !b.is_empty());
            assert!(out.distance <= len_a.max(len_b));
        }
        Err(levbound::DistanceError::Empty { .. }) => {
            assert!(a.is_empty() || b.is_empty());
        }
        Err(levbound::DistanceError::TooLong { len, max, .. }) => {
            assert!(len > max);
            assert_eq!(max, levbound::MAX_INPUT_LEN);
        }
    }
});
