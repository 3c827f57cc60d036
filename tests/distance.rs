//! Concrete distance scenarios, run against all three algorithms.
//!
//! The table carries literal expected distances; every algorithm must
//! reproduce each one exactly. The larger samples lean on long shared
//! prefixes, which is precisely where the bounded search's free stripping
//! and shift heuristic earn their keep.

use levbound::{
    bounded_distance, brute_force_distance, memoized_distance, DistanceError, Outcome,
    MAX_INPUT_LEN,
};

type Distance = fn(&str, &str) -> Result<Outcome, DistanceError>;

const ALGORITHMS: &[(&str, Distance)] = &[
    ("bounded", bounded_distance),
    ("brute_force", brute_force_distance),
    ("memoized", memoized_distance),
];

/// Small and medium pairs, cheap enough for the exhaustive oracle.
const CASES: &[(&str, &str, usize)] = &[
    ("abc", "abc", 0),
    ("yaga", "yga", 1),
    ("abcd", "abc", 1),
    ("aFGF", "GF", 2),
    ("ata4", "bt4", 2),
    ("anaxa", "nxa", 2),
    ("a", "abc", 2),
    ("a", "baa", 2),
    ("a", "bba", 2),
    ("abc", "yabd", 2),
    ("aaa", "abc", 2),
    ("lv", "dvd", 2),
    ("linl", "didnl", 2),
    ("linvl", "didnvl", 2),
    ("lwinvl", "dwidnvl", 2),
    ("aaa", "bb", 3),
    ("axa4", "bt4", 3),
    ("a", "babc", 3),
    ("fof", "ofsfof", 3),
    ("lwinvl", "dwidddnvl", 4),
    ("ddedod", "eio", 4),
    ("a", "ssaddd", 5),
    ("ao", "ssaddd", 5),
    ("lwinvl", "ssdwidddnvl", 6),
    ("aaalwinvl", "ssaaadwidddnvl", 6),
    ("xAxx", "AAAbbbb", 6),
    ("aasjsaaaa", "aaaasdsj", 6),
    ("asjsaaaa", "aaaasdsj", 7),
    ("casjsaaaa", "aaaasdsj", 7),
    ("0bc01abcef31", "abcdefg0121", 9),
    (
        "aaaaasdfxclvlvnlnowinvl",
        "aassaaasdfxclvdvnlnowidddnvl",
        6,
    ),
    (
        "sdlfjjlxaaaaasdfxclvlvnlnowinvlknaoljlsdfvjljl",
        "sdlfjjlxaassaaasdfxclvdvnlnowidddnvlknaoljlsdfvjljl",
        6,
    ),
];

/// Long pairs where the exhaustive oracle is too slow; the bounded and
/// memoized algorithms still must agree with the literal distances.
const LARGE_CASES: &[(&str, &str, usize)] = &[
    (
        "kdondfikofgdpofjkldfgofdgretjkldfgkl",
        "gdsdfondfikofgdpsdfofjkldfgofdgretjkldfgksdfl",
        10,
    ),
    (
        "slfjjaov38sg3409vgmhge8jvkjklfdlkdfoimsdfvklnmsdfglpognsuioeifcioioidondfikofgdpofjkldfgofdgretjkldfgklflmkdffsmkbdfglk",
        "slfjjaov38sg3sdf409vgmhge8dsfgjvkjklfdlkdfoimsdfvklnmsdfglpogsdfnsuioeifcioioidondfikofgdpsdfofjkldfgofdgretjkldfgksdflflmkdffsmkbdfglk",
        16,
    ),
    (
        "sdjfllsknvedpvmvmdfmv58i95498fdojibmim9ombmddfjsdfjkl3gi489jr59dd334589dfbniodfbijo3490disdrfvoklpdclnjsddhsdcui378ybhuschuiduhd7xcvbnjkdsfuioh34rwehnudjiod",
        "sdjfllsknvepvmvmdfmv58i95498bmim9ombmddfjsdfjkl3gi489jr59334589dfbniodfbijo3490isdrfvoklpdclnjsdhsdcui378ybhuschuiduh7xcvbnjkdsfuioh34rwehnujio",
        13,
    ),
];

#[test]
fn all_algorithms_reproduce_the_scenario_table() {
    for &(a, b, expected) in CASES {
        for (name, distance) in ALGORITHMS {
            let out = distance(a, b).unwrap();
            assert_eq!(
                out.distance, expected,
                "{}({:?}, {:?}) = {}, expected {}",
                name, a, b, out.distance, expected
            );
        }
    }
}

#[test]
fn bounded_and_memoized_handle_the_large_samples() {
    for &(a, b, expected) in LARGE_CASES {
        let fast = bounded_distance(a, b).unwrap();
        let slow = memoized_distance(a, b).unwrap();
        assert_eq!(fast.distance, expected, "bounded on {:?}", &a[..12]);
        assert_eq!(slow.distance, expected, "memoized on {:?}", &a[..12]);
    }
}

#[test]
fn unicode_pairs_are_compared_by_character() {
    for (name, distance) in ALGORITHMS {
        assert_eq!(distance("café", "cafe").unwrap().distance, 1, "{}", name);
        assert_eq!(distance("tōkyō", "tokyo").unwrap().distance, 2, "{}", name);
    }
}

#[test]
fn every_algorithm_rejects_empty_inputs() {
    for (name, distance) in ALGORITHMS {
        assert_eq!(
            distance("", "abc").unwrap_err(),
            DistanceError::Empty { arg: "a" },
            "{}",
            name
        );
        assert_eq!(
            distance("abc", "").unwrap_err(),
            DistanceError::Empty { arg: "b" },
            "{}",
            name
        );
        assert_eq!(
            distance("", "").unwrap_err(),
            DistanceError::Empty { arg: "a" },
            "{}",
            name
        );
    }
}

#[test]
fn every_algorithm_rejects_oversized_inputs() {
    let long = "ab".repeat(MAX_INPUT_LEN); // 2 * MAX characters
    for (name, distance) in ALGORITHMS {
        assert!(
            matches!(
                distance(&long, "abc"),
                Err(DistanceError::TooLong { arg: "a", .. })
            ),
            "{}",
            name
        );
    }
}

#[test]
fn identical_long_inputs_resolve_without_search() {
    // Shared-prefix stripping reduces equal inputs to a single base case,
    // even near the length cap.
    let s = "abcd".repeat(MAX_INPUT_LEN / 4);
    assert_eq!(bounded_distance(&s, &s).unwrap().distance, 0);
    assert_eq!(brute_force_distance(&s, &s).unwrap().distance, 0);

    // The memoized search has no stripping pass and walks the whole state
    // grid, so it gets a shorter (but still deep) identical pair.
    let s = "abcd".repeat(64);
    assert_eq!(memoized_distance(&s, &s).unwrap().distance, 0);
}

#[test]
fn work_counters_are_comparable_across_algorithms() {
    // The pruned search beats the DP state count on this pair, and the
    // exhaustive search is worse than both.
    let bounded = bounded_distance("lwinvl", "dwidddnvl").unwrap();
    let brute = brute_force_distance("lwinvl", "dwidddnvl").unwrap();
    let memoized = memoized_distance("lwinvl", "dwidddnvl").unwrap();

    assert_eq!(bounded.distance, 4);
    assert!(bounded.work < memoized.work);
    assert!(memoized.work < brute.work);
}
