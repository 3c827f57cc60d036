//! Singleton alignment: the shared base case of all three searches.

/// Minimum edits to align a one-character sequence against `s`.
///
/// Skips leading mismatches of `s` at one edit each until either `s` shrinks
/// to a single character (0 or 1 depending on equality) or the heads match,
/// at which point every remaining character of `s` is a pure insertion. The
/// net effect: `s.len() - 1` if `s` contains the character, `s.len()` if it
/// does not, computed in one linear pass.
///
/// Contract: `c` must hold exactly one character and `s` must be non-empty.
/// The callers' base-case checks guarantee this; a violation is a bug in the
/// calling search, not bad user input, so it is a debug assertion rather
/// than a recoverable error.
pub(crate) fn one_char(c: &[char], s: &[char]) -> usize {
    debug_assert!(c.len() == 1, "one_char needs a singleton, got length {}", c.len());
    debug_assert!(!s.is_empty(), "one_char needs a non-empty counterpart");

    let pivot = c[0];
    let mut rest = s;
    let mut skipped = 0;
    loop {
        if rest.len() == 1 {
            return skipped + usize::from(pivot != rest[0]);
        }
        if pivot == rest[0] {
            return skipped + rest.len() - 1;
        }
        skipped += 1;
        rest = &rest[1..];
    }
}
