//! Shared types and input validation for the distance functions.

use std::fmt;

/// Maximum supported length, in characters, of either input.
///
/// Every algorithm in this crate recurses, and the recursion depth is bounded
/// by the combined length of the two inputs. Capping each side keeps the
/// worst-case depth far inside the default thread stack. Inputs longer than
/// this are rejected up front with [`DistanceError::TooLong`].
pub const MAX_INPUT_LEN: usize = 4096;

/// Result of one distance computation.
///
/// `work` is purely diagnostic: recursive invocations for the bounded and
/// brute-force searches, distinct memo entries for the memoized search. It
/// never influences the distance, only lets callers compare how hard each
/// algorithm had to work.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outcome {
    /// Minimum number of single-character insertions, deletions, or
    /// substitutions to transform one input into the other.
    pub distance: usize,
    /// Diagnostic work counter; see the per-function docs for its unit.
    pub work: usize,
}

/// Input rejection, raised eagerly before any recursion.
///
/// Serialize-only under the `serde` feature: the argument names borrow
/// `'static` strings, which have no meaningful deserialization.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum DistanceError {
    /// The named argument was the empty string.
    Empty { arg: &'static str },
    /// The named argument exceeds [`MAX_INPUT_LEN`] characters.
    TooLong {
        arg: &'static str,
        len: usize,
        max: usize,
    },
}

impl fmt::Display for DistanceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceError::Empty { arg } => {
                write!(f, "input `{}` must contain at least 1 character", arg)
            }
            DistanceError::TooLong { arg, len, max } => {
                write!(
                    f,
                    "input `{}` is {} characters, max supported is {}",
                    arg, len, max
                )
            }
        }
    }
}

impl std::error::Error for DistanceError {}

/// Decode both inputs to character vectors, validating as we go.
///
/// Characters, not bytes: "café" is four characters and one edit away from
/// "cafe". The single decode here is the only allocation the searches
/// perform; all recursion below operates on `&[char]` subslices.
pub(crate) fn decode_pair(a: &str, b: &str) -> Result<(Vec<char>, Vec<char>), DistanceError> {
    Ok((decode(a, "a")?, decode(b, "b")?))
}

fn decode(s: &str, arg: &'static str) -> Result<Vec<char>, DistanceError> {
    if s.is_empty() {
        return Err(DistanceError::Empty { arg });
    }
    let chars: Vec<char> = s.chars().collect();
    if chars.len() > MAX_INPUT_LEN {
        return Err(DistanceError::TooLong {
            arg,
            len: chars.len(),
            max: MAX_INPUT_LEN,
        });
    }
    Ok(chars)
}
