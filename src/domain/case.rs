// ============================================================
// Layer 3 — Case and Solution Domain Types
// ============================================================
// The two record types the whole trainer revolves around:
//   - A Case is a named puzzle sub-position, identified by a
//     numeric id that is unique within one rzp partition.
//   - A Solution is one documented move sequence that solves
//     a Case, annotated with difficulty metadata (length,
//     trigger count, EO-breaking flag).
//
// Many Solutions belong to one Case. Both are built once at
// corpus-load time and never mutated afterwards — the rest of
// the program only ever reads them.

use serde::{Deserialize, Serialize};

/// One documented move sequence solving a Case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Solution {
    /// Id of the Case this solution belongs to
    pub case_id: u32,

    /// Number of moves in the sequence
    pub length: u32,

    /// Whether this solution breaks edge orientation on the way
    pub eo_breaking: bool,

    /// Trigger count — the move-grouping bucket used to grade
    /// solution difficulty
    pub trigger: u32,

    /// The move sequence itself, space-separated tokens
    /// (e.g. "R U R'")
    pub moves: String,
}

/// A named puzzle sub-position with one or more known solutions.
///
/// Identity is `id`, unique within one rzp partition. The
/// `solutions` sequence is ordered; the first entry is the
/// canonical demonstration solution used for scramble synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    /// Unique id within the rzp partition
    pub id: u32,

    /// Puzzle-configuration tag this case belongs to (e.g. "4c4e")
    pub rzp: String,

    /// Arm classification tag
    pub arm: String,

    /// Number of pairs in the position
    pub pairs: u32,

    /// Optional tetrad classification
    pub tetrad: Option<String>,

    /// Optional corner classification
    pub corners: Option<String>,

    /// All documented solutions, in database order
    pub solutions: Vec<Solution>,
}

impl Case {
    /// The canonical demonstration solution (first in database order),
    /// or None for a case with no recorded solutions.
    pub fn canonical_solution(&self) -> Option<&Solution> {
        self.solutions.first()
    }
}
