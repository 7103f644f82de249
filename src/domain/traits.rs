// ============================================================
// Layer 3 — Core Traits (Abstractions)
// ============================================================
// The two external collaborators the trainer depends on, seen
// only through traits so implementations stay swappable:
//   - CsvCaseLoader implements CaseSource
//   - (future) an embedded indexed store could also implement
//     CaseSource without the application layer changing
//   - SequenceAlgebra implements CubeAlgebra
//   - (future) an optimal-search solver could replace it behind
//     the same trait
//
// The application layer programs against these traits and never
// against the concrete types.

use anyhow::Result;
use crate::domain::case::Case;

// ─── CaseSource ───────────────────────────────────────────────────────────────
/// Any component that can load one corpus partition.
///
/// A partition is everything known for one rzp tag: the cases
/// with their solutions already attached. Loading is invoked
/// once per distinct tag; failures must not disturb partitions
/// loaded earlier for other tags.
pub trait CaseSource {
    /// Load all cases (with solutions) for the given rzp tag.
    fn load(&self, rzp: &str) -> Result<Vec<Case>>;
}

// ─── CubeAlgebra ──────────────────────────────────────────────────────────────
/// Any component that can apply move sequences to an abstract
/// cube state and produce a solution for an arbitrary state.
///
/// The trainer only needs three operations; everything else
/// about the cube stays inside the implementation. The algebra
/// must have finished its own initialization before any scramble
/// is generated (constructors do the init).
pub trait CubeAlgebra {
    /// Opaque cube-state representation
    type State;

    /// A fresh solved reference state
    fn solved(&self) -> Self::State;

    /// Apply a space-separated move sequence to a state
    fn apply(&self, state: &Self::State, moves: &str) -> Self::State;

    /// Produce a move sequence that solves the given state
    fn solve(&self, state: &Self::State) -> String;
}
