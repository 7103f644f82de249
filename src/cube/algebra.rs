// ============================================================
// Layer 5 — Sequence Algebra
// ============================================================
// The default CubeAlgebra implementation. A state is represented
// by the move history that produced it from the solved reference
// state, and solving is exact inversion of that history:
//
//   solve(apply(solved, M)) == invert(M)
//
// which is precisely the identity the scramble synthesis in the
// training selector relies on. An optimal-search solver (shorter
// output, real state representation) can replace this behind the
// same trait without touching any caller.

use anyhow::Result;
use crate::cube::moves::invert;
use crate::domain::traits::CubeAlgebra;

/// An abstract cube state: the move history applied to the
/// solved reference state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CubeState {
    moves: Vec<String>,
}

impl CubeState {
    /// The solved reference state (empty history)
    pub fn solved() -> Self {
        Self::default()
    }

    /// The full history as one space-separated sequence
    pub fn history(&self) -> String {
        self.moves.join(" ")
    }
}

/// Move-history based cube algebra.
pub struct SequenceAlgebra;

impl SequenceAlgebra {
    /// Initialize the algebra. Must complete before any scramble
    /// is generated; the history-based implementation has no
    /// tables to build, so this only reports readiness.
    pub fn init() -> Result<Self> {
        tracing::info!("cube algebra ready");
        Ok(Self)
    }
}

impl CubeAlgebra for SequenceAlgebra {
    type State = CubeState;

    fn solved(&self) -> CubeState {
        CubeState::solved()
    }

    fn apply(&self, state: &CubeState, moves: &str) -> CubeState {
        let mut next = state.clone();
        next.moves
            .extend(moves.split_whitespace().map(str::to_string));
        next
    }

    fn solve(&self, state: &CubeState) -> String {
        invert(&state.history())
    }
}
