// ============================================================
// Layer 5 — Cube Algebra
// ============================================================
// Move-sequence arithmetic and the default CubeAlgebra
// implementation. The rest of the program talks to this layer
// through the domain::traits::CubeAlgebra trait only.

// Move-token helpers (inversion)
pub mod moves;

// CubeState + SequenceAlgebra (default CubeAlgebra impl)
pub mod algebra;
