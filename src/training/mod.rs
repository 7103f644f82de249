// ============================================================
// Layer 5 — Training Selection Engine
// ============================================================
// Picks a practice case uniformly at random from the filtered
// candidate set and synthesizes the scramble the user will be
// shown. Pure computation given a random source; the only
// collaborator it touches is the cube algebra.

// Random DR-state approximation (setup move generator)
pub mod scramble;

// Uniform case pick + scramble synthesis
pub mod selector;
