// ============================================================
// Layer 5 — Training Selector
// ============================================================
// Given the filtered candidate set, picks one case uniformly at
// random and synthesizes its scramble:
//
//   1. canonical = first solution of the picked case
//   2. setup     = random DR-state approximation
//   3. scramble  = solve(apply(solved, canonical + setup))
//
// Applying the returned scramble to a solved cube reconstructs
// a state from which the canonical solution is valid, without
// needing a certified random-state sampler: the random
// perturbation is composed with the known solution and the
// combination is re-solved.

use rand::Rng;
use thiserror::Error;

use crate::domain::case::Case;
use crate::domain::traits::CubeAlgebra;
use crate::training::scramble::random_dr_setup;

/// Failures while picking a training case. EmptyCandidateSet is
/// a reachable real-world condition (filters too strict) and is
/// shown to the user as a distinct outcome, never a crash.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectError {
    #[error("no cases match the current training parameters")]
    EmptyCandidateSet,

    #[error("case {case_id} has no recorded solutions")]
    NoSolutions { case_id: u32 },
}

/// The selected case together with its synthesized scramble.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrainingSelection {
    pub case: Case,
    pub scramble: String,
}

/// Pick one candidate uniformly at random and derive a scramble
/// for it through the cube algebra.
pub fn select_random<A, R>(
    candidates: &[Case],
    algebra: &A,
    rng: &mut R,
) -> Result<TrainingSelection, SelectError>
where
    A: CubeAlgebra,
    R: Rng,
{
    if candidates.is_empty() {
        return Err(SelectError::EmptyCandidateSet);
    }

    let picked = &candidates[rng.gen_range(0..candidates.len())];
    let canonical = picked
        .canonical_solution()
        .ok_or(SelectError::NoSolutions { case_id: picked.id })?;

    // Compose the known solution with a random perturbation,
    // then re-solve the result to obtain the scramble.
    let setup = random_dr_setup(rng);
    let combined = format!("{} {}", canonical.moves, setup);
    let state = algebra.apply(&algebra.solved(), &combined);
    let scramble = algebra.solve(&state);

    tracing::debug!(
        "selected case {} ({} candidates, scramble {} moves)",
        picked.id,
        candidates.len(),
        scramble.split_whitespace().count(),
    );

    Ok(TrainingSelection {
        case: picked.clone(),
        scramble,
    })
}
