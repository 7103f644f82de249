// ============================================================
// Layer 5 — Random DR-State Approximation
// ============================================================
// Generates a long pseudo-random setup sequence restricted to
// the DR move vocabulary: quarter turns on the U/D axis, half
// turns on the four remaining faces. Interleaving 250 of each
// approximates a random DR-reachable state.
//
// This is an intentional statistical approximation, not a
// certified uniform random-state sampler; the trainer's
// correctness only needs the result to be DR-reachable, which
// the restricted vocabulary guarantees.

use rand::seq::SliceRandom;
use rand::Rng;

/// Quarter turns allowed on the preserved axis
const QUARTER_TURNS: &[&str] = &["U", "U'", "D", "D'"];

/// Half turns allowed on the remaining faces
const HALF_TURNS: &[&str] = &["F2", "B2", "R2", "L2"];

/// Number of (quarter turn, half turn) rounds per setup
const ROUNDS: usize = 250;

/// Generate one random setup sequence.
pub fn random_dr_setup<R: Rng>(rng: &mut R) -> String {
    let mut moves = Vec::with_capacity(ROUNDS * 2);
    for _ in 0..ROUNDS {
        // choose() on a non-empty slice never returns None
        moves.push(*QUARTER_TURNS.choose(rng).unwrap_or(&"U"));
        moves.push(*HALF_TURNS.choose(rng).unwrap_or(&"F2"));
    }
    moves.join(" ")
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_setup_has_expected_length() {
        let mut rng = StdRng::seed_from_u64(7);
        let setup = random_dr_setup(&mut rng);
        assert_eq!(setup.split_whitespace().count(), ROUNDS * 2);
    }

    #[test]
    fn test_setup_stays_inside_dr_vocabulary() {
        let mut rng = StdRng::seed_from_u64(7);
        let setup = random_dr_setup(&mut rng);
        for (i, token) in setup.split_whitespace().enumerate() {
            if i % 2 == 0 {
                assert!(QUARTER_TURNS.contains(&token), "bad quarter turn {token}");
            } else {
                assert!(HALF_TURNS.contains(&token), "bad half turn {token}");
            }
        }
    }

    #[test]
    fn test_setup_is_deterministic_for_a_seeded_rng() {
        let a = random_dr_setup(&mut StdRng::seed_from_u64(42));
        let b = random_dr_setup(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
