// ============================================================
// Layer 5 — Move-Sequence Inversion
// ============================================================
// Inverts a space-separated sequence of face-turn tokens.
//
// A move token is a face letter optionally suffixed with:
//   "2"  — half turn, its own inverse        (F2  → F2)
//   "'"  — counter-clockwise quarter turn    (R'  → R)
//   (none) — clockwise quarter turn          (R   → R')
//
// Inverting a sequence reverses the token order and inverts
// each token. Classification is by an explicit check of the
// token's LAST character; indexing from the end of a string
// with a negative offset is not a thing in Rust and was a
// latent defect in an earlier implementation of this helper.

/// Invert a space-separated move sequence.
///
/// Round-trip law: `invert(&invert(s))` equals `s` for any
/// well-formed token sequence (up to whitespace normalization).
///
/// # Example
/// ```
/// // invert("R U R'") == "R U' R'"
/// // invert("F2")     == "F2"
/// ```
pub fn invert(moves: &str) -> String {
    moves
        .split_whitespace()
        .rev()
        .map(invert_token)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Invert a single move token by its last character.
fn invert_token(token: &str) -> String {
    match token.chars().last() {
        // Half turns are self-inverse
        Some('2') => token.to_string(),
        // R' → R: strip the prime
        Some('\'') => token[..token.len() - 1].to_string(),
        // R → R': append a prime
        _ => format!("{token}'"),
    }
}

// ─── Unit Tests ───────────────────────────────────────────────────────────────
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invert_reverses_and_flips_quarter_turns() {
        assert_eq!(invert("R U R'"), "R U' R'");
    }

    #[test]
    fn test_invert_half_turn_is_self_inverse() {
        assert_eq!(invert("F2"), "F2");
    }

    #[test]
    fn test_invert_mixed_sequence() {
        assert_eq!(invert("R U2 F' D"), "D' F U2 R'");
    }

    #[test]
    fn test_invert_round_trip() {
        let seqs = ["R U R' U'", "F2 B2 L D'", "U", "R2 U R2 U' R2"];
        for s in seqs {
            assert_eq!(invert(&invert(s)), s);
        }
    }

    #[test]
    fn test_invert_classifies_by_last_character() {
        // A naive negative-index lookup would treat every token as
        // a plain clockwise turn and blindly append primes; the
        // explicit last-character check must not do that.
        assert_eq!(invert("U'"), "U");
        assert_eq!(invert("U2"), "U2");
    }

    #[test]
    fn test_invert_empty_sequence() {
        assert_eq!(invert(""), "");
    }
}
