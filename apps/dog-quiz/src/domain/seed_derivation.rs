//! RNG seed derivation for deterministic question generation.
//!
//! A session draws one base seed; every question derives its own seed from
//! it so the reducer stays a pure function of `(state, action)`.

/// Derive the seed used to pick the correct answer of a question.
///
/// # Arguments
///
/// * `game_seed` - Base seed stored in the game state
/// * `question_no` - Number of questions generated before this one
///
/// # Returns
///
/// Derived seed that is unique per (seed, question) combination.
pub fn derive_question_seed(game_seed: u64, question_no: u64) -> u64 {
    // Odd multiplier spreads consecutive question numbers across the seed space
    game_seed
        .wrapping_add(question_no.wrapping_mul(0x9E37_79B9_7F4A_7C15))
        .wrapping_add(1)
}
