//! Domain layer: pure quiz logic types and helpers.

pub mod dedupe;
pub mod game_transition;
pub mod image;
pub mod question;
pub mod reducer;
pub mod rules;
pub mod seed_derivation;
pub mod state;

#[cfg(test)]
mod test_prelude;
#[cfg(test)]
mod tests_reducer;

// Re-exports for ergonomics
pub use dedupe::{dedupe, DedupeMode};
pub use game_transition::{derive_game_transitions, GameTransition};
pub use image::{ImagePool, ImageRecord};
pub use question::{generate_question, Question};
pub use reducer::{apply, Action};
pub use state::{GameState, Phase, RoundEnd};
