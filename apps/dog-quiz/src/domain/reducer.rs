//! The quiz state machine as a pure reducer.

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::domain::image::ImageRecord;
use crate::domain::question::generate_question;
use crate::domain::rules::{needs_refill, MAX_STRIKES, QUESTION_SIZE, ROUND_SECONDS};
use crate::domain::seed_derivation::derive_question_seed;
use crate::domain::state::{require_question, GameState};
use crate::errors::domain::DomainError;

/// Every event the quiz reacts to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Reset score, strikes and timer and show a question.
    StartPlaying,
    /// A deduplicated batch arrived.
    AddToCollection(Vec<ImageRecord>),
    /// The player picked candidate `0..=3`.
    GuessAttempt(u8),
    /// One second elapsed.
    Tick,
}

/// Apply `action` to `state`, returning the next state.
///
/// `state` is never modified; on error the caller keeps the previous state.
pub fn apply(state: &GameState, action: Action) -> Result<GameState, DomainError> {
    let mut next = state.clone();
    match action {
        Action::StartPlaying => {
            next.time_remaining = ROUND_SECONDS;
            next.points = 0;
            next.strikes = 0;
            next.playing = true;
            // The question on screen is discarded, not consumed.
            advance_question(&mut next, false)?;
        }
        Action::AddToCollection(images) => {
            next.image_pool.append(images);
        }
        Action::GuessAttempt(choice) => {
            if !next.playing {
                return Ok(next);
            }
            if usize::from(choice) >= QUESTION_SIZE {
                return Err(DomainError::validation(format!(
                    "choice {choice} out of range 0..{QUESTION_SIZE}"
                )));
            }
            if require_question(&next, "guess_attempt")?.is_correct(choice) {
                next.points += 1;
                next.high_score = next.high_score.max(next.points);
                advance_question(&mut next, true)?;
            } else {
                next.strikes = (next.strikes + 1).min(MAX_STRIKES);
                if next.strikes >= MAX_STRIKES {
                    next.playing = false;
                }
            }
        }
        Action::Tick => {
            next.time_remaining = next.time_remaining.saturating_sub(1);
            if next.time_remaining == 0 {
                next.playing = false;
            }
        }
    }
    Ok(next)
}

fn advance_question(state: &mut GameState, has_prior_question: bool) -> Result<(), DomainError> {
    let mut rng = StdRng::seed_from_u64(derive_question_seed(state.seed, state.questions_asked));
    let (pool, question) = generate_question(&state.image_pool, has_prior_question, &mut rng)?;
    state.image_pool = pool;
    state.current_question = Some(question);
    state.questions_asked += 1;
    if needs_refill(state.image_pool.len()) {
        state.fetch_count += 1;
    }
    Ok(())
}
