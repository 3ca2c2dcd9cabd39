use serde::Serialize;

use crate::domain::image::{ImagePool, ImageRecord};
use crate::domain::question::Question;
use crate::errors::domain::DomainError;

/// Coarse progression of a session, derived from [`GameState`].
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum Phase {
    /// Nothing played yet.
    Idle,
    /// A round is running and guesses count.
    Playing,
    /// Round ended by strikes or timer; the last question is still shown.
    RoundOver,
}

/// Why a round stopped accepting guesses.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub enum RoundEnd {
    Strikes,
    Timer,
}

/// Entire quiz state. Replaced, never mutated, by the reducer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameState {
    pub points: u32,
    /// 0..=3
    pub strikes: u8,
    /// Seconds left in the round.
    pub time_remaining: u32,
    /// Best score seen this session (not persisted).
    pub high_score: u32,
    pub image_pool: ImagePool,
    pub current_question: Option<Question>,
    pub playing: bool,
    /// Bumped each time the pool runs low; the session fetches once per bump.
    pub fetch_count: u32,
    /// Base seed for question generation.
    pub seed: u64,
    /// Questions generated so far, mixed into each question's seed.
    pub questions_asked: u64,
}

impl GameState {
    pub fn new(seed: u64) -> Self {
        Self {
            points: 0,
            strikes: 0,
            time_remaining: 0,
            high_score: 0,
            image_pool: ImagePool::new(),
            current_question: None,
            playing: false,
            fetch_count: 0,
            seed,
            questions_asked: 0,
        }
    }

    /// Fresh state seeded from the thread-local RNG.
    pub fn with_random_seed() -> Self {
        Self::new(rand::random())
    }

    pub fn phase(&self) -> Phase {
        if self.playing {
            Phase::Playing
        } else if self.current_question.is_some() {
            Phase::RoundOver
        } else {
            Phase::Idle
        }
    }

    /// The candidates of the current question, if any.
    pub fn candidates(&self) -> Option<&[ImageRecord]> {
        self.current_question.as_ref().map(|q| q.candidates.as_slice())
    }
}

pub fn require_question<'a>(
    state: &'a GameState,
    ctx: &'static str,
) -> Result<&'a Question, DomainError> {
    state.current_question.as_ref().ok_or_else(|| {
        DomainError::validation(format!(
            "Invariant violated: current_question must be set ({ctx})"
        ))
    })
}
