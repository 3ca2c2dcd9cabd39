//! Question generation from the front of the image pool.

use rand::Rng;
use serde::Serialize;

use crate::domain::image::{ImagePool, ImageRecord};
use crate::domain::rules::QUESTION_SIZE;
use crate::errors::domain::DomainError;

/// One round of the quiz: four photos and the index of the one matching `breed_label`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub breed_label: String,
    pub candidates: [ImageRecord; QUESTION_SIZE],
    /// Always in `0..QUESTION_SIZE`.
    pub correct_index: u8,
}

impl Question {
    pub fn correct_image(&self) -> &ImageRecord {
        &self.candidates[usize::from(self.correct_index)]
    }

    pub fn is_correct(&self, choice: u8) -> bool {
        choice == self.correct_index
    }
}

/// Draw the next question from `pool`.
///
/// With `has_prior_question` the four images of the previous question are
/// dropped first. Returns the trimmed pool (still holding the new question's
/// candidates at its front) together with the question.
pub fn generate_question<R>(
    pool: &ImagePool,
    has_prior_question: bool,
    rng: &mut R,
) -> Result<(ImagePool, Question), DomainError>
where
    R: Rng + ?Sized,
{
    let mut pool = pool.clone();
    if has_prior_question {
        pool.drop_front(QUESTION_SIZE);
    }

    if pool.len() < QUESTION_SIZE {
        return Err(DomainError::insufficient_pool(pool.len()));
    }

    let correct_index: u8 = rng.random_range(0..QUESTION_SIZE as u8);
    let candidates: [ImageRecord; QUESTION_SIZE] = pool
        .iter()
        .take(QUESTION_SIZE)
        .cloned()
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|taken: Vec<ImageRecord>| DomainError::insufficient_pool(taken.len()))?;

    let correct = &candidates[usize::from(correct_index)];
    let breed_label = correct.breed_label().ok_or_else(|| {
        DomainError::validation(format!("image has no breed segment: {correct}"))
    })?;

    Ok((
        pool,
        Question {
            breed_label,
            candidates,
            correct_index,
        },
    ))
}
