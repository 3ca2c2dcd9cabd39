/// Photos shown per question.
pub const QUESTION_SIZE: usize = 4;
/// Wrong guesses that end a round.
pub const MAX_STRIKES: u8 = 3;
/// Length of a round in seconds.
pub const ROUND_SECONDS: u32 = 30;
/// Images requested per fetch.
pub const BATCH_SIZE: usize = 50;
/// A refill is requested once the pool holds this many images or fewer.
pub const REFILL_THRESHOLD: usize = 12;

/// Largest length `<= len` that splits evenly into questions.
#[inline]
pub fn whole_questions_len(len: usize) -> usize {
    len / QUESTION_SIZE * QUESTION_SIZE
}

/// Whether a pool of `pool_len` images should trigger another fetch.
#[inline]
pub fn needs_refill(pool_len: usize) -> bool {
    pool_len <= REFILL_THRESHOLD
}
