use quiz_test_support::fixtures::distinct_breeds;

use crate::domain::rules::{MAX_STRIKES, ROUND_SECONDS};
use crate::domain::test_gens::clean_pool;
use crate::domain::{apply, Action, GameState, ImageRecord, Phase};
use crate::errors::domain::DomainError;

fn with_pool(questions: usize) -> GameState {
    apply(
        &GameState::new(42),
        Action::AddToCollection(clean_pool(questions)),
    )
    .unwrap()
}

fn started(questions: usize) -> GameState {
    apply(&with_pool(questions), Action::StartPlaying).unwrap()
}

fn wrong_choice(state: &GameState) -> u8 {
    let correct = state.current_question.as_ref().unwrap().correct_index;
    (correct + 1) % 4
}

fn correct_choice(state: &GameState) -> u8 {
    state.current_question.as_ref().unwrap().correct_index
}

#[test]
fn start_playing_resets_round() {
    let mut state = with_pool(5);
    state.points = 9;
    state.strikes = 2;
    let state = apply(&state, Action::StartPlaying).unwrap();

    assert_eq!(state.points, 0);
    assert_eq!(state.strikes, 0);
    assert_eq!(state.time_remaining, ROUND_SECONDS);
    assert!(state.playing);
    assert_eq!(state.phase(), Phase::Playing);
    assert!(state.current_question.is_some());
}

#[test]
fn start_playing_does_not_consume_pool() {
    let state = started(5);
    assert_eq!(state.image_pool.len(), 20);
    let restarted = apply(&state, Action::StartPlaying).unwrap();
    assert_eq!(restarted.image_pool.len(), 20);
    assert_eq!(
        restarted.current_question.as_ref().unwrap().candidates,
        state.current_question.as_ref().unwrap().candidates
    );
}

#[test]
fn start_playing_with_empty_pool_fails_and_leaves_state() {
    let state = GameState::new(1);
    let err = apply(&state, Action::StartPlaying).unwrap_err();
    assert_eq!(err, DomainError::insufficient_pool(0));
    assert_eq!(state, GameState::new(1));
}

#[test]
fn add_to_collection_appends_in_order() {
    let first: Vec<ImageRecord> = distinct_breeds(0, 4).into_iter().map(Into::into).collect();
    let second: Vec<ImageRecord> = distinct_breeds(4, 4).into_iter().map(Into::into).collect();
    let state = apply(&GameState::new(0), Action::AddToCollection(first.clone())).unwrap();
    let state = apply(&state, Action::AddToCollection(second.clone())).unwrap();
    let pool: Vec<ImageRecord> = state.image_pool.iter().cloned().collect();
    assert_eq!(pool, [first, second].concat());
}

#[test]
fn add_empty_batch_is_noop() {
    let state = with_pool(2);
    let after = apply(&state, Action::AddToCollection(Vec::new())).unwrap();
    assert_eq!(after, state);
}

#[test]
fn correct_guess_scores_and_advances_by_four() {
    let state = started(5);
    let prior = state.current_question.clone().unwrap();
    let after = apply(&state, Action::GuessAttempt(correct_choice(&state))).unwrap();

    assert_eq!(after.points, 1);
    assert_eq!(after.high_score, 1);
    assert_eq!(after.image_pool.len(), 16);
    let next = after.current_question.as_ref().unwrap();
    assert_ne!(next.candidates, prior.candidates);
    assert_eq!(Some(&next.candidates[0]), state.image_pool.get(4));
}

#[test]
fn wrong_guess_adds_strike_and_keeps_question() {
    let state = started(5);
    let after = apply(&state, Action::GuessAttempt(wrong_choice(&state))).unwrap();
    assert_eq!(after.strikes, 1);
    assert_eq!(after.points, 0);
    assert!(after.playing);
    assert_eq!(after.current_question, state.current_question);
}

#[test]
fn three_strikes_end_play_until_restart() {
    let mut state = started(10);
    for _ in 0..MAX_STRIKES {
        state = apply(&state, Action::GuessAttempt(wrong_choice(&state))).unwrap();
    }
    assert_eq!(state.strikes, MAX_STRIKES);
    assert!(!state.playing);
    assert_eq!(state.phase(), Phase::RoundOver);

    let frozen = apply(&state, Action::GuessAttempt(correct_choice(&state))).unwrap();
    assert_eq!(frozen, state);

    let restarted = apply(&state, Action::StartPlaying).unwrap();
    assert!(restarted.playing);
    assert_eq!(restarted.strikes, 0);
}

#[test]
fn high_score_survives_restart() {
    let mut state = started(10);
    for _ in 0..3 {
        state = apply(&state, Action::GuessAttempt(correct_choice(&state))).unwrap();
    }
    let restarted = apply(&state, Action::StartPlaying).unwrap();
    assert_eq!(restarted.points, 0);
    assert_eq!(restarted.high_score, 3);
}

#[test]
fn guess_out_of_range_is_rejected() {
    let state = started(2);
    let err = apply(&state, Action::GuessAttempt(4)).unwrap_err();
    assert!(matches!(err, DomainError::Validation(_)));
}

#[test]
fn guess_while_idle_is_noop() {
    let state = with_pool(2);
    let after = apply(&state, Action::GuessAttempt(0)).unwrap();
    assert_eq!(after, state);
}

#[test]
fn tick_counts_down_and_ends_round_at_zero() {
    let mut state = started(2);
    for _ in 0..ROUND_SECONDS - 1 {
        state = apply(&state, Action::Tick).unwrap();
    }
    assert_eq!(state.time_remaining, 1);
    assert!(state.playing);

    state = apply(&state, Action::Tick).unwrap();
    assert_eq!(state.time_remaining, 0);
    assert!(!state.playing);
    assert_eq!(state.phase(), Phase::RoundOver);

    state = apply(&state, Action::Tick).unwrap();
    assert_eq!(state.time_remaining, 0);
}

#[test]
fn tick_keeps_running_after_strike_out() {
    let mut state = started(4);
    for _ in 0..MAX_STRIKES {
        state = apply(&state, Action::GuessAttempt(wrong_choice(&state))).unwrap();
    }
    let after = apply(&state, Action::Tick).unwrap();
    assert_eq!(after.time_remaining, ROUND_SECONDS - 1);
}

#[test]
fn refill_requested_once_pool_reaches_threshold() {
    // 20 images: the first question leaves 20 in the pool, the next leaves 16,
    // then 12 which triggers a refill.
    let mut state = started(5);
    assert_eq!(state.fetch_count, 0);

    state = apply(&state, Action::GuessAttempt(correct_choice(&state))).unwrap();
    assert_eq!(state.image_pool.len(), 16);
    assert_eq!(state.fetch_count, 0);

    state = apply(&state, Action::GuessAttempt(correct_choice(&state))).unwrap();
    assert_eq!(state.image_pool.len(), 12);
    assert_eq!(state.fetch_count, 1);
}

#[test]
fn pool_of_thirteen_requests_refill_exactly_once_on_next_question() {
    let mut pool = clean_pool(4);
    pool.push(ImageRecord::from(distinct_breeds(100, 1)[0].clone()));
    let state = apply(&GameState::new(3), Action::AddToCollection(pool)).unwrap();
    let state = apply(&state, Action::StartPlaying).unwrap();
    let mut state = apply(&state, Action::GuessAttempt(correct_choice(&state))).unwrap();
    assert_eq!(state.image_pool.len(), 13);
    assert_eq!(state.fetch_count, 0);

    state = apply(&state, Action::GuessAttempt(correct_choice(&state))).unwrap();
    assert_eq!(state.image_pool.len(), 9);
    assert_eq!(state.fetch_count, 1);
}

#[test]
fn running_out_of_images_is_an_error() {
    let state = started(1);
    let err = apply(&state, Action::GuessAttempt(correct_choice(&state))).unwrap_err();
    assert_eq!(err, DomainError::insufficient_pool(0));
}

#[test]
fn apply_never_mutates_input() {
    let state = started(3);
    let snapshot = state.clone();
    let _ = apply(&state, Action::GuessAttempt(correct_choice(&state))).unwrap();
    let _ = apply(&state, Action::Tick).unwrap();
    assert_eq!(state, snapshot);
}
