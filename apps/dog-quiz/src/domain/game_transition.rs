use crate::domain::rules::MAX_STRIKES;
use crate::domain::state::{GameState, RoundEnd};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameTransition {
    /// Edge-triggered: playing went false -> true.
    RoundStarted,

    /// Edge-triggered: playing went true -> false.
    RoundEnded { reason: RoundEnd, points: u32 },

    /// A different question is now on screen.
    QuestionAdvanced { questions_asked: u64 },

    /// The pool ran low and another batch should be fetched.
    RefillRequested { fetch_count: u32 },

    /// The high score moved up.
    HighScore { points: u32 },
}

/// Derive transitions from before/after state.
pub fn derive_game_transitions(before: &GameState, after: &GameState) -> Vec<GameTransition> {
    let mut transitions = Vec::new();

    if !before.playing && after.playing {
        transitions.push(GameTransition::RoundStarted);
    }

    if before.playing && !after.playing {
        let reason = if after.strikes >= MAX_STRIKES {
            RoundEnd::Strikes
        } else {
            RoundEnd::Timer
        };
        transitions.push(GameTransition::RoundEnded {
            reason,
            points: after.points,
        });
    }

    if after.questions_asked != before.questions_asked {
        transitions.push(GameTransition::QuestionAdvanced {
            questions_asked: after.questions_asked,
        });
    }

    if after.fetch_count > before.fetch_count {
        transitions.push(GameTransition::RefillRequested {
            fetch_count: after.fetch_count,
        });
    }

    if after.high_score > before.high_score {
        transitions.push(GameTransition::HighScore {
            points: after.high_score,
        });
    }

    transitions
}
