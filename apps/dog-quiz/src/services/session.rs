//! Game session: the single owner of [`GameState`].
//!
//! All mutations go through [`GameSession::dispatch`], which runs the pure
//! reducer and publishes the resulting snapshot to subscribers. The session
//! also turns refill requests recorded in `fetch_count` into fetches that
//! run alongside further actions.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::QuizConfig;
use crate::domain::{apply, derive_game_transitions, Action, GameState, GameTransition};
use crate::error::QuizError;
use crate::errors::domain::DomainError;
use crate::infra::dog_api::DogApiClient;
use crate::infra::image_source::{FetchError, ImageSource};
use crate::services::fetch::FetchCoordinator;

pub struct GameSession<S> {
    state: Arc<GameState>,
    fetcher: FetchCoordinator<S>,
    /// `fetch_count` value already claimed by a refill.
    refills_started: u32,
    snapshots: watch::Sender<Arc<GameState>>,
}

impl GameSession<DogApiClient> {
    /// Session against the real API, configured from the environment.
    pub fn from_env() -> Result<Self, QuizError> {
        let config = QuizConfig::from_env()?;
        let client = DogApiClient::new(&config)?;
        Ok(Self::new(client, &config))
    }
}

impl<S: ImageSource> GameSession<S> {
    pub fn new(source: S, config: &QuizConfig) -> Self {
        Self::with_state(source, config, GameState::with_random_seed())
    }

    pub fn with_state(source: S, config: &QuizConfig, state: GameState) -> Self {
        let state = Arc::new(state);
        let (snapshots, _) = watch::channel(Arc::clone(&state));
        Self {
            refills_started: state.fetch_count,
            state,
            fetcher: FetchCoordinator::new(source, config),
            snapshots,
        }
    }

    /// Current read-only snapshot.
    pub fn state(&self) -> Arc<GameState> {
        Arc::clone(&self.state)
    }

    /// Receiver that sees a new snapshot after every applied action.
    pub fn subscribe(&self) -> watch::Receiver<Arc<GameState>> {
        self.snapshots.subscribe()
    }

    /// Handle for running or cancelling fetches outside the session.
    pub fn fetcher(&self) -> FetchCoordinator<S> {
        self.fetcher.clone()
    }

    /// Apply one action. On error the state is left as it was.
    pub fn dispatch(&mut self, action: Action) -> Result<Arc<GameState>, DomainError> {
        let next = apply(&self.state, action).inspect_err(|e| {
            warn!(error = %e, "dispatch=rejected");
        })?;

        for transition in derive_game_transitions(&self.state, &next) {
            log_transition(&transition);
        }

        self.state = Arc::new(next);
        self.snapshots.send_replace(Arc::clone(&self.state));
        Ok(self.state())
    }

    /// Startup fetch, awaited inline. Hosts that must keep dispatching while
    /// it runs use [`GameSession::fetcher`] and [`GameSession::apply_fetch`].
    pub async fn load_initial(&mut self) -> Option<usize> {
        let result = self.fetcher.fetch_batch().await;
        self.apply_fetch(result)
    }

    /// Whether the reducer asked for more images than have been claimed.
    pub fn pending_refill(&self) -> bool {
        self.state.fetch_count > self.refills_started
    }

    /// Claim the outstanding refill request and hand back a fetch handle.
    ///
    /// Every `fetch_count` increment since the previous claim is served by
    /// this one fetch. The fetch runs off the session so `Tick` and
    /// `GuessAttempt` keep flowing through [`GameSession::dispatch`]; its
    /// result comes back through [`GameSession::apply_fetch`].
    pub fn claim_refill(&mut self) -> Option<FetchCoordinator<S>> {
        if !self.pending_refill() {
            return None;
        }
        debug!(
            claimed = self.state.fetch_count - self.refills_started,
            fetch_count = self.state.fetch_count,
            "refill=claimed"
        );
        self.refills_started = self.state.fetch_count;
        Some(self.fetcher.clone())
    }

    /// Claim and serve a refill inline; `None` when nothing was pending or
    /// the fetch produced nothing.
    pub async fn refill(&mut self) -> Option<usize> {
        let fetcher = self.claim_refill()?;
        let result = fetcher.fetch_batch().await;
        self.apply_fetch(result)
    }

    /// Feed a finished fetch back into the state. Returns the number of images
    /// added; failures and cancellations leave the state as it was.
    pub fn apply_fetch(&mut self, result: Result<Action, FetchError>) -> Option<usize> {
        match result {
            Ok(action) => {
                let added = match &action {
                    Action::AddToCollection(images) => images.len(),
                    _ => 0,
                };
                self.dispatch(action).ok().map(|_| added)
            }
            // Already reported by the coordinator.
            Err(FetchError::Cancelled) => None,
            Err(e) => {
                warn!(error = %e, "fetch=failed");
                None
            }
        }
    }

    /// Cancel any in-flight fetch; its result will be discarded.
    pub fn teardown(&self) {
        if self.fetcher.cancel_in_flight() {
            debug!("session=teardown cancelled_fetch=true");
        }
    }
}

fn log_transition(transition: &GameTransition) {
    match transition {
        GameTransition::RoundStarted => info!("round=start"),
        GameTransition::RoundEnded { reason, points } => {
            info!(reason = ?reason, points, "round=over")
        }
        GameTransition::QuestionAdvanced { questions_asked } => {
            debug!(questions_asked, "question=next")
        }
        GameTransition::RefillRequested { fetch_count } => {
            debug!(fetch_count, "pool=low refill=requested")
        }
        GameTransition::HighScore { points } => info!(points, "high_score=new"),
    }
}
