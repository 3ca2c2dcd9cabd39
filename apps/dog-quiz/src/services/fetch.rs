//! Fetch coordinator: one cancellable batch request at a time.
//!
//! Every call to [`FetchCoordinator::fetch_batch`] gets its own
//! `CancellationToken`. Starting a new fetch cancels the token of the one
//! still in flight, and a result that lands after its token was cancelled
//! or superseded is dropped.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::config::QuizConfig;
use crate::domain::{dedupe, Action, DedupeMode, ImageRecord};
use crate::infra::image_source::{FetchError, ImageSource};

#[derive(Debug, Default)]
struct InFlight {
    generation: u64,
    token: Option<CancellationToken>,
}

/// Cheap to clone; clones share the in-flight slot so any of them can cancel.
pub struct FetchCoordinator<S> {
    source: Arc<S>,
    batch_size: usize,
    dedupe_mode: DedupeMode,
    in_flight: Arc<Mutex<InFlight>>,
}

impl<S> Clone for FetchCoordinator<S> {
    fn clone(&self) -> Self {
        Self {
            source: Arc::clone(&self.source),
            batch_size: self.batch_size,
            dedupe_mode: self.dedupe_mode,
            in_flight: Arc::clone(&self.in_flight),
        }
    }
}

impl<S: ImageSource> FetchCoordinator<S> {
    pub fn new(source: S, config: &QuizConfig) -> Self {
        Self {
            source: Arc::new(source),
            batch_size: config.batch_size,
            dedupe_mode: config.dedupe_mode,
            in_flight: Arc::new(Mutex::new(InFlight::default())),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Fetch one batch, dedupe it and wrap it in `Action::AddToCollection`.
    ///
    /// A batch that dedupes to nothing is still `Ok` (an empty collection).
    /// Cancellation and supersession yield `FetchError::Cancelled`, logged once.
    pub async fn fetch_batch(&self) -> Result<Action, FetchError> {
        let (generation, token) = self.begin();
        info!(generation, batch_size = self.batch_size, "fetch=start");

        let result = tokio::select! {
            biased;
            _ = token.cancelled() => Err(FetchError::Cancelled),
            res = self.source.fetch_images(self.batch_size) => res,
        };

        let stale = token.is_cancelled() || !self.finish(generation);
        if stale || matches!(result, Err(FetchError::Cancelled)) {
            info!(generation, "request cancelled");
            return Err(FetchError::Cancelled);
        }

        let urls = result?;
        let fetched = urls.len();
        let images = dedupe(urls.into_iter().map(ImageRecord::from), self.dedupe_mode);
        info!(generation, fetched, usable = images.len(), "fetch=done");

        Ok(Action::AddToCollection(images))
    }

    /// Cancel whatever fetch is in flight. Returns whether there was one.
    pub fn cancel_in_flight(&self) -> bool {
        let mut guard = self.in_flight.lock();
        match guard.token.take() {
            Some(token) => {
                token.cancel();
                debug!(generation = guard.generation, "fetch=cancel");
                true
            }
            None => false,
        }
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight.lock().token.is_some()
    }

    /// Register a new fetch, cancelling the previous one.
    fn begin(&self) -> (u64, CancellationToken) {
        let mut guard = self.in_flight.lock();
        if let Some(previous) = guard.token.take() {
            previous.cancel();
            debug!(generation = guard.generation, "fetch=superseded");
        }
        guard.generation += 1;
        let token = CancellationToken::new();
        guard.token = Some(token.clone());
        (guard.generation, token)
    }

    /// Clear the slot if `generation` still owns it. Returns false if superseded.
    fn finish(&self, generation: u64) -> bool {
        let mut guard = self.in_flight.lock();
        if guard.generation != generation {
            return false;
        }
        guard.token = None;
        true
    }
}
