#![allow(dead_code)]

// tests/common/mod.rs
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use dog_quiz::{FetchError, ImageSource, QuizConfig};
use parking_lot::Mutex;
use quiz_test_support::fixtures::distinct_breeds;


// Logging is auto-installed for every test binary that includes this module
#[ctor::ctor]
fn init_logging() {
    quiz_test_support::test_logging::init();
}

/// One scripted reply of [`FakeSource`].
pub enum Reply {
    Urls(Vec<String>),
    Fail(FetchError),
    /// Never resolves; only cancellation ends the fetch.
    Hang,
}

/// In-memory `ImageSource` that replays scripted replies in order.
///
/// Once the script runs out every call returns a fresh batch of distinct breeds.
pub struct FakeSource {
    replies: Mutex<VecDeque<Reply>>,
    calls: AtomicUsize,
}

impl FakeSource {
    pub fn new(replies: Vec<Reply>) -> Self {
        Self {
            replies: Mutex::new(replies.into()),
            calls: AtomicUsize::new(0),
        }
    }

    /// Source that always serves distinct breeds.
    pub fn endless() -> Self {
        Self::new(Vec::new())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ImageSource for FakeSource {
    async fn fetch_images(&self, count: usize) -> Result<Vec<String>, FetchError> {
        let call = self.calls.fetch_add(1, Ordering::SeqCst);
        let reply = self.replies.lock().pop_front();
        match reply {
            Some(Reply::Urls(urls)) => Ok(urls),
            Some(Reply::Fail(err)) => Err(err),
            Some(Reply::Hang) => std::future::pending().await,
            None => Ok(distinct_breeds(call * count, count)),
        }
    }
}

pub fn test_config() -> QuizConfig {
    QuizConfig::default()
}
