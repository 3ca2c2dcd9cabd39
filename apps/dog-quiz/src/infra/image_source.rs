//! The seam between the fetch coordinator and the network.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("request cancelled")]
    Cancelled,
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected http status {status}")]
    Status { status: u16 },
    #[error("decode error: {detail}")]
    Decode { detail: String },
    #[error("upstream reported status '{status}'")]
    Upstream { status: String },
}

impl FetchError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, FetchError::Cancelled)
    }
}

/// Anything that can hand out a batch of image URLs.
///
/// Implementations do not dedupe; the coordinator does.
#[async_trait]
pub trait ImageSource: Send + Sync {
    async fn fetch_images(&self, count: usize) -> Result<Vec<String>, FetchError>;
}
