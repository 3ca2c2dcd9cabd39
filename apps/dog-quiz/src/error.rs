use thiserror::Error;

use crate::config::ConfigError;
use crate::errors::domain::DomainError;
use crate::infra::image_source::FetchError;

/// Top-level error for hosts embedding the quiz.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),
    #[error("Fetch error: {0}")]
    Fetch(#[from] FetchError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

impl QuizError {
    /// Stable code for logs and host-side error mapping.
    pub fn code(&self) -> &'static str {
        match self {
            QuizError::Domain(DomainError::InsufficientPool { .. }) => "INSUFFICIENT_POOL",
            QuizError::Domain(DomainError::Validation(_)) => "VALIDATION",
            QuizError::Fetch(FetchError::Cancelled) => "FETCH_CANCELLED",
            QuizError::Fetch(_) => "FETCH_FAILED",
            QuizError::Config(_) => "CONFIG_ERROR",
        }
    }
}
