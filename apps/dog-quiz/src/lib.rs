#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod infra;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use config::{ConfigError, QuizConfig};
pub use domain::{Action, DedupeMode, GameState, ImageRecord, Phase, Question};
pub use error::QuizError;
pub use errors::DomainError;
pub use infra::{DogApiClient, FetchError, ImageSource};
pub use services::{FetchCoordinator, GameSession};
pub use telemetry::init_tracing;

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    quiz_test_support::test_logging::init();
}
