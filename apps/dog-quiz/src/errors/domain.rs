//! Domain-level error type returned by the question generator and reducer.
//!
//! This error type is transport-agnostic. Callers that also deal with
//! fetching or configuration convert it into `crate::error::QuizError`.

use std::error::Error;
use std::fmt::{Display, Formatter, Result as FmtResult};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Fewer images remain than a question needs; a refill was due earlier.
    InsufficientPool { available: usize },
    /// Input or invariant violation
    Validation(String),
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            DomainError::InsufficientPool { available } => {
                write!(f, "insufficient image pool: {available} available")
            }
            DomainError::Validation(d) => write!(f, "validation error: {d}"),
        }
    }
}

impl Error for DomainError {}

impl DomainError {
    pub fn insufficient_pool(available: usize) -> Self {
        Self::InsufficientPool { available }
    }
    pub fn validation(detail: impl Into<String>) -> Self {
        Self::Validation(detail.into())
    }
}
