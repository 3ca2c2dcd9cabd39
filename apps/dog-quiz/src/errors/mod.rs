//! Error handling for the dog quiz core.

pub mod domain;

pub use domain::DomainError;
