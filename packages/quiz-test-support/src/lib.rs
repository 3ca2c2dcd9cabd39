//! Test support utilities for the dog quiz workspace
//!
//! This crate provides unified logging initialization and builders for
//! dog image URLs shaped like the ones the upstream API returns.

pub mod fixtures;
pub mod test_logging;
