pub mod quiz;

pub use quiz::{ConfigError, QuizConfig};
