//! Quiz configuration loaded from environment variables.
//!
//! Every variable is optional; unset or empty variables fall back to the
//! defaults below.
//!
//! | Variable | Default |
//! |---|---|
//! | `DOG_QUIZ_ENDPOINT` | `https://dog.ceo/api/breeds/image/random` |
//! | `DOG_QUIZ_BATCH_SIZE` | `50` |
//! | `DOG_QUIZ_DEDUPE` | `breed` |
//! | `DOG_QUIZ_TIMEOUT_MS` | `10000` |

use std::env;
use std::time::Duration;

use thiserror::Error;

use crate::domain::rules::BATCH_SIZE;
use crate::domain::DedupeMode;

pub const DEFAULT_ENDPOINT: &str = "https://dog.ceo/api/breeds/image/random";
pub const DEFAULT_TIMEOUT_MS: u64 = 10_000;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid {var}='{value}': {reason}")]
    Invalid {
        var: &'static str,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// Base URL; the batch size is appended as the last path segment.
    pub endpoint: String,
    /// Images per request, 1..=50 (the API caps random batches at 50).
    pub batch_size: usize,
    pub dedupe_mode: DedupeMode,
    pub request_timeout: Duration,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            batch_size: BATCH_SIZE,
            dedupe_mode: DedupeMode::default(),
            request_timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
        }
    }
}

impl QuizConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let endpoint = var("DOG_QUIZ_ENDPOINT").unwrap_or(defaults.endpoint);
        if !(endpoint.starts_with("http://") || endpoint.starts_with("https://")) {
            return Err(ConfigError::Invalid {
                var: "DOG_QUIZ_ENDPOINT",
                value: endpoint,
                reason: "must be an http(s) URL".to_string(),
            });
        }

        let batch_size = match var("DOG_QUIZ_BATCH_SIZE") {
            Some(raw) => parse_batch_size(&raw)?,
            None => defaults.batch_size,
        };

        let dedupe_mode = match var("DOG_QUIZ_DEDUPE") {
            Some(raw) => raw.parse::<DedupeMode>().map_err(|e| ConfigError::Invalid {
                var: "DOG_QUIZ_DEDUPE",
                value: raw.clone(),
                reason: format!("{e}"),
            })?,
            None => defaults.dedupe_mode,
        };

        let request_timeout = match var("DOG_QUIZ_TIMEOUT_MS") {
            Some(raw) => Duration::from_millis(raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::Invalid {
                    var: "DOG_QUIZ_TIMEOUT_MS",
                    value: raw.clone(),
                    reason: e.to_string(),
                }
            })?),
            None => defaults.request_timeout,
        };

        Ok(Self {
            endpoint,
            batch_size,
            dedupe_mode,
            request_timeout,
        })
    }
}

/// Read a variable, treating empty values as unset.
fn var(name: &str) -> Option<String> {
    env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parse_batch_size(raw: &str) -> Result<usize, ConfigError> {
    let invalid = |reason: String| ConfigError::Invalid {
        var: "DOG_QUIZ_BATCH_SIZE",
        value: raw.to_string(),
        reason,
    };
    let n = raw.parse::<usize>().map_err(|e| invalid(e.to_string()))?;
    if !(1..=BATCH_SIZE).contains(&n) {
        return Err(invalid(format!("must be between 1 and {BATCH_SIZE}")));
    }
    Ok(n)
}
