//! Logging for test binaries.
//!
//! Unit tests reach [`init`] through a `ctor` hook in the library crate;
//! integration tests through `tests/common`.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a quiet test subscriber once per process.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`. A subscriber
/// installed elsewhere first wins.
pub fn init() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init();
    });
}
