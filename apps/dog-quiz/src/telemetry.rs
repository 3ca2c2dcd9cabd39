use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Default directives when neither `DOG_QUIZ_LOG` nor `RUST_LOG` is set.
pub const DEFAULT_FILTER: &str = "info,reqwest=warn,hyper=warn";

/// Install a JSON subscriber for host applications. Call once at startup.
///
/// Filter precedence: `DOG_QUIZ_LOG`, then `RUST_LOG`, then [`DEFAULT_FILTER`].
pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_env("DOG_QUIZ_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let fmt_layer = fmt::layer().with_target(true).with_ansi(false).json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
