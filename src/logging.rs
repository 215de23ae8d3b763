use tracing_subscriber::{fmt, EnvFilter};

/// Install the global subscriber.
///
/// Reads `RUST_LOG` (default `warn`) and writes to stderr so plan tables on
/// stdout stay clean, e.g. `RUST_LOG=fitplan_rs=debug`.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Verbose subscriber for tests; safe to call more than once.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
