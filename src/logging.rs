// src/logging.rs
use tracing_subscriber::EnvFilter;

/// Environment variable that overrides the verbosity flags, e.g. `MUEMBED_LOG=muembed_domain=trace`.
pub const LOG_ENV: &str = "MUEMBED_LOG";

/// Install a stderr subscriber; library crates log through `log`, which the
/// subscriber picks up via its `tracing-log` bridge.
///
/// Calling it twice is harmless.
pub fn init(level: log::LevelFilter) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_ascii_lowercase()));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
