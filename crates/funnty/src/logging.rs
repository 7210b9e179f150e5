//! Logging setup

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `FUNNTY_LOG=funnty_text=debug`
pub const LOG_ENV: &str = "FUNNTY_LOG";

/// Install the global subscriber, writing to stderr.
///
/// The filter comes from [`LOG_ENV`], else `default_level`. Calling this
/// more than once is harmless.
pub fn init(default_level: &str) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
