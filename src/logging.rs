//! Diagnostic logging setup for the binary.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Environment variable holding the log filter, e.g. `TWIG_LOG=twig=trace`.
pub const LOG_ENV: &str = "TWIG_LOG";

/// Install a stderr subscriber filtered by [`LOG_ENV`] (default `warn`).
///
/// Calling this twice fails silently the second time.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
