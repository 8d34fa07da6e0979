//! Diagnostic logging setup.

use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber for the completion pipeline's events.
///
/// `RUST_LOG` wins when set; otherwise the level is `debug` with `--verbose`
/// and `warn` without.
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // A second initialisation (e.g. from tests) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
