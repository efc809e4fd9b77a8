//! Tracing subscriber setup for the `cardsaga` binary.

use tracing_subscriber::EnvFilter;

/// Default filter when `RUST_LOG` is unset: engine chatter stays quiet.
pub const DEFAULT_FILTER: &str = "warn";

/// Install a fmt subscriber on stderr so stdout carries only command output.
///
/// Returns `false` when a global subscriber was already installed.
pub fn init_logging() -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber).is_ok()
}
