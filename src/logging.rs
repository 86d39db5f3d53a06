//! Diagnostic tracing for the `star-it` binary
//!
//! The library only emits `tracing` events; installing a subscriber is left
//! to the binary.

use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Install a compact stderr subscriber.
///
/// Reads `RUST_LOG`, defaulting to `warn`. `verbose` raises the default to
/// `debug` (an explicit `RUST_LOG` still wins). When a global subscriber is
/// already installed that one stays in place.
///
/// ```bash
/// RUST_LOG=star_it=debug star-it every '[1,3,5]' is_odd
/// ```
pub fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    let installed = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .try_init();
    if installed.is_err() {
        debug!("global subscriber already installed, keeping it");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_keeps_existing_subscriber() {
        init(false);
        init(true);
        assert!(tracing::dispatcher::has_been_set());
    }
}
