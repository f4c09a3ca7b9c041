//! Logging setup.
//!
//! Logs go to stderr through `tracing-subscriber`. The filter comes from
//! `RUST_LOG` when set, otherwise this crate logs at `info`.

use tracing_subscriber::EnvFilter;

const DEFAULT_DIRECTIVE: &str = "image_converter=info";

/// Install the global subscriber. Calling it again is a no-op.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok();

    if installed {
        tracing::debug!("Logging initialized");
    }
}
