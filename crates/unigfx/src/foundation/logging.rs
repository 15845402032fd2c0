//! Logging utilities

pub use log::{debug, error, info, trace, warn};

/// Initialize the logging system with a default filter level.
///
/// The `RUST_LOG` environment variable still takes precedence, so a deployed
/// binary can be made chattier without a rebuild. `level` accepts the usual
/// `env_logger` filter strings (`"info"`, `"unigfx=debug"`, ...).
pub fn init(level: &str) {
    env_logger::Builder::new()
        .parse_filters(level)
        .parse_default_env()
        .init();
}
