use tracing_subscriber::{EnvFilter, fmt};

use crate::error::{Error, Result};

/// Install a global `tracing` subscriber that writes to stderr.
///
/// `directives` uses `EnvFilter` syntax, e.g. `"frond=debug"`. The `RUST_LOG`
/// environment variable takes precedence when set.
pub fn init(directives: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directives))
        .map_err(|e| Error::Config(e.to_string()))?;
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| Error::Internal(e.to_string()))
}
