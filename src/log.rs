// Author: Dustin Pilgrim
// License: MIT

use tracing::metadata::LevelFilter;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Env var consulted for fine-grained filtering, same syntax as
/// RUST_LOG.
const LOG_ENV: &str = "EGRESS_LOG";

/// Install the global subscriber. INFO by default, DEBUG with
/// --verbose; EGRESS_LOG overrides both. Diagnostics go to stderr so
/// the prompt owns stdout.
pub fn init(verbose: bool) {
    let default_level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(
            EnvFilter::builder()
                .with_env_var(LOG_ENV)
                .with_default_directive(default_level.into())
                .from_env_lossy(),
        )
        .init();
}
