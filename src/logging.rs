//! Diagnostic logging to stderr
//!
//! Stdout is reserved for the `Commit number` report a build log shows,
//! so the subscriber only ever writes to stderr.

use anyhow::Result;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer, Registry};

/// Compact, timestamp-free line format; the build log already timestamps
fn stderr_layer<W>(writer: W) -> impl Layer<Registry>
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(false)
        .with_level(true)
        .without_time()
        .compact()
}

/// Install the global subscriber. Fails if one is already set.
pub fn init(level: LevelFilter) -> Result<()> {
    tracing_subscriber::registry()
        .with(stderr_layer(std::io::stderr).with_filter(level))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to set logger: {}", e))
}
