#![forbid(unsafe_code)]

mod cli;

use anyhow::{Context, Result};
use tracing_subscriber::filter::LevelFilter;
use verstamp::logging;
use verstamp::stamper::VersionStamper;
use verstamp::vcs::GitCommitCounter;
use verstamp::writer::FsArtifactWriter;

fn main() -> Result<()> {
    let config = cli::parse_args()?;
    logging::init(LevelFilter::INFO)?;

    let stamper = VersionStamper::new(config, GitCommitCounter::new(), FsArtifactWriter);
    stamper
        .run()
        .with_context(|| format!("Failed to stamp {}", stamper.config().header_path.display()))?;

    Ok(())
}
