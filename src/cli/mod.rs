//! CLI argument parsing
//!
//! The stamper takes no options: clap only supplies `--help` and
//! `--version`, and rejects anything else as a usage error.

use anyhow::Result;
use clap::Command;
use verstamp::models::StampConfig;

/// Version line shown by `--version`, tagged with the build's git hash
const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

fn command() -> Command {
    Command::new("verstamp")
        .version(VERSION)
        .about("Stamp include/version.h with the current commit count")
        .long_about(
            "Pre-build step that counts the commits reachable from HEAD and overwrites \
             include/version.h with COMMIT_COUNT, VERSION and VERSION_SHORT defines. \
             The count is also written to the versioning file.",
        )
}

/// Parse command line arguments and return the run configuration
pub fn parse_args() -> Result<StampConfig> {
    let _ = command().get_matches();
    Ok(StampConfig::default())
}
