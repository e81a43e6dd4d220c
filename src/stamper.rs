//! The stamping run
//!
//! One linear pass: query the commit count once, compose the header in
//! memory, then overwrite the header and the build-number file. Nothing is
//! opened for writing until the count is known, so a failed query leaves
//! every destination untouched.

use std::io::{self, Write};

use chrono::{DateTime, Local};
use tracing::{error, info};

use crate::constants::TIMESTAMP_FORMAT;
use crate::models::{StampConfig, StampError, VersionStamp};
use crate::vcs::CommitCounter;
use crate::writer::ArtifactWriter;

/// Wall-clock source, swapped out by tests
pub type Clock = fn() -> DateTime<Local>;

pub struct VersionStamper<C, W> {
    config: StampConfig,
    counter: C,
    writer: W,
    clock: Clock,
}

impl<C: CommitCounter, W: ArtifactWriter> VersionStamper<C, W> {
    pub fn new(config: StampConfig, counter: C, writer: W) -> Self {
        Self {
            config,
            counter,
            writer,
            clock: Local::now,
        }
    }

    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn config(&self) -> &StampConfig {
        &self.config
    }

    /// Produce a fresh version stamp from live version-control state.
    ///
    /// Prints `Commit number: <n>` to stdout once the count is known.
    pub fn run(&self) -> Result<VersionStamp, StampError> {
        self.run_with_report(&mut io::stdout().lock())
    }

    /// Same as [`run`](Self::run), reporting the commit count to `report`
    pub fn run_with_report(&self, report: &mut impl Write) -> Result<VersionStamp, StampError> {
        let commit_count = self.counter.count().map_err(|e| {
            error!("Could not determine commit count: {}", e);
            e
        })?;
        writeln!(report, "Commit number: {}", commit_count)
            .and_then(|()| report.flush())
            .map_err(StampError::Report)?;

        let timestamp = (self.clock)().format(TIMESTAMP_FORMAT).to_string();
        let stamp = VersionStamp::compose(commit_count, &self.config.version_prefix, &timestamp);
        let header = stamp.render();

        self.writer.write(&self.config.header_path, &header)?;
        self.writer
            .write(&self.config.build_number_path, &commit_count.to_string())?;

        info!("Stamped {}", stamp.version);
        Ok(stamp)
    }
}
