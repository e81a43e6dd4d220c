//! Version-control queries
//!
//! The stamper only needs a commit count, so the seam is a single-method
//! trait. `GitCommitCounter` shells out to git; tests substitute fakes.

use std::path::PathBuf;
use std::process::Command;

use tracing::debug;

use crate::constants::{GIT_COUNT_ARGS, GIT_PROGRAM};
use crate::models::{CommitCount, StampError};

/// Source of the exact commit count for the current checkout
pub trait CommitCounter {
    fn count(&self) -> Result<CommitCount, StampError>;
}

/// Counts commits reachable from HEAD with `git rev-list --count HEAD`
#[derive(Debug, Clone, Default)]
pub struct GitCommitCounter {
    /// Checkout to query; the process working directory when `None`
    work_dir: Option<PathBuf>,
}

impl GitCommitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Query a checkout other than the current directory
    #[cfg(test)]
    pub(crate) fn in_dir(work_dir: impl Into<PathBuf>) -> Self {
        Self {
            work_dir: Some(work_dir.into()),
        }
    }

    fn command_line() -> String {
        format!("{} {}", GIT_PROGRAM, GIT_COUNT_ARGS.join(" "))
    }
}

impl CommitCounter for GitCommitCounter {
    /// Blocks until git exits; there is no timeout
    fn count(&self) -> Result<CommitCount, StampError> {
        let mut command = Command::new(GIT_PROGRAM);
        command.args(GIT_COUNT_ARGS);
        if let Some(dir) = &self.work_dir {
            command.current_dir(dir);
        }

        debug!("Running `{}`", Self::command_line());

        let output = command.output().map_err(|e| {
            StampError::SourceControlQuery(format!("could not run `{}`: {}", Self::command_line(), e))
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(StampError::SourceControlQuery(format!(
                "`{}` exited with {}: {}",
                Self::command_line(),
                output.status,
                stderr.trim()
            )));
        }

        let stdout = String::from_utf8(output.stdout).map_err(|e| {
            StampError::SourceControlQuery(format!("commit count is not valid UTF-8: {}", e))
        })?;

        CommitCount::parse(&stdout)
    }
}
