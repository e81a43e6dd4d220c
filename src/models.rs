//! Data models for a stamping run
//!
//! - CommitCount: validated count reported by version control
//! - VersionStamp: the three defines derived from one count
//! - StampConfig: fixed prefix and destination paths
//! - StampError: fatal failures of a run

use std::fmt;
use std::path::PathBuf;

use crate::constants::{BUILD_NUMBER_PATH, HEADER_PATH, TIMESTAMP_SEPARATOR, VERSION_PREFIX};

/// Number of commits reachable from HEAD at invocation time
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct CommitCount(pub u64);

impl CommitCount {
    /// Parse raw version-control output.
    ///
    /// Surrounding whitespace is ignored; anything else that is not a
    /// base-10 digit is rejected rather than defaulted.
    pub fn parse(raw: &str) -> Result<Self, StampError> {
        let text = raw.trim();
        if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
            return Err(StampError::SourceControlQuery(format!(
                "unexpected commit count output {:?}",
                raw
            )));
        }

        text.parse::<u64>().map(CommitCount).map_err(|e| {
            StampError::SourceControlQuery(format!("commit count {:?} out of range: {}", text, e))
        })
    }
}

impl fmt::Display for CommitCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Version defines emitted into the generated header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VersionStamp {
    /// Bare integer for `COMMIT_COUNT`
    pub commit_count: CommitCount,
    /// Quoted content of `VERSION`: short version, separator, timestamp
    pub version: String,
    /// Quoted content of `VERSION_SHORT`: prefix immediately followed by the count
    pub version_short: String,
}

impl VersionStamp {
    /// Derive every field from the same count so they can never disagree
    pub fn compose(commit_count: CommitCount, prefix: &str, timestamp: &str) -> Self {
        let version_short = format!("{}{}", prefix, commit_count);
        let version = format!("{}{}{}", version_short, TIMESTAMP_SEPARATOR, timestamp);

        Self {
            commit_count,
            version,
            version_short,
        }
    }

    /// Header text. Each define is guarded so a hand-written override wins.
    pub fn render(&self) -> String {
        format!(
            "
#ifndef COMMIT_COUNT
  #define COMMIT_COUNT {}
#endif
#ifndef VERSION
  #define VERSION \"{}\"
#endif
#ifndef VERSION_SHORT
  #define VERSION_SHORT \"{}\"
#endif
",
            self.commit_count, self.version, self.version_short
        )
    }
}

/// Fixed inputs of a run, built once before anything is queried
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StampConfig {
    pub version_prefix: String,
    /// Generated header; its parent directory must already exist
    pub header_path: PathBuf,
    /// Plain-text file holding only the commit count
    pub build_number_path: PathBuf,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            version_prefix: VERSION_PREFIX.to_string(),
            header_path: PathBuf::from(HEADER_PATH),
            build_number_path: PathBuf::from(BUILD_NUMBER_PATH),
        }
    }
}

/// Fatal failures of a stamping run. None of them is retried.
#[derive(Debug, thiserror::Error)]
pub enum StampError {
    /// Version control could not be run, exited non-zero, or printed garbage
    #[error("source control query failed: {0}")]
    SourceControlQuery(String),

    /// The `Commit number` line could not be written, e.g. stdout was closed
    #[error("failed to report commit count: {0}")]
    Report(#[source] std::io::Error),

    /// A destination could not be created or written
    #[error("failed to write {}: {source}", .path.display())]
    FilesystemWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
