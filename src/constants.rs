//! Global constants for verstamp
//!
//! Centralized location for the fixed values a stamping run is built from

/// Prefix glued directly onto the commit count to form the version string
pub const VERSION_PREFIX: &str = "v5.1.";

/// Generated header, relative to the working directory
pub const HEADER_PATH: &str = "include/version.h";

/// Plain build-number file, relative to the working directory
pub const BUILD_NUMBER_PATH: &str = "versioning";

/// Version-control executable queried for the commit count
pub const GIT_PROGRAM: &str = "git";

/// Arguments yielding the exact number of commits reachable from HEAD
pub const GIT_COUNT_ARGS: &[&str] = &["rev-list", "--count", "HEAD"];

/// Separator between the short version and the timestamp in `VERSION`
pub const TIMESTAMP_SEPARATOR: &str = " - ";

/// strftime layout of the build timestamp (microsecond precision, no zone)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";
