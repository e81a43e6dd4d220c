//! verstamp - commit-count version stamping library
//!
//! Exposes the data models and the stamping operation so the binary and
//! the tests drive the same code.

pub mod constants;
pub mod logging;
pub mod models;
pub mod stamper;
pub mod vcs;
pub mod writer;

#[cfg(test)]
#[path = "../build/head_refs.rs"]
mod head_refs;
