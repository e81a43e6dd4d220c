//! Artifact output
//!
//! Every destination is truncated and rewritten in full. Parent
//! directories are never created; a missing one is a write failure.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use tracing::info;

use crate::models::StampError;

/// Destination for generated artifacts
pub trait ArtifactWriter {
    fn write(&self, path: &Path, text: &str) -> Result<(), StampError>;
}

/// Writes artifacts to the real filesystem
#[derive(Debug, Clone, Copy, Default)]
pub struct FsArtifactWriter;

impl ArtifactWriter for FsArtifactWriter {
    fn write(&self, path: &Path, text: &str) -> Result<(), StampError> {
        let to_error = |source: std::io::Error| StampError::FilesystemWrite {
            path: path.to_path_buf(),
            source,
        };

        let mut file = File::create(path).map_err(to_error)?;
        file.write_all(text.as_bytes()).map_err(to_error)?;
        file.flush().map_err(to_error)?;

        info!("Wrote {} ({} bytes)", path.display(), text.len());
        Ok(())
    }
}
