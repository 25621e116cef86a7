//! Artifact persistence

use dryrbs_core::{DryRbsError, DryRbsResult, GeneratedArtifact, WriteOutcome};
use std::fs;
use std::path::Path;

/// Write an artifact to its output file
///
/// Without `overwrite`, an existing destination whose content is non-empty
/// after trimming whitespace is left untouched. Parent directories are
/// created as needed.
pub fn write_artifact(artifact: &GeneratedArtifact, overwrite: bool) -> DryRbsResult<WriteOutcome> {
    let path = &artifact.output_file;

    if !overwrite && has_content(path)? {
        tracing::warn!(path = %path.display(), "Signature file exists, skipping");
        return Ok(WriteOutcome::SkippedExisting);
    }

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| DryRbsError::io(parent, e))?;
    }

    fs::write(path, &artifact.content).map_err(|e| DryRbsError::io(path, e))?;
    tracing::debug!(path = %path.display(), bytes = artifact.content.len(), "Wrote signature file");

    Ok(WriteOutcome::Written)
}

/// Whether `path` exists and holds anything besides whitespace
fn has_content(path: &Path) -> DryRbsResult<bool> {
    if !path.exists() {
        return Ok(false);
    }

    let bytes = fs::read(path).map_err(|e| DryRbsError::io(path, e))?;
    Ok(!String::from_utf8_lossy(&bytes).trim().is_empty())
}
