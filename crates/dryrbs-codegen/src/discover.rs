//! Source file discovery

use dryrbs_core::{DryRbsError, DryRbsResult};
use dryrbs_syntax::RUBY_EXTENSION;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Collect the Ruby source files named by `input`
///
/// A file is returned as is, whatever its extension. A directory is walked
/// recursively for `.rb` files, returned in sorted order. Unreadable entries
/// inside the directory are logged and skipped.
pub fn discover_sources(input: &Path) -> DryRbsResult<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    if !input.is_dir() {
        return Err(DryRbsError::InputNotFound(input.to_path_buf()));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(input)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| match entry {
            Ok(entry) => Some(entry),
            Err(err) => {
                tracing::warn!(error = %err, "Skipping directory entry");
                None
            }
        })
        .filter(|entry| entry.file_type().is_file() && is_ruby_source(entry.path()))
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    tracing::debug!(root = %input.display(), count = files.len(), "Discovered source files");

    Ok(files)
}

fn is_ruby_source(path: &Path) -> bool {
    path.extension().is_some_and(|ext| ext == RUBY_EXTENSION)
}
