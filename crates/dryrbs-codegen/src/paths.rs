//! Output path resolution
//!
//! A signature file mirrors its source file's directory below the output
//! root, followed by directories for any enclosing namespaces the source
//! directory does not already spell out:
//!
//! ```text
//! spec/fixtures/test_dtos/test_dto3.rb
//!   module TestDtos::ModuleAgain::AndAgain; class TestDto3
//! => sig/spec/fixtures/test_dtos/module_again/and_again/test_dto3.rbs
//! ```

use crate::naming::{path_segments, to_snake_case};
use dryrbs_core::{GeneratorConfig, RecordClass};
use std::path::{Path, PathBuf};

/// Extension of generated signature files
pub const RBS_EXTENSION: &str = "rbs";

/// Resolve where the signature of `record` is written
pub fn resolve_output_path(record: &RecordClass, config: &GeneratorConfig) -> PathBuf {
    let dir = relative_source_dir(&record.source_file, config);
    let parents = parent_namespace_segments(record, &dir);

    let mut path = PathBuf::from(&config.output_root);
    path.extend(&dir);
    path.extend(&parents);
    path.push(format!(
        "{}.{RBS_EXTENSION}",
        to_snake_case(record.simple_name())
    ));
    path
}

/// Directory segments of the source file with configured prefixes removed
///
/// Each ignored directory is stripped once, in configuration order, when the
/// remaining segments start with it. The project root is stripped last.
pub fn relative_source_dir(source_file: &Path, config: &GeneratorConfig) -> Vec<String> {
    let parent = source_file
        .parent()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut segments: Vec<String> = path_segments(&parent)
        .into_iter()
        .map(str::to_string)
        .collect();

    let prefixes = config
        .ignored_directories
        .iter()
        .chain(std::iter::once(&config.project_root));
    for prefix in prefixes {
        strip_prefix_segments(&mut segments, prefix);
    }

    segments
}

/// Snake-cased enclosing namespace segments not already present in `dir`
///
/// Leading namespace segments are dropped while they appear among the
/// directory segments, so `A::B::C` under directory `a` yields `["b"]`.
pub fn parent_namespace_segments(record: &RecordClass, dir: &[String]) -> Vec<String> {
    let qualified = record.qualified_path();
    let enclosing = &qualified[..qualified.len().saturating_sub(1)];

    let mut parents = enclosing.iter().map(|segment| to_snake_case(segment)).peekable();
    while parents.next_if(|segment| dir.contains(segment)).is_some() {}
    parents.collect()
}

fn strip_prefix_segments(segments: &mut Vec<String>, prefix: &str) {
    let prefix = path_segments(prefix);
    if prefix.is_empty() || prefix.len() > segments.len() {
        return;
    }

    if segments.iter().zip(&prefix).all(|(seg, pre)| seg == pre) {
        tracing::trace!(prefix = %prefix.join("/"), "Stripped directory prefix");
        segments.drain(..prefix.len());
    }
}
