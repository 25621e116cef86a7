//! Generator configuration

use crate::error::{DryRbsError, DryRbsResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configuration for a generation run
///
/// Every field is optional in serialized form. Keys from older `dry_struct_rbs`
/// configurations (`rbs_output_dir`, `ignored_dirs`, `dry_types_namespace`,
/// `write_files`, `overwrite_files`) are accepted as aliases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Root directory for generated `.rbs` files
    #[serde(default = "default_output_root", alias = "rbs_output_dir")]
    pub output_root: String,

    /// Leading directory prefixes stripped before path reconciliation
    #[serde(default, alias = "ignored_dirs")]
    pub ignored_directories: Vec<String>,

    /// Constant prefix of the dry-types module, e.g. `Types` or `My::Types`
    #[serde(default = "default_type_namespace", alias = "dry_types_namespace")]
    pub type_library_namespace: String,

    /// Project root prefix, stripped after the ignored directories
    #[serde(default = "default_project_root")]
    pub project_root: String,

    /// Persist generated artifacts
    #[serde(default, alias = "write_files")]
    pub write_to_disk: bool,

    /// Replace existing non-empty signature files
    #[serde(default, alias = "overwrite_files")]
    pub overwrite_existing: bool,
}

fn default_output_root() -> String {
    "sig".to_string()
}

fn default_type_namespace() -> String {
    "Types".to_string()
}

fn default_project_root() -> String {
    "app".to_string()
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            output_root: default_output_root(),
            ignored_directories: Vec::new(),
            type_library_namespace: default_type_namespace(),
            project_root: default_project_root(),
            write_to_disk: false,
            overwrite_existing: false,
        }
    }
}

impl GeneratorConfig {
    /// Create a configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a file
    ///
    /// Files ending in `.json` are read as JSON, everything else as TOML.
    pub fn from_file(path: impl AsRef<Path>) -> DryRbsResult<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| DryRbsError::io(path, e))?;

        if path.extension().is_some_and(|ext| ext == "json") {
            Self::from_json(content.as_bytes())
        } else {
            Self::from_toml(&content)
        }
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> DryRbsResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Parse configuration from JSON bytes
    pub fn from_json(bytes: &[u8]) -> DryRbsResult<Self> {
        if bytes.is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_slice(bytes)?)
    }

    /// Set the output root
    pub fn with_output_root(mut self, root: impl Into<String>) -> Self {
        self.output_root = root.into();
        self
    }

    /// Add an ignored directory prefix
    pub fn with_ignored_directory(mut self, dir: impl Into<String>) -> Self {
        self.ignored_directories.push(dir.into());
        self
    }

    /// Set the dry-types namespace
    pub fn with_type_library_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.type_library_namespace = namespace.into();
        self
    }

    /// Set the project root prefix
    pub fn with_project_root(mut self, root: impl Into<String>) -> Self {
        self.project_root = root.into();
        self
    }

    /// Enable or disable writing artifacts to disk
    pub fn with_write_to_disk(mut self, write: bool) -> Self {
        self.write_to_disk = write;
        self
    }

    /// Enable or disable replacing existing non-empty files
    pub fn with_overwrite_existing(mut self, overwrite: bool) -> Self {
        self.overwrite_existing = overwrite;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> DryRbsResult<()> {
        if self.output_root.trim().is_empty() {
            return Err(DryRbsError::Config("output_root cannot be empty".into()));
        }

        if self.type_library_namespace.is_empty() {
            return Err(DryRbsError::Config(
                "type_library_namespace cannot be empty".into(),
            ));
        }

        for segment in self.type_library_namespace.split("::") {
            if !is_constant_name(segment) {
                return Err(DryRbsError::Config(format!(
                    "type_library_namespace segment '{segment}' is not a Ruby constant name"
                )));
            }
        }

        if self.ignored_directories.iter().any(|d| d.trim().is_empty()) {
            return Err(DryRbsError::Config(
                "ignored_directories cannot contain empty entries".into(),
            ));
        }

        Ok(())
    }
}

/// Check whether a string is a valid Ruby constant identifier
fn is_constant_name(segment: &str) -> bool {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) if first.is_ascii_uppercase() => {
            chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
        }
        _ => false,
    }
}


#[cfg(test)]
#[path = "config/config_parameterized_tests.rs"]
mod config_parameterized_tests;
