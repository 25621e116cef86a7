//! Configuration file lookup

use anyhow::{Context, Result};
use dryrbs_core::GeneratorConfig;
use std::path::{Path, PathBuf};

/// Configuration file picked up from the working directory
pub const DEFAULT_CONFIG_FILE: &str = "dryrbs.toml";

/// Load the configuration named on the command line, or the default file
///
/// An explicitly named file must exist. Without one, `dryrbs.toml` in the
/// working directory is used when present, otherwise the defaults.
pub fn load(explicit: Option<&Path>) -> Result<GeneratorConfig> {
    match explicit {
        Some(path) => load_file(path),
        None => {
            let default = PathBuf::from(DEFAULT_CONFIG_FILE);
            if default.is_file() {
                load_file(&default)
            } else {
                tracing::debug!("No {DEFAULT_CONFIG_FILE} found, using defaults");
                Ok(GeneratorConfig::default())
            }
        }
    }
}

fn load_file(path: &Path) -> Result<GeneratorConfig> {
    tracing::debug!(path = %path.display(), "Loading configuration");
    GeneratorConfig::from_file(path)
        .with_context(|| format!("Failed to load configuration: {}", path.display()))
}

#[cfg(test)]
mod tests {
    #![allow(non_snake_case)]

    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn load___explicit_toml___is_parsed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "output_root = \"types\"\nproject_root = \"lib\"\n").unwrap();

        let config = load(Some(path.as_path())).unwrap();

        assert_eq!(config.output_root, "types");
        assert_eq!(config.project_root, "lib");
    }

    #[test]
    fn load___explicit_json___is_parsed() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dryrbs.json");
        fs::write(&path, r#"{"dry_types_namespace": "My::Types"}"#).unwrap();

        let config = load(Some(path.as_path())).unwrap();

        assert_eq!(config.type_library_namespace, "My::Types");
    }

    #[test]
    fn load___explicit_missing_file___fails_with_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.toml");

        let err = load(Some(path.as_path())).unwrap_err();

        assert!(err.to_string().contains("missing.toml"));
    }

    #[test]
    fn load___malformed_toml___fails() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "output_root = [").unwrap();

        assert!(load(Some(path.as_path())).is_err());
    }
}
