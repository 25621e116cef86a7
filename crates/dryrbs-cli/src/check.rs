//! `dryrbs check` command

use crate::config::{self, DEFAULT_CONFIG_FILE};
use anyhow::{Context, Result};
use dryrbs_core::GeneratorConfig;
use std::path::PathBuf;

/// Validate a configuration file and print its effective settings
pub fn run(path: Option<PathBuf>) -> Result<()> {
    let path = path.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

    println!("Checking configuration: {}", path.display());

    let config = config::load(Some(path.as_path()))?;
    config.validate().context("Configuration is invalid")?;

    println!("{}", describe(&config));
    println!("\nConfiguration is valid!");

    Ok(())
}

/// One line per effective setting
pub fn describe(config: &GeneratorConfig) -> String {
    let ignored = if config.ignored_directories.is_empty() {
        "(none)".to_string()
    } else {
        config.ignored_directories.join(", ")
    };

    [
        format!("✓ Output root: {}", config.output_root),
        format!("✓ Project root: {}", config.project_root),
        format!("✓ Ignored directories: {ignored}"),
        format!("✓ Types namespace: {}", config.type_library_namespace),
        format!("✓ Write files: {}", config.write_to_disk),
        format!("✓ Overwrite files: {}", config.overwrite_existing),
    ]
    .join("\n")
}
