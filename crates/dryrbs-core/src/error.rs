//! Error types for dryrbs

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for dryrbs operations
pub type DryRbsResult<T> = Result<T, DryRbsError>;

/// Error type for dryrbs operations
#[derive(Error, Debug)]
pub enum DryRbsError {
    /// Input path is neither a file nor a directory
    #[error("input path not found: {}", .0.display())]
    InputNotFound(PathBuf),

    /// Source file could not be parsed
    #[error("failed to parse {}: {reason}", path.display())]
    Parse { path: PathBuf, reason: String },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Filesystem error with the path that caused it
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error
    #[error("serialization error: {0}")]
    Serialization(String),
}

impl DryRbsError {
    /// Returns a stable numeric code, used as the CLI exit status
    pub fn error_code(&self) -> u32 {
        match self {
            DryRbsError::InputNotFound(_) => 1,
            DryRbsError::Parse { .. } => 2,
            DryRbsError::Config(_) => 3,
            DryRbsError::Io { .. } => 4,
            DryRbsError::Serialization(_) => 5,
        }
    }

    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        DryRbsError::Io {
            path: path.into(),
            source,
        }
    }
}

impl From<serde_json::Error> for DryRbsError {
    fn from(err: serde_json::Error) -> Self {
        DryRbsError::Serialization(err.to_string())
    }
}

impl From<toml::de::Error> for DryRbsError {
    fn from(err: toml::de::Error) -> Self {
        DryRbsError::Config(err.to_string())
    }
}

#[cfg(test)]
#[path = "error/error_tests.rs"]
mod error_tests;
