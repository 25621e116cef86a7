//! dryrbs-core - Core model, configuration, and error types
//!
//! This crate provides the foundational types shared by the dryrbs pipeline:
//! - [`TypeDescriptor`] and [`AttributeDeclaration`] for extracted fields
//! - [`RecordClass`] and [`NamespaceStack`] for discovered dry-struct classes
//! - [`GeneratedArtifact`] and [`GenerationReport`] for pipeline output
//! - [`GeneratorConfig`] for run configuration
//! - [`DryRbsError`] for error handling

mod config;
mod error;
mod model;

pub use config::GeneratorConfig;
pub use error::{DryRbsError, DryRbsResult};
pub use model::{
    AttributeDeclaration, FrameKind, GeneratedArtifact, GenerationReport, NAMESPACE_SEPARATOR,
    NamespaceFrame, NamespaceStack, ParseFailure, PathCollision, Primitive, RecordClass,
    TypeDescriptor, WriteOutcome,
};

/// Log levels accepted by the CLI and the logging crate
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
    Off,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Trace => write!(f, "TRACE"),
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warn => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
            LogLevel::Off => write!(f, "OFF"),
        }
    }
}

impl std::str::FromStr for LogLevel {
    type Err = DryRbsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" | "warning" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            "off" => Ok(LogLevel::Off),
            other => Err(DryRbsError::Config(format!("unknown log level: {other}"))),
        }
    }
}

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        AttributeDeclaration, DryRbsError, DryRbsResult, FrameKind, GeneratedArtifact,
        GenerationReport, GeneratorConfig, LogLevel, NamespaceFrame, NamespaceStack, RecordClass,
        TypeDescriptor,
    };
}
