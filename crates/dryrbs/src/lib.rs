//! # dryrbs
//!
//! Generate RBS type signatures from Ruby classes built on `dry-struct`.
//!
//! Ruby sources are parsed statically; nothing is loaded or executed. Every
//! class that declares at least one `attribute` or `attribute?` becomes one
//! `.rbs` file with an `attr_reader` per attribute and a keyword
//! `initialize`, nested in the modules and classes that enclosed it.
//!
//! ## Quick Start
//!
//! ```no_run
//! use dryrbs::prelude::*;
//! use std::path::Path;
//!
//! let config = GeneratorConfig::default()
//!     .with_project_root("app")
//!     .with_write_to_disk(true);
//!
//! let report = Generator::new(config)?.run(Path::new("app/models"))?;
//! for failure in &report.failures {
//!     eprintln!("skipped {}: {}", failure.source_file.display(), failure.reason);
//! }
//! # Ok::<(), DryRbsError>(())
//! ```
//!
//! ## Crate Structure
//!
//! This is a facade crate that re-exports from:
//! - [`dryrbs_core`] - model types, configuration, errors
//! - [`dryrbs_syntax`] - Ruby parsing
//! - [`dryrbs_codegen`] - the generation pipeline
//! - [`dryrbs_logging`] - tracing setup

// Re-export core types
pub use dryrbs_core::{
    AttributeDeclaration, DryRbsError, DryRbsResult, FrameKind, GeneratedArtifact,
    GenerationReport, GeneratorConfig, LogLevel, NamespaceFrame, NamespaceStack, ParseFailure,
    PathCollision, Primitive, RecordClass, TypeDescriptor, WriteOutcome,
};

// Re-export the pipeline
pub use dryrbs_codegen::{
    Generator, ScanResult, SourceUnit, TypeMapper, discover_sources, find_collisions, generate,
    render_declarations, render_record_class, resolve_output_path, write_artifact,
};

pub use dryrbs_syntax::{SyntaxNode, parse_file, parse_source};

pub use dryrbs_logging::{EventCounts, ReloadHandle, init_logging};

pub use tracing;

/// Change the level of the subscriber installed by [`init_logging`]
pub fn set_log_level(level: LogLevel) -> DryRbsResult<()> {
    ReloadHandle::global()
        .reload_level(level)
        .map_err(DryRbsError::Config)
}

/// Prelude module for convenient imports.
///
/// Use `use dryrbs::prelude::*;` to import commonly used types.
pub mod prelude {
    pub use crate::{
        DryRbsError, DryRbsResult, GeneratedArtifact, GenerationReport, Generator,
        GeneratorConfig, LogLevel, WriteOutcome, generate,
    };
}
