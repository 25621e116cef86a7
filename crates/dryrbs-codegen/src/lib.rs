//! dryrbs-codegen - RBS signature generation for dry-struct classes
//!
//! The pipeline, one stage per module:
//!
//! - [`discover`]: find Ruby sources under an input path
//! - [`walker`]: collect record classes and their enclosing scopes
//! - [`attributes`] / [`types`]: read `attribute` declarations and map dry-types expressions
//! - [`signature`] / [`rbs`]: build and render RBS declarations
//! - [`paths`]: decide where each signature file goes
//! - [`writer`]: persist artifacts
//!
//! [`Generator`] ties the stages together.

pub mod attributes;
pub mod discover;
pub mod generator;
pub mod naming;
pub mod paths;
pub mod rbs;
pub mod signature;
pub mod types;
pub mod walker;
pub mod writer;

pub use discover::discover_sources;
pub use generator::{Generator, ScanResult, SourceUnit, find_collisions, generate};
pub use paths::{RBS_EXTENSION, resolve_output_path};
pub use signature::{render_declarations, render_record_class};
pub use types::{MappedType, TypeMapper};
pub use walker::collect_record_classes;
pub use writer::write_artifact;
