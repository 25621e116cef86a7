//! Generation pipeline
//!
//! Discovers sources, then parses, walks, emits and resolves every file in
//! parallel. Results keep discovery order. Writing, when enabled, runs
//! sequentially afterwards.

use crate::discover::discover_sources;
use crate::paths::resolve_output_path;
use crate::signature::render_record_class;
use crate::types::TypeMapper;
use crate::walker::collect_record_classes;
use crate::writer::write_artifact;
use dryrbs_core::{
    DryRbsError, DryRbsResult, GeneratedArtifact, GenerationReport, GeneratorConfig,
    NAMESPACE_SEPARATOR, ParseFailure, PathCollision, RecordClass,
};
use rayon::prelude::*;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Record classes found in one source file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceUnit {
    pub source_file: PathBuf,
    pub classes: Vec<RecordClass>,
}

/// Outcome of scanning an input path
#[derive(Debug, Clone, Default)]
pub struct ScanResult {
    pub units: Vec<SourceUnit>,
    pub failures: Vec<ParseFailure>,
}

/// Signature generator for one configuration
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    mapper: TypeMapper,
}

impl Generator {
    /// Create a generator, validating the configuration
    pub fn new(config: GeneratorConfig) -> DryRbsResult<Self> {
        config.validate()?;
        let mapper = TypeMapper::new(&config.type_library_namespace);
        Ok(Self { config, mapper })
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Parse and walk every source file under `input`
    pub fn scan(&self, input: &Path) -> DryRbsResult<ScanResult> {
        let sources = discover_sources(input)?;

        let results: Vec<Result<SourceUnit, ParseFailure>> = sources
            .par_iter()
            .map(|path| self.scan_file(path))
            .collect();

        let mut scan = ScanResult::default();
        for result in results {
            match result {
                Ok(unit) => scan.units.push(unit),
                Err(failure) => {
                    tracing::warn!(
                        path = %failure.source_file.display(),
                        reason = %failure.reason,
                        "Skipping unparseable source file"
                    );
                    scan.failures.push(failure);
                }
            }
        }

        Ok(scan)
    }

    /// Parse and walk one source file
    pub fn scan_file(&self, path: &Path) -> Result<SourceUnit, ParseFailure> {
        let tree = dryrbs_syntax::parse_file(path).map_err(|err| ParseFailure {
            source_file: path.to_path_buf(),
            reason: match err {
                DryRbsError::Parse { reason, .. } => reason,
                other => other.to_string(),
            },
        })?;

        let classes = collect_record_classes(&tree, path, &self.mapper);
        tracing::debug!(path = %path.display(), classes = classes.len(), "Scanned source file");

        Ok(SourceUnit {
            source_file: path.to_path_buf(),
            classes,
        })
    }

    /// One artifact per record class, in unit order
    pub fn artifacts(&self, units: &[SourceUnit]) -> Vec<GeneratedArtifact> {
        units
            .par_iter()
            .flat_map_iter(|unit| unit.classes.iter().map(|record| self.artifact(record)))
            .collect()
    }

    fn artifact(&self, record: &RecordClass) -> GeneratedArtifact {
        GeneratedArtifact {
            class_name: record.qualified_path().join(NAMESPACE_SEPARATOR),
            source_file: record.source_file.clone(),
            output_file: resolve_output_path(record, &self.config),
            content: render_record_class(record),
        }
    }

    /// Run the whole pipeline, writing artifacts when configured to
    pub fn run(&self, input: &Path) -> DryRbsResult<GenerationReport> {
        let scan = self.scan(input)?;
        let artifacts = self.artifacts(&scan.units);
        let collisions = find_collisions(&artifacts);

        for collision in &collisions {
            tracing::warn!(
                path = %collision.output_file.display(),
                classes = %collision.classes.join(", "),
                "Several classes resolve to the same signature file"
            );
        }

        let mut writes = Vec::new();
        if self.config.write_to_disk {
            for artifact in &artifacts {
                let outcome = write_artifact(artifact, self.config.overwrite_existing)?;
                writes.push((artifact.output_file.clone(), outcome));
            }
        }

        let report = GenerationReport {
            artifacts,
            failures: scan.failures,
            collisions,
            writes,
        };

        tracing::info!(
            artifacts = report.artifacts.len(),
            failures = report.failures.len(),
            written = report.written_count(),
            "Generation finished"
        );

        Ok(report)
    }
}

/// Group artifacts that share an output file
///
/// Collisions are ordered by output path; classes keep artifact order and
/// each source file is listed once.
pub fn find_collisions(artifacts: &[GeneratedArtifact]) -> Vec<PathCollision> {
    let mut by_output: BTreeMap<&Path, Vec<&GeneratedArtifact>> = BTreeMap::new();
    for artifact in artifacts {
        by_output
            .entry(artifact.output_file.as_path())
            .or_default()
            .push(artifact);
    }

    by_output
        .into_iter()
        .filter(|(_, group)| group.len() > 1)
        .map(|(output_file, group)| {
            let mut sources: Vec<PathBuf> = Vec::new();
            for artifact in &group {
                if !sources.contains(&artifact.source_file) {
                    sources.push(artifact.source_file.clone());
                }
            }
            PathCollision {
                output_file: output_file.to_path_buf(),
                classes: group.iter().map(|a| a.class_name.clone()).collect(),
                sources,
            }
        })
        .collect()
}

/// Generate the signatures for every record class under `input`
///
/// Files that fail to parse are skipped. Artifacts are written to disk when
/// `config.write_to_disk` is set.
pub fn generate(input: &Path, config: &GeneratorConfig) -> DryRbsResult<Vec<GeneratedArtifact>> {
    let report = Generator::new(config.clone())?.run(input)?;
    Ok(report.artifacts)
}

#[cfg(test)]
#[path = "generator/generator_tests.rs"]
mod generator_tests;
