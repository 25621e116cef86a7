//! `dryrbs generate` command

use crate::config;
use anyhow::{Context, Result, bail};
use clap::Args;
use dryrbs_codegen::{Generator, SourceUnit, render_declarations};
use dryrbs_core::{GeneratedArtifact, GenerationReport, GeneratorConfig, WriteOutcome};
use dryrbs_logging::EventCounts;
use std::path::PathBuf;

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs {
    /// Ruby source file or directory to scan
    pub input: PathBuf,

    /// Path to a configuration file (default: ./dryrbs.toml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Root directory for generated signatures
    #[arg(short, long)]
    pub output_root: Option<String>,

    /// Leading directory to strip from source paths (repeatable)
    #[arg(long = "ignored-dir")]
    pub ignored_dirs: Vec<String>,

    /// dry-types namespace, e.g. `Types` or `My::Types`
    #[arg(long)]
    pub types_namespace: Option<String>,

    /// Project root prefix to strip from source paths
    #[arg(long)]
    pub project_root: Option<String>,

    /// Write signature files instead of printing them
    #[arg(short, long)]
    pub write: bool,

    /// Replace existing non-empty signature files
    #[arg(long)]
    pub overwrite: bool,

    /// Print the generation report as JSON
    #[arg(long, conflicts_with = "combined")]
    pub json: bool,

    /// Print one merged declaration tree per source file
    #[arg(long, conflicts_with = "write")]
    pub combined: bool,

    /// Fail when any source file could not be parsed
    #[arg(long)]
    pub strict: bool,
}

/// Run the generate command
pub fn run(args: GenerateArgs) -> Result<()> {
    let base = config::load(args.config.as_deref())?;
    let config = apply_overrides(base, &args);
    let generator = Generator::new(config).context("Invalid configuration")?;

    let failures = if args.combined {
        let scan = generator
            .scan(&args.input)
            .with_context(|| format!("Failed to scan {}", args.input.display()))?;
        print!("{}", format_combined(&scan.units));
        scan.failures.len()
    } else {
        let report = generator
            .run(&args.input)
            .with_context(|| format!("Failed to generate from {}", args.input.display()))?;

        if args.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&report).context("Failed to serialize report")?
            );
        } else if args.write {
            println!("{}", format_summary(&report));
        } else {
            print!("{}", format_artifacts(&report.artifacts));
        }
        report.failures.len()
    };

    let counts = EventCounts::global();
    if counts.warnings() > 0 && !args.json {
        eprintln!("Finished with {} warning(s)", counts.warnings());
    }

    if args.strict && failures > 0 {
        bail!("{failures} source file(s) could not be parsed");
    }

    Ok(())
}

/// Layer command-line flags over a loaded configuration
pub fn apply_overrides(mut config: GeneratorConfig, args: &GenerateArgs) -> GeneratorConfig {
    if let Some(root) = &args.output_root {
        config.output_root = root.clone();
    }
    config.ignored_directories.extend(args.ignored_dirs.iter().cloned());
    if let Some(namespace) = &args.types_namespace {
        config.type_library_namespace = namespace.clone();
    }
    if let Some(root) = &args.project_root {
        config.project_root = root.clone();
    }
    config.write_to_disk |= args.write;
    config.overwrite_existing |= args.overwrite;
    config
}

/// Each artifact under a comment header naming its output file
pub fn format_artifacts(artifacts: &[GeneratedArtifact]) -> String {
    artifacts
        .iter()
        .map(|artifact| format!("# {}\n{}", artifact.output_file.display(), artifact.content))
        .collect::<Vec<_>>()
        .join("\n")
}

/// One merged declaration tree per source file that has record classes
pub fn format_combined(units: &[SourceUnit]) -> String {
    units
        .iter()
        .filter(|unit| !unit.classes.is_empty())
        .map(|unit| {
            format!(
                "# {}\n{}",
                unit.source_file.display(),
                render_declarations(&unit.classes)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Human-readable outcome of a writing run
pub fn format_summary(report: &GenerationReport) -> String {
    let skipped = report
        .writes
        .iter()
        .filter(|(_, outcome)| *outcome == WriteOutcome::SkippedExisting)
        .count();

    let mut lines = vec![format!(
        "✓ Wrote {} signature file(s), skipped {} existing",
        report.written_count(),
        skipped
    )];
    for failure in &report.failures {
        lines.push(format!(
            "✗ {}: {}",
            failure.source_file.display(),
            failure.reason
        ));
    }
    for collision in &report.collisions {
        lines.push(format!(
            "! {} is produced by {}",
            collision.output_file.display(),
            collision.classes.join(", ")
        ));
    }
    lines.join("\n")
}
