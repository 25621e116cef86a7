#![allow(non_snake_case)]

use super::*;
use dryrbs_core::WriteOutcome;
use indoc::indoc;
use std::fs;
use tempfile::TempDir;

const DTO: &str = indoc! {"
    module Dtos
      class User < Dry::Struct
        attribute :name, Types::String
        attribute? :age, Types::Integer
      end
    end
"};

fn project(files: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    for (relative, content) in files {
        let path = dir.path().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }
    dir
}

fn config_for(dir: &TempDir) -> GeneratorConfig {
    GeneratorConfig::default()
        .with_output_root(dir.path().join("sig").to_string_lossy().into_owned())
        .with_ignored_directory(dir.path().to_string_lossy().into_owned())
}

#[test]
fn Generator___new___rejects_invalid_config() {
    let config = GeneratorConfig::default().with_type_library_namespace("");

    let err = Generator::new(config).unwrap_err();

    assert!(matches!(err, DryRbsError::Config(_)));
}

#[test]
fn Generator___run___produces_one_artifact_per_record_class() {
    let dir = project(&[("app/dtos/user.rb", DTO)]);
    let generator = Generator::new(config_for(&dir)).unwrap();

    let report = generator.run(dir.path()).unwrap();

    assert_eq!(report.artifacts.len(), 1);
    let artifact = &report.artifacts[0];
    assert_eq!(artifact.output_file, dir.path().join("sig/dtos/user.rbs"));
    assert!(artifact.content.contains("attr_reader age: Integer?"));
    assert!(report.writes.is_empty());
    assert!(!artifact.output_file.exists());
}

#[test]
fn Generator___run___records_parse_failures_and_continues() {
    let dir = project(&[
        ("app/broken.rb", "class Broken < Dry::Struct\n  attribute :x,\n"),
        ("app/dtos/user.rb", DTO),
    ]);
    let generator = Generator::new(config_for(&dir)).unwrap();

    let report = generator.run(dir.path()).unwrap();

    assert!(report.has_failures());
    assert_eq!(report.failures[0].source_file, dir.path().join("app/broken.rb"));
    assert_eq!(report.artifacts.len(), 1);
}

#[test]
fn Generator___run___non_utf8_source_is_a_failure() {
    let dir = project(&[]);
    fs::write(dir.path().join("binary.rb"), [0xff, 0xfe, 0x00]).unwrap();
    let generator = Generator::new(config_for(&dir)).unwrap();

    let report = generator.run(dir.path()).unwrap();

    assert_eq!(report.failures.len(), 1);
    assert!(report.artifacts.is_empty());
}

#[test]
fn Generator___run___missing_input_is_fatal() {
    let dir = project(&[]);
    let generator = Generator::new(config_for(&dir)).unwrap();

    let err = generator.run(&dir.path().join("missing")).unwrap_err();

    assert!(matches!(err, DryRbsError::InputNotFound(_)));
}

#[test]
fn Generator___run_with_write___persists_and_reports_outcomes() {
    let dir = project(&[("app/dtos/user.rb", DTO)]);
    let generator = Generator::new(config_for(&dir).with_write_to_disk(true)).unwrap();

    let report = generator.run(dir.path()).unwrap();

    let output = dir.path().join("sig/dtos/user.rbs");
    assert_eq!(report.writes, vec![(output.clone(), WriteOutcome::Written)]);
    assert_eq!(fs::read_to_string(output).unwrap(), report.artifacts[0].content);
}

#[test]
fn Generator___run_twice_without_overwrite___skips_second_write() {
    let dir = project(&[("app/dtos/user.rb", DTO)]);
    let generator = Generator::new(config_for(&dir).with_write_to_disk(true)).unwrap();

    generator.run(dir.path()).unwrap();
    let report = generator.run(dir.path()).unwrap();

    assert_eq!(report.writes[0].1, WriteOutcome::SkippedExisting);
    assert_eq!(report.written_count(), 0);
}

#[test]
fn Generator___scan___keeps_discovery_order() {
    let dir = project(&[
        ("app/b.rb", "class B < Dry::Struct\n  attribute :x, Types::String\nend\n"),
        ("app/a.rb", "class A < Dry::Struct\n  attribute :x, Types::String\nend\n"),
        ("app/c.rb", "class C < Dry::Struct\n  attribute :x, Types::String\nend\n"),
    ]);
    let generator = Generator::new(config_for(&dir)).unwrap();

    let scan = generator.scan(dir.path()).unwrap();

    let names: Vec<&str> = scan
        .units
        .iter()
        .map(|u| u.classes[0].qualified_name.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B", "C"]);
}

#[test]
fn Generator___custom_namespace___maps_only_that_namespace() {
    let source = indoc! {"
        class Dto < Dry::Struct
          attribute :a, My::Types::String
          attribute :b, Types::String
        end
    "};
    let dir = project(&[("app/dto.rb", source)]);
    let generator =
        Generator::new(config_for(&dir).with_type_library_namespace("My::Types")).unwrap();

    let report = generator.run(dir.path()).unwrap();

    let content = &report.artifacts[0].content;
    assert!(content.contains("attr_reader a: String\n"));
    assert!(content.contains("attr_reader b: untyped\n"));
}

#[test]
fn find_collisions___shared_output___is_reported() {
    let artifact = |source: &str, output: &str| GeneratedArtifact {
        class_name: "Dto".into(),
        source_file: PathBuf::from(source),
        output_file: PathBuf::from(output),
        content: String::new(),
    };
    let artifacts = vec![
        artifact("app/a.rb", "sig/dto.rbs"),
        artifact("app/other.rb", "sig/other.rbs"),
        artifact("lib/app/a.rb", "sig/dto.rbs"),
    ];

    let collisions = find_collisions(&artifacts);

    assert_eq!(
        collisions,
        vec![PathCollision {
            output_file: PathBuf::from("sig/dto.rbs"),
            classes: vec!["Dto".into(), "Dto".into()],
            sources: vec![PathBuf::from("app/a.rb"), PathBuf::from("lib/app/a.rb")],
        }]
    );
}

const INVOICES: &str = indoc! {"
    class Invoice < Dry::Struct
      attribute :id, Types::Integer
    end

    module Billing
      class Invoice < Dry::Struct
        attribute :total, Types::Float
      end
    end
"};

#[test]
fn Generator___run___same_file_collision_names_both_classes() {
    let dir = project(&[("app/billing/invoice.rb", INVOICES)]);
    let generator = Generator::new(config_for(&dir)).unwrap();

    let report = generator.run(dir.path()).unwrap();

    let source = dir.path().join("app/billing/invoice.rb");
    assert_eq!(
        report.collisions,
        vec![PathCollision {
            output_file: dir.path().join("sig/billing/invoice.rbs"),
            classes: vec!["Invoice".into(), "Billing::Invoice".into()],
            sources: vec![source],
        }]
    );
}

#[test]
fn Generator___run_with_write___first_colliding_artifact_is_kept() {
    let dir = project(&[("app/billing/invoice.rb", INVOICES)]);
    let generator = Generator::new(config_for(&dir).with_write_to_disk(true)).unwrap();

    let report = generator.run(dir.path()).unwrap();

    let outcomes: Vec<_> = report.writes.iter().map(|(_, outcome)| *outcome).collect();
    assert_eq!(outcomes, vec![WriteOutcome::Written, WriteOutcome::SkippedExisting]);
    let written = fs::read_to_string(dir.path().join("sig/billing/invoice.rbs")).unwrap();
    assert!(written.contains("attr_reader id: Integer"));
    assert!(!written.contains("total"));
}

#[test]
fn Generator___run_with_overwrite___last_colliding_artifact_is_kept() {
    let dir = project(&[("app/billing/invoice.rb", INVOICES)]);
    let config = config_for(&dir)
        .with_write_to_disk(true)
        .with_overwrite_existing(true);
    let generator = Generator::new(config).unwrap();

    generator.run(dir.path()).unwrap();

    let written = fs::read_to_string(dir.path().join("sig/billing/invoice.rbs")).unwrap();
    assert!(written.contains("attr_reader total: Float"));
    assert!(!written.contains("attr_reader id"));
}

#[test]
fn find_collisions___distinct_outputs___reports_nothing() {
    let artifacts = vec![GeneratedArtifact {
        class_name: "A".into(),
        source_file: PathBuf::from("app/a.rb"),
        output_file: PathBuf::from("sig/a.rbs"),
        content: String::new(),
    }];

    assert!(find_collisions(&artifacts).is_empty());
}

#[test]
fn generate___returns_artifacts() {
    let dir = project(&[("app/dtos/user.rb", DTO)]);

    let artifacts = generate(dir.path(), &config_for(&dir)).unwrap();

    assert_eq!(artifacts.len(), 1);
    assert_eq!(artifacts[0].class_name, "Dtos::User");
    assert!(artifacts[0].content.starts_with("module Dtos\n  class User < Dry::Struct\n"));
}
