#![allow(non_snake_case)]

use super::*;

#[test]
fn DryRbsError___input_not_found___displays_path() {
    let err = DryRbsError::InputNotFound(PathBuf::from("app/models"));

    let display = err.to_string();

    assert_eq!(display, "input path not found: app/models");
}

#[test]
fn DryRbsError___parse___displays_path_and_reason() {
    let err = DryRbsError::Parse {
        path: PathBuf::from("a.rb"),
        reason: "syntax error at line 3".into(),
    };

    assert_eq!(err.to_string(), "failed to parse a.rb: syntax error at line 3");
}

#[test]
fn DryRbsError___io___keeps_source_error() {
    let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");

    let err = DryRbsError::io("sig/a.rbs", io);

    assert!(std::error::Error::source(&err).is_some());
    assert!(err.to_string().starts_with("I/O error at sig/a.rbs"));
}

#[test]
fn DryRbsError___all_variants___have_unique_codes() {
    let errors = vec![
        DryRbsError::InputNotFound(PathBuf::new()),
        DryRbsError::Parse {
            path: PathBuf::new(),
            reason: String::new(),
        },
        DryRbsError::Config(String::new()),
        DryRbsError::io("", std::io::Error::other("x")),
        DryRbsError::Serialization(String::new()),
    ];

    let codes: Vec<u32> = errors.iter().map(|e| e.error_code()).collect();
    let unique: std::collections::HashSet<u32> = codes.iter().copied().collect();

    assert_eq!(codes.len(), unique.len(), "All error codes should be unique");
}

#[test]
fn DryRbsError___from_serde_error___converts_to_serialization_error() {
    let json_err = serde_json::from_str::<String>("invalid").unwrap_err();

    let err: DryRbsError = json_err.into();

    assert!(matches!(err, DryRbsError::Serialization(_)));
}

#[test]
fn DryRbsError___from_toml_error___converts_to_config_error() {
    let toml_err = toml::from_str::<toml::Table>("= broken").unwrap_err();

    let err: DryRbsError = toml_err.into();

    assert!(matches!(err, DryRbsError::Config(_)));
}
