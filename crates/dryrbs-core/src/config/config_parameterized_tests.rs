#![allow(non_snake_case)]

use super::*;
use test_case::test_case;

// ============================================================================
// Type namespace validation
// ============================================================================

#[test_case("Types")]
#[test_case("My::Types")]
#[test_case("Api::V2::Types")]
#[test_case("Dry_Types")]
fn GeneratorConfig___valid_type_namespace___passes_validation(namespace: &str) {
    let config = GeneratorConfig::new().with_type_library_namespace(namespace);

    assert!(config.validate().is_ok());
}

#[test_case("")]
#[test_case("types")]
#[test_case("My::")]
#[test_case("::Types")]
#[test_case("My Types")]
#[test_case("My.Types")]
fn GeneratorConfig___invalid_type_namespace___fails_validation(namespace: &str) {
    let config = GeneratorConfig::new().with_type_library_namespace(namespace);

    assert!(matches!(config.validate(), Err(DryRbsError::Config(_))));
}

// ============================================================================
// Boolean flags from TOML
// ============================================================================

#[test_case("write_to_disk = true", true, false)]
#[test_case("overwrite_existing = true", false, true)]
#[test_case("write_files = true\noverwrite_files = true", true, true)]
#[test_case("", false, false)]
fn GeneratorConfig___flags_toml___parse_correctly(toml: &str, write: bool, overwrite: bool) {
    let config = GeneratorConfig::from_toml(toml).unwrap();

    assert_eq!(config.write_to_disk, write);
    assert_eq!(config.overwrite_existing, overwrite);
}
