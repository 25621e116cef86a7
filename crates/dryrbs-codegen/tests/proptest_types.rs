//! Property-based tests for dry-types expression mapping
//!
//! Builds arbitrarily nested `Array.of` / `Hash.of` expressions as Ruby
//! source, runs them through the parser and mapper, and checks the rendered
//! RBS type against the expected spelling.

use dryrbs_codegen::attributes::extract_attributes;
use dryrbs_codegen::TypeMapper;
use dryrbs_syntax::{SyntaxNode, parse_source};
use proptest::prelude::*;
use std::path::Path;

/// A type expression with its Ruby source and expected RBS rendering
#[derive(Debug, Clone)]
struct TypeCase {
    ruby: String,
    rbs: String,
}

const PRIMITIVES: &[(&str, &str)] = &[
    ("String", "String"),
    ("Integer", "Integer"),
    ("Float", "Float"),
    ("Bool", "bool"),
    ("Time", "Time"),
    ("Date", "Date"),
    ("Any", "untyped"),
    ("Symbol", "untyped"),
];

fn arb_leaf() -> impl Strategy<Value = TypeCase> {
    prop::sample::select(PRIMITIVES).prop_map(|(name, rbs)| TypeCase {
        ruby: format!("Types::{name}"),
        rbs: rbs.to_string(),
    })
}

fn arb_type() -> impl Strategy<Value = TypeCase> {
    arb_leaf().prop_recursive(4, 24, 2, |inner| {
        prop_oneof![
            inner.clone().prop_map(|element| TypeCase {
                ruby: format!("Types::Array.of({})", element.ruby),
                rbs: format!("Array[{}]", element.rbs),
            }),
            (inner.clone(), inner).prop_map(|(key, value)| TypeCase {
                ruby: format!("Types::Hash.of({}, {})", key.ruby, value.ruby),
                rbs: format!("Hash[{}, {}]", key.rbs, value.rbs),
            }),
        ]
    })
}

/// Parse `attribute :field, <expr>` inside a class and render its type
fn render(expr: &str, optional_form: bool) -> String {
    let keyword = if optional_form { "attribute?" } else { "attribute" };
    let source = format!("class Dto < Dry::Struct\n  {keyword} :field, {expr}\nend\n");
    let tree = parse_source(&source, Path::new("dto.rb")).unwrap();

    let body = match tree.statements()[0] {
        SyntaxNode::Class { body, .. } => body.as_ref().clone(),
        other => panic!("expected class, got {other:?}"),
    };
    let attrs = extract_attributes(&body, &TypeMapper::default());
    attrs[0].signature_type().to_string()
}

fn optional_rendering(rbs: &str) -> String {
    if rbs == "untyped" {
        rbs.to_string()
    } else {
        format!("{rbs}?")
    }
}

proptest! {
    /// Property: nested collection types render with matching brackets
    #[test]
    fn proptest_nested_types_render(case in arb_type()) {
        prop_assert_eq!(render(&case.ruby, false), case.rbs);
    }

    /// Property: `.optional` appends exactly one `?`, except on untyped
    #[test]
    fn proptest_optional_suffix(case in arb_type()) {
        let expr = format!("{}.optional", case.ruby);
        prop_assert_eq!(render(&expr, false), optional_rendering(&case.rbs));
    }

    /// Property: `attribute?` and `.optional` never stack
    #[test]
    fn proptest_optional_forms_do_not_stack(case in arb_type(), with_suffix in any::<bool>()) {
        let expr = if with_suffix {
            format!("{}.optional", case.ruby)
        } else {
            case.ruby.clone()
        };
        prop_assert_eq!(render(&expr, true), optional_rendering(&case.rbs));
    }

    /// Property: unknown constants always render as untyped
    #[test]
    fn proptest_unknown_constant_is_untyped(name in "[A-Z][a-zA-Z0-9]{0,12}", optional in any::<bool>()) {
        let expr = format!("Other::{name}{}", if optional { ".optional" } else { "" });
        prop_assert_eq!(render(&expr, false), "untyped");
    }
}
