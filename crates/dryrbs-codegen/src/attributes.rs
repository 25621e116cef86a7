//! Attribute declaration extraction
//!
//! Recognizes the two dry-struct declaration forms in a class body:
//!
//! ```ruby
//! attribute :name, Types::String            # required key
//! attribute? :nickname, Types::String       # omittable key
//! ```

use crate::types::{MappedType, TypeMapper};
use dryrbs_core::AttributeDeclaration;
use dryrbs_syntax::SyntaxNode;

const REQUIRED_FORM: &str = "attribute";
const OPTIONAL_FORM: &str = "attribute?";

/// Extract every attribute declared directly in a class body, in source order
pub fn extract_attributes(body: &SyntaxNode, mapper: &TypeMapper) -> Vec<AttributeDeclaration> {
    body.statements()
        .into_iter()
        .filter_map(|statement| parse_attribute(statement, mapper))
        .collect()
}

/// Parse one `attribute` / `attribute?` call
///
/// The field is optional when either the declaration form or the type
/// expression says so; the two never stack.
fn parse_attribute(node: &SyntaxNode, mapper: &TypeMapper) -> Option<AttributeDeclaration> {
    let SyntaxNode::Call {
        receiver: None,
        method,
        arguments,
        ..
    } = node
    else {
        return None;
    };

    let optional_form = match method.as_str() {
        REQUIRED_FORM => false,
        OPTIONAL_FORM => true,
        _ => return None,
    };

    let Some(SyntaxNode::Literal(name)) = arguments.first() else {
        return None;
    };

    let mapped = arguments
        .get(1)
        .map(|expr| mapper.map(expr))
        .unwrap_or_else(MappedType::unknown);

    Some(AttributeDeclaration::new(
        name.clone(),
        mapped.descriptor,
        optional_form || mapped.optional,
    ))
}
