//! Tree-sitter parser integration for Ruby
//!
//! Parses source with `tree-sitter-ruby` and lowers the concrete tree into
//! [`SyntaxNode`]. Sources containing syntax errors are rejected as a whole.

use crate::node::{ConstantPath, SyntaxNode};
use dryrbs_core::{DryRbsError, DryRbsResult};
use std::path::Path;
use tree_sitter::{Language, Node, Parser};

/// File extension of Ruby source files
pub const RUBY_EXTENSION: &str = "rb";

/// Read and parse a Ruby source file
pub fn parse_file(path: &Path) -> DryRbsResult<SyntaxNode> {
    let source = std::fs::read_to_string(path).map_err(|e| DryRbsError::Parse {
        path: path.to_path_buf(),
        reason: format!("failed to read source: {e}"),
    })?;

    parse_source(&source, path)
}

/// Parse Ruby source code into a lowered syntax tree
///
/// `path` is only used for error reporting.
pub fn parse_source(source: &str, path: &Path) -> DryRbsResult<SyntaxNode> {
    let parse_error = |reason: String| DryRbsError::Parse {
        path: path.to_path_buf(),
        reason,
    };

    let language: Language = tree_sitter_ruby::LANGUAGE.into();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| parse_error(format!("failed to load Ruby grammar: {e}")))?;

    let tree = parser
        .parse(source, None)
        .ok_or_else(|| parse_error("parser produced no tree".to_string()))?;

    let root = tree.root_node();
    if root.has_error() {
        return Err(parse_error(describe_error(root)));
    }

    let lowered = lower(root, source);
    tracing::trace!(path = %path.display(), "Parsed Ruby source");
    Ok(lowered)
}

/// Locate the first error or missing node and describe where it is
fn describe_error(root: Node<'_>) -> String {
    match first_error(root) {
        Some(node) => {
            let position = node.start_position();
            let what = if node.is_missing() {
                format!("missing `{}`", node.kind())
            } else {
                "syntax error".to_string()
            };
            format!("{what} at line {}, column {}", position.row + 1, position.column + 1)
        }
        None => "syntax error".to_string(),
    }
}

fn first_error(node: Node<'_>) -> Option<Node<'_>> {
    if node.is_error() || node.is_missing() {
        return Some(node);
    }
    if !node.has_error() {
        return None;
    }
    let mut cursor = node.walk();
    let children: Vec<Node<'_>> = node.children(&mut cursor).collect();
    children.into_iter().find_map(first_error)
}

fn node_text<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    source.get(node.byte_range()).unwrap_or_default()
}

fn named_children(node: Node<'_>) -> Vec<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| child.kind() != "comment")
        .collect()
}

fn lower(node: Node<'_>, source: &str) -> SyntaxNode {
    match node.kind() {
        "program" | "body_statement" | "parenthesized_statements" | "then" | "else" => {
            SyntaxNode::Sequence(lower_all(named_children(node), source))
        }
        "module" => match node
            .child_by_field_name("name")
            .and_then(|name| constant_path(name, source))
        {
            Some(name) => SyntaxNode::Namespace {
                name,
                body: Box::new(lower_body(node, source)),
            },
            None => lower_other(node, source),
        },
        "class" => match node
            .child_by_field_name("name")
            .and_then(|name| constant_path(name, source))
        {
            Some(name) => {
                let superclass = node
                    .child_by_field_name("superclass")
                    .and_then(|sup| sup.named_child(0))
                    .and_then(|expr| constant_path(expr, source));
                SyntaxNode::Class {
                    name,
                    superclass,
                    body: Box::new(lower_body(node, source)),
                }
            }
            None => lower_other(node, source),
        },
        "call" => lower_call(node, source),
        "constant" | "scope_resolution" => match constant_path(node, source) {
            Some(path) => SyntaxNode::Constant(path),
            None => lower_other(node, source),
        },
        "simple_symbol" => {
            SyntaxNode::Literal(node_text(node, source).trim_start_matches(':').to_string())
        }
        "string" | "delimited_symbol" => match plain_string(node, source) {
            Some(text) => SyntaxNode::Literal(text),
            None => lower_other(node, source),
        },
        _ => lower_other(node, source),
    }
}

fn lower_all(nodes: Vec<Node<'_>>, source: &str) -> Vec<SyntaxNode> {
    nodes.into_iter().map(|n| lower(n, source)).collect()
}

fn lower_other(node: Node<'_>, source: &str) -> SyntaxNode {
    SyntaxNode::Other(lower_all(named_children(node), source))
}

/// Lower the body of a `module` or `class`
///
/// Older grammars place body statements directly under the declaration
/// instead of in a `body` field.
fn lower_body(node: Node<'_>, source: &str) -> SyntaxNode {
    if let Some(body) = node.child_by_field_name("body") {
        return SyntaxNode::Sequence(lower_all(named_children(body), source));
    }

    let header: Vec<usize> = ["name", "superclass"]
        .iter()
        .filter_map(|field| node.child_by_field_name(field))
        .map(|child| child.id())
        .collect();

    let statements = named_children(node)
        .into_iter()
        .filter(|child| !header.contains(&child.id()))
        .collect();
    SyntaxNode::Sequence(lower_all(statements, source))
}

fn lower_call(node: Node<'_>, source: &str) -> SyntaxNode {
    let receiver = node
        .child_by_field_name("receiver")
        .map(|r| Box::new(lower(r, source)));
    let method = node
        .child_by_field_name("method")
        .map(|m| node_text(m, source).to_string())
        .unwrap_or_default();
    let arguments = node
        .child_by_field_name("arguments")
        .map(|args| lower_all(named_children(args), source))
        .unwrap_or_default();
    let block = node
        .child_by_field_name("block")
        .map(|b| Box::new(lower_other(b, source)));

    SyntaxNode::Call {
        receiver,
        method,
        arguments,
        block,
    }
}

/// Resolve a `constant` / `scope_resolution` node into a constant path
///
/// Returns `None` when the scope is not itself a constant (`obj::Const`).
fn constant_path(node: Node<'_>, source: &str) -> Option<ConstantPath> {
    match node.kind() {
        "constant" => Some(ConstantPath::new([node_text(node, source)])),
        "scope_resolution" => {
            let name = node_text(node.child_by_field_name("name")?, source);
            match node.child_by_field_name("scope") {
                Some(scope) => Some(constant_path(scope, source)?.child(name)),
                None => Some(ConstantPath {
                    absolute: true,
                    segments: vec![name.to_string()],
                }),
            }
        }
        _ => None,
    }
}

/// Content of a string or symbol without interpolation or escapes
fn plain_string(node: Node<'_>, source: &str) -> Option<String> {
    let parts = named_children(node);
    let mut text = String::new();
    for part in parts {
        if part.kind() != "string_content" {
            return None;
        }
        text.push_str(node_text(part, source));
    }
    Some(text)
}
