//! Syntax tree traversal
//!
//! Walks a lowered syntax tree and collects every class that declares at
//! least one attribute, together with the modules and classes enclosing it.
//! Each recursive call receives its own [`NamespaceStack`]; entering a scope
//! builds an extended copy.

use crate::attributes::extract_attributes;
use crate::types::TypeMapper;
use dryrbs_core::{NamespaceFrame, NamespaceStack, RecordClass};
use dryrbs_syntax::SyntaxNode;
use std::path::Path;

/// Collect the record classes of one source file in definition order
///
/// An outer class precedes the classes nested inside it.
pub fn collect_record_classes(
    tree: &SyntaxNode,
    source_file: &Path,
    mapper: &TypeMapper,
) -> Vec<RecordClass> {
    let walker = Walker {
        source_file,
        mapper,
    };
    let mut found = Vec::new();
    walker.walk(tree, &NamespaceStack::new(), &mut found);
    found
}

struct Walker<'a> {
    source_file: &'a Path,
    mapper: &'a TypeMapper,
}

impl Walker<'_> {
    fn walk(&self, node: &SyntaxNode, stack: &NamespaceStack, found: &mut Vec<RecordClass>) {
        match node {
            SyntaxNode::Namespace { name, body } => {
                let frames = name.segments.iter().map(NamespaceFrame::namespace);
                self.walk(body, &stack.extended(frames), found);
            }
            SyntaxNode::Class {
                name,
                superclass,
                body,
            } => {
                let qualified_name = name.to_string();
                let attributes = extract_attributes(body, self.mapper);

                if attributes.is_empty() {
                    tracing::trace!(class = %qualified_name, "Class declares no attributes");
                } else {
                    tracing::debug!(
                        class = %qualified_name,
                        attributes = attributes.len(),
                        "Found record class"
                    );
                    found.push(RecordClass {
                        qualified_name: qualified_name.clone(),
                        superclass: superclass.as_ref().map(ToString::to_string),
                        attributes,
                        namespace: stack.clone(),
                        source_file: self.source_file.to_path_buf(),
                    });
                }

                let inner = stack.extended([NamespaceFrame::container(qualified_name)]);
                self.walk(body, &inner, found);
            }
            other => {
                for child in other.children() {
                    self.walk(child, stack, found);
                }
            }
        }
    }
}
