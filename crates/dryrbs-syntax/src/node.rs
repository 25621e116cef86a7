//! Tagged syntax tree

use dryrbs_core::NAMESPACE_SEPARATOR;
use std::fmt;

/// A constant reference such as `Types::JSON::Time` or `::Dry::Struct`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ConstantPath {
    /// Written with a leading `::`
    pub absolute: bool,
    pub segments: Vec<String>,
}

impl ConstantPath {
    pub fn new(segments: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            absolute: false,
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The path without a leading `::`, used for table lookups
    pub fn relative_name(&self) -> String {
        self.segments.join(NAMESPACE_SEPARATOR)
    }

    /// Append a segment
    pub fn child(&self, segment: impl Into<String>) -> Self {
        let mut segments = self.segments.clone();
        segments.push(segment.into());
        Self {
            absolute: self.absolute,
            segments,
        }
    }
}

impl fmt::Display for ConstantPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.absolute {
            f.write_str(NAMESPACE_SEPARATOR)?;
        }
        f.write_str(&self.relative_name())
    }
}

/// Node of the lowered syntax tree
#[derive(Debug, Clone, PartialEq)]
pub enum SyntaxNode {
    /// `module Name ... end`
    Namespace {
        name: ConstantPath,
        body: Box<SyntaxNode>,
    },

    /// `class Name < Super ... end`
    ///
    /// `superclass` is `None` when absent or not a constant path.
    Class {
        name: ConstantPath,
        superclass: Option<ConstantPath>,
        body: Box<SyntaxNode>,
    },

    /// Method call, with or without receiver, arguments, or block
    Call {
        receiver: Option<Box<SyntaxNode>>,
        method: String,
        arguments: Vec<SyntaxNode>,
        block: Option<Box<SyntaxNode>>,
    },

    /// Symbol or plain string literal, without its delimiters
    Literal(String),

    /// Constant reference
    Constant(ConstantPath),

    /// Statements evaluated in order
    Sequence(Vec<SyntaxNode>),

    /// Any other construct, with its lowered children
    Other(Vec<SyntaxNode>),
}

impl SyntaxNode {
    /// Direct children in source order
    pub fn children(&self) -> Vec<&SyntaxNode> {
        match self {
            SyntaxNode::Namespace { body, .. } | SyntaxNode::Class { body, .. } => {
                vec![body.as_ref()]
            }
            SyntaxNode::Call {
                receiver,
                arguments,
                block,
                ..
            } => receiver
                .iter()
                .map(|r| r.as_ref())
                .chain(arguments.iter())
                .chain(block.iter().map(|b| b.as_ref()))
                .collect(),
            SyntaxNode::Sequence(children) | SyntaxNode::Other(children) => {
                children.iter().collect()
            }
            SyntaxNode::Literal(_) | SyntaxNode::Constant(_) => Vec::new(),
        }
    }

    /// Statements of a body with nested sequences flattened
    pub fn statements(&self) -> Vec<&SyntaxNode> {
        match self {
            SyntaxNode::Sequence(children) => {
                children.iter().flat_map(|child| child.statements()).collect()
            }
            other => vec![other],
        }
    }
}
