//! dry-types expression mapping
//!
//! Resolves a type expression such as
//! `Types::Array.of(Types::String).optional` into a [`TypeDescriptor`].
//!
//! The expression is walked from the outermost call inward:
//!
//! | Suffix | Effect |
//! |--------|--------|
//! | `.optional` | marks the result optional |
//! | `.of(T)` / `.of(K, V)` | captures element or key/value types |
//!
//! Any other call in the chain makes the whole expression unknown. The walk
//! ends at a constant, looked up under the configured types namespace.
//! Unrecognized constants resolve to [`TypeDescriptor::Unknown`]; mapping
//! never fails.

use dryrbs_core::{NAMESPACE_SEPARATOR, Primitive, TypeDescriptor};
use dryrbs_syntax::{ConstantPath, SyntaxNode};

/// Known dry-types names after the namespace prefix is removed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KnownType {
    Primitive(Primitive),
    Array,
    Hash,
}

impl KnownType {
    fn from_name(name: &str) -> Option<Self> {
        let kind = match name {
            "String" => KnownType::Primitive(Primitive::String),
            "Integer" => KnownType::Primitive(Primitive::Integer),
            "Float" => KnownType::Primitive(Primitive::Float),
            "Bool" => KnownType::Primitive(Primitive::Boolean),
            "Time" | "JSON::Time" => KnownType::Primitive(Primitive::Time),
            "Date" | "JSON::Date" => KnownType::Primitive(Primitive::Date),
            "Array" => KnownType::Array,
            "Hash" | "JSON::Hash" => KnownType::Hash,
            _ => return None,
        };
        Some(kind)
    }
}

/// Result of mapping a type expression
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappedType {
    /// The resolved type, without an optional wrapper
    pub descriptor: TypeDescriptor,
    /// Whether the expression carried `.optional`
    pub optional: bool,
}

impl MappedType {
    pub fn unknown() -> Self {
        Self {
            descriptor: TypeDescriptor::Unknown,
            optional: false,
        }
    }

    /// The descriptor with optionality folded in
    pub fn into_descriptor(self) -> TypeDescriptor {
        if self.optional {
            TypeDescriptor::optional(self.descriptor)
        } else {
            self.descriptor
        }
    }
}

/// Maps dry-types expressions under one types namespace
#[derive(Debug, Clone)]
pub struct TypeMapper {
    prefix: String,
}

impl TypeMapper {
    /// Create a mapper for a namespace such as `Types` or `My::Types`
    pub fn new(namespace: &str) -> Self {
        let namespace = namespace.trim_start_matches(NAMESPACE_SEPARATOR);
        Self {
            prefix: format!("{namespace}{NAMESPACE_SEPARATOR}"),
        }
    }

    /// Resolve a type expression
    pub fn map(&self, expr: &SyntaxNode) -> MappedType {
        let mut optional = false;
        let mut type_args: &[SyntaxNode] = &[];
        let mut node = expr;

        loop {
            match node {
                SyntaxNode::Call {
                    receiver: Some(receiver),
                    method,
                    arguments,
                    ..
                } => {
                    match method.as_str() {
                        "optional" => optional = true,
                        "of" => type_args = arguments.as_slice(),
                        _ => return MappedType::unknown(),
                    }
                    node = receiver.as_ref();
                }
                SyntaxNode::Constant(path) => {
                    return MappedType {
                        descriptor: self.resolve(path, type_args),
                        optional,
                    };
                }
                _ => return MappedType::unknown(),
            }
        }
    }

    /// Look a constant up in the type table
    fn resolve(&self, path: &ConstantPath, type_args: &[SyntaxNode]) -> TypeDescriptor {
        let name = path.relative_name();
        let Some(known) = name
            .strip_prefix(&self.prefix)
            .and_then(KnownType::from_name)
        else {
            return TypeDescriptor::Unknown;
        };

        let arg = |index: usize| {
            type_args
                .get(index)
                .map(|expr| self.map(expr).into_descriptor())
                .unwrap_or(TypeDescriptor::Unknown)
        };

        match known {
            KnownType::Primitive(primitive) => TypeDescriptor::Primitive(primitive),
            KnownType::Array => TypeDescriptor::array_of(arg(0)),
            KnownType::Hash => TypeDescriptor::map_of(arg(0), arg(1)),
        }
    }
}

impl Default for TypeMapper {
    fn default() -> Self {
        Self::new("Types")
    }
}
