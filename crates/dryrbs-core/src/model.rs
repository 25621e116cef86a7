//! Data model shared by the parsing and emission stages

use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

/// Separator between Ruby constant path segments
pub const NAMESPACE_SEPARATOR: &str = "::";

/// Primitive RBS types a dry-types name can resolve to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    String,
    Integer,
    Float,
    Boolean,
    Time,
    Date,
}

impl Primitive {
    /// The RBS spelling of this primitive
    pub fn rbs_name(self) -> &'static str {
        match self {
            Primitive::String => "String",
            Primitive::Integer => "Integer",
            Primitive::Float => "Float",
            Primitive::Boolean => "bool",
            Primitive::Time => "Time",
            Primitive::Date => "Date",
        }
    }
}

/// Semantic type of a declared attribute
///
/// `Display` renders the RBS type expression. `Unknown` renders as `untyped`
/// and is never suffixed with `?`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TypeDescriptor {
    Primitive(Primitive),
    ArrayOf(Box<TypeDescriptor>),
    MapOf(Box<TypeDescriptor>, Box<TypeDescriptor>),
    Optional(Box<TypeDescriptor>),
    Unknown,
}

impl TypeDescriptor {
    pub fn array_of(element: TypeDescriptor) -> Self {
        TypeDescriptor::ArrayOf(Box::new(element))
    }

    pub fn map_of(key: TypeDescriptor, value: TypeDescriptor) -> Self {
        TypeDescriptor::MapOf(Box::new(key), Box::new(value))
    }

    /// Wrap in `Optional`, leaving `Unknown` and already-optional types as they are
    pub fn optional(inner: TypeDescriptor) -> Self {
        match inner {
            TypeDescriptor::Unknown | TypeDescriptor::Optional(_) => inner,
            other => TypeDescriptor::Optional(Box::new(other)),
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, TypeDescriptor::Unknown)
    }
}

impl fmt::Display for TypeDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeDescriptor::Primitive(p) => f.write_str(p.rbs_name()),
            TypeDescriptor::ArrayOf(element) => write!(f, "Array[{element}]"),
            TypeDescriptor::MapOf(key, value) => write!(f, "Hash[{key}, {value}]"),
            TypeDescriptor::Optional(inner) if inner.is_unknown() => f.write_str("untyped"),
            TypeDescriptor::Optional(inner) => write!(f, "{inner}?"),
            TypeDescriptor::Unknown => f.write_str("untyped"),
        }
    }
}

/// One `attribute` / `attribute?` declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttributeDeclaration {
    pub name: String,
    /// Resolved type without the optional wrapper
    pub type_descriptor: TypeDescriptor,
    pub optional: bool,
}

impl AttributeDeclaration {
    pub fn new(name: impl Into<String>, type_descriptor: TypeDescriptor, optional: bool) -> Self {
        Self {
            name: name.into(),
            type_descriptor,
            optional,
        }
    }

    /// The type as it appears in the signature, optionality included
    pub fn signature_type(&self) -> TypeDescriptor {
        if self.optional {
            TypeDescriptor::optional(self.type_descriptor.clone())
        } else {
            self.type_descriptor.clone()
        }
    }
}

/// Kind of scope a namespace frame was opened by
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameKind {
    /// A `module` declaration
    Namespace,
    /// A `class` enclosing further declarations
    RecordContainer,
}

/// One enclosing scope of a declaration
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NamespaceFrame {
    pub name: String,
    pub kind: FrameKind,
}

impl NamespaceFrame {
    pub fn namespace(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FrameKind::Namespace,
        }
    }

    pub fn container(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: FrameKind::RecordContainer,
        }
    }
}

/// Enclosing scopes of a declaration, outermost first
///
/// Extending a stack returns a new value; the receiver is never modified, so
/// sibling subtrees of a walk cannot observe each other's frames.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct NamespaceStack {
    frames: Vec<NamespaceFrame>,
}

impl NamespaceStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of this stack with `frames` appended
    pub fn extended(&self, frames: impl IntoIterator<Item = NamespaceFrame>) -> Self {
        let mut next = self.frames.clone();
        next.extend(frames);
        Self { frames: next }
    }

    pub fn frames(&self) -> &[NamespaceFrame] {
        &self.frames
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

impl FromIterator<NamespaceFrame> for NamespaceStack {
    fn from_iter<I: IntoIterator<Item = NamespaceFrame>>(iter: I) -> Self {
        Self {
            frames: iter.into_iter().collect(),
        }
    }
}

/// A dry-struct class with at least one declared attribute
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordClass {
    /// Name as written after `class`, possibly qualified (`TestDtos::TestDto2`)
    pub qualified_name: String,
    pub superclass: Option<String>,
    pub attributes: Vec<AttributeDeclaration>,
    /// Scopes enclosing the class, not including the class itself
    pub namespace: NamespaceStack,
    pub source_file: PathBuf,
}

impl RecordClass {
    /// Last segment of the qualified name
    pub fn simple_name(&self) -> &str {
        self.qualified_name
            .rsplit(NAMESPACE_SEPARATOR)
            .next()
            .unwrap_or(&self.qualified_name)
    }

    /// Every constant segment from the outermost frame down to the class name
    pub fn qualified_path(&self) -> Vec<&str> {
        self.namespace
            .frames()
            .iter()
            .map(|frame| frame.name.as_str())
            .chain(std::iter::once(self.qualified_name.as_str()))
            .flat_map(|name| name.split(NAMESPACE_SEPARATOR))
            .filter(|segment| !segment.is_empty())
            .collect()
    }
}

/// Final unit of output: one signature file for one record class
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedArtifact {
    /// Fully qualified class name, e.g. `TestDtos::TestDto1`
    pub class_name: String,
    pub source_file: PathBuf,
    pub output_file: PathBuf,
    pub content: String,
}

/// A source file that was skipped because it could not be read or parsed
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParseFailure {
    pub source_file: PathBuf,
    pub reason: String,
}

/// Several artifacts resolving to the same output file
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PathCollision {
    pub output_file: PathBuf,
    /// Qualified names of the colliding classes, in artifact order
    pub classes: Vec<String>,
    /// Distinct source files declaring them
    pub sources: Vec<PathBuf>,
}

/// What the writer did with one artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteOutcome {
    Written,
    /// Destination already held non-empty content and overwrite was off
    SkippedExisting,
}

/// Everything a generation run produced
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GenerationReport {
    pub artifacts: Vec<GeneratedArtifact>,
    pub failures: Vec<ParseFailure>,
    pub collisions: Vec<PathCollision>,
    pub writes: Vec<(PathBuf, WriteOutcome)>,
}

impl GenerationReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    pub fn written_count(&self) -> usize {
        self.writes
            .iter()
            .filter(|(_, outcome)| *outcome == WriteOutcome::Written)
            .count()
    }
}
