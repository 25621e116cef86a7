//! RBS declaration tree and writer
//!
//! A small subset of RBS: `module` and `class` declarations containing
//! `attr_reader` members, single-overload method definitions with keyword
//! parameters, and nested declarations.
//!
//! The writer indents each nesting level by two spaces and separates
//! consecutive members and top-level declarations by one blank line.

use dryrbs_core::TypeDescriptor;

const INDENT: &str = "  ";

/// Module or class declaration
#[derive(Debug, Clone, PartialEq)]
pub struct Declaration {
    pub kind: DeclarationKind,
    pub name: String,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DeclarationKind {
    Module,
    Class { superclass: Option<String> },
}

/// Member of a declaration body
#[derive(Debug, Clone, PartialEq)]
pub enum Member {
    AttrReader {
        name: String,
        ty: TypeDescriptor,
    },
    Method {
        name: String,
        keywords: Vec<(String, TypeDescriptor)>,
        return_type: String,
    },
    Declaration(Declaration),
}

impl Declaration {
    pub fn module(name: impl Into<String>, members: Vec<Member>) -> Self {
        Self {
            kind: DeclarationKind::Module,
            name: name.into(),
            members,
        }
    }

    pub fn class(
        name: impl Into<String>,
        superclass: Option<String>,
        members: Vec<Member>,
    ) -> Self {
        Self {
            kind: DeclarationKind::Class { superclass },
            name: name.into(),
            members,
        }
    }

    pub fn is_module(&self) -> bool {
        matches!(self.kind, DeclarationKind::Module)
    }
}

/// Render declarations as RBS text
pub fn write_declarations(declarations: &[Declaration]) -> String {
    let mut writer = RbsWriter::default();
    for (i, declaration) in declarations.iter().enumerate() {
        if i > 0 {
            writer.out.push('\n');
        }
        writer.write_declaration(declaration);
    }
    writer.out
}

#[derive(Default)]
struct RbsWriter {
    out: String,
    depth: usize,
}

impl RbsWriter {
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.out.push_str(INDENT);
        }
        self.out.push_str(text);
        self.out.push('\n');
    }

    fn write_declaration(&mut self, declaration: &Declaration) {
        let header = match &declaration.kind {
            DeclarationKind::Module => format!("module {}", declaration.name),
            DeclarationKind::Class {
                superclass: Some(superclass),
            } => format!("class {} < {}", declaration.name, superclass),
            DeclarationKind::Class { superclass: None } => format!("class {}", declaration.name),
        };
        self.line(&header);

        self.depth += 1;
        for (i, member) in declaration.members.iter().enumerate() {
            if i > 0 {
                self.out.push('\n');
            }
            self.write_member(member);
        }
        self.depth -= 1;

        self.line("end");
    }

    fn write_member(&mut self, member: &Member) {
        match member {
            Member::AttrReader { name, ty } => {
                self.line(&format!("attr_reader {name}: {ty}"));
            }
            Member::Method {
                name,
                keywords,
                return_type,
            } => {
                let params = keywords
                    .iter()
                    .map(|(keyword, ty)| format!("{keyword}: {ty}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                self.line(&format!("def {name}: ({params}) -> {return_type}"));
            }
            Member::Declaration(declaration) => self.write_declaration(declaration),
        }
    }
}
