//! Signature emission
//!
//! Turns [`RecordClass`] values into RBS declarations. A record class becomes
//! a `class` with one `attr_reader` per attribute and a keyword-only
//! `initialize`, wrapped in the scopes that enclosed it in the source.

use crate::rbs::{Declaration, DeclarationKind, Member, write_declarations};
use dryrbs_core::{FrameKind, NamespaceFrame, RecordClass};

const INITIALIZER: &str = "initialize";
const INITIALIZER_RETURN: &str = "void";

/// The class declaration of a record, without its enclosing scopes
pub fn class_declaration(record: &RecordClass) -> Declaration {
    let mut members: Vec<Member> = record
        .attributes
        .iter()
        .map(|attr| Member::AttrReader {
            name: attr.name.clone(),
            ty: attr.signature_type(),
        })
        .collect();

    members.push(Member::Method {
        name: INITIALIZER.to_string(),
        keywords: record
            .attributes
            .iter()
            .map(|attr| (attr.name.clone(), attr.signature_type()))
            .collect(),
        return_type: INITIALIZER_RETURN.to_string(),
    });

    Declaration::class(
        record.qualified_name.clone(),
        record.superclass.clone(),
        members,
    )
}

/// The record's class declaration wrapped in its frames, innermost first
pub fn wrapped_declaration(record: &RecordClass) -> Declaration {
    record
        .namespace
        .frames()
        .iter()
        .rev()
        .fold(class_declaration(record), |inner, frame| {
            frame_declaration(frame, vec![Member::Declaration(inner)])
        })
}

/// Render one record class as a standalone signature file
pub fn render_record_class(record: &RecordClass) -> String {
    write_declarations(&[wrapped_declaration(record)])
}

/// Render several record classes as one merged declaration tree
///
/// Records sharing outer frames are placed under one wrapper. A container
/// frame that names a record class rendered earlier nests inside that
/// record's own declaration.
pub fn render_declarations(records: &[RecordClass]) -> String {
    let mut root: Vec<Member> = Vec::new();
    for record in records {
        insert(&mut root, record.namespace.frames(), class_declaration(record));
    }

    let declarations: Vec<Declaration> = root
        .into_iter()
        .filter_map(|member| match member {
            Member::Declaration(declaration) => Some(declaration),
            _ => None,
        })
        .collect();

    write_declarations(&declarations)
}

fn frame_declaration(frame: &NamespaceFrame, members: Vec<Member>) -> Declaration {
    match frame.kind {
        FrameKind::Namespace => Declaration::module(frame.name.clone(), members),
        FrameKind::RecordContainer => Declaration::class(frame.name.clone(), None, members),
    }
}

fn insert(members: &mut Vec<Member>, frames: &[NamespaceFrame], class: Declaration) {
    let Some((frame, rest)) = frames.split_first() else {
        match find_declaration(members, &class.name, false) {
            Some(existing) => absorb(existing, class),
            None => members.push(Member::Declaration(class)),
        }
        return;
    };

    let is_module = frame.kind == FrameKind::Namespace;
    let index = match position_of(members, &frame.name, is_module) {
        Some(index) => index,
        None => {
            members.push(Member::Declaration(frame_declaration(frame, Vec::new())));
            members.len() - 1
        }
    };

    if let Member::Declaration(wrapper) = &mut members[index] {
        insert(&mut wrapper.members, rest, class);
    }
}

/// Merge a record declaration into a wrapper class opened earlier under the same name
fn absorb(existing: &mut Declaration, class: Declaration) {
    let inherited = match class.kind {
        DeclarationKind::Class { superclass } => superclass,
        DeclarationKind::Module => None,
    };
    if let DeclarationKind::Class { superclass } = &mut existing.kind
        && superclass.is_none()
    {
        *superclass = inherited;
    }

    let nested = std::mem::take(&mut existing.members);
    existing.members = class.members;
    existing.members.extend(nested);
}

fn position_of(members: &[Member], name: &str, is_module: bool) -> Option<usize> {
    members.iter().position(|member| {
        matches!(member, Member::Declaration(d) if d.name == name && d.is_module() == is_module)
    })
}

fn find_declaration<'a>(
    members: &'a mut [Member],
    name: &str,
    is_module: bool,
) -> Option<&'a mut Declaration> {
    let index = position_of(members, name, is_module)?;
    match &mut members[index] {
        Member::Declaration(declaration) => Some(declaration),
        _ => None,
    }
}
