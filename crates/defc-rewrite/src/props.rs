//! Props types lifted out of `FC<...>` generic arguments.
//!
//! The generic argument is rebuilt into a [`PropsType`] detached from the
//! tree, then rendered back to text for the parameter annotation:
//!
//! - named references (`Props`, `ns.Props`, `GenericsProps<string>`) are
//!   copied verbatim;
//! - inline object types are rebuilt member by member;
//! - intersections are flattened and each member is rebuilt the same way.

use std::fmt;

use tree_sitter::Node;

use crate::context::RewriteCtx;
use crate::error::{RewriteError, RewriteResult};
use crate::helpers::{contains_comment, find_token, has_comment, named_children};

/// Whether a node kind can be the generic argument of a recognized alias.
pub fn is_props_shape(kind: &str) -> bool {
    is_type_reference(kind) || matches!(kind, "object_type" | "intersection_type")
}

fn is_type_reference(kind: &str) -> bool {
    matches!(
        kind,
        "type_identifier" | "nested_type_identifier" | "generic_type"
    )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropsType {
    /// Copied as written.
    Reference(String),
    Literal(TypeLiteral),
    Intersection(Vec<PropsType>),
}

/// An inline object type such as `{ id: number, text?: string }`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeLiteral {
    pub members: Vec<TypeMember>,
    pub separator: Separator,
    /// Whether the source literal had whitespace inside its braces.
    pub padded: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeMember {
    Property(String),
    Method(String),
    Index(String),
    Call(String),
    Construct(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Separator {
    Comma,
    Semicolon,
}

impl PropsType {
    /// Rebuild the generic argument `node`.
    pub(crate) fn from_node(ctx: &RewriteCtx, node: Node) -> RewriteResult<Self> {
        match node.kind() {
            kind if is_type_reference(kind) => Ok(PropsType::Reference(ctx.node_text_owned(&node))),
            "object_type" => lower_object_type(ctx, node),
            // Flattening would drop the comments between members.
            "intersection_type" if contains_comment(node) => {
                Ok(PropsType::Reference(ctx.node_text_owned(&node)))
            }
            "intersection_type" => {
                let mut members = Vec::new();
                flatten_intersection(node, &mut members);
                members
                    .into_iter()
                    .map(|member| lower_intersection_member(ctx, member))
                    .collect::<RewriteResult<Vec<_>>>()
                    .map(PropsType::Intersection)
            }
            _ => Err(RewriteError::unsupported("props type", &node)),
        }
    }
}

/// Members of a (left-nested) intersection, left to right.
pub fn flatten_intersection<'tree>(node: Node<'tree>, out: &mut Vec<Node<'tree>>) {
    for child in named_children(node) {
        if child.kind() == "intersection_type" {
            flatten_intersection(child, out);
        } else {
            out.push(child);
        }
    }
}

fn lower_intersection_member(ctx: &RewriteCtx, node: Node) -> RewriteResult<PropsType> {
    match node.kind() {
        "object_type" => lower_object_type(ctx, node),
        // Anything else (references, parenthesized unions, typeof) stays as written.
        _ => Ok(PropsType::Reference(ctx.node_text_owned(&node))),
    }
}

fn lower_object_type(ctx: &RewriteCtx, node: Node) -> RewriteResult<PropsType> {
    // Rebuilding would drop the comments, so keep such literals as written.
    if has_comment(node) {
        return Ok(PropsType::Reference(ctx.node_text_owned(&node)));
    }

    let members = named_children(node)
        .into_iter()
        .map(|member| lower_type_member(ctx, member))
        .collect::<RewriteResult<Vec<_>>>()?;

    let separator = if find_token(node, ",").is_some() {
        Separator::Comma
    } else {
        Separator::Semicolon
    };

    let padded = node
        .child(0)
        .is_some_and(|open| ctx.is_space_at(open.end_byte()));

    Ok(PropsType::Literal(TypeLiteral {
        members,
        separator,
        padded,
    }))
}

fn lower_type_member(ctx: &RewriteCtx, node: Node) -> RewriteResult<TypeMember> {
    let text = ctx.node_text_owned(&node);
    match node.kind() {
        "property_signature" => Ok(TypeMember::Property(text)),
        "method_signature" => Ok(TypeMember::Method(text)),
        "index_signature" => Ok(TypeMember::Index(text)),
        "call_signature" => Ok(TypeMember::Call(text)),
        "construct_signature" => Ok(TypeMember::Construct(text)),
        _ => Err(RewriteError::unsupported("type member", &node)),
    }
}

impl fmt::Display for PropsType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropsType::Reference(text) => f.write_str(text),
            PropsType::Literal(literal) => fmt::Display::fmt(literal, f),
            PropsType::Intersection(members) => {
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" & ")?;
                    }
                    fmt::Display::fmt(member, f)?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for TypeLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.members.is_empty() {
            return f.write_str("{}");
        }
        let pad = if self.padded { " " } else { "" };
        let separator = match self.separator {
            Separator::Comma => ", ",
            Separator::Semicolon => "; ",
        };

        write!(f, "{{{pad}")?;
        for (i, member) in self.members.iter().enumerate() {
            if i > 0 {
                f.write_str(separator)?;
            }
            fmt::Display::fmt(member, f)?;
        }
        write!(f, "{pad}}}")
    }
}

impl fmt::Display for TypeMember {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeMember::Property(text)
            | TypeMember::Method(text)
            | TypeMember::Index(text)
            | TypeMember::Call(text)
            | TypeMember::Construct(text) => f.write_str(text),
        }
    }
}
