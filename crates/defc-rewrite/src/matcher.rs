//! Matching phase: find declarators typed as a function-component alias.

use derive_more::Display;
use tree_sitter::Node;

use crate::context::RewriteCtx;
use crate::helpers::first_named_child;
use crate::props::{flatten_intersection, is_props_shape};

/// The recognized component type aliases.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FcAlias {
    #[display("FC")]
    Fc,
    #[display("SFC")]
    Sfc,
    #[display("FunctionComponent")]
    FunctionComponent,
}

impl FcAlias {
    /// Exact, case-sensitive lookup.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "FC" => Some(FcAlias::Fc),
            "SFC" => Some(FcAlias::Sfc),
            "FunctionComponent" => Some(FcAlias::FunctionComponent),
            _ => None,
        }
    }
}

/// A `const Name: React.FC<Props> = value` declarator.
#[derive(Debug, Clone, Copy)]
pub struct ComponentDecl<'tree> {
    pub declarator: Node<'tree>,
    pub name: Node<'tree>,
    /// The `type_annotation` node, colon included.
    pub annotation: Node<'tree>,
    pub value: Node<'tree>,
    pub alias: FcAlias,
    /// The generic argument, absent for a bare `FC`.
    pub props: Option<Node<'tree>>,
}

/// Collect every matching declarator in document order.
pub fn find_components<'tree>(ctx: &RewriteCtx, root: Node<'tree>) -> Vec<ComponentDecl<'tree>> {
    let mut found = Vec::new();
    let mut cursor = root.walk();

    loop {
        let node = cursor.node();
        if node.kind() == "variable_declarator"
            && let Some(decl) = match_declarator(ctx, node)
        {
            found.push(decl);
        }

        if cursor.goto_first_child() {
            continue;
        }
        loop {
            if cursor.goto_next_sibling() {
                break;
            }
            if !cursor.goto_parent() {
                return found;
            }
        }
    }
}

/// Match a single `variable_declarator`.
pub fn match_declarator<'tree>(ctx: &RewriteCtx, node: Node<'tree>) -> Option<ComponentDecl<'tree>> {
    let name = node.child_by_field_name("name")?;
    if name.kind() != "identifier" {
        return None;
    }
    let annotation = node.child_by_field_name("type")?;
    // Without an initializer there is no component to move the props onto.
    let value = node.child_by_field_name("value")?;

    let ty = first_named_child(annotation)?;
    let (alias, props) = match_fc_type(ctx, ty)?;

    Some(ComponentDecl {
        declarator: node,
        name,
        annotation,
        value,
        alias,
        props,
    })
}

/// Match `FC`, `React.FC`, `FC<Props>`, `React.FC<Props> & Statics`, ...
fn match_fc_type<'tree>(
    ctx: &RewriteCtx,
    ty: Node<'tree>,
) -> Option<(FcAlias, Option<Node<'tree>>)> {
    match ty.kind() {
        "intersection_type" => {
            let mut members = Vec::new();
            flatten_intersection(ty, &mut members);
            match_fc_type(ctx, *members.first()?)
        }
        "type_identifier" | "nested_type_identifier" => Some((match_alias_name(ctx, ty)?, None)),
        "generic_type" => {
            let alias = match_alias_name(ctx, ty.child_by_field_name("name")?)?;
            let arguments = ty.child_by_field_name("type_arguments")?;
            let props = first_named_child(arguments)?;
            if !is_props_shape(props.kind()) {
                return None;
            }
            Some((alias, Some(props)))
        }
        _ => None,
    }
}

/// `FC` or `Namespace.FC`; deeper qualification is not a match.
fn match_alias_name(ctx: &RewriteCtx, name: Node) -> Option<FcAlias> {
    match name.kind() {
        "type_identifier" => FcAlias::from_name(&ctx.node_text(&name)),
        "nested_type_identifier" => {
            let module = name.child_by_field_name("module")?;
            if module.kind() != "identifier" {
                return None;
            }
            let name = name.child_by_field_name("name")?;
            FcAlias::from_name(&ctx.node_text(&name))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dialect;
    use crate::parser::parse;

    /// (alias, props text) of every match in `source`.
    fn matches(source: &str) -> Vec<(FcAlias, Option<String>)> {
        let tree = parse(source, Dialect::Tsx).unwrap();
        let ctx = RewriteCtx::new(source);
        find_components(&ctx, tree.root_node())
            .into_iter()
            .map(|decl| (decl.alias, decl.props.map(|p| ctx.node_text_owned(&p))))
            .collect()
    }

    #[test]
    fn test_qualified_and_bare_names() {
        assert_eq!(
            matches("const A: React.FC<Props> = (p) => null"),
            vec![(FcAlias::Fc, Some("Props".into()))]
        );
        assert_eq!(
            matches("const A: SFC<Props> = (p) => null"),
            vec![(FcAlias::Sfc, Some("Props".into()))]
        );
        assert_eq!(
            matches("const A: Preact.FunctionComponent = () => null"),
            vec![(FcAlias::FunctionComponent, None)]
        );
    }

    #[test]
    fn test_props_shapes() {
        assert_eq!(
            matches("const A: FC<{ a: number }> = (p) => null")[0].1.as_deref(),
            Some("{ a: number }")
        );
        assert_eq!(
            matches("const A: FC<P1 & P2> = (p) => null")[0].1.as_deref(),
            Some("P1 & P2")
        );
        assert_eq!(
            matches("const A: FC<GenericsProps<string>> = (p) => null")[0].1.as_deref(),
            Some("GenericsProps<string>")
        );
    }

    #[test]
    fn test_intersection_annotation() {
        let source = "const A: React.FC<Props> & { Static: typeof Static } = (p) => null";
        assert_eq!(matches(source), vec![(FcAlias::Fc, Some("Props".into()))]);
    }

    #[test]
    fn test_unrecognized_types() {
        assert!(matches("const A: { (): JSX.Element; Static: T } = () => null").is_empty());
        assert!(matches("const A: React.ComponentType<P> = (p) => null").is_empty());
        assert!(matches("const A: fc<P> = (p) => null").is_empty());
        assert!(matches("const A: a.React.FC<P> = (p) => null").is_empty());
        assert!(matches("const A: FC<A | B> = (p) => null").is_empty());
        assert!(matches("const A = (p: Props) => null").is_empty());
    }

    #[test]
    fn test_uninitialized_declarator_is_skipped() {
        assert!(matches("let A: FC<P>;").is_empty());
    }

    #[test]
    fn test_document_order_and_nesting() {
        let source = "\
const Outer: FC<A> = (a) => {
  const Inner: SFC<B> = (b) => null;
  return null;
};
const Last: FC = () => null;
";
        assert_eq!(
            matches(source),
            vec![
                (FcAlias::Fc, Some("A".into())),
                (FcAlias::Sfc, Some("B".into())),
                (FcAlias::Fc, None),
            ]
        );
    }

    #[test]
    fn test_alias_display() {
        assert_eq!(FcAlias::FunctionComponent.to_string(), "FunctionComponent");
        assert_eq!(FcAlias::from_name("SFC"), Some(FcAlias::Sfc));
        assert_eq!(FcAlias::from_name("Fc"), None);
    }
}
