//! First-parameter handling: classify the binding and place the props
//! annotation on it.

use tree_sitter::Node;

use crate::context::RewriteCtx;
use crate::edit::TextEdit;
use crate::error::{RewriteError, RewriteResult};
use crate::helpers::{find_token, first_named_child, named_children};
use crate::props::PropsType;

/// The binding of a component's first parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Param {
    /// `(props) => ...`
    Identifier(String),
    /// `({ id, ...rest }) => ...`
    ObjectPattern(Vec<PatternProperty>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternProperty {
    /// `id`
    Shorthand(String),
    /// `config: { text }`
    Pair(String),
    /// `text = ''`
    Assignment(String),
    /// `...rest`
    Rest(String),
}

impl Param {
    /// Classify a parameter's binding pattern.
    pub(crate) fn from_pattern(ctx: &RewriteCtx, node: Node) -> RewriteResult<Self> {
        match node.kind() {
            "identifier" => Ok(Param::Identifier(ctx.node_text_owned(&node))),
            "object_pattern" => named_children(node)
                .into_iter()
                .map(|property| lower_pattern_property(ctx, property))
                .collect::<RewriteResult<Vec<_>>>()
                .map(Param::ObjectPattern),
            _ => Err(RewriteError::unsupported("first parameter", &node)),
        }
    }
}

fn lower_pattern_property(ctx: &RewriteCtx, node: Node) -> RewriteResult<PatternProperty> {
    let text = ctx.node_text_owned(&node);
    match node.kind() {
        "shorthand_property_identifier_pattern" => Ok(PatternProperty::Shorthand(text)),
        "pair_pattern" => Ok(PatternProperty::Pair(text)),
        "object_assignment_pattern" => Ok(PatternProperty::Assignment(text)),
        "rest_pattern" => Ok(PatternProperty::Rest(text)),
        _ => Err(RewriteError::unsupported("pattern property", &node)),
    }
}

/// Annotate the first parameter of `function` with `props`.
///
/// Returns `None` when the function declares no parameters; every other
/// parameter is left where it is.
pub fn annotate_first_param(
    ctx: &RewriteCtx,
    function: Node,
    props: &PropsType,
) -> RewriteResult<Option<(Param, TextEdit)>> {
    // `props => ...` has no parentheses to hold an annotation.
    if let Some(bare) = function.child_by_field_name("parameter") {
        let param = Param::from_pattern(ctx, bare)?;
        let text = format!("({}: {props})", ctx.node_text(&bare));
        let edit = TextEdit::replace(bare.start_byte()..bare.end_byte(), text);
        return Ok(Some((param, edit)));
    }

    let Some(params) = function.child_by_field_name("parameters") else {
        return Err(RewriteError::unsupported("component", &function));
    };
    let Some(first) = first_named_child(params) else {
        return Ok(None);
    };

    match first.kind() {
        "required_parameter" | "optional_parameter" => {
            let Some(pattern) = first.child_by_field_name("pattern") else {
                return Err(RewriteError::unsupported("first parameter", &first));
            };
            let param = Param::from_pattern(ctx, pattern)?;
            let annotation = format!(": {props}");

            let edit = if let Some(existing) = first.child_by_field_name("type") {
                TextEdit::replace(existing.start_byte()..existing.end_byte(), annotation)
            } else {
                // `props?: P`, never `props: P?`
                let anchor = find_token(first, "?").unwrap_or(pattern);
                TextEdit::insert(anchor.end_byte(), annotation)
            };
            Ok(Some((param, edit)))
        }
        _ => Err(RewriteError::unsupported("first parameter", &first)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dialect;
    use crate::edit::apply_edits;
    use crate::parser::parse;

    fn props() -> PropsType {
        PropsType::Reference("Props".into())
    }

    /// Annotate the first parameter of the arrow function in `source`.
    fn annotate(source: &str) -> RewriteResult<Option<(Param, String)>> {
        let tree = parse(source, Dialect::Tsx).unwrap();
        let statement = tree.root_node().named_child(0).unwrap();
        let arrow = statement.named_child(0).unwrap();
        assert_eq!(arrow.kind(), "arrow_function");

        let ctx = RewriteCtx::new(source);
        let Some((param, edit)) = annotate_first_param(&ctx, arrow, &props())? else {
            return Ok(None);
        };
        let mut rope = ctx.source.clone();
        apply_edits(&mut rope, vec![edit])?;
        Ok(Some((param, rope.to_string())))
    }

    #[test]
    fn test_identifier_param() {
        let (param, out) = annotate("(props) => props").unwrap().unwrap();
        assert_eq!(param, Param::Identifier("props".into()));
        assert_eq!(out, "(props: Props) => props");
    }

    #[test]
    fn test_bare_param_is_parenthesized() {
        let (_, out) = annotate("props => props").unwrap().unwrap();
        assert_eq!(out, "(props: Props) => props");
    }

    #[test]
    fn test_destructured_param_with_rest() {
        let (param, out) = annotate("({ id, ...rest }) => id").unwrap().unwrap();
        assert_eq!(
            param,
            Param::ObjectPattern(vec![
                PatternProperty::Shorthand("id".into()),
                PatternProperty::Rest("...rest".into()),
            ])
        );
        assert_eq!(out, "({ id, ...rest }: Props) => id");
    }

    #[test]
    fn test_pair_and_default_properties() {
        let (param, out) = annotate("({ config: { text }, size = 1 }) => text")
            .unwrap()
            .unwrap();
        assert_eq!(
            param,
            Param::ObjectPattern(vec![
                PatternProperty::Pair("config: { text }".into()),
                PatternProperty::Assignment("size = 1".into()),
            ])
        );
        assert_eq!(out, "({ config: { text }, size = 1 }: Props) => text");
    }

    #[test]
    fn test_later_params_untouched() {
        let (_, out) = annotate("(props, ref) => ref").unwrap().unwrap();
        assert_eq!(out, "(props: Props, ref) => ref");
    }

    #[test]
    fn test_default_value_keeps_annotation_before_it() {
        let (_, out) = annotate("(props = {}) => props").unwrap().unwrap();
        assert_eq!(out, "(props: Props = {}) => props");
    }

    #[test]
    fn test_existing_annotation_replaced() {
        let (_, out) = annotate("(props: any) => props").unwrap().unwrap();
        assert_eq!(out, "(props: Props) => props");
    }

    #[test]
    fn test_no_params() {
        assert!(annotate("() => null").unwrap().is_none());
    }

    #[test]
    fn test_array_pattern_unsupported() {
        let err = annotate("([first]) => first").unwrap_err();
        assert!(matches!(
            err,
            RewriteError::UnsupportedShape {
                kind: "array_pattern",
                ..
            }
        ));
    }
}
