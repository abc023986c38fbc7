//! Locating the component function behind a declarator's initializer.

use tree_sitter::Node;

use crate::helpers::first_named_child;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionKind {
    Arrow,
    Function,
}

/// The function that receives the props, plus how many wrapper calls
/// (`observer(...)`, `forwardRef(...)`) enclose it.
#[derive(Debug, Clone, Copy)]
pub struct ComponentFn<'tree> {
    pub node: Node<'tree>,
    pub kind: FunctionKind,
    pub wrappers: usize,
}

/// Resolve the component function of an initializer.
///
/// Wrapper calls are unwrapped through their first argument, parenthesized
/// expressions through their contents. Only the function is ever edited, so
/// wrappers and their remaining arguments stay exactly as written.
pub fn resolve_component(value: Node<'_>) -> Option<ComponentFn<'_>> {
    let mut node = value;
    let mut wrappers = 0;

    loop {
        match node.kind() {
            "arrow_function" => {
                return Some(ComponentFn {
                    node,
                    kind: FunctionKind::Arrow,
                    wrappers,
                });
            }
            "function_expression" | "function" => {
                return Some(ComponentFn {
                    node,
                    kind: FunctionKind::Function,
                    wrappers,
                });
            }
            "parenthesized_expression" => {
                node = first_named_child(node)?;
            }
            "call_expression" => {
                let arguments = node.child_by_field_name("arguments")?;
                if arguments.kind() != "arguments" {
                    // Tagged templates: styled.div`...`
                    return None;
                }
                node = first_named_child(arguments)?;
                wrappers += 1;
            }
            _ => return None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dialect;
    use crate::parser::parse;

    fn resolve(expr: &str) -> Option<(FunctionKind, usize, String)> {
        let source = format!("const X = {expr};");
        let tree = parse(&source, Dialect::Tsx).unwrap();
        let declaration = tree.root_node().named_child(0).unwrap();
        let declarator = declaration.named_child(0).unwrap();
        let value = declarator.child_by_field_name("value").unwrap();
        resolve_component(value).map(|component| {
            let text = source[component.node.start_byte()..component.node.end_byte()].to_string();
            (component.kind, component.wrappers, text)
        })
    }

    #[test]
    fn test_plain_arrow() {
        let (kind, wrappers, _) = resolve("(props) => <span/>").unwrap();
        assert_eq!(kind, FunctionKind::Arrow);
        assert_eq!(wrappers, 0);
    }

    #[test]
    fn test_function_expression() {
        let (kind, _, text) = resolve("function Hello(props) { return null }").unwrap();
        assert_eq!(kind, FunctionKind::Function);
        assert!(text.starts_with("function Hello"));
    }

    #[test]
    fn test_wrapped_arrow() {
        let (kind, wrappers, text) = resolve("observer((props) => <span/>)").unwrap();
        assert_eq!(kind, FunctionKind::Arrow);
        assert_eq!(wrappers, 1);
        assert_eq!(text, "(props) => <span/>");
    }

    #[test]
    fn test_nested_wrappers() {
        let (_, wrappers, text) =
            resolve("React.memo(forwardRef((props, ref) => null), areEqual)").unwrap();
        assert_eq!(wrappers, 2);
        assert_eq!(text, "(props, ref) => null");
    }

    #[test]
    fn test_parenthesized() {
        let (_, wrappers, _) = resolve("((props) => null)").unwrap();
        assert_eq!(wrappers, 0);
    }

    #[test]
    fn test_non_function() {
        assert!(resolve("memo(Inner)").is_none());
        assert!(resolve("styled.div`color: red;`").is_none());
        assert!(resolve("makeComponent()").is_none());
    }
}
