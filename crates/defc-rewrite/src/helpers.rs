//! CST navigation helpers.

use tree_sitter::Node;

/// Check if a node is a comment that should be skipped.
pub fn is_comment(kind: &str) -> bool {
    matches!(kind, "comment" | "html_comment")
}

/// Named children of `node`, skipping comments.
pub fn named_children<'tree>(node: Node<'tree>) -> Vec<Node<'tree>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .filter(|child| !is_comment(child.kind()))
        .collect()
}

/// First named child of `node` that is not a comment.
pub fn first_named_child(node: Node<'_>) -> Option<Node<'_>> {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .find(|child| !is_comment(child.kind()))
}

/// Whether any named child of `node` is a comment.
pub fn has_comment(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .any(|child| is_comment(child.kind()))
}

/// Whether `node` or any of its descendants is a comment.
pub fn contains_comment(node: Node<'_>) -> bool {
    let mut cursor = node.walk();
    node.named_children(&mut cursor)
        .any(|child| is_comment(child.kind()) || contains_comment(child))
}

/// First anonymous child token of `node` with the given text.
pub fn find_token<'tree>(node: Node<'tree>, token: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    node.children(&mut cursor)
        .find(|child| !child.is_named() && child.kind() == token)
}
