//! Tree-sitter parsing for TypeScript and TSX sources.

use std::cell::RefCell;

use tree_sitter::{Node, Parser, Tree};

use crate::Dialect;
use crate::error::{RewriteError, RewriteResult};

thread_local! {
    static PARSERS: RefCell<[Option<Parser>; 2]> = const { RefCell::new([None, None]) };
}

fn new_parser(dialect: Dialect) -> RewriteResult<Parser> {
    let mut parser = Parser::new();
    parser
        .set_language(&dialect.language())
        .map_err(|source| RewriteError::Language { dialect, source })?;
    Ok(parser)
}

/// Parse `source` with the thread's parser for `dialect`.
///
/// Parsers are created lazily and reused for every later call on the same
/// thread, so batch runs pay the grammar setup once per worker.
pub fn parse(source: &str, dialect: Dialect) -> RewriteResult<Tree> {
    PARSERS.with(|parsers| {
        let mut parsers = parsers.borrow_mut();
        let slot = &mut parsers[dialect.index()];
        let parser = match slot {
            Some(parser) => parser,
            None => slot.insert(new_parser(dialect)?),
        };
        parser
            .parse(source, None)
            .ok_or(RewriteError::Parse { dialect })
    })
}

/// Find the innermost `ERROR` or `MISSING` node, following the first
/// erroneous child at each level.
pub fn first_syntax_error(root: Node<'_>) -> Option<Node<'_>> {
    if !root.has_error() {
        return None;
    }

    let mut node = root;
    'descend: loop {
        if node.is_error() || node.is_missing() {
            return Some(node);
        }
        let mut cursor = node.walk();
        for child in node.children(&mut cursor) {
            if child.has_error() {
                node = child;
                continue 'descend;
            }
        }
        return Some(node);
    }
}
