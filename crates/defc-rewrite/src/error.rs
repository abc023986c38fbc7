//! Error types for the rewriter.

use derive_more::{Display, Error};

use crate::Dialect;

pub type RewriteResult<T> = Result<T, RewriteError>;

/// Anything that stops a file from being rewritten.
///
/// None of these are surfaced by [`crate::transform`]; they are logged and
/// the source is left as it was.
#[derive(Display, Debug, Error)]
pub enum RewriteError {
    #[display("cannot load the {dialect} grammar: {source}")]
    Language {
        dialect: Dialect,
        source: tree_sitter::LanguageError,
    },

    #[display("the {dialect} parser produced no tree")]
    Parse { dialect: Dialect },

    #[display("syntax error at byte {offset}")]
    Syntax { offset: usize },

    #[display("unsupported {role} `{kind}` at byte {offset}")]
    UnsupportedShape {
        role: &'static str,
        kind: &'static str,
        offset: usize,
    },

    #[display("overlapping edits at byte {offset}")]
    OverlappingEdits { offset: usize },
}

impl RewriteError {
    pub(crate) fn unsupported(role: &'static str, node: &tree_sitter::Node) -> Self {
        RewriteError::UnsupportedShape {
            role,
            kind: node.kind(),
            offset: node.start_byte(),
        }
    }
}
