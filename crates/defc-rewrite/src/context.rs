//! Rewriting context: the source text plus the edits collected so far.

use std::borrow::Cow;

use ropey::Rope;
use tree_sitter::Node;

use crate::edit::{TextEdit, apply_edits};
use crate::error::RewriteResult;

/// Context for rewriting one source file.
pub struct RewriteCtx {
    pub source: Rope,
    edits: Vec<TextEdit>,
}

impl RewriteCtx {
    /// Create a new rewriting context.
    pub fn new(source: &str) -> Self {
        Self {
            source: Rope::from_str(source),
            edits: Vec::new(),
        }
    }

    /// Get the text content of a node.
    pub fn node_text(&self, node: &Node) -> Cow<'_, str> {
        self.source
            .byte_slice(node.start_byte()..node.end_byte())
            .into()
    }

    /// Get the text content of a node as an owned String.
    pub fn node_text_owned(&self, node: &Node) -> String {
        self.node_text(node).into_owned()
    }

    /// Whether the byte at `offset` is ASCII whitespace.
    pub fn is_space_at(&self, offset: usize) -> bool {
        self.source
            .get_byte(offset)
            .is_some_and(|byte| byte.is_ascii_whitespace())
    }

    pub fn push_edit(&mut self, edit: TextEdit) {
        self.edits.push(edit);
    }

    pub fn edit_count(&self) -> usize {
        self.edits.len()
    }

    /// Apply every collected edit and return the rewritten source.
    pub fn finish(self) -> RewriteResult<String> {
        let RewriteCtx { mut source, edits } = self;
        apply_edits(&mut source, edits)?;
        Ok(source.to_string())
    }
}
