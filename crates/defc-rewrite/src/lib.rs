//! Rewrites `React.FC`-typed component declarations into plain functions.
//!
//! ```text
//! const X: React.FC<Props> = (props) => <span/>
//! ```
//!
//! becomes
//!
//! ```text
//! const X = (props: Props) => <span/>
//! ```
//!
//! `FC`, `SFC` and `FunctionComponent` are recognized, bare or qualified by
//! one namespace, with or without a props argument. Wrapper calls such as
//! `observer(...)` or `forwardRef(...)` are kept and the function inside them
//! is rewritten instead.
//!
//! Sources are parsed with tree-sitter and every change is a byte-range edit
//! against the original text, so everything outside the rewritten ranges is
//! preserved byte for byte.

mod component;
mod context;
mod edit;
mod error;
mod helpers;
mod matcher;
mod params;
mod parser;
mod props;
mod rewrite;

use std::path::Path;

use derive_more::Display;
use tracing::{debug, warn};
use tree_sitter::Language;

use crate::context::RewriteCtx;
use crate::matcher::find_components;

pub use error::{RewriteError, RewriteResult};
pub use matcher::FcAlias;
pub use params::{Param, PatternProperty};
pub use props::{PropsType, Separator, TypeLiteral, TypeMember};

/// Syntax dialect a source is parsed as.
#[derive(Display, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Dialect {
    #[default]
    #[display("tsx")]
    Tsx,
    #[display("typescript")]
    TypeScript,
}

/// The dialect sources are parsed as unless told otherwise.
pub const DEFAULT_DIALECT: Dialect = Dialect::Tsx;

impl Dialect {
    /// `.ts`, `.mts` and `.cts` files are plain TypeScript; everything else
    /// is parsed as TSX.
    pub fn for_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("ts" | "mts" | "cts") => Dialect::TypeScript,
            _ => Dialect::Tsx,
        }
    }

    pub fn language(self) -> Language {
        match self {
            Dialect::Tsx => tree_sitter_typescript::LANGUAGE_TSX.into(),
            Dialect::TypeScript => tree_sitter_typescript::LANGUAGE_TYPESCRIPT.into(),
        }
    }

    fn index(self) -> usize {
        match self {
            Dialect::Tsx => 0,
            Dialect::TypeScript => 1,
        }
    }
}

/// Rewrite every matching declaration in `source`.
///
/// Returns `None` when nothing matched, and also when the file could not be
/// rewritten safely; the error is logged and the source is left untouched.
pub fn transform(source: &str, dialect: Dialect) -> Option<String> {
    match try_transform(source, dialect) {
        Ok(output) => output,
        Err(error) => {
            warn!(%error, %dialect, "leaving source unchanged");
            None
        }
    }
}

/// Fallible form of [`transform`].
///
/// `Ok(None)` means no declaration matched. Nothing is applied unless every
/// matched declaration could be rewritten.
pub fn try_transform(source: &str, dialect: Dialect) -> RewriteResult<Option<String>> {
    let tree = parser::parse(source, dialect)?;
    let root = tree.root_node();
    if let Some(error) = parser::first_syntax_error(root) {
        return Err(RewriteError::Syntax {
            offset: error.start_byte(),
        });
    }

    let mut ctx = RewriteCtx::new(source);
    let components = find_components(&ctx, root);
    if components.is_empty() {
        return Ok(None);
    }

    for decl in &components {
        rewrite::rewrite_component(&mut ctx, decl)?;
    }
    debug!(
        components = components.len(),
        edits = ctx.edit_count(),
        "applying edits"
    );
    ctx.finish().map(Some)
}
