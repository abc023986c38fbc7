//! Rewrite phase: move the props type onto the component and drop the
//! declaration-level annotation.

use tracing::{debug, trace};

use crate::component::resolve_component;
use crate::context::RewriteCtx;
use crate::edit::TextEdit;
use crate::error::{RewriteError, RewriteResult};
use crate::matcher::ComponentDecl;
use crate::params::annotate_first_param;
use crate::props::PropsType;

/// Queue the edits for one matched declarator.
pub fn rewrite_component(ctx: &mut RewriteCtx, decl: &ComponentDecl) -> RewriteResult<()> {
    debug!(
        name = %ctx.node_text(&decl.name),
        alias = %decl.alias,
        offset = decl.declarator.start_byte(),
        "rewriting component declaration"
    );

    if let Some(props) = decl.props {
        inject_props(ctx, decl, props)?;
    }

    // `Name: React.FC<Props>` becomes `Name`.
    ctx.push_edit(TextEdit::delete(
        decl.name.end_byte()..decl.annotation.end_byte(),
    ));
    Ok(())
}

fn inject_props(
    ctx: &mut RewriteCtx,
    decl: &ComponentDecl,
    props: tree_sitter::Node,
) -> RewriteResult<()> {
    let Some(component) = resolve_component(decl.value) else {
        return Err(RewriteError::unsupported("component", &decl.value));
    };
    let props = PropsType::from_node(ctx, props)?;

    match annotate_first_param(ctx, component.node, &props)? {
        Some((param, edit)) => {
            trace!(
                kind = ?component.kind,
                wrappers = component.wrappers,
                param = ?param,
                props = %props,
                "annotating first parameter"
            );
            ctx.push_edit(edit);
        }
        None => trace!("component takes no parameters"),
    }
    Ok(())
}
