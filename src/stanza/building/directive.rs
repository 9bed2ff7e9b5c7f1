//! Generic directive node construction
//!
//! Every directive name must produce a node, known or not: unknown semantics
//! are deferred to whichever consumer later inspects the node's name. The
//! builder wires the pieces the block grammar extracted (argument, raw
//! block, content) into the uniform [Directive](crate::stanza::ast::Directive)
//! shape.
//!
//! A small fixed set of directives owns its own body grammar; their bodies
//! are preserved verbatim instead of being parsed generically.

use super::options::recover_options;
use super::BuildContext;
use crate::stanza::ast::{
    Directive, DirectiveArgument, DirectiveBody, Location, Node, RawContent,
};
use std::sync::Arc;

/// Directive names whose body is preserved verbatim, never generically
/// parsed: literal code blocks, external-file inclusion, the tab-set
/// family's experimental and legacy spellings, and conditional content.
pub const SPECIAL_DIRECTIVES: &[&str] = &[
    "code-block",
    "include",
    "tabs-drivers",
    "tabs-platforms",
    "only",
];

/// Everything the block grammar extracts for one directive invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct DirectiveInvocation {
    /// Directive name as written.
    pub name: String,
    /// Single-line argument text after the invocation marker, if any.
    pub argument: Option<String>,
    /// The full raw block: invocation line plus the indented block that
    /// follows it, original indentation intact.
    pub block_text: String,
    /// Dedented body content after the field-option prefix.
    pub content: String,
    /// 1-based line of the invocation.
    pub line: usize,
    /// 1-based line of the first content line.
    pub content_line: usize,
}

impl DirectiveInvocation {
    /// Whether this directive owns its own body grammar.
    pub fn is_special(&self) -> bool {
        SPECIAL_DIRECTIVES.contains(&self.name.as_str())
    }
}

/// Build a uniform directive node for any invocation. Never fails locally;
/// problems in nested body markup surface as diagnostics from the recursive
/// parse.
pub fn build_directive(ctx: &mut dyn BuildContext, invocation: &DirectiveInvocation) -> Vec<Node> {
    let location = Location::new(Arc::clone(ctx.source()), invocation.line);
    let mut node = Directive::new(invocation.name.as_str(), location.clone());

    if let Some(argument_text) = &invocation.argument {
        let children = ctx.inline_text(argument_text, invocation.line);
        node.argument = Some(DirectiveArgument {
            text: argument_text.clone(),
            children,
            location: location.clone(),
        });
    }

    node.options = recover_options(&invocation.block_text);

    node.body = if invocation.is_special() {
        DirectiveBody::Raw(RawContent {
            text: invocation.content.clone(),
            location,
        })
    } else {
        DirectiveBody::Children(ctx.nested_parse(&invocation.content, invocation.content_line))
    };

    vec![Node::Directive(node)]
}
