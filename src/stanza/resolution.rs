//! Directive and role name resolution
//!
//! The base grammar treats an unknown directive or role name as an error.
//! This front end replaces that behavior wholesale: every directive name
//! resolves to the generic builder (tab-family names via the legacy
//! migration check first), and every role name resolves to the role builder.
//! No name is ever rejected at resolution time; whether a name means
//! anything is decided later by whichever consumer inspects the node.
//!
//! Resolution is a strategy object handed to the parse entry point at
//! construction. It is read-only from then on (all methods take `&self`),
//! so a single strategy can serve any number of parses, including parses
//! running concurrently on independent threads.

use super::ast::{Location, Node};
use super::building::directive::{build_directive, DirectiveInvocation};
use super::building::legacy_tabs::{has_legacy_tabs_marker, migrate_legacy_tabs};
use super::building::role::build_role;
use super::building::BuildContext;
use std::sync::Arc;

/// Strategy for resolving directive and role names to node builders.
pub trait Resolver {
    /// Build nodes for a directive invocation. Never rejects a name.
    fn directive(&self, ctx: &mut dyn BuildContext, invocation: &DirectiveInvocation)
        -> Vec<Node>;

    /// Build a node for a role invocation. Never rejects a name, never
    /// fails.
    fn role(&self, ctx: &mut dyn BuildContext, name: &str, text: &str, line: usize) -> Node;
}

/// The default resolution override: tab-family directives get the legacy
/// migration check first, everything else goes straight to the generic
/// builders.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericResolver;

impl GenericResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Resolver for GenericResolver {
    fn directive(
        &self,
        ctx: &mut dyn BuildContext,
        invocation: &DirectiveInvocation,
    ) -> Vec<Node> {
        if invocation.name.starts_with("tabs") && has_legacy_tabs_marker(&invocation.content) {
            return migrate_legacy_tabs(ctx, invocation);
        }
        build_directive(ctx, invocation)
    }

    fn role(&self, ctx: &mut dyn BuildContext, name: &str, text: &str, line: usize) -> Node {
        let location = Location::new(Arc::clone(ctx.source()), line);
        Node::Role(build_role(name, text, location))
    }
}
