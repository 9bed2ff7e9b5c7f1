//! Parse entry point and tree traversal
//!
//!     One call parses one document, synchronously, and yields a
//!     [Document]: the root nodes, the source identifier, and whichever
//!     diagnostics met the retention threshold. The parse runs no post-parse
//!     structural transforms (transforms written for native semantics would
//!     corrupt generically-named nodes) and discards every diagnostic below
//!     the severe tier.
//!
//!     A [Parser] owns its resolution strategy and nothing else. Parsing
//!     borrows it immutably, so one parser may serve many documents, from
//!     many threads, without locking: there is no shared mutable state once
//!     construction returns.

pub mod engine;

use super::ast::{Diagnostic, Node, Visitor};
use super::ast::traits::walk_nodes;
use super::resolution::{GenericResolver, Resolver};
use std::path::Path;
use std::sync::Arc;

/// A parsed document: the tree root plus retained diagnostics.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    /// Identifier used for error attribution.
    pub source: Arc<Path>,
    /// Root-level nodes in document order.
    pub children: Vec<Node>,
    /// Diagnostics that met the retention threshold, in report order.
    pub diagnostics: Vec<Diagnostic>,
}

impl Document {
    /// Full traversal: every node is visited on entry and on departure,
    /// children in document order in between.
    pub fn walk(&self, visitor: &mut dyn Visitor) {
        visitor.visit_document();
        walk_nodes(&self.children, visitor);
        visitor.leave_document();
    }
}

/// The parse entry point.
#[derive(Debug, Clone)]
pub struct Parser<R: Resolver = GenericResolver> {
    resolver: R,
}

impl Parser<GenericResolver> {
    /// A parser with the default resolution override.
    pub fn new() -> Self {
        Self {
            resolver: GenericResolver::new(),
        }
    }
}

impl Default for Parser<GenericResolver> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Resolver> Parser<R> {
    /// A parser with a caller-supplied resolution strategy.
    pub fn with_resolver(resolver: R) -> Self {
        Self { resolver }
    }

    /// Parse one document. `source` is used solely for attribution.
    pub fn parse(&self, source: impl AsRef<Path>, text: &str) -> Document {
        let source: Arc<Path> = Arc::from(source.as_ref());
        let mut session = engine::Session::new(Arc::clone(&source), &self.resolver);
        let children = session.parse_text(text, 1);
        let diagnostics = session.into_diagnostics();
        Document {
            source,
            children,
            diagnostics,
        }
    }

    /// Parse one document and immediately walk it with `visitor`.
    pub fn parse_into<V: Visitor>(
        &self,
        source: impl AsRef<Path>,
        text: &str,
        visitor: &mut V,
    ) -> Document {
        let document = self.parse(source, text);
        document.walk(visitor);
        document
    }
}
