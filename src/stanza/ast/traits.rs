//! Visitor interface and tree traversal
//!
//! This module defines the visitor trait dispatched during a full traversal
//! and the traversal itself. Every node is visited on entry and on
//! departure, children in document order in between.
//!
//! Traversal is a single exhaustive match over the closed [Node] sum rather
//! than per-node virtual dispatch: adding a node kind breaks the build here
//! until the new kind is handled, so coverage is checked at compile time.
//!
//! # Example
//!
//! ```ignore
//! struct DirectiveNames(Vec<String>);
//!
//! impl Visitor for DirectiveNames {
//!     fn visit_directive(&mut self, directive: &Directive) {
//!         self.0.push(directive.name.clone());
//!     }
//! }
//!
//! let mut names = DirectiveNames(Vec::new());
//! document.walk(&mut names);
//! ```

use super::elements::{
    Directive, DirectiveArgument, DirectiveBody, ErrorMarker, Node, Paragraph, RawContent, Role,
    Text,
};

/// Visitor trait for traversing the node tree.
///
/// Each method pair corresponds to a node kind; defaults are empty, so
/// implementations override only what they care about. Visitors own whatever
/// annotations they accumulate; the tree itself stays immutable.
pub trait Visitor {
    fn visit_document(&mut self) {}
    fn leave_document(&mut self) {}

    fn visit_directive(&mut self, _directive: &Directive) {}
    fn leave_directive(&mut self, _directive: &Directive) {}

    fn visit_argument(&mut self, _argument: &DirectiveArgument) {}
    fn leave_argument(&mut self, _argument: &DirectiveArgument) {}

    fn visit_raw_content(&mut self, _raw: &RawContent) {}
    fn leave_raw_content(&mut self, _raw: &RawContent) {}

    fn visit_role(&mut self, _role: &Role) {}
    fn leave_role(&mut self, _role: &Role) {}

    fn visit_paragraph(&mut self, _paragraph: &Paragraph) {}
    fn leave_paragraph(&mut self, _paragraph: &Paragraph) {}

    fn visit_text(&mut self, _text: &Text) {}
    fn leave_text(&mut self, _text: &Text) {}

    fn visit_error_marker(&mut self, _marker: &ErrorMarker) {}
    fn leave_error_marker(&mut self, _marker: &ErrorMarker) {}
}

/// Walk one node: entry callback, children, departure callback.
pub fn walk_node(node: &Node, visitor: &mut dyn Visitor) {
    match node {
        Node::Directive(directive) => {
            visitor.visit_directive(directive);
            if let Some(argument) = &directive.argument {
                visitor.visit_argument(argument);
                walk_nodes(&argument.children, visitor);
                visitor.leave_argument(argument);
            }
            match &directive.body {
                DirectiveBody::Raw(raw) => {
                    visitor.visit_raw_content(raw);
                    visitor.leave_raw_content(raw);
                }
                DirectiveBody::Children(children) => walk_nodes(children, visitor),
            }
            visitor.leave_directive(directive);
        }
        Node::Role(role) => {
            visitor.visit_role(role);
            visitor.leave_role(role);
        }
        Node::Paragraph(paragraph) => {
            visitor.visit_paragraph(paragraph);
            walk_nodes(&paragraph.children, visitor);
            visitor.leave_paragraph(paragraph);
        }
        Node::Text(text) => {
            visitor.visit_text(text);
            visitor.leave_text(text);
        }
        Node::ErrorMarker(marker) => {
            visitor.visit_error_marker(marker);
            visitor.leave_error_marker(marker);
        }
    }
}

/// Walk a slice of sibling nodes in document order.
pub fn walk_nodes(nodes: &[Node], visitor: &mut dyn Visitor) {
    for node in nodes {
        walk_node(node, visitor);
    }
}
