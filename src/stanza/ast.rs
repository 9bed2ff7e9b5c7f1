//! AST definitions for the stanza node tree
//!
//!     This module provides the node types produced by one parse pass, the
//!     source-location bookkeeping attached to every node, the diagnostics
//!     that parsing collects, and the visitor interface used to traverse a
//!     finished tree.
//!
//! Node set
//!
//!     The node set is closed: [Node](elements::Node) is a tagged sum over
//!     every kind the front end can produce, and traversal is one exhaustive
//!     match over it. There is deliberately no open attribute bag; each kind
//!     carries explicit typed fields. See [elements] for the definitions and
//!     the ownership rules (strict single-parent tree, no sharing).
//!
//! Lifecycle
//!
//!     All nodes are created during a single parse pass and are immutable
//!     afterwards. Traversal-time annotations belong in the visitor, not in
//!     the nodes; the tree is dropped with its owning
//!     [Document](super::parsing::Document).

pub mod diagnostics;
pub mod elements;
pub mod range;
pub mod traits;

pub use diagnostics::{Diagnostic, Severity};
pub use elements::{
    Directive, DirectiveArgument, DirectiveBody, ErrorMarker, Node, Options, Paragraph,
    RawContent, Role, RoleLabel, Text,
};
pub use range::Location;
pub use traits::{walk_node, walk_nodes, Visitor};
