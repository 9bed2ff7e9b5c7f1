//! Node construction from raw directive and role surfaces
//!
//!     The grammar engine recognizes the extension surfaces, a directive
//!     invocation with its block or a role invocation with its text, and
//!     hands the raw pieces to the builders here. The builders turn them
//!     into uniform nodes, recursing back into the engine for nested body
//!     content through the [BuildContext] surface.
//!
//!     Construction is deliberately tolerant. Unknown names are not an
//!     error; options are recovered from raw text without a schema; role
//!     text that does not match the explicit-target form degrades to the
//!     whole text. The single failure path is legacy tab migration, and it
//!     is contained to the one directive that carried the bad data.

pub mod directive;
pub mod legacy_tabs;
pub mod normalize;
pub mod options;
pub mod role;

pub use directive::{build_directive, DirectiveInvocation, SPECIAL_DIRECTIVES};
pub use legacy_tabs::{
    has_legacy_tabs_marker, migrate_legacy_tabs, LegacyTabDefinition, LegacyTabsDefinition,
};
pub use options::recover_options;
pub use role::build_role;

use super::ast::{Diagnostic, Node};
use std::path::Path;
use std::sync::Arc;

/// Recursion surface the builders call back into.
///
/// Implemented by the engine's parse session. `nested_parse` runs the block
/// grammar over an independent, column-0 sub-document; no cursor state is
/// shared with the enclosing parse. `inline_text` runs the inline grammar
/// over one fragment.
pub trait BuildContext {
    /// Recursively parse dedented block text whose first line sits at
    /// `first_line` of the owning document.
    fn nested_parse(&mut self, text: &str, first_line: usize) -> Vec<Node>;

    /// Parse inline markup, producing text and role nodes.
    fn inline_text(&mut self, text: &str, line: usize) -> Vec<Node>;

    /// Report a diagnostic against the document being parsed.
    fn report(&mut self, diagnostic: Diagnostic);

    /// Identifier of the document being parsed.
    fn source(&self) -> &Arc<Path>;
}
