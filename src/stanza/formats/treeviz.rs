//! Treeviz formatter for stanza node trees
//!
//! Treeviz is a visual representation of a parsed tree, one line per node,
//! with nesting encoded as two spaces of indentation per level. It is built
//! for quick scanning in test failures and debugging sessions.
//!
//! Source positions are deliberately omitted: two trees that describe the
//! same structure render identically no matter where their source text came
//! from. That makes the rendering a convenient structural fingerprint, and
//! the tabbed-content round-trip tests rely on exactly that.
//!
//! Example:
//!
//! ```text
//! document
//!   directive tabs {tabset=platforms}
//!     directive tab
//!       argument local
//!         text "local"
//!       paragraph
//!         text "Local content."
//! ```

use crate::stanza::ast::{
    Directive, DirectiveArgument, ErrorMarker, Paragraph, RawContent, Role, Text, Visitor,
};
use crate::stanza::parsing::Document;

/// Render a document's tree, one line per node.
pub fn render(document: &Document) -> String {
    let mut visitor = TreevizVisitor::default();
    document.walk(&mut visitor);
    visitor.output
}

#[derive(Debug, Default)]
struct TreevizVisitor {
    depth: usize,
    output: String,
}

impl TreevizVisitor {
    fn push_line(&mut self, label: &str) {
        for _ in 0..self.depth {
            self.output.push_str("  ");
        }
        self.output.push_str(label);
        self.output.push('\n');
    }
}

impl Visitor for TreevizVisitor {
    fn visit_document(&mut self) {
        self.push_line("document");
        self.depth += 1;
    }

    fn leave_document(&mut self) {
        self.depth -= 1;
    }

    fn visit_directive(&mut self, directive: &Directive) {
        let mut label = format!("directive {}", directive.name);
        if !directive.options.is_empty() {
            label.push(' ');
            label.push_str(&directive.options.to_string());
        }
        self.push_line(&label);
        self.depth += 1;
    }

    fn leave_directive(&mut self, _directive: &Directive) {
        self.depth -= 1;
    }

    fn visit_argument(&mut self, argument: &DirectiveArgument) {
        self.push_line(&format!("argument {}", argument.text));
        self.depth += 1;
    }

    fn leave_argument(&mut self, _argument: &DirectiveArgument) {
        self.depth -= 1;
    }

    fn visit_raw_content(&mut self, raw: &RawContent) {
        self.push_line(&format!("raw {:?}", raw.text));
    }

    fn visit_role(&mut self, role: &Role) {
        self.push_line(&format!(
            "role {} label={:?} target={:?}",
            role.name,
            role.label.text(),
            role.target
        ));
    }

    fn visit_paragraph(&mut self, _paragraph: &Paragraph) {
        self.push_line("paragraph");
        self.depth += 1;
    }

    fn leave_paragraph(&mut self, _paragraph: &Paragraph) {
        self.depth -= 1;
    }

    fn visit_text(&mut self, text: &Text) {
        self.push_line(&format!("text {:?}", text.value));
    }

    fn visit_error_marker(&mut self, marker: &ErrorMarker) {
        self.push_line(&format!("error {:?}", marker.message));
    }
}
