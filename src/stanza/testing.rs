//! Testing utilities for tree assertions
//!
//!     Tests against a node tree tend to rot in two ways: each test invents
//!     its own pattern-matching boilerplate, and each asserts a slightly
//!     different slice of the structure, so regressions slip between them.
//!     The helpers here keep both in check:
//!
//!         1. Assert structure through [assert_tree] and its fluent chain
//!            rather than matching nodes by hand.
//!         2. Compare whole trees with [assert_same_shape], which ignores
//!            source-line bookkeeping but nothing else.
//!
//!     On failure every helper prints the offending tree in treeviz form, so
//!     a failing assertion shows the shape you actually got.
//!
//! Example:
//!
//!     ```rust,ignore
//!     let document = Parser::new().parse("doc.txt", source);
//!
//!     assert_tree(&document).item_count(1).item(0, |item| {
//!         item.assert_directive()
//!             .name("tabs")
//!             .option("tabset", "platforms")
//!             .child_count(2);
//!     });
//!     ```

use super::ast::{
    Directive, DirectiveArgument, ErrorMarker, Node, Paragraph, RawContent, Role, RoleLabel, Text,
    Visitor,
};
use super::formats::treeviz;
use super::parsing::Document;

/// Entry point for fluent tree assertions.
pub fn assert_tree(document: &Document) -> TreeAssert<'_> {
    TreeAssert { document }
}

/// Assert two documents have the same tree shape, ignoring source-line
/// bookkeeping.
pub fn assert_same_shape(left: &Document, right: &Document) {
    let left_shape = treeviz::render(left);
    let right_shape = treeviz::render(right);
    assert_eq!(
        left_shape, right_shape,
        "tree shapes differ\nleft:\n{}\nright:\n{}",
        left_shape, right_shape
    );
}

pub struct TreeAssert<'a> {
    document: &'a Document,
}

impl<'a> TreeAssert<'a> {
    pub fn item_count(self, expected: usize) -> Self {
        assert_eq!(
            self.document.children.len(),
            expected,
            "root item count mismatch:\n{}",
            treeviz::render(self.document)
        );
        self
    }

    pub fn diagnostic_count(self, expected: usize) -> Self {
        assert_eq!(
            self.document.diagnostics.len(),
            expected,
            "diagnostic count mismatch: {:?}",
            self.document.diagnostics
        );
        self
    }

    pub fn item(self, index: usize, check: impl FnOnce(NodeAssert<'a>)) -> Self {
        let node = self.document.children.get(index).unwrap_or_else(|| {
            panic!(
                "no root item {}:\n{}",
                index,
                treeviz::render(self.document)
            )
        });
        check(NodeAssert { node });
        self
    }
}

pub struct NodeAssert<'a> {
    node: &'a Node,
}

impl<'a> NodeAssert<'a> {
    pub fn node(&self) -> &'a Node {
        self.node
    }

    pub fn assert_directive(self) -> DirectiveAssert<'a> {
        match self.node {
            Node::Directive(directive) => DirectiveAssert { directive },
            other => panic!("Expected directive, found {}", other.node_type()),
        }
    }

    pub fn assert_paragraph(self) -> ParagraphAssert<'a> {
        match self.node {
            Node::Paragraph(paragraph) => ParagraphAssert { paragraph },
            other => panic!("Expected paragraph, found {}", other.node_type()),
        }
    }

    pub fn assert_role(self) -> RoleAssert<'a> {
        match self.node {
            Node::Role(role) => RoleAssert { role },
            other => panic!("Expected role, found {}", other.node_type()),
        }
    }

    pub fn assert_text(self, expected: &str) {
        match self.node {
            Node::Text(text) => assert_eq!(text.value, expected),
            other => panic!("Expected text, found {}", other.node_type()),
        }
    }

    pub fn assert_error_marker(self) -> &'a ErrorMarker {
        match self.node {
            Node::ErrorMarker(marker) => marker,
            other => panic!("Expected error marker, found {}", other.node_type()),
        }
    }
}

pub struct DirectiveAssert<'a> {
    directive: &'a Directive,
}

impl<'a> DirectiveAssert<'a> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.directive.name, expected, "directive name mismatch");
        self
    }

    pub fn option(self, key: &str, value: &str) -> Self {
        assert_eq!(
            self.directive.options.get(key),
            Some(value),
            "option {:?} mismatch in {}",
            key,
            self.directive.options
        );
        self
    }

    pub fn option_count(self, expected: usize) -> Self {
        assert_eq!(
            self.directive.options.len(),
            expected,
            "option count mismatch in {}",
            self.directive.options
        );
        self
    }

    pub fn option_keys(self, expected: &[&str]) -> Self {
        let keys: Vec<&str> = self.directive.options.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, expected, "option order mismatch");
        self
    }

    pub fn argument_text(self, expected: &str) -> Self {
        let argument = self
            .directive
            .argument
            .as_ref()
            .unwrap_or_else(|| panic!("directive {} has no argument", self.directive.name));
        assert_eq!(argument.text, expected, "argument text mismatch");
        self
    }

    pub fn no_argument(self) -> Self {
        assert!(
            self.directive.argument.is_none(),
            "directive {} unexpectedly has an argument",
            self.directive.name
        );
        self
    }

    pub fn raw_body(self, expected: &str) -> Self {
        match self.directive.body.raw_text() {
            Some(text) => assert_eq!(text, expected, "raw body mismatch"),
            None => panic!("directive {} has a parsed body", self.directive.name),
        }
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(
            self.directive.body.children().len(),
            expected,
            "child count mismatch for directive {}",
            self.directive.name
        );
        self
    }

    pub fn child(self, index: usize, check: impl FnOnce(NodeAssert<'a>)) -> Self {
        let node = self
            .directive
            .body
            .children()
            .get(index)
            .unwrap_or_else(|| panic!("directive {} has no child {}", self.directive.name, index));
        check(NodeAssert { node });
        self
    }
}

pub struct ParagraphAssert<'a> {
    paragraph: &'a Paragraph,
}

impl<'a> ParagraphAssert<'a> {
    pub fn text_contains(self, expected: &str) -> Self {
        let text = self.paragraph.text();
        assert!(
            text.contains(expected),
            "paragraph text {:?} does not contain {:?}",
            text,
            expected
        );
        self
    }

    pub fn child_count(self, expected: usize) -> Self {
        assert_eq!(self.paragraph.children.len(), expected);
        self
    }

    pub fn child(self, index: usize, check: impl FnOnce(NodeAssert<'a>)) -> Self {
        let node = self
            .paragraph
            .children
            .get(index)
            .unwrap_or_else(|| panic!("paragraph has no child {}", index));
        check(NodeAssert { node });
        self
    }
}

pub struct RoleAssert<'a> {
    role: &'a Role,
}

impl RoleAssert<'_> {
    pub fn name(self, expected: &str) -> Self {
        assert_eq!(self.role.name, expected, "role name mismatch");
        self
    }

    pub fn target(self, expected: &str) -> Self {
        assert_eq!(self.role.target, expected, "role target mismatch");
        self
    }

    pub fn plain_label(self, expected: &str) -> Self {
        match &self.role.label {
            RoleLabel::Plain(text) => assert_eq!(text, expected),
            RoleLabel::Inline(_) => panic!("role {} has an inline label", self.role.name),
        }
        self
    }

    pub fn inline_label(self, expected: &str) -> Self {
        match &self.role.label {
            RoleLabel::Inline(text) => assert_eq!(text.value, expected),
            RoleLabel::Plain(_) => panic!("role {} has a plain label", self.role.name),
        }
        self
    }
}

/// Visitor recording entry and departure events in traversal order.
///
/// Events are short strings like `enter directive tabs` and
/// `leave paragraph`, convenient for asserting traversal order.
#[derive(Debug, Default)]
pub struct EventLog {
    pub events: Vec<String>,
}

impl EventLog {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, event: String) {
        self.events.push(event);
    }
}

impl Visitor for EventLog {
    fn visit_document(&mut self) {
        self.push("enter document".to_string());
    }

    fn leave_document(&mut self) {
        self.push("leave document".to_string());
    }

    fn visit_directive(&mut self, directive: &Directive) {
        self.push(format!("enter directive {}", directive.name));
    }

    fn leave_directive(&mut self, directive: &Directive) {
        self.push(format!("leave directive {}", directive.name));
    }

    fn visit_argument(&mut self, _argument: &DirectiveArgument) {
        self.push("enter argument".to_string());
    }

    fn leave_argument(&mut self, _argument: &DirectiveArgument) {
        self.push("leave argument".to_string());
    }

    fn visit_raw_content(&mut self, _raw: &RawContent) {
        self.push("enter raw".to_string());
    }

    fn leave_raw_content(&mut self, _raw: &RawContent) {
        self.push("leave raw".to_string());
    }

    fn visit_role(&mut self, role: &Role) {
        self.push(format!("enter role {}", role.name));
    }

    fn leave_role(&mut self, role: &Role) {
        self.push(format!("leave role {}", role.name));
    }

    fn visit_paragraph(&mut self, _paragraph: &Paragraph) {
        self.push("enter paragraph".to_string());
    }

    fn leave_paragraph(&mut self, _paragraph: &Paragraph) {
        self.push("leave paragraph".to_string());
    }

    fn visit_text(&mut self, _text: &Text) {
        self.push("enter text".to_string());
    }

    fn leave_text(&mut self, _text: &Text) {
        self.push("leave text".to_string());
    }

    fn visit_error_marker(&mut self, _marker: &ErrorMarker) {
        self.push("enter error".to_string());
    }

    fn leave_error_marker(&mut self, _marker: &ErrorMarker) {
        self.push("leave error".to_string());
    }
}
