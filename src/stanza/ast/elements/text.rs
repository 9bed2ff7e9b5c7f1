//! Paragraph and text span nodes
//!
//! The baseline block grammar produces paragraphs; the inline grammar fills
//! them with text spans and roles. Text spans also appear inside directive
//! arguments and role labels, wherever a fragment is tagged as
//! inline-parseable content.

use super::super::range::Location;
use super::Node;

/// A plain text span.
#[derive(Debug, Clone, PartialEq)]
pub struct Text {
    pub value: String,
    pub location: Location,
}

/// A paragraph: a run of non-blank lines, inline-parsed into text and role
/// children.
#[derive(Debug, Clone, PartialEq)]
pub struct Paragraph {
    pub children: Vec<Node>,
    pub location: Location,
}

impl Paragraph {
    /// Concatenation of the paragraph's plain text spans. Roles are not
    /// flattened; consumers that need them walk the children.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            if let Node::Text(text) = child {
                out.push_str(&text.value);
            }
        }
        out
    }
}
